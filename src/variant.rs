//! The fixed visual-variant vocabulary of the icon set.

use crate::error::Error;

/// One visual style of the icon set.
///
/// The vocabulary is closed: every variant the pipeline touches must be one
/// of these six, and an unrecognized tag is a configuration error rather
/// than a data error. Tags are case-sensitive Pascal-case names; the
/// matching source directory is the lowercased tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Bold,
    Broken,
    Bulk,
    Linear,
    Outline,
    TwoTone,
}

impl Variant {
    /// Every variant, in declared order. The pipeline's inner loop follows
    /// this order.
    pub const ALL: [Self; 6] = [
        Self::Bold,
        Self::Broken,
        Self::Bulk,
        Self::Linear,
        Self::Outline,
        Self::TwoTone,
    ];

    /// Resolve a tag to a variant. Case-sensitive.
    pub fn from_tag(tag: &str) -> Result<Self, Error> {
        match tag {
            "Bold" => Ok(Self::Bold),
            "Broken" => Ok(Self::Broken),
            "Bulk" => Ok(Self::Bulk),
            "Linear" => Ok(Self::Linear),
            "Outline" => Ok(Self::Outline),
            "TwoTone" => Ok(Self::TwoTone),
            _ => Err(Error::UnsupportedVariant {
                tag: tag.to_string(),
            }),
        }
    }

    /// The Pascal-case tag, used as the identifier suffix.
    pub fn tag(self) -> &'static str {
        match self {
            Self::Bold => "Bold",
            Self::Broken => "Broken",
            Self::Bulk => "Bulk",
            Self::Linear => "Linear",
            Self::Outline => "Outline",
            Self::TwoTone => "TwoTone",
        }
    }

    /// Name of the source directory holding this variant's SVG files.
    pub fn dir_name(self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Broken => "broken",
            Self::Bulk => "bulk",
            Self::Linear => "linear",
            Self::Outline => "outline",
            Self::TwoTone => "twotone",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_roundtrip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_tag(variant.tag()).unwrap(), variant);
        }
    }

    #[test]
    fn test_from_tag_is_case_sensitive() {
        assert!(Variant::from_tag("bold").is_err());
        assert!(Variant::from_tag("TWOTONE").is_err());
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = Variant::from_tag("Neon").unwrap_err();
        assert!(matches!(err, Error::UnsupportedVariant { tag } if tag == "Neon"));
    }

    #[test]
    fn test_dir_name_is_lowercased_tag() {
        for variant in Variant::ALL {
            assert_eq!(variant.dir_name(), variant.tag().to_lowercase());
        }
    }
}
