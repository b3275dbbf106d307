//! Component identifier derivation.

use crate::error::Error;
use crate::variant::Variant;

/// Derive the component identifier for an (icon, variant) pair.
///
/// The base name is normalized by treating every non-alphanumeric character
/// as a segment separator, Pascal-casing the segments and appending the
/// variant tag. If the result starts with a digit it is prefixed with `I`
/// so it stays a valid JavaScript identifier.
///
/// Pure and deterministic for a valid variant tag; fails with
/// `UnsupportedVariant` before any file I/O otherwise. Distinct base names
/// can normalize to the same identifier (`arrow-left` / `arrow_left`);
/// those collisions are not deduplicated and the last emitted file wins.
pub fn component_name(base_name: &str, variant_tag: &str) -> Result<String, Error> {
    let variant = Variant::from_tag(variant_tag)?;
    let mut name = pascal_case(base_name);
    name.push_str(variant.tag());
    if name.chars().next().is_some_and(|c| c.is_ascii_digit()) {
        name.insert(0, 'I');
    }
    Ok(name)
}

fn pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect()
}

/// Capitalize the first letter of a string.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Lowercase the first letter of a string.
pub(crate) fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_base_name() {
        assert_eq!(component_name("arrow-left", "Bold").unwrap(), "ArrowLeftBold");
    }

    #[test]
    fn test_leading_digit_is_prefixed() {
        assert_eq!(
            component_name("3d-cube-scan", "TwoTone").unwrap(),
            "I3dCubeScanTwoTone"
        );
    }

    #[test]
    fn test_no_prefix_without_leading_digit() {
        let name = component_name("box-1", "Linear").unwrap();
        assert_eq!(name, "Box1Linear");
        assert!(!name.starts_with('I'));
    }

    #[test]
    fn test_non_alphanumeric_chars_are_separators() {
        assert_eq!(component_name("arrow_left", "Bold").unwrap(), "ArrowLeftBold");
        assert_eq!(component_name("arrow.left", "Bold").unwrap(), "ArrowLeftBold");
        assert_eq!(component_name("arrow left", "Bold").unwrap(), "ArrowLeftBold");
    }

    #[test]
    fn test_collisions_are_not_deduplicated() {
        // Known limitation: distinct base names may normalize to the same
        // identifier. The generator stays deterministic and lets the caller
        // overwrite; it does not try to disambiguate.
        let a = component_name("arrow-left", "Bold").unwrap();
        let b = component_name("arrow_left", "Bold").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic() {
        let first = component_name("battery-charging", "Bulk").unwrap();
        for _ in 0..3 {
            assert_eq!(component_name("battery-charging", "Bulk").unwrap(), first);
        }
    }

    #[test]
    fn test_unsupported_variant_fails_regardless_of_base_name() {
        for base in ["arrow-left", "", "3d-cube-scan"] {
            let err = component_name(base, "Neon").unwrap_err();
            assert!(matches!(err, Error::UnsupportedVariant { tag } if tag == "Neon"));
        }
    }
}
