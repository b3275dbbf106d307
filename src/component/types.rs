//! JSX IR for component emission.
//!
//! The IR mirrors what ends up in the generated source: elements with an
//! ordered attribute list whose values are either literal strings or one of
//! the two component parameters. Keeping the parameter distinction in the
//! type system is what lets emission render `stroke={color}` unquoted
//! without any post-processing of serialized text.

use crate::error::Error;
use crate::variant::Variant;

/// Default value of the `color` prop, and the literal the canonicalizer
/// replaces with the `color` placeholder.
pub const DEFAULT_COLOR: &str = "#292D32";

/// Default value of the `size` prop. `width`/`height` values containing
/// this literal are replaced with the `size` placeholder.
pub const DEFAULT_SIZE: &str = "24";

/// A component parameter referenced from an attribute value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Param {
    /// The `size` prop (width/height).
    Size,
    /// The `color` prop (stroke/fill).
    Color,
}

impl Param {
    /// The prop name as it appears in the generated source.
    pub fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Color => "color",
        }
    }
}

/// An attribute value: a literal string or a parameter placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    /// Literal value, emitted as a quoted JSX string.
    Literal(String),
    /// Parameter reference, emitted as an unquoted `{name}` expression.
    Param(Param),
}

/// One JSX element: tag, ordered attributes, element children only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsxElement {
    /// Tag name, e.g. `path`.
    pub tag: String,
    /// Attributes in source order. Keys are unique; the canonicalizer
    /// collapses rename collisions with last-wins semantics.
    pub attrs: Vec<(String, AttrValue)>,
    /// Element children in original relative order.
    pub children: Vec<JsxElement>,
}

/// Target module format. Affects only import/export syntax, never the
/// shape of the generated component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFormat {
    /// ES module: `import` / `export default`.
    Esm,
    /// Common module: `require` / `module.exports`.
    Cjs,
}

impl ModuleFormat {
    /// Resolve a lowercase format name from configuration.
    pub fn from_name(name: &str) -> Result<Self, Error> {
        match name {
            "esm" => Ok(Self::Esm),
            "cjs" => Ok(Self::Cjs),
            other => Err(Error::Config {
                message: format!("unknown module format `{other}` (expected `esm` or `cjs`)"),
            }),
        }
    }

    /// The lowercase format name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Esm => "esm",
            Self::Cjs => "cjs",
        }
    }
}

/// Everything needed to emit one component source file. Created once per
/// successfully transformed (icon, variant) pair and format; immutable
/// after creation.
#[derive(Debug, Clone)]
pub struct ComponentModule {
    /// Generated component identifier, also used as the display name.
    pub name: String,
    /// Visual variant the source tree came from.
    pub variant: Variant,
    /// Target module format.
    pub format: ModuleFormat,
    /// Transformed direct children of the source `<svg>` root.
    pub body: Vec<JsxElement>,
}
