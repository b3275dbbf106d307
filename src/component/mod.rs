//! SVG to React component conversion.
//!
//! Three-layer pipeline, with each layer a pure function over the previous:
//! 1. `svg`: raw SVG text -> owned element tree (quick-xml)
//! 2. `transform`: element tree -> JSX IR (attribute canonicalization,
//!    non-element children dropped)
//! 3. `emit`: JSX IR -> component source text via the `Emit` trait,
//!    branching on module format only for import/export syntax
//!
//! Attribute values in the IR carry an explicit placeholder variant
//! (`size` / `color`), so placeholders are rendered as unquoted JSX
//! expressions directly and no text-level fixup pass exists.

pub mod emit;
pub mod svg;
pub mod transform;
pub mod types;

pub use emit::{Emit, emit_component, emit_type_declaration};
pub use transform::{canonicalize_attrs, transform_document, transform_element};
pub use types::{AttrValue, ComponentModule, JsxElement, ModuleFormat, Param};
