//! Canonicalization of parsed SVG into the JSX IR.
//!
//! A pure rewrite: each call builds a fresh IR tree from an immutable
//! parsed snapshot, so no caller ever observes a partially-rewritten node.

use super::svg::{SvgElement, SvgNode};
use super::types::{AttrValue, DEFAULT_COLOR, DEFAULT_SIZE, JsxElement, Param};
use crate::name::{capitalize_first, lowercase_first};

/// Rewrite one element's attribute list.
///
/// Per attribute, independently:
/// 1. `width`/`height` values containing `24` become the `size` placeholder;
/// 2. values exactly `#292D32` become the `color` placeholder;
/// 3. hyphenated keys are renamed to camelCase (always, and against the
///    pre-rename key for rules 1-2).
///
/// Everything else passes through as a literal. If renaming makes two keys
/// equal, the later application wins and the key keeps its first position.
pub fn canonicalize_attrs(attrs: &[(String, String)]) -> Vec<(String, AttrValue)> {
    let mut out: Vec<(String, AttrValue)> = Vec::with_capacity(attrs.len());
    for (key, raw) in attrs {
        let value = if (key == "width" || key == "height") && raw.contains(DEFAULT_SIZE) {
            AttrValue::Param(Param::Size)
        } else if raw == DEFAULT_COLOR {
            AttrValue::Param(Param::Color)
        } else {
            AttrValue::Literal(raw.clone())
        };
        let out_key = kebab_to_camel(key);
        match out.iter_mut().find(|(existing, _)| *existing == out_key) {
            Some((_, existing_value)) => *existing_value = value,
            None => out.push((out_key, value)),
        }
    }
    out
}

/// Recursively transform an element: canonicalize its attributes, keep only
/// element children (text and comments are dropped, not recursed into) and
/// transform those, preserving their relative order.
pub fn transform_element(element: &SvgElement) -> JsxElement {
    JsxElement {
        tag: element.tag.clone(),
        attrs: canonicalize_attrs(&element.attrs),
        children: element
            .children
            .iter()
            .filter_map(|child| match child {
                SvgNode::Element(el) => Some(transform_element(el)),
                SvgNode::Text(_) | SvgNode::Comment(_) => None,
            })
            .collect(),
    }
}

/// Transform the direct children of the document root. The `<svg>` wrapper
/// itself never reaches the IR; emission replaces it with the component's
/// parameterized root element.
pub fn transform_document(root: &SvgElement) -> Vec<JsxElement> {
    root.children
        .iter()
        .filter_map(|child| match child {
            SvgNode::Element(el) => Some(transform_element(el)),
            SvgNode::Text(_) | SvgNode::Comment(_) => None,
        })
        .collect()
}

fn kebab_to_camel(key: &str) -> String {
    if !key.contains('-') {
        return key.to_string();
    }
    let pascal: String = key
        .split('-')
        .filter(|segment| !segment.is_empty())
        .map(capitalize_first)
        .collect();
    lowercase_first(&pascal)
}
