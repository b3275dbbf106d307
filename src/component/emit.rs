//! Component source emission via the Emit trait.
//!
//! Emission is purely mechanical string building over the JSX IR. The only
//! format-dependent pieces are the import and export lines; the component
//! itself (forwardRef wrapper, `color`/`size` defaults, `...rest`
//! pass-through, display name) is identical across formats.

use super::types::{
    AttrValue, ComponentModule, DEFAULT_COLOR, DEFAULT_SIZE, JsxElement, ModuleFormat, Param,
};

/// Trait for emitting source text from IR nodes.
pub trait Emit {
    /// Convert the IR node to its source representation.
    fn emit(&self) -> String;
}

impl Emit for Param {
    fn emit(&self) -> String {
        self.name().to_string()
    }
}

impl Emit for AttrValue {
    fn emit(&self) -> String {
        match self {
            // Placeholders render as unquoted JSX expressions. The quoted
            // and unquoted paths never mix, so no fixup pass exists.
            AttrValue::Param(param) => format!("{{{}}}", param.emit()),
            AttrValue::Literal(value) => format!("\"{}\"", escape_attr(value)),
        }
    }
}

impl Emit for JsxElement {
    fn emit(&self) -> String {
        self.emit_indented(0)
    }
}

impl JsxElement {
    /// Emit with the given indentation level (2 spaces per level).
    pub fn emit_indented(&self, indent: usize) -> String {
        let prefix = "  ".repeat(indent);
        let mut open = format!("{prefix}<{}", self.tag);
        for (key, value) in &self.attrs {
            open.push(' ');
            open.push_str(key);
            open.push('=');
            open.push_str(&value.emit());
        }
        if self.children.is_empty() {
            open.push_str(" />\n");
            return open;
        }
        open.push_str(">\n");
        for child in &self.children {
            open.push_str(&child.emit_indented(indent + 1));
        }
        open.push_str(&format!("{prefix}</{}>\n", self.tag));
        open
    }
}

/// Emit the full component source for one module.
///
/// Fails when the transformed tree cannot be rendered into valid source:
/// no element children survived the transform, or an element/attribute name
/// is empty.
pub fn emit_component(module: &ComponentModule) -> Result<String, String> {
    if module.body.is_empty() {
        return Err("no renderable element children".to_string());
    }
    for element in &module.body {
        validate_element(element)?;
    }

    let name = &module.name;
    let mut out = String::new();

    match module.format {
        ModuleFormat::Esm => {
            out.push_str("import * as React from 'react';\n");
            out.push_str("import PropTypes from 'prop-types';\n\n");
        }
        ModuleFormat::Cjs => {
            out.push_str("const React = require('react');\n");
            out.push_str("const PropTypes = require('prop-types');\n\n");
        }
    }

    out.push_str(&format!(
        "const {name} = React.forwardRef(({{ color, size, ...rest }}, ref) => (\n"
    ));
    out.push_str("  <svg\n");
    out.push_str("    {...rest}\n");
    out.push_str("    xmlns=\"http://www.w3.org/2000/svg\"\n");
    out.push_str("    ref={ref}\n");
    out.push_str("    width={size}\n");
    out.push_str("    height={size}\n");
    out.push_str("    viewBox=\"0 0 24 24\"\n");
    out.push_str("    fill=\"none\"\n");
    out.push_str("  >\n");
    for element in &module.body {
        out.push_str(&element.emit_indented(2));
    }
    out.push_str("  </svg>\n");
    out.push_str("));\n\n");

    out.push_str(&format!("{name}.propTypes = {{\n"));
    out.push_str("  color: PropTypes.string,\n");
    out.push_str("  size: PropTypes.oneOfType([PropTypes.string, PropTypes.number]),\n");
    out.push_str("};\n\n");

    out.push_str(&format!("{name}.defaultProps = {{\n"));
    out.push_str(&format!("  color: '{DEFAULT_COLOR}',\n"));
    out.push_str(&format!("  size: '{DEFAULT_SIZE}',\n"));
    out.push_str("};\n\n");

    out.push_str(&format!("{name}.displayName = '{name}';\n\n"));

    match module.format {
        ModuleFormat::Esm => out.push_str(&format!("export default {name};\n")),
        ModuleFormat::Cjs => out.push_str(&format!("module.exports = {name};\n")),
    }

    Ok(out)
}

/// Emit the `.d.ts` companion for one component.
pub fn emit_type_declaration(name: &str) -> String {
    format!(
        "import * as React from 'react';\n\
         declare function {name}(\n\
         \x20 props: React.SVGProps<SVGSVGElement>,\n\
         \x20 ref: React.Ref<SVGSVGElement>\n\
         ): React.ReactElement;\n\
         export default {name};\n"
    )
}

fn validate_element(element: &JsxElement) -> Result<(), String> {
    if element.tag.is_empty() {
        return Err("element with empty tag name".to_string());
    }
    for (key, _) in &element.attrs {
        if key.is_empty() {
            return Err(format!("empty attribute name on <{}>", element.tag));
        }
    }
    for child in &element.children {
        validate_element(child)?;
    }
    Ok(())
}

fn escape_attr(value: &str) -> String {
    value.replace('"', "&quot;")
}
