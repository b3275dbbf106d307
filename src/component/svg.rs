//! SVG source parsing into an owned element tree.
//!
//! quick-xml's pull parser is folded into a small DOM: elements keep their
//! attributes in document order, and text/comment children are represented
//! so the transform stage can drop them explicitly.

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// An element node: tag, ordered attributes, mixed children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgElement {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<SvgNode>,
}

/// One node of the parsed document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgNode {
    Element(SvgElement),
    Text(String),
    Comment(String),
}

/// Parse SVG text into its root element.
///
/// Fails if the markup is not well-formed or the root element is not
/// `<svg>`. The caller decides whether that aborts the pair or the run.
pub fn parse_svg(input: &str) -> Result<SvgElement, String> {
    let mut reader = Reader::from_str(input);
    let mut stack: Vec<SvgElement> = Vec::new();
    let mut root: Option<SvgElement> = None;

    loop {
        match reader
            .read_event()
            .map_err(|err| format!("XML error at byte {}: {err}", reader.buffer_position()))?
        {
            Event::Start(e) => {
                stack.push(element_from(&e)?);
            }
            Event::Empty(e) => {
                let element = element_from(&e)?;
                attach(&mut stack, &mut root, SvgNode::Element(element))?;
            }
            Event::End(_) => {
                let element = stack.pop().ok_or("unbalanced closing tag")?;
                attach(&mut stack, &mut root, SvgNode::Element(element))?;
            }
            Event::Text(e) => {
                let text = e.decode().map_err(|err| err.to_string())?;
                if !text.trim().is_empty() {
                    if let Some(parent) = stack.last_mut() {
                        parent.children.push(SvgNode::Text(text.into_owned()));
                    }
                }
            }
            Event::CData(e) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(SvgNode::Text(text));
                }
            }
            Event::Comment(e) => {
                let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                if let Some(parent) = stack.last_mut() {
                    parent.children.push(SvgNode::Comment(text));
                }
            }
            Event::Eof => break,
            // Declarations, processing instructions, doctypes and entity
            // references carry nothing the component needs.
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err("unexpected end of SVG: unclosed element".to_string());
    }

    let root = root.ok_or("no root element found")?;
    if root.tag != "svg" {
        return Err(format!("expected <svg> root element, found <{}>", root.tag));
    }
    Ok(root)
}

fn element_from(e: &BytesStart<'_>) -> Result<SvgElement, String> {
    let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|err| format!("bad attribute in <{tag}>: {err}"))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|err| format!("bad value for `{key}` in <{tag}>: {err}"))?
            .into_owned();
        attrs.push((key, value));
    }
    Ok(SvgElement {
        tag,
        attrs,
        children: Vec::new(),
    })
}

fn attach(
    stack: &mut [SvgElement],
    root: &mut Option<SvgElement>,
    node: SvgNode,
) -> Result<(), String> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(node);
        return Ok(());
    }
    match node {
        SvgNode::Element(element) => {
            if root.is_some() {
                return Err("multiple root elements".to_string());
            }
            *root = Some(element);
            Ok(())
        }
        // Top-level text or comments outside the root are irrelevant.
        SvgNode::Text(_) | SvgNode::Comment(_) => Ok(()),
    }
}
