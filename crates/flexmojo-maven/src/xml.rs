//! Generic XML element tree, read into [`ConfigurationNode`]s.
//!
//! Plugin `<configuration>` blocks are free-form, so the whole document is
//! read into one tree and the POM-specific parts are picked out afterwards.
//! Attributes and comments are ignored. Text and CDATA segments of an
//! element are concatenated as written and the result is trimmed; an element
//! with only whitespace content has no value.

use quick_xml::events::Event;
use quick_xml::Reader;

use flexmojo_core::configuration::ConfigurationNode;
use flexmojo_util::errors::FlexmojoError;

fn descriptor_error(message: impl Into<String>) -> FlexmojoError {
    FlexmojoError::Descriptor {
        message: message.into(),
    }
}

fn append_text(node: &mut ConfigurationNode, text: &str) {
    match node.value {
        Some(ref mut v) => v.push_str(text),
        None => node.value = Some(text.to_string()),
    }
}

/// Trim the accumulated text of a closed element.
fn finish(mut node: ConfigurationNode) -> ConfigurationNode {
    node.value = node
        .value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string);
    node
}

/// Parse an XML document into its root element.
pub fn parse_tree(xml: &str) -> Result<ConfigurationNode, FlexmojoError> {
    let mut reader = Reader::from_str(xml);

    let mut stack: Vec<ConfigurationNode> = Vec::new();
    let mut root: Option<ConfigurationNode> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                stack.push(ConfigurationNode::new(name));
            }
            Ok(Event::Empty(ref e)) => {
                let name = String::from_utf8_lossy(e.local_name().as_ref()).to_string();
                let node = ConfigurationNode::new(name);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Ok(Event::Text(ref e)) => {
                let text = e
                    .unescape()
                    .map_err(|err| descriptor_error(format!("invalid text content: {err}")))?;
                if let Some(top) = stack.last_mut() {
                    append_text(top, &text);
                }
            }
            Ok(Event::CData(ref e)) => {
                let text = String::from_utf8_lossy(e);
                if let Some(top) = stack.last_mut() {
                    append_text(top, &text);
                }
            }
            Ok(Event::End(_)) => {
                let Some(node) = stack.pop() else {
                    return Err(descriptor_error("unbalanced closing tag"));
                };
                let node = finish(node);
                match stack.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => root = Some(node),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(descriptor_error(format!(
                    "failed to parse XML at position {}: {e}",
                    reader.error_position()
                )));
            }
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(descriptor_error(format!(
            "unclosed element <{}>",
            stack.last().map(|n| n.name.as_str()).unwrap_or_default()
        )));
    }
    root.ok_or_else(|| descriptor_error("document has no root element"))
}
