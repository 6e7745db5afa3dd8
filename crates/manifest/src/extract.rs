use crate::Result;
use roxmltree::{Document, Node};
use tracing::debug;

/// Element names holding a port, in lookup order.
pub const PORT_TAGS: [&str; 5] = ["port", "Port", "PORT", "portInfo", "PortInfo"];

/// Extract port names from `xml`, keeping only ports whose `<type>` child
/// equals `port_type` when one is given.
///
/// Ports without a resolvable name are skipped.
pub fn extract_port_names(xml: &str, port_type: Option<&str>) -> Result<Vec<String>> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let ports = PORT_TAGS
        .iter()
        .map(|tag| {
            root.descendants()
                .filter(|node| *node != root && node.has_tag_name(*tag))
                .collect::<Vec<_>>()
        })
        .find(|found| !found.is_empty())
        .unwrap_or_default();

    let names: Vec<String> = ports
        .into_iter()
        .filter(|port| {
            port_type.is_none_or(|wanted| child_text(*port, "type") == Some(wanted))
        })
        .filter_map(port_name)
        .collect();

    debug!(ports = names.len(), ?port_type, "port names extracted");
    Ok(names)
}

fn port_name(port: Node<'_, '_>) -> Option<String> {
    if let Some(name) = port.attribute("name").filter(|name| !name.is_empty()) {
        return Some(name.to_string());
    }
    ["name", "portName"]
        .into_iter()
        .filter_map(|tag| child_text(port, tag))
        .map(str::trim)
        .find(|name| !name.is_empty())
        .map(str::to_string)
}

fn child_text<'a>(node: Node<'a, '_>, tag: &str) -> Option<&'a str> {
    node.children()
        .find(|child| child.has_tag_name(tag))
        .and_then(|child| child.text())
}
