use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::types::first_number;

/// Element kinds the geometry layer distinguishes. Everything it has no use
/// for lands in [`Tag::Other`] with its local name.
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Path { data: String },
    Text { x: f64, y: f64 },
    Group,
    Use { href: String, x: f64, y: f64 },
    /// `defs` and `metadata` containers.
    Definitions,
    Other(String),
}

impl Tag {
    pub fn from_element(name: &str, attributes: &BTreeMap<String, String>) -> Result<Tag> {
        let element = local_name(name);

        Ok(match element {
            "path" => Tag::Path {
                data: attributes.get("d").cloned().unwrap_or_default(),
            },
            "text" => Tag::Text {
                x: coordinate(element, attributes, "x")?,
                y: coordinate(element, attributes, "y")?,
            },
            "g" => Tag::Group,
            "use" => {
                let href = attributes
                    .get("xlink:href")
                    .or_else(|| attributes.get("href"))
                    .ok_or_else(|| Error::MissingAttribute {
                        element: element.to_string(),
                        attribute: "xlink:href".to_string(),
                    })?;

                Tag::Use {
                    href: href.trim().trim_start_matches('#').to_string(),
                    x: coordinate(element, attributes, "x")?,
                    y: coordinate(element, attributes, "y")?,
                }
            }
            "defs" | "metadata" => Tag::Definitions,
            other => Tag::Other(other.to_string()),
        })
    }

    pub fn name(&self) -> &str {
        match self {
            Tag::Path { .. } => "path",
            Tag::Text { .. } => "text",
            Tag::Group => "g",
            Tag::Use { .. } => "use",
            Tag::Definitions => "defs",
            Tag::Other(name) => name,
        }
    }
}

/// Strips the `svg:` namespace prefix some editors write on element names.
pub fn local_name(name: &str) -> &str {
    name.strip_prefix("svg:").unwrap_or(name)
}

fn coordinate(element: &str, attributes: &BTreeMap<String, String>, name: &str) -> Result<f64> {
    match attributes.get(name) {
        None => Ok(0.0),
        Some(raw) => first_number(raw).ok_or_else(|| Error::InvalidAttribute {
            element: element.to_string(),
            attribute: name.to_string(),
            value: raw.clone(),
        }),
    }
}

/// One element of the document. `id` and `transform` are kept out of
/// `attributes` so edits only ever touch one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub tag: Tag,
    pub id: Option<String>,
    pub transform: Option<String>,
    pub attributes: BTreeMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: Tag) -> Node {
        Node {
            tag,
            id: None,
            transform: None,
            attributes: BTreeMap::new(),
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Node {
        self.id = Some(id.into());
        self
    }

    pub fn with_transform(mut self, transform: impl Into<String>) -> Node {
        self.transform = Some(transform.into());
        self
    }

    pub fn with_child(mut self, child: Node) -> Node {
        self.children.push(child);
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Depth-first, document order.
    pub fn descendants(&self) -> Vec<&Node> {
        let mut out = vec![self];
        for child in &self.children {
            out.extend(child.descendants());
        }
        out
    }
}
