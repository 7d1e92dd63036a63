use std::collections::BTreeMap;
use std::path::Path;
use std::slice::Iter;

use svg::node::element::tag;
use svg::node::Attributes;
use svg::parser::Event;

use crate::error::{Error, Result};
use crate::tag::{Node, Tag};

/// An SVG document loaded into an owned [`Node`] tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub root: Node,
}

fn node_from_tag(name: &str, raw: &Attributes) -> Result<Node> {
    let mut attributes: BTreeMap<String, String> = raw
        .iter()
        .map(|(key, value)| (key.clone(), value.to_string()))
        .collect();
    let id = attributes.remove("id");
    let transform = attributes.remove("transform");

    Ok(Node {
        tag: Tag::from_element(name, &attributes)?,
        id,
        transform,
        attributes,
        children: Vec::new(),
    })
}

fn parse_node(events: &mut Iter<Event>) -> Result<Vec<Node>> {
    let mut siblings = Vec::new();

    while let Some(event) = events.next() {
        match event {
            Event::Error(err) => {
                return Err(Error::Xml {
                    message: err.to_string(),
                })
            }
            Event::Tag(name, kind, attributes) => match kind {
                tag::Type::Start => {
                    let mut node = node_from_tag(name, attributes)?;
                    node.children = parse_node(events)?;
                    siblings.push(node);
                }
                tag::Type::Empty => siblings.push(node_from_tag(name, attributes)?),
                tag::Type::End => return Ok(siblings),
            },
            _ => (),
        }
    }

    Ok(siblings)
}

impl Document {
    pub fn new(root: Node) -> Document {
        Document { root }
    }

    pub fn parse(content: &str) -> Result<Document> {
        let events: Vec<Event> = svg::read(content)?.collect();
        let mut nodes = parse_node(&mut events.iter())?;
        if nodes.is_empty() {
            return Err(Error::MissingRoot);
        }

        let root = nodes.remove(0);
        tracing::debug!(
            root = root.tag.name(),
            children = root.children.len(),
            "loaded svg document"
        );
        Ok(Document { root })
    }

    pub fn open<P: AsRef<Path>>(path: P) -> Result<Document> {
        let content = std::fs::read_to_string(path)?;
        Document::parse(&content)
    }

    pub fn find(&self, id: &str) -> Option<&Node> {
        self.root.find(id)
    }

    pub fn find_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.root.find_mut(id)
    }

    pub fn ids(&self) -> Vec<&str> {
        self.root
            .descendants()
            .into_iter()
            .filter_map(|node| node.id.as_deref())
            .collect()
    }
}
