//! Flattens an element subtree into the anchor points it places, each
//! expressed in the element's parent frame.

use svgtree::{Document, Node, Tag};

use crate::error::{Error, Result};
use crate::geom::{point, vector, Point};
use crate::path;
use crate::transform::Transform;

struct Extractor<'a> {
    document: &'a Document,
    visiting: Vec<&'a str>,
}

impl<'a> Extractor<'a> {
    fn points(&mut self, node: &'a Node) -> Result<Vec<Point>> {
        let entered = match node.id.as_deref() {
            Some(id) => {
                self.visiting.push(id);
                true
            }
            None => false,
        };

        let local = self.local_points(node);
        if entered {
            self.visiting.pop();
        }
        let local = local?;

        if local.is_empty() {
            return Ok(local);
        }
        let transform = Transform::from_attribute(node.transform.as_deref())?;
        Ok(transform.apply(&local))
    }

    fn local_points(&mut self, node: &'a Node) -> Result<Vec<Point>> {
        match &node.tag {
            Tag::Path { data } => path::extract_points(data),
            Tag::Text { x, y } => Ok(vec![point(*x, *y)]),
            Tag::Group => {
                let mut out = Vec::new();
                for child in &node.children {
                    if child.tag == Tag::Definitions {
                        continue;
                    }
                    out.extend(self.points(child)?);
                }
                Ok(out)
            }
            Tag::Use { href, x, y } => {
                if self.visiting.contains(&href.as_str()) {
                    return Err(Error::CyclicReference { id: href.clone() });
                }
                let document = self.document;
                let target = document
                    .find(href)
                    .ok_or_else(|| Error::UnresolvedReference { id: href.clone() })?;
                tracing::debug!(reference = %href, kind = target.tag.name(), "resolved use");

                let offset = vector(*x, *y);
                Ok(self
                    .points(target)?
                    .into_iter()
                    .map(|p| p + offset)
                    .collect())
            }
            Tag::Definitions | Tag::Other(_) => {
                tracing::debug!(
                    kind = node.tag.name(),
                    id = node.id.as_deref().unwrap_or(""),
                    "element has no extractable geometry"
                );
                Ok(Vec::new())
            }
        }
    }
}

/// Points of `node` after its own transform. Unsupported kinds give an empty
/// list; `use` references are resolved against `document`.
pub fn element_points(document: &Document, node: &Node) -> Result<Vec<Point>> {
    Extractor {
        document,
        visiting: Vec::new(),
    }
    .points(node)
}

pub fn points_by_id(document: &Document, id: &str) -> Result<Vec<Point>> {
    let node = document
        .find(id)
        .ok_or_else(|| Error::UnresolvedReference { id: id.to_string() })?;
    element_points(document, node)
}
