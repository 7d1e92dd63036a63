//! In-place edits of a node's `transform` attribute. New operations are put
//! in front of the existing chain so they act after it.

use svgtree::{Document, Node};

use crate::bbox::element_center;
use crate::error::{Error, Result};
use crate::geom::Point;
use crate::transform::{prepend, AffineOp};

fn push_front(node: &mut Node, op: AffineOp) {
    let chain = prepend(node.transform.as_deref(), &op);
    tracing::debug!(
        id = node.id.as_deref().unwrap_or(""),
        transform = %chain,
        "edited transform"
    );
    node.transform = Some(chain);
}

pub fn translate_node(node: &mut Node, dx: f64, dy: f64) {
    if dx == 0.0 && dy == 0.0 {
        return;
    }
    push_front(node, AffineOp::Translate { dx, dy });
}

/// Rotates by `angle` degrees about `center`, counter-clockwise on screen.
pub fn rotate_node(node: &mut Node, center: Point, angle: f64) {
    if angle == 0.0 {
        return;
    }
    push_front(
        node,
        AffineOp::Rotate {
            angle: -angle,
            center: Some(center),
        },
    );
}

/// `sy` defaults to `sx`. With a center, that point stays fixed.
pub fn scale_node(node: &mut Node, sx: f64, sy: Option<f64>, center: Option<Point>) {
    if let Some(c) = center {
        translate_node(node, -c.x, -c.y);
    }
    push_front(
        node,
        AffineOp::Scale {
            sx,
            sy: sy.unwrap_or(sx),
        },
    );
    if let Some(c) = center {
        translate_node(node, c.x, c.y);
    }
}

/// Rotates the element with `id` about the center of its own bounding box.
pub fn rotate_about_center(document: &mut Document, id: &str, angle: f64) -> Result<()> {
    let unresolved = || Error::UnresolvedReference { id: id.to_string() };

    let node = document.find(id).ok_or_else(unresolved)?;
    let center = element_center(document, node)?;

    let node = document.find_mut(id).ok_or_else(unresolved)?;
    rotate_node(node, center, angle);
    Ok(())
}
