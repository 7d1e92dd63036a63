use svgtree::{Document, Node};

use crate::error::{Error, Result};
use crate::extract::element_points;
use crate::geom::{point, Point};

/// Axis-aligned box with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub fn from_points(points: &[Point]) -> Result<BoundingBox> {
        let (first, rest) = points.split_first().ok_or(Error::EmptyGeometry)?;

        Ok(rest.iter().fold(
            BoundingBox {
                min: *first,
                max: *first,
            },
            |bbox, p| BoundingBox {
                min: point(bbox.min.x.min(p.x), bbox.min.y.min(p.y)),
                max: point(bbox.max.x.max(p.x), bbox.max.y.max(p.y)),
            },
        ))
    }

    pub fn center(&self) -> Point {
        point(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

pub fn reduce(points: &[Point]) -> Result<BoundingBox> {
    BoundingBox::from_points(points)
}

pub fn center(points: &[Point]) -> Result<Point> {
    Ok(reduce(points)?.center())
}

/// Box around everything `node` draws, in its parent's frame.
pub fn element_bounding_box(document: &Document, node: &Node) -> Result<BoundingBox> {
    reduce(&element_points(document, node)?)
}

pub fn element_center(document: &Document, node: &Node) -> Result<Point> {
    Ok(element_bounding_box(document, node)?.center())
}
