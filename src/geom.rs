use nalgebra::{Matrix3, Vector3};

use crate::error::Result;
use crate::extract::element_points;
use svgtree::{Document, Node, Tag};

pub type Point = nalgebra::Point2<f64>;
pub type Vector = nalgebra::Vector2<f64>;

pub fn point(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

/// Which side of the tangent the normal points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalSide {
    Right,
    Left,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub length: f64,
    /// Radians, `atan2` of the tangent.
    pub angle: f64,
    pub tangent: Vector,
    pub normal: Vector,
}

/// `None` when the two points coincide.
pub fn segment_from_points(start: Point, end: Point, side: NormalSide) -> Option<Segment> {
    let delta = end - start;
    let length = delta.norm();
    if length == 0.0 {
        return None;
    }

    let tangent = delta / length;
    let normal = match side {
        NormalSide::Right => vector(tangent.y, -tangent.x),
        NormalSide::Left => vector(-tangent.y, tangent.x),
    };

    Some(Segment {
        start,
        end,
        length,
        angle: tangent.y.atan2(tangent.x),
        tangent,
        normal,
    })
}

/// Segment of a path element made of exactly two points, after the
/// element's transform. Anything else gives `None`.
pub fn segment_parameters(
    document: &Document,
    node: &Node,
    side: NormalSide,
) -> Result<Option<Segment>> {
    if !matches!(node.tag, Tag::Path { .. }) {
        return Ok(None);
    }

    match element_points(document, node)?.as_slice() {
        &[start, end] => Ok(segment_from_points(start, end, side)),
        _ => Ok(None),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

/// Circle through three points. `None` if two of them coincide or they are
/// (nearly) collinear.
pub fn circle_through_three_points(p1: Point, p2: Point, p3: Point) -> Option<Circle> {
    let v1 = p1 - p2;
    let v2 = p1 - p3;
    if v1.norm() == 0.0 || v2.norm() == 0.0 {
        return None;
    }

    let cos_theta = v1.normalize().dot(&v2.normalize());
    if cos_theta.abs() > 0.99999 {
        return None;
    }

    let a = Matrix3::new(
        -2.0 * p1.x,
        -2.0 * p1.y,
        1.0,
        -2.0 * p2.x,
        -2.0 * p2.y,
        1.0,
        -2.0 * p3.x,
        -2.0 * p3.y,
        1.0,
    );
    let b = Vector3::new(
        -(p1.x * p1.x + p1.y * p1.y),
        -(p2.x * p2.x + p2.y * p2.y),
        -(p3.x * p3.x + p3.y * p3.y),
    );
    let x = a.lu().solve(&b)?;

    Some(Circle {
        center: point(x.x, x.y),
        radius: (x.x * x.x + x.y * x.y - x.z).sqrt(),
    })
}
