//! Geometry helpers for SVG editor extensions.
//!
//! Transform chains are parsed and folded into one affine matrix, path data
//! and element subtrees are flattened into anchor points, and those points
//! are reduced to bounding boxes. The element tree itself comes from
//! [`svgtree`].

pub mod bbox;
pub mod config;
pub mod edit;
pub mod error;
pub mod extract;
pub mod geom;
pub mod path;
pub mod transform;
pub mod units;

pub use bbox::{center, element_bounding_box, element_center, reduce, BoundingBox};
pub use config::Config;
pub use edit::{rotate_about_center, rotate_node, scale_node, translate_node};
pub use error::{Error, Result};
pub use extract::{element_points, points_by_id};
pub use geom::{
    circle_through_three_points, point, segment_from_points, segment_parameters, vector, Circle,
    NormalSide, Point, Segment, Vector,
};
pub use path::extract_points;
pub use transform::{prepend, AffineOp, Transform};
pub use units::{DocumentUnits, Unit, UnitConverter};

pub use svgtree::{Document, IdAllocator, Node, Tag};
