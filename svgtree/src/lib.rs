//! Owned SVG element tree: load a document, classify its elements, look
//! nodes up by id and mint fresh ids.

mod error;
mod ids;
mod parse;
mod tag;
mod types;

pub use error::{Error, Result};
pub use ids::IdAllocator;
pub use parse::Document;
pub use tag::{local_name, Node, Tag};
pub use types::{Length, ViewBox};
