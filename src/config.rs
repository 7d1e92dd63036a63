use serde::{Deserialize, Serialize};
use svgtree::{Document, IdAllocator};

use crate::error::Result;
use crate::units::{UnitConverter, DEFAULT_DPI};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Resolution used when converting physical units to user units.
    pub dpi: f64,
    /// Zero-padding of minted id suffixes.
    pub id_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dpi: DEFAULT_DPI,
            id_width: 5,
        }
    }
}

impl Config {
    pub fn from_json(raw: &str) -> Result<Config> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn unit_converter(&self) -> UnitConverter {
        UnitConverter::new(self.dpi)
    }

    /// Allocator seeded with every id already in `document`.
    pub fn id_allocator(&self, document: &Document) -> IdAllocator {
        let mut allocator = IdAllocator::new().with_width(self.id_width);
        for id in document.ids() {
            allocator.reserve(id);
        }
        allocator
    }
}
