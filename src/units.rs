use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use svgtree::{Document, Length, Tag, ViewBox};

use crate::error::{Error, Result};

pub const DEFAULT_DPI: f64 = 96.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Mm,
    Cm,
    M,
    Km,
    In,
    Ft,
    Yd,
    Pt,
    Px,
    Pc,
}

impl Unit {
    pub const ALL: [Unit; 10] = [
        Unit::Mm,
        Unit::Cm,
        Unit::M,
        Unit::Km,
        Unit::In,
        Unit::Ft,
        Unit::Yd,
        Unit::Pt,
        Unit::Px,
        Unit::Pc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::M => "m",
            Unit::Km => "km",
            Unit::In => "in",
            Unit::Ft => "ft",
            Unit::Yd => "yd",
            Unit::Pt => "pt",
            Unit::Px => "px",
            Unit::Pc => "pc",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Unit> {
        let lower = s.trim().to_ascii_lowercase();
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.as_str() == lower)
            .ok_or_else(|| Error::UnknownUnit {
                unit: s.to_string(),
            })
    }
}

/// Converts between physical units and SVG user units at a fixed resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitConverter {
    pub dpi: f64,
}

impl Default for UnitConverter {
    fn default() -> Self {
        UnitConverter { dpi: DEFAULT_DPI }
    }
}

impl UnitConverter {
    pub fn new(dpi: f64) -> UnitConverter {
        UnitConverter { dpi }
    }

    /// User units in one `unit`.
    pub fn user_units_per(&self, unit: Unit) -> f64 {
        let mm = self.dpi / 25.4;
        match unit {
            Unit::Mm => mm,
            Unit::Cm => 10.0 * mm,
            Unit::M => 1.0e3 * mm,
            Unit::Km => 1.0e6 * mm,
            Unit::In => self.dpi,
            Unit::Ft => 12.0 * self.dpi,
            Unit::Yd => 36.0 * self.dpi,
            Unit::Pt => self.dpi / 72.0,
            Unit::Px => 1.0,
            Unit::Pc => self.dpi / 6.0,
        }
    }

    pub fn to_user_units(&self, value: f64, unit: Unit) -> f64 {
        value * self.user_units_per(unit)
    }

    pub fn from_user_units(&self, value: f64, unit: Unit) -> f64 {
        value / self.user_units_per(unit)
    }

    pub fn convert(&self, value: f64, from: Unit, to: Unit) -> f64 {
        self.from_user_units(self.to_user_units(value, from), to)
    }
}

/// Unit the document is edited in and the viewBox-to-width ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DocumentUnits {
    pub unit: Unit,
    pub scale: f64,
}

impl DocumentUnits {
    pub fn from_document(document: &Document) -> DocumentUnits {
        let unit = document
            .root
            .descendants()
            .into_iter()
            .find(|node| node.tag == Tag::Other("sodipodi:namedview".to_string()))
            .and_then(|view| view.attr("inkscape:document-units"))
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(Unit::Px);

        let view_box = document.root.attr("viewBox").and_then(ViewBox::parse);
        let width = document.root.attr("width").and_then(Length::parse);
        let scale = match (view_box, width) {
            (Some(view_box), Some(width)) if width.value != 0.0 => view_box.width / width.value,
            _ => 1.0,
        };

        tracing::debug!(unit = unit.as_str(), scale, "document units");
        DocumentUnits { unit, scale }
    }
}
