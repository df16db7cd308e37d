//! # Printer Models
//!
//! A [`PrinterModel`] is a static, JSON-described capability source: the
//! driver identity, its parameters, and the tables needed to answer
//! geometry and resolution queries.
//!
//! ## Example
//!
//! ```
//! use genppd::capability::{CapabilitySource, ModelCatalog, ResolutionQuery};
//!
//! let catalog = ModelCatalog::builtin().unwrap();
//! let (_, printer) = catalog.find("pcl-ljet4").unwrap();
//! let res = printer.resolution(ResolutionQuery::Resolution("600dpi"));
//! assert_eq!((res.x, res.y), (600, 600));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use super::papers::{self, CUSTOM};
use super::{
    CapabilitySource, ImageableArea, MediaGeometry, ParameterDescriptor, PrinterInfo,
    ResolutionPair, ResolutionQuery, SizeLimits,
};
use crate::error::Result;

/// Printer model catalog compiled into the binary.
const BUILTIN_CATALOG: &str = include_str!("../fixtures/printers.json");

/// Unprintable border of the sheet, in points.
///
/// Negative values extend the printable area past the sheet edge
/// (borderless printing); they are clipped when the document is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margins {
    #[serde(default)]
    pub left: i32,
    #[serde(default)]
    pub right: i32,
    #[serde(default)]
    pub top: i32,
    #[serde(default)]
    pub bottom: i32,
}

/// A printer described entirely by data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrinterModel {
    #[serde(flatten)]
    pub info: PrinterInfo,
    #[serde(default)]
    pub native_copies: bool,
    #[serde(default)]
    pub margins: Margins,
    /// Custom page size limits; `None` when the printer has no custom sizes.
    #[serde(default)]
    pub custom_size: Option<SizeLimits>,
    /// Hardware resolution of each `Resolution` choice.
    #[serde(default)]
    pub resolutions: BTreeMap<String, ResolutionPair>,
    /// Hardware resolution of each `Quality` choice.
    #[serde(default)]
    pub qualities: BTreeMap<String, ResolutionPair>,
    #[serde(default)]
    pub parameters: Vec<ParameterDescriptor>,
}

impl CapabilitySource for PrinterModel {
    fn info(&self) -> &PrinterInfo {
        &self.info
    }

    fn parameters(&self) -> Vec<ParameterDescriptor> {
        self.parameters.clone()
    }

    fn describe(&self, name: &str) -> Option<ParameterDescriptor> {
        self.parameters.iter().find(|p| p.name == name).cloned()
    }

    fn media_geometry(&self, page_size: &str) -> Option<MediaGeometry> {
        let (width, height) = if page_size == CUSTOM {
            let limits = self.custom_size?;
            (limits.max_width, limits.max_height)
        } else {
            let paper = papers::by_name(page_size)?;
            (paper.width, paper.height)
        };
        if width <= 0 || height <= 0 {
            return None;
        }

        Some(MediaGeometry {
            width,
            height,
            area: ImageableArea {
                left: self.margins.left,
                right: width - self.margins.right,
                top: self.margins.top,
                bottom: height - self.margins.bottom,
            },
        })
    }

    fn resolution(&self, query: ResolutionQuery<'_>) -> ResolutionPair {
        let table = match query {
            ResolutionQuery::Resolution(name) => self.resolutions.get(name),
            ResolutionQuery::Quality(name) => self.qualities.get(name),
        };
        table.copied().unwrap_or(ResolutionPair::NONE)
    }

    fn size_limits(&self) -> Option<SizeLimits> {
        self.custom_size
    }

    fn native_copies(&self) -> bool {
        self.native_copies
    }
}

// ============================================================================
// MODEL CATALOG
// ============================================================================

/// Every printer model known to the generator.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelCatalog {
    pub printers: Vec<PrinterModel>,
}

impl ModelCatalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The catalog compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Number of printers, including ones that never get documents.
    pub fn len(&self) -> usize {
        self.printers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.printers.is_empty()
    }

    /// Printers that get documents, with their catalog index.
    pub fn generated(&self) -> impl Iterator<Item = (usize, &PrinterModel)> {
        self.printers
            .iter()
            .enumerate()
            .filter(|(_, p)| p.info.is_generated())
    }

    /// Find a printer by driver name, falling back to its long name.
    pub fn find(&self, id: &str) -> Option<(usize, &PrinterModel)> {
        let mut all = self.printers.iter().enumerate();
        all.clone()
            .find(|(_, p)| p.info.driver == id)
            .or_else(|| all.find(|(_, p)| p.info.long_name == id))
    }
}
