//! # Printer Capabilities
//!
//! Read-only view of a printer driver's parameter set, which the compiler
//! walks to produce a PPD document.
//!
//! ## Modules
//!
//! - [`types`]: Parameter descriptors and derived geometry
//! - [`model`]: JSON-backed printer models and the model catalog
//! - [`papers`]: Named paper size table
//!
//! ## Derived Quantities
//!
//! Media geometry and resolutions depend on the value of another parameter
//! (the page size, the resolution or the quality). They are exposed as pure
//! queries taking that value, so a source never has to be mutated while a
//! document is generated.

pub mod model;
pub mod papers;
pub mod types;

pub use model::{ModelCatalog, PrinterModel};
pub use types::*;

use serde::{Deserialize, Serialize};

/// Identity of a printer driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrinterInfo {
    /// Short driver name, e.g. `escp2-c88`.
    pub driver: String,
    /// Marketing name, e.g. `Epson Stylus C88`.
    pub long_name: String,
    pub manufacturer: String,
    /// Driver family, e.g. `escp2`. The `ps` and `raw` families never get
    /// documents.
    pub family: String,
    /// Family-internal model number.
    #[serde(default)]
    pub model: i32,
    /// IEEE 1284 device ID, when known.
    #[serde(default)]
    pub device_id: Option<String>,
}

impl PrinterInfo {
    /// Whether documents are generated for this printer at all.
    pub fn is_generated(&self) -> bool {
        self.family != "ps" && self.family != "raw"
    }
}

/// Which parameter value a resolution is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionQuery<'a> {
    /// The resolution named by a `Resolution` choice.
    Resolution(&'a str),
    /// The resolution implied by a `Quality` choice.
    Quality(&'a str),
}

/// Read-only accessor over one printer's parameters.
///
/// Implementations must be idempotent: describing the same parameter twice
/// yields equal snapshots.
pub trait CapabilitySource: Send + Sync {
    /// Driver identity.
    fn info(&self) -> &PrinterInfo;

    /// All parameters, in the driver's listing order.
    fn parameters(&self) -> Vec<ParameterDescriptor>;

    /// Snapshot of one parameter, `None` if the driver has no such parameter.
    fn describe(&self, name: &str) -> Option<ParameterDescriptor>;

    /// Media size and imageable area for a page size choice.
    ///
    /// Returns `None` for page sizes the driver cannot describe.
    fn media_geometry(&self, page_size: &str) -> Option<MediaGeometry>;

    /// Hardware resolution implied by a parameter value.
    ///
    /// Returns [`ResolutionPair::NONE`] for values without a physical
    /// resolution.
    fn resolution(&self, query: ResolutionQuery<'_>) -> ResolutionPair;

    /// Limits of custom page sizes, `None` if unsupported.
    fn size_limits(&self) -> Option<SizeLimits>;

    /// Whether the printer produces copies itself.
    fn native_copies(&self) -> bool;
}
