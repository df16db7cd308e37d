//! # genppd - PPD Generator
//!
//! genppd compiles printer capability models into PPD (PostScript Printer
//! Description) files for CUPS. It provides:
//!
//! - **Capability models**: JSON-described printers behind a read-only trait
//! - **PPD compiler**: Section emitters producing an inspectable IR
//! - **Resolution naming**: Unique, consumer-safe resolution names
//! - **Localization**: Globalized documents with one translation block per language
//! - **Batch output**: Parallel generation of plain or gzip-compressed files
//!
//! ## Quick Start
//!
//! ```
//! use genppd::{
//!     capability::ModelCatalog,
//!     config::GeneratorConfig,
//!     i18n::LocaleStore,
//!     ppd::{compile_document, DocumentRequest, Variant},
//! };
//!
//! let catalog = ModelCatalog::builtin()?;
//! let (_, printer) = catalog.find("escp2-c88").unwrap();
//!
//! let request = DocumentRequest::new(Variant::Standard, "stp-escp2-c88.5.2.ppd");
//! let program = compile_document(printer, &request, &GeneratorConfig::default(), &LocaleStore::empty())?;
//!
//! let text = program.to_text();
//! assert!(text.starts_with("*PPD-Adobe: \"4.3\"\n"));
//! assert!(text.ends_with("*% End of stp-escp2-c88.5.2.ppd\n"));
//!
//! # Ok::<(), genppd::GenppdError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`capability`] | Capability source trait, printer models, paper table |
//! | [`ppd`] | Section emitters and resolution naming |
//! | [`ir`] | Document IR and text generation |
//! | [`i18n`] | Message catalogs |
//! | [`writer`] | Plain and gzip output files |
//! | [`batch`] | Parallel generation, driver URIs |
//! | [`config`] | Generator settings |
//! | [`error`] | Error types |

pub mod batch;
pub mod capability;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ir;
pub mod ppd;
pub mod writer;

// Re-exports for convenience
pub use capability::{CapabilitySource, ModelCatalog};
pub use config::GeneratorConfig;
pub use error::GenppdError;
pub use ppd::{DocumentRequest, Variant, compile_document};
