//! # Batch Generation
//!
//! Writes documents for many printers at once and serves single documents
//! by driver URI.
//!
//! Documents are independent: a batch compiles them in parallel and only
//! shares a progress counter. A failed document does not stop the others;
//! the batch reports every failure at the end.
//!
//! ## Driver URIs
//!
//! ```text
//! gutenprint.5.2://escp2-c88/expert
//! gutenprint.5.2://escp2-c88/simple/fr
//! ```

use std::fmt;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;

use crate::capability::{ModelCatalog, PrinterModel};
use crate::config::GeneratorConfig;
use crate::error::{GenppdError, Result};
use crate::i18n::LocaleStore;
use crate::ppd::{DocumentRequest, Variant, compile_document};
use crate::writer::{
    compression_suffix, document_basename, document_filename, install_location, write_document,
};

/// Non-verbose batches print one dot per this many documents.
const PROGRESS_INTERVAL: usize = 50;

// ============================================================================
// GENERATION CONTEXT
// ============================================================================

/// State shared by every document of a batch.
#[derive(Debug, Default)]
pub struct GenerationContext {
    progress: AtomicUsize,
    verbose: bool,
}

impl GenerationContext {
    pub fn new(verbose: bool) -> Self {
        Self {
            progress: AtomicUsize::new(0),
            verbose,
        }
    }

    /// Report that a document is about to be written.
    fn tick(&self, path: &Path) {
        let count = self.progress.fetch_add(1, Ordering::Relaxed);
        if self.verbose {
            log::info!("Writing {}...", path.display());
        } else if count % PROGRESS_INTERVAL == 0 {
            eprint!(".");
        }
    }

    /// Documents started so far.
    pub fn documents_started(&self) -> usize {
        self.progress.load(Ordering::Relaxed)
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

// ============================================================================
// BATCHES
// ============================================================================

/// What a batch should produce.
#[derive(Debug, Clone)]
pub struct BatchRequest {
    pub output_dir: PathBuf,
    /// Driver or long names; empty means every generated printer.
    pub models: Vec<String>,
    pub variants: Vec<Variant>,
    /// Document language; `None` writes globalized documents.
    pub language: Option<String>,
}

/// Outcome of a batch.
#[derive(Debug, Default)]
pub struct BatchReport {
    pub written: Vec<PathBuf>,
    pub failed: Vec<(PathBuf, GenppdError)>,
}

impl BatchReport {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }

    /// Log every failure and turn them into one error.
    pub fn into_result(self) -> Result<Vec<PathBuf>> {
        if self.failed.is_empty() {
            return Ok(self.written);
        }
        for (path, err) in &self.failed {
            log::error!("{}: {}", path.display(), err);
        }
        Err(GenppdError::BatchIncomplete(self.failed.len()))
    }
}

/// Look up the requested printers, all of them before anything is written.
///
/// PostScript and raw printers are skipped even when named.
pub fn resolve_models<'a>(
    catalog: &'a ModelCatalog,
    ids: &[String],
) -> Result<Vec<(usize, &'a PrinterModel)>> {
    if ids.is_empty() {
        return Ok(catalog.generated().collect());
    }

    let mut printers = Vec::with_capacity(ids.len());
    for id in ids {
        let (index, printer) = catalog
            .find(id)
            .ok_or_else(|| GenppdError::PrinterNotFound(id.clone()))?;
        if printer.info.is_generated() {
            printers.push((index, printer));
        } else {
            log::info!("Skipping {}: no documents for the {} family", id, printer.info.family);
        }
    }
    Ok(printers)
}

/// Generate every requested (printer, variant) document.
///
/// Fails before writing anything if a printer is unknown or the output
/// directory cannot be created. Per-document failures are collected in
/// the report.
pub fn generate_batch(
    catalog: &ModelCatalog,
    request: &BatchRequest,
    config: &GeneratorConfig,
    locales: &LocaleStore,
    ctx: &GenerationContext,
) -> Result<BatchReport> {
    let printers = resolve_models(catalog, &request.models)?;
    fs::create_dir_all(&request.output_dir).map_err(|source| GenppdError::Sink {
        path: request.output_dir.clone(),
        source,
    })?;

    let jobs: Vec<(usize, &PrinterModel, Variant)> = printers
        .iter()
        .flat_map(|&(index, printer)| request.variants.iter().map(move |&v| (index, printer, v)))
        .collect();

    let results: Vec<(PathBuf, Result<()>)> = jobs
        .par_iter()
        .map(|&(index, printer, variant)| {
            let filename = document_filename(config, &printer.info.driver, variant);
            let path = request.output_dir.join(&filename);
            ctx.tick(&path);

            let document = DocumentRequest {
                variant,
                language: request.language.clone(),
                ppd_location: install_location(config, request.language.as_deref(), &filename),
                filename: document_basename(config, &printer.info.driver, variant),
                model_index: index,
                model_count: catalog.len(),
            };
            let result = compile_document(printer, &document, config, locales)
                .and_then(|program| write_document(&program, &path, config.compress));
            (path, result)
        })
        .collect();

    let mut report = BatchReport::default();
    for (path, result) in results {
        match result {
            Ok(()) => report.written.push(path),
            Err(err) => report.failed.push((path, err)),
        }
    }
    Ok(report)
}

// ============================================================================
// DRIVER URIS
// ============================================================================

/// A parsed `gutenprint.<release>://<driver>/<variant>[/<lang>]` URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverUri {
    pub scheme: String,
    pub driver: String,
    pub variant: Variant,
    pub language: Option<String>,
}

impl DriverUri {
    pub fn new(config: &GeneratorConfig, driver: &str, variant: Variant) -> Self {
        Self {
            scheme: config.uri_scheme(),
            driver: driver.to_string(),
            variant,
            language: None,
        }
    }

    /// Parse a URI built for the configured release.
    ///
    /// Unknown variant names select the standard variant.
    pub fn parse(uri: &str, config: &GeneratorConfig) -> Result<Self> {
        let invalid = || GenppdError::InvalidUri(uri.to_string());
        let (scheme, rest) = uri.split_once("://").ok_or_else(invalid)?;
        let expected = config.uri_scheme();
        if scheme != expected {
            return Err(GenppdError::VersionMismatch {
                expected,
                found: scheme.to_string(),
            });
        }

        let mut parts = rest.splitn(3, '/');
        let driver = parts.next().filter(|d| !d.is_empty()).ok_or_else(invalid)?;
        let variant = parts
            .next()
            .and_then(Variant::from_uri_name)
            .unwrap_or(Variant::Standard);
        let language = parts.next().filter(|l| !l.is_empty()).map(str::to_string);

        Ok(Self {
            scheme: scheme.to_string(),
            driver: driver.to_string(),
            variant,
            language,
        })
    }
}

impl fmt::Display for DriverUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}/{}", self.scheme, self.driver, self.variant.uri_name())?;
        if let Some(lang) = &self.language {
            write!(f, "/{}", lang)?;
        }
        Ok(())
    }
}

/// Compile the document named by a driver URI into `out`.
pub fn cat_document(
    uri: &str,
    catalog: &ModelCatalog,
    config: &GeneratorConfig,
    locales: &LocaleStore,
    out: &mut impl Write,
) -> Result<()> {
    let uri = DriverUri::parse(uri, config)?;
    let (index, printer) = catalog
        .printers
        .iter()
        .enumerate()
        .find(|(_, p)| p.info.driver == uri.driver)
        .ok_or_else(|| GenppdError::PrinterNotFound(uri.driver.clone()))?;

    let filename = document_basename(config, &uri.driver, uri.variant);
    let tail = format!("ppd/{}{}", filename, compression_suffix(config));
    let document = DocumentRequest {
        variant: uri.variant,
        language: uri.language.clone(),
        ppd_location: install_location(config, uri.language.as_deref(), &tail),
        filename,
        model_index: index,
        model_count: catalog.len(),
    };

    let program = compile_document(printer, &document, config, locales)?;
    program.write_to(out)?;
    Ok(())
}

/// One line per generated document: URI, language, manufacturer, nickname
/// and device ID, in the format CUPS driver listings expect.
pub fn list_uris(catalog: &ModelCatalog, config: &GeneratorConfig) -> Vec<String> {
    let mut lines = Vec::new();
    for (_, printer) in catalog.generated() {
        let info = &printer.info;
        for variant in Variant::ALL {
            let uri = DriverUri::new(config, &info.driver, variant);
            lines.push(format!(
                "\"{}\" en \"{}\" \"{}\" \"{}\"",
                uri,
                info.manufacturer,
                config.nickname(&info.long_name, variant.nickname_suffix()),
                info.device_id.as_deref().unwrap_or("")
            ));
        }
    }
    lines
}
