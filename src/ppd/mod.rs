//! # PPD Compiler
//!
//! Compiles one printer's capabilities into a PPD document.
//!
//! ## Sections
//!
//! The document is written in a fixed order, one `impl Emitter` block per
//! file:
//!
//! | Order | Module | Content |
//! |-------|--------|---------|
//! | 1 | [`header`] | Identification, CUPS and driver attributes |
//! | 2 | [`page_size`] | PageSize, PageRegion, ImageableArea, PaperDimension, custom size |
//! | 3 | [`color`] | ColorModel and StpColorPrecision |
//! | 4 | [`media`] | MediaType and InputSlot |
//! | 5 | [`quality`] | StpQuality and Resolution |
//! | 6 | [`finishing`] | OutputOrder, Duplex, StpiShrinkOutput |
//! | 7 | [`options`] | Generic driver parameters, grouped by class and level |
//! | 8 | [`presets`] | APPrinterPreset and UI constraints |
//! | 9 | [`localize`] | Translations for every installed language |
//! | 10 | [`fonts`] | Standard fonts and footer |
//!
//! ## Example
//!
//! ```
//! use genppd::capability::ModelCatalog;
//! use genppd::config::GeneratorConfig;
//! use genppd::i18n::LocaleStore;
//! use genppd::ppd::{compile_document, DocumentRequest, Variant};
//!
//! let catalog = ModelCatalog::builtin()?;
//! let (_, printer) = catalog.find("pcl-ljet4").unwrap();
//! let request = DocumentRequest::new(Variant::Standard, "stp-pcl-ljet4.5.2.ppd");
//! let program = compile_document(printer, &request, &GeneratorConfig::default(), &LocaleStore::empty())?;
//! assert!(program.to_text().contains("*DefaultResolution: 600dpi\n"));
//! # Ok::<(), genppd::GenppdError>(())
//! ```

pub mod color;
pub mod finishing;
pub mod fonts;
pub mod header;
pub mod localize;
pub mod media;
pub mod options;
pub mod page_size;
pub mod presets;
pub mod quality;
pub mod resolution;

use crate::capability::{CapabilitySource, ParameterDescriptor};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::i18n::{LocaleStore, Translator};
use crate::ir::{Choice, Declared, Metadata, Op, Program, Value};
use localize::{KeySpace, Label};
use resolution::UsedNameSet;

// ============================================================================
// DOCUMENT VARIANTS
// ============================================================================

/// Flavor of a generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Every option the driver exposes.
    Standard,
    /// Basic-level options only.
    Simplified,
    /// Color-only options are conditionally ignorable.
    NoColorOpts,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Standard, Variant::Simplified, Variant::NoColorOpts];

    /// Offset multiplier of `*PCFileName` numbers.
    pub fn code(self) -> usize {
        match self {
            Self::Standard => 0,
            Self::Simplified => 1,
            Self::NoColorOpts => 2,
        }
    }

    pub fn is_simplified(self) -> bool {
        self == Self::Simplified
    }

    pub fn suppresses_color(self) -> bool {
        self == Self::NoColorOpts
    }

    /// Infix between the release and the extension of file names.
    pub fn file_infix(self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Simplified => ".sim",
            Self::NoColorOpts => ".nc",
        }
    }

    /// Suffix appended to `*NickName`.
    pub fn nickname_suffix(self) -> &'static str {
        match self {
            Self::Standard => "",
            Self::Simplified => " Simplified",
            Self::NoColorOpts => " No Color Options",
        }
    }

    /// Path component used in driver URIs.
    pub fn uri_name(self) -> &'static str {
        match self {
            Self::Standard => "expert",
            Self::Simplified => "simple",
            Self::NoColorOpts => "nocolor",
        }
    }

    pub fn from_uri_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.uri_name() == name)
    }
}

/// Everything about one document that is not a printer capability.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentRequest {
    pub variant: Variant,
    /// Document language; `None` (or `C`) produces a globalized document.
    pub language: Option<String>,
    /// Install path written to `*StpPPDLocation`.
    pub ppd_location: String,
    /// File name named by the footer.
    pub filename: String,
    /// Catalog index of the printer, for `*PCFileName`.
    pub model_index: usize,
    /// Number of printers in the catalog, for `*PCFileName`.
    pub model_count: usize,
}

impl DocumentRequest {
    pub fn new(variant: Variant, filename: &str) -> Self {
        Self {
            variant,
            language: None,
            ppd_location: filename.to_string(),
            filename: filename.to_string(),
            model_index: 0,
            model_count: 1,
        }
    }

    pub fn with_language(mut self, language: Option<&str>) -> Self {
        self.language = language.map(str::to_string);
        self
    }

    /// Requested language, with the base language `C` treated as none.
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref().filter(|lang| *lang != "C")
    }
}

// ============================================================================
// EMITTER
// ============================================================================

/// Per-document compiler state.
pub(crate) struct Emitter<'a> {
    source: &'a dyn CapabilitySource,
    request: &'a DocumentRequest,
    config: &'a GeneratorConfig,
    locales: &'a LocaleStore,
    language: Option<&'a str>,
    tr: Translator<'a>,
    program: Program,
    keys: KeySpace,
    used_names: UsedNameSet,
    printer_is_color: bool,
    has_quality: bool,
}

/// Compile one document.
///
/// Fails only when the printer's resolutions cannot be named uniquely.
pub fn compile_document(
    source: &dyn CapabilitySource,
    request: &DocumentRequest,
    config: &GeneratorConfig,
    locales: &LocaleStore,
) -> Result<Program> {
    let mut emitter = Emitter::new(source, request, config, locales);

    emitter.emit_header();
    emitter.emit_page_sizes();
    emitter.emit_color_model();
    emitter.emit_media_type();
    emitter.emit_input_slot();
    emitter.emit_quality();
    emitter.emit_resolution()?;
    emitter.emit_output_order();
    emitter.emit_duplex();
    emitter.emit_shrink_output();
    emitter.emit_option_groups();
    emitter.emit_presets();
    emitter.emit_constraints();
    emitter.emit_localizations();
    emitter.emit_fonts();

    Ok(emitter.program)
}

impl<'a> Emitter<'a> {
    fn new(
        source: &'a dyn CapabilitySource,
        request: &'a DocumentRequest,
        config: &'a GeneratorConfig,
        locales: &'a LocaleStore,
    ) -> Self {
        let language = request.language();
        Self {
            source,
            request,
            config,
            locales,
            language,
            tr: locales.translator(language),
            program: Program::new(),
            keys: KeySpace::default(),
            used_names: UsedNameSet::default(),
            printer_is_color: false,
            has_quality: false,
        }
    }

    fn variant(&self) -> Variant {
        self.request.variant
    }

    /// Whether a parameter's non-default values are declared ignorable.
    fn suppresses_color(&self, desc: &ParameterDescriptor) -> bool {
        self.variant().suppresses_color() && desc.is_color_option()
    }

    fn push(&mut self, op: Op) {
        self.program.push(op);
    }

    /// `*OpenUI` with its hints and order dependency. The title is recorded
    /// for translation.
    fn begin_ui(&mut self, keyword: &str, label: Label, hints: Option<&str>, order: u32) {
        self.open_ui(keyword, label);
        self.option_hints(keyword, hints);
        self.order_dependency(keyword, order);
    }

    fn open_ui(&mut self, keyword: &str, label: Label) {
        self.push(Op::OpenUi {
            keyword: keyword.to_string(),
            label: label.render(&self.tr),
        });
        self.keys.record("Translation", keyword, label, Value::Empty);
    }

    fn option_hints(&mut self, keyword: &str, hints: Option<&str>) {
        if let Some(hints) = hints {
            self.push(Op::OptionHints {
                keyword: keyword.to_string(),
                hints: hints.to_string(),
            });
        }
    }

    fn order_dependency(&mut self, keyword: &str, order: u32) {
        self.push(Op::OrderDependency {
            order,
            keyword: keyword.to_string(),
        });
    }

    fn close_ui(&mut self, keyword: &str) {
        self.push(Op::CloseUi(keyword.to_string()));
    }

    fn metadata(&mut self, desc: &ParameterDescriptor) {
        self.push(Op::Metadata {
            name: desc.name.clone(),
            meta: Metadata::of(desc),
        });
    }

    /// A regular option declaration, recorded for translation.
    fn option(&mut self, keyword: &str, option: &str, label: Label, value: Value) {
        self.declare(keyword, option, label, value, Declared::Emit(()));
    }

    /// An option of a driver parameter; non-default values of color-only
    /// parameters become ignorable in the no-color variant.
    fn param_option(
        &mut self,
        desc: &ParameterDescriptor,
        keyword: &str,
        option: &str,
        label: Label,
        value: Value,
        is_default: bool,
    ) {
        let declared = if self.suppresses_color(desc) && !is_default {
            Declared::Ignorable(())
        } else {
            Declared::Emit(())
        };
        self.declare(keyword, option, label, value, declared);
    }

    fn declare(&mut self, keyword: &str, option: &str, label: Label, value: Value, declared: Declared<()>) {
        if declared.is_skip() {
            return;
        }
        let choice = Choice::new(keyword, option, &label.render(&self.tr), value);
        self.keys.record(keyword, option, label, Value::Empty);
        self.program.declare(declared.map(|()| choice));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_names() {
        assert_eq!(Variant::Simplified.file_infix(), ".sim");
        assert_eq!(Variant::NoColorOpts.nickname_suffix(), " No Color Options");
        assert_eq!(Variant::from_uri_name("simple"), Some(Variant::Simplified));
        assert_eq!(Variant::from_uri_name("expert"), Some(Variant::Standard));
        assert_eq!(Variant::from_uri_name("fancy"), None);
    }

    #[test]
    fn test_variant_codes_are_distinct() {
        let codes: Vec<usize> = Variant::ALL.iter().map(|v| v.code()).collect();
        assert_eq!(codes, vec![0, 1, 2]);
    }

    #[test]
    fn test_request_language_c_is_unset() {
        let request = DocumentRequest::new(Variant::Standard, "x.ppd").with_language(Some("C"));
        assert_eq!(request.language(), None);
        let request = request.with_language(Some("fr"));
        assert_eq!(request.language(), Some("fr"));
    }
}
