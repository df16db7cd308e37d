//! # PPD Tests
//!
//! End-to-end checks of compiled documents: whole-document properties that
//! no single emitter can verify on its own.

use std::collections::HashSet;
use std::fs;
use std::io::Read;

use flate2::read::GzDecoder;
use pretty_assertions::assert_eq;

use genppd::{
    GenppdError,
    batch::{self, BatchRequest, GenerationContext},
    capability::{ModelCatalog, PrinterModel},
    config::GeneratorConfig,
    i18n::{Catalog, LocaleStore},
    ir::{Disposition, Op, Program},
    ppd::{DocumentRequest, Variant, compile_document},
};

const DUPLEX_PRINTER: &str = include_str!("fixtures/duplex_printer.json");
const FINE_INKJET: &str = include_str!("fixtures/fine_inkjet.json");

fn duplex_catalog() -> ModelCatalog {
    ModelCatalog::from_json(DUPLEX_PRINTER).unwrap()
}

fn fine_inkjet() -> PrinterModel {
    ModelCatalog::from_json(FINE_INKJET).unwrap().printers.remove(0)
}

fn french() -> Catalog {
    Catalog::from_pairs(
        "fr",
        &[
            ("Media Size", "Taille du support"),
            ("Letter", "Lettre"),
            ("Resolution", "Résolution"),
            ("600 x 300 DPI", "600 x 300 PPP"),
            ("1440 x 720 DPI", "1440 x 720 PPP"),
            ("2880 x 720 DPI", "2880 x 720 PPP"),
            ("2-Sided Printing", "Recto verso"),
            ("Off", "Désactivé"),
            ("Long Edge", "Bord long"),
        ],
    )
}

fn german() -> Catalog {
    Catalog::from_pairs("de", &[("Resolution", "Auflösung"), ("Off", "Aus")])
}

fn compile(printer: &PrinterModel, variant: Variant, locales: &LocaleStore) -> Program {
    let filename = format!("stp-{}.5.2.ppd", printer.info.driver);
    let request = DocumentRequest::new(variant, &filename);
    compile_document(printer, &request, &GeneratorConfig::default(), locales).unwrap()
}

fn builtin(driver: &str) -> PrinterModel {
    let catalog = ModelCatalog::builtin().unwrap();
    catalog.find(driver).unwrap().1.clone()
}

/// Option names declared for one keyword, in order.
fn option_names(program: &Program, keyword: &str) -> Vec<String> {
    program.choices(keyword).map(|c| c.option.clone()).collect()
}

// ============================================================================
// GLOBALIZED DOCUMENTS
// ============================================================================

#[test]
fn test_duplex_printer_globalized() {
    let catalog = duplex_catalog();
    let printer = &catalog.printers[0];
    let locales = LocaleStore::empty()
        .with_catalog(french())
        .with_language("xx");

    let text = compile(printer, Variant::Standard, &locales).to_text();

    // Only languages with a loadable catalog are advertised
    assert!(text.contains("*cupsLanguages: \"fr\"\n"));
    assert!(!text.contains("*xx."));

    // Primary declarations stay untranslated
    assert!(text.contains("*PageSize Letter/Letter:\t\"<</PageSize[612 792]/ImagingBBox null>>setpagedevice\"\n"));
    assert!(text.contains("*ImageableArea Letter/Letter:\t\"18 12 594 780\"\n"));
    assert!(text.contains("*PaperDimension A4/A4:\t\"595 842\"\n"));
    assert!(text.contains("*DefaultResolution: 300dpi\n"));
    assert!(text.contains(
        "*Resolution 300dpi/300 DPI:\t\"<</HWResolution[300 300]/cupsCompression 1>>setpagedevice\"\n"
    ));
    assert!(text.contains(
        "*Resolution 600x300dpi/600 x 300 DPI:\t\"<</HWResolution[600 300]/cupsCompression 2>>setpagedevice\"\n"
    ));
    assert!(!text.contains("*StpResolutionMap"));
    assert!(text.contains("*Duplex DuplexNoTumble/Long Edge: \"<</Duplex true/Tumble false>>setpagedevice\"\n"));

    // Translations follow, one line per translatable key
    assert!(text.contains("*fr.Translation PageSize/Taille du support: \"\"\n"));
    assert!(text.contains("*fr.PageSize Letter/Lettre: \"\"\n"));
    assert!(text.contains("*fr.Resolution 600x300dpi/600 x 300 PPP: \"\"\n"));
    assert!(text.contains("*fr.Duplex None/Désactivé: \"\"\n"));
    assert!(text.contains("*fr.Duplex DuplexNoTumble/Bord long: \"\"\n"));

    assert!(text.ends_with("*% End of stp-test-duplex.5.2.ppd\n"));
}

#[test]
fn test_localized_document_has_no_translation_block() {
    let catalog = duplex_catalog();
    let printer = &catalog.printers[0];
    let locales = LocaleStore::empty().with_catalog(french());

    let request = DocumentRequest::new(Variant::Standard, "stp-test-duplex.5.2.ppd").with_language(Some("fr"));
    let program = compile_document(printer, &request, &GeneratorConfig::default(), &locales).unwrap();
    let text = program.to_text();

    assert!(text.contains("*Duplex None/Désactivé: \"<</Duplex false>>setpagedevice\"\n"));
    assert!(!program.iter().any(|op| matches!(op, Op::Localized { .. })));
}

#[test]
fn test_translation_keys_match_declarations() {
    let catalog = duplex_catalog();
    let printer = &catalog.printers[0];
    let locales = LocaleStore::empty()
        .with_catalog(french())
        .with_catalog(german());

    let program = compile(printer, Variant::Standard, &locales);

    let declared: HashSet<(String, String)> = program
        .iter()
        .filter_map(|op| match op {
            Op::Choice(c) => Some((c.keyword.clone(), c.option.clone())),
            _ => None,
        })
        .collect();
    let keys_for = |lang: &str| -> Vec<(String, String)> {
        program
            .iter()
            .filter_map(|op| match op {
                Op::Localized { lang: l, choice } if l == lang => {
                    Some((choice.keyword.clone(), choice.option.clone()))
                }
                _ => None,
            })
            .collect()
    };

    let fr = keys_for("fr");
    let de = keys_for("de");
    assert!(!fr.is_empty());
    assert_eq!(fr, de);

    for (keyword, option) in &fr {
        if keyword != "Translation" {
            assert!(
                declared.contains(&(keyword.clone(), option.clone())),
                "translation of undeclared {} {}",
                keyword,
                option
            );
        }
    }
    for option in option_names(&program, "Resolution") {
        assert!(fr.contains(&("Resolution".to_string(), option)));
    }
}

#[test]
fn test_compile_is_deterministic() {
    let printer = builtin("escp2-c88");
    let locales = LocaleStore::empty().with_catalog(french());

    let first = compile(&printer, Variant::Standard, &locales).to_bytes();
    let second = compile(&printer, Variant::Standard, &locales).to_bytes();
    assert_eq!(first, second);
}

// ============================================================================
// RESOLUTIONS
// ============================================================================

#[test]
fn test_quality_selects_automatic_resolution() {
    let printer = builtin("escp2-c88");
    let program = compile(&printer, Variant::Standard, &LocaleStore::empty());
    let text = program.to_text();

    assert_eq!(option_names(&program, "Resolution"), vec!["361x360dpi"]);
    assert!(text.contains("*DefaultResolution: 361x360dpi\n"));
    assert!(text.contains("*Resolution 361x360dpi/Automatic:\t\"<</HWResolution[720 360]>>setpagedevice\"\n"));
    assert!(text.contains("*StpResolutionMap: 361x360dpi None\n"));

    assert!(text.contains("*DefaultStpQuality: Standard\n"));
    assert!(text.contains(
        "*StpQuality Photo/Photo:\t\"<</HWResolution[2880 1440]/cupsRowFeed 4>>setpagedevice\"\n"
    ));
}

#[test]
fn test_colliding_resolutions_are_renamed_and_mapped() {
    let printer = fine_inkjet();
    let locales = LocaleStore::empty().with_catalog(french());
    let program = compile(&printer, Variant::Standard, &locales);
    let text = program.to_text();

    assert_eq!(
        option_names(&program, "Resolution"),
        vec!["1441x720dpi", "1440x720dpi", "720dpi"]
    );

    // The default's clamped name is taken before the other entries are named
    assert!(text.contains("*DefaultResolution: 1440x720dpi\n"));
    assert!(text.contains(
        "*Resolution 1441x720dpi/1440 x 720 DPI:\t\"<</HWResolution[1440 720]/cupsCompression 1>>setpagedevice\"\n\
         *StpResolutionMap: 1441x720dpi 1440x720dpi\n"
    ));
    assert!(text.contains(
        "*Resolution 1440x720dpi/2880 x 720 DPI:\t\"<</HWResolution[2880 720]/cupsCompression 2>>setpagedevice\"\n\
         *StpResolutionMap: 1440x720dpi 2880x720dpi\n"
    ));
    assert!(text.contains("*Resolution 720dpi/720 DPI:\t\"<</HWResolution[720 720]/cupsCompression 3>>setpagedevice\"\n"));
    assert!(!text.contains("*StpResolutionMap: 720dpi"));

    // Translations use the renamed options
    assert!(text.contains("*fr.Resolution 1441x720dpi/1440 x 720 PPP: \"\"\n"));
    assert!(text.contains("*fr.Resolution 1440x720dpi/2880 x 720 PPP: \"\"\n"));
}

#[test]
fn test_resolution_names_are_unique() {
    for driver in ["escp2-c88", "pcl-ljet4"] {
        let printer = builtin(driver);
        for variant in Variant::ALL {
            let program = compile(&printer, variant, &LocaleStore::empty());
            let names = option_names(&program, "Resolution");
            let unique: HashSet<&String> = names.iter().collect();
            assert_eq!(unique.len(), names.len(), "{} {:?}", driver, variant);
        }
    }
}

// ============================================================================
// VARIANTS
// ============================================================================

#[test]
fn test_constraints_are_symmetric() {
    let printer = builtin("escp2-c88");
    let program = compile(&printer, Variant::Standard, &LocaleStore::empty());

    let pairs: Vec<(String, String)> = program
        .iter()
        .filter_map(|op| match op {
            Op::Constraint { first, second, .. } => Some((first.clone(), second.clone())),
            _ => None,
        })
        .collect();

    assert_eq!(pairs.len(), 4);
    for (first, second) in &pairs {
        assert!(pairs.contains(&(second.clone(), first.clone())));
    }
    assert!(program.to_text().contains("*UIConstraints: *StpQuality Photo *MediaType Transparency\n"));
}

#[test]
fn test_no_color_variant_marks_color_options_ignorable() {
    let printer = builtin("escp2-c88");
    let program = compile(&printer, Variant::NoColorOpts, &LocaleStore::empty());

    let ink: Vec<(String, Disposition)> = program
        .choices("StpInkType")
        .map(|c| (c.option.clone(), c.disposition))
        .collect();
    assert_eq!(
        ink,
        vec![
            ("CMYK".to_string(), Disposition::Normal),
            ("RGB".to_string(), Disposition::Ignorable),
        ]
    );

    let text = program.to_text();
    assert!(text.contains("*?StpInkType RGB/Three Color Composite: \"\"\n"));
    assert!(text.contains("*ColorKeyWords: \"StpInkType\"\n"));
    assert!(!text.contains("*OpenUI *StpFineSaturation"));

    // Options without the color tag are untouched
    assert!(program.choices("StpDensity").all(|c| c.disposition == Disposition::Normal));
    assert!(text.contains("*OpenUI *StpFineDensity"));
}

#[test]
fn test_no_color_variant_keeps_optional_list_default_normal() {
    let printer = fine_inkjet();
    let program = compile(&printer, Variant::NoColorOpts, &LocaleStore::empty());

    let inks: Vec<(String, Disposition)> = program
        .choices("StpInkSet")
        .map(|c| (c.option.clone(), c.disposition))
        .collect();
    assert_eq!(
        inks,
        vec![
            ("None".to_string(), Disposition::Normal),
            ("Photo".to_string(), Disposition::Normal),
            ("Matte".to_string(), Disposition::Ignorable),
        ]
    );
    assert!(program.to_text().contains("*StpInkSet Photo/Photo: \"\"\n*?StpInkSet Matte/Matte: \"\"\n"));
}

#[test]
fn test_generic_option_orders_before_hints() {
    let printer = fine_inkjet();
    let text = compile(&printer, Variant::Standard, &LocaleStore::empty()).to_text();

    assert!(text.contains(
        "*OpenUI *StpInkSet/Ink Set: PickOne\n\
         *OrderDependency: 10 AnySetup *StpInkSet\n\
         *OPOptionHints StpInkSet: \"radiobuttons\"\n"
    ));
    // Dedicated sections keep the hints first
    assert!(text.contains(
        "*OpenUI *Resolution/Resolution: PickOne\n\
         *OPOptionHints Resolution: \"resolution dropdown\"\n\
         *OrderDependency: 10 AnySetup *Resolution\n"
    ));
}

#[test]
fn test_header_carries_full_license() {
    let printer = fine_inkjet();
    let text = compile(&printer, Variant::Standard, &LocaleStore::empty()).to_text();

    assert!(text.starts_with(
        "*PPD-Adobe: \"4.3\"\n\
         *% PPD file for CUPS/Gutenprint.\n\
         *% Copyright 1993-2008 by Mike Sweet and Robert Krawitz.\n\
         *% This program is free software; you can redistribute it and/or\n\
         *% modify it under the terms of the GNU General Public License,\n\
         *% version 2, as published by the Free Software Foundation.\n\
         *%\n\
         *% This program is distributed in the hope that it will be useful, but\n\
         *% WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY\n\
         *% or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License\n\
         *% for more details.\n\
         *%\n\
         *% You should have received a copy of the GNU General Public License\n\
         *% along with this program; if not, write to the Free Software\n\
         *% Foundation, Inc., 59 Temple Place - Suite 330, Boston, MA 02111-1307, USA.\n\
         *%\n\
         *FormatVersion: \"4.3\"\n"
    ));
}

#[test]
fn test_simplified_variant_omits_advanced_options() {
    let printer = builtin("escp2-c88");
    let program = compile(&printer, Variant::Simplified, &LocaleStore::empty());
    let text = program.to_text();

    assert!(!text.contains("*OpenUI *Resolution/"));
    assert!(!text.contains("*OpenUI *StpColorPrecision/"));
    assert!(!text.contains("*OpenUI *StpDensity/"));
    assert!(text.contains("*OpenUI *StpBrightness/"));
    assert!(text.contains("*NickName: \"Epson Stylus C88 - CUPS+Gutenprint v5.2.11 Simplified\"\n"));
}

#[test]
fn test_standard_variant_enumerates_doubles() {
    let printer = builtin("escp2-c88");
    let text = compile(&printer, Variant::Standard, &LocaleStore::empty()).to_text();

    assert!(text.contains("*StpDensity None/1.000: \"\"\n"));
    assert!(text.contains("*StpDensity 100/0.100: \"\"\n"));
    assert!(text.contains("*CustomStpDensity True: \"pop\"\n"));
    assert!(text.contains("*ParamCustomStpDensity Value/Value: 1 real 0.100 2.000\n"));
}

// ============================================================================
// BATCH OUTPUT
// ============================================================================

#[test]
fn test_generate_batch_plain() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ModelCatalog::builtin().unwrap();
    let config = GeneratorConfig {
        compress: false,
        ..GeneratorConfig::default()
    };
    let request = BatchRequest {
        output_dir: dir.path().to_path_buf(),
        models: vec!["pcl-ljet4".to_string()],
        variants: Variant::ALL.to_vec(),
        language: None,
    };
    let ctx = GenerationContext::new(false);

    let report = batch::generate_batch(&catalog, &request, &config, &LocaleStore::empty(), &ctx).unwrap();
    assert!(report.is_complete());
    assert_eq!(report.written.len(), 3);
    assert_eq!(ctx.documents_started(), 3);

    let text = fs::read_to_string(dir.path().join("stp-pcl-ljet4.5.2.sim.ppd")).unwrap();
    assert!(text.starts_with("*PPD-Adobe: \"4.3\"\n"));
    assert!(text.contains("*StpPPDLocation: \"/usr/share/cups/model/C/stp-pcl-ljet4.5.2.sim.ppd\"\n"));
    assert!(text.ends_with("*% End of stp-pcl-ljet4.5.2.sim.ppd\n"));
}

#[test]
fn test_generate_batch_gzip() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ModelCatalog::builtin().unwrap();
    let config = GeneratorConfig::default();
    let request = BatchRequest {
        output_dir: dir.path().join("ppd"),
        models: vec![],
        variants: vec![Variant::Standard],
        language: None,
    };

    let report = batch::generate_batch(
        &catalog,
        &request,
        &config,
        &LocaleStore::empty(),
        &GenerationContext::new(true),
    )
    .unwrap();
    assert_eq!(report.written.len(), 2);

    let path = dir.path().join("ppd").join("stp-escp2-c88.5.2.ppd.gz");
    let mut text = String::new();
    GzDecoder::new(fs::File::open(path).unwrap())
        .read_to_string(&mut text)
        .unwrap();
    assert!(text.contains("*StpPPDLocation: \"/usr/share/cups/model/C/stp-escp2-c88.5.2.ppd.gz\"\n"));
    assert!(text.ends_with("*% End of stp-escp2-c88.5.2.ppd\n"));
}

#[test]
fn test_generate_batch_unknown_printer_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let catalog = ModelCatalog::builtin().unwrap();
    let request = BatchRequest {
        output_dir: dir.path().to_path_buf(),
        models: vec!["pcl-ljet4".to_string(), "no-such-printer".to_string()],
        variants: vec![Variant::Standard],
        language: None,
    };

    let err = batch::generate_batch(
        &catalog,
        &request,
        &GeneratorConfig::default(),
        &LocaleStore::empty(),
        &GenerationContext::default(),
    )
    .unwrap_err();
    assert!(matches!(err, GenppdError::PrinterNotFound(ref id) if id == "no-such-printer"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_cat_document() {
    let catalog = ModelCatalog::builtin().unwrap();
    let locales = LocaleStore::empty().with_catalog(french());
    let mut out = Vec::new();

    batch::cat_document(
        "gutenprint.5.2://pcl-ljet4/expert/fr",
        &catalog,
        &GeneratorConfig::default(),
        &locales,
        &mut out,
    )
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("*StpPPDLocation: \"/usr/share/cups/model/fr/ppd/stp-pcl-ljet4.5.2.ppd.gz\"\n"));
    assert!(text.contains("*StpLocale: \"fr\"\n"));
    assert!(text.contains("*OpenUI *Duplex/Recto verso: PickOne\n"));
    assert!(text.ends_with("*% End of stp-pcl-ljet4.5.2.ppd\n"));
}
