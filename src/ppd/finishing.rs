//! Output order, duplex and shrink-to-fit menus.

use super::Emitter;
use super::localize::Label;
use crate::capability::ParameterType;
use crate::ir::{Op, Value};

/// Page device code of a duplex mode, `None` for modes the raster filter
/// does not know.
pub fn duplex_code(mode: &str) -> Option<&'static str> {
    match mode {
        "None" => Some("<</Duplex false>>setpagedevice"),
        "DuplexNoTumble" => Some("<</Duplex true/Tumble false>>setpagedevice"),
        "DuplexTumble" => Some("<</Duplex true/Tumble true>>setpagedevice"),
        _ => None,
    }
}

const SHRINK_MODES: &[(&str, &str)] = &[
    ("Shrink", "Shrink (print the whole page)"),
    ("Crop", "Crop (preserve dimensions)"),
    ("Expand", "Expand (use maximum page area)"),
];

impl Emitter<'_> {
    pub(super) fn emit_output_order(&mut self) {
        let Some(desc) = self.source.describe("OutputOrder") else {
            return;
        };
        if desc.parameter_type() != ParameterType::StringList {
            return;
        }

        self.begin_ui("OutputOrder", Label::message("Output Order"), Some("radiobuttons"), 10);
        self.push(Op::default("OutputOrder", desc.default_str().unwrap_or_default()));
        self.option("OutputOrder", "Normal", Label::message("Normal"), Value::Empty);
        self.option("OutputOrder", "Reverse", Label::message("Reverse"), Value::Empty);
        self.close_ui("OutputOrder");
    }

    pub(super) fn emit_duplex(&mut self) {
        let Some(desc) = self.source.describe("Duplex").filter(|d| d.is_usable_list()) else {
            return;
        };

        if desc.is_color_option() {
            self.push(Op::ColorKeyword("Duplex".into()));
        }
        self.begin_ui("Duplex", Label::message("2-Sided Printing"), Some("radiobuttons"), 10);
        self.metadata(&desc);
        self.push(Op::default("Duplex", desc.default_str().unwrap_or_default()));
        for choice in desc.choices() {
            let Some(code) = duplex_code(&choice.name) else {
                log::debug!("Skipping unknown duplex mode {}", choice.name);
                continue;
            };
            self.option(
                "Duplex",
                &choice.name,
                Label::message(&choice.text),
                Value::Quoted(code.to_string()),
            );
        }
        self.close_ui("Duplex");
    }

    /// Fixed option read by the raster filter; no driver parameter backs it.
    pub(super) fn emit_shrink_output(&mut self) {
        const KEYWORD: &str = "StpiShrinkOutput";

        self.begin_ui(
            KEYWORD,
            Label::message("Shrink Page If Necessary to Fit Borders"),
            Some("radiobuttons"),
            10,
        );
        self.push(Op::default(KEYWORD, "Shrink"));
        for &(option, label) in SHRINK_MODES {
            self.option(KEYWORD, option, Label::message(label), Value::Empty);
        }
        self.close_ui(KEYWORD);
    }
}
