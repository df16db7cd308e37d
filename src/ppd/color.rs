//! Color model and color precision menus.

use super::Emitter;
use super::localize::Label;
use crate::ir::{Op, Value};

/// CUPS raster color spaces offered by the ColorModel menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CupsColorSpace {
    /// Luminance (white is 1).
    W = 0,
    Rgb = 1,
    /// Inverted luminance (black is 1).
    K = 3,
    Cmy = 4,
    Cmyk = 6,
    Kcmy = 8,
}

impl CupsColorSpace {
    pub fn code(self) -> i32 {
        self as i32
    }
}

/// Chunked (interleaved) pixel order.
const CUPS_ORDER_CHUNKED: i32 = 0;

/// Bit depth request added to every color model of simplified documents.
const SIMPLIFIED_DEPTH: &str = "/cupsBitsPerColor 8/cupsPreferredBitsPerColor 16";

/// ColorModel entries: option, label, color space, color printers only.
const COLOR_MODELS: &[(&str, &str, CupsColorSpace, bool)] = &[
    ("Gray", "Grayscale", CupsColorSpace::W, false),
    ("Black", "Inverted Grayscale", CupsColorSpace::K, false),
    ("RGB", "RGB Color", CupsColorSpace::Rgb, true),
    ("CMY", "CMY Color", CupsColorSpace::Cmy, true),
    ("CMYK", "CMYK", CupsColorSpace::Cmyk, true),
    ("KCMY", "KCMY", CupsColorSpace::Kcmy, true),
];

/// PostScript invocation selecting one color space.
pub fn color_space_code(space: CupsColorSpace, simplified: bool) -> String {
    format!(
        "<</cupsColorSpace {}/cupsColorOrder {}{}>>setpagedevice",
        space.code(),
        CUPS_ORDER_CHUNKED,
        if simplified { SIMPLIFIED_DEPTH } else { "" }
    )
}

impl Emitter<'_> {
    pub(super) fn emit_color_model(&mut self) {
        let simplified = self.variant().is_simplified();
        let is_color = self.printer_is_color;

        self.push(Op::ColorKeyword("ColorModel".into()));
        self.begin_ui("ColorModel", Label::message("Color Model"), Some("radiobuttons"), 2);
        self.push(Op::default("ColorModel", if is_color { "RGB" } else { "Gray" }));
        for &(option, label, space, color_only) in COLOR_MODELS {
            if color_only && !is_color {
                continue;
            }
            let code = color_space_code(space, simplified);
            self.option("ColorModel", option, Label::message(label), Value::Code(code));
        }
        self.close_ui("ColorModel");

        if !simplified {
            self.emit_color_precision();
        }
    }

    /// 8 or 16 bit color; 16 bit is slower.
    fn emit_color_precision(&mut self) {
        const KEYWORD: &str = "StpColorPrecision";

        self.push(Op::ColorKeyword(KEYWORD.into()));
        self.begin_ui(KEYWORD, Label::message("Color Precision"), Some("radiobuttons"), 1);
        self.push(Op::default(KEYWORD, "Normal"));
        self.option(
            KEYWORD,
            "Normal",
            Label::message("Normal"),
            Value::Code("<</cupsBitsPerColor 8>>setpagedevice".into()),
        );
        self.option(
            KEYWORD,
            "Best",
            Label::message("Best"),
            Value::Code("<</cupsBitsPerColor 8/cupsPreferredBitsPerColor 16>>setpagedevice".into()),
        );
        self.close_ui(KEYWORD);
    }
}
