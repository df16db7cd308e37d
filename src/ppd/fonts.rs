//! Standard font list and document footer.

use super::Emitter;
use crate::ir::Op;

/// A font resident in every PostScript interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardFont {
    pub name: &'static str,
    pub version: &'static str,
    /// `true` for fonts with their own encoding.
    pub special: bool,
    pub charset: &'static str,
}

const fn standard(name: &'static str, version: &'static str) -> StandardFont {
    StandardFont {
        name,
        version,
        special: false,
        charset: "Standard",
    }
}

/// The 35 standard PostScript fonts.
pub const STANDARD_FONTS: &[StandardFont] = &[
    standard("AvantGarde-Book", "001.006S"),
    standard("AvantGarde-BookOblique", "001.006S"),
    standard("AvantGarde-Demi", "001.007S"),
    standard("AvantGarde-DemiOblique", "001.007S"),
    standard("Bookman-Demi", "001.004S"),
    standard("Bookman-DemiItalic", "001.004S"),
    standard("Bookman-Light", "001.004S"),
    standard("Bookman-LightItalic", "001.004S"),
    standard("Courier", "002.004S"),
    standard("Courier-Bold", "002.004S"),
    standard("Courier-BoldOblique", "002.004S"),
    standard("Courier-Oblique", "002.004S"),
    standard("Helvetica", "001.006S"),
    standard("Helvetica-Bold", "001.007S"),
    standard("Helvetica-BoldOblique", "001.007S"),
    standard("Helvetica-Narrow", "001.006S"),
    standard("Helvetica-Narrow-Bold", "001.007S"),
    standard("Helvetica-Narrow-BoldOblique", "001.007S"),
    standard("Helvetica-Narrow-Oblique", "001.006S"),
    standard("Helvetica-Oblique", "001.006S"),
    standard("NewCenturySchlbk-Bold", "001.009S"),
    standard("NewCenturySchlbk-BoldItalic", "001.007S"),
    standard("NewCenturySchlbk-Italic", "001.006S"),
    standard("NewCenturySchlbk-Roman", "001.007S"),
    standard("Palatino-Bold", "001.005S"),
    standard("Palatino-BoldItalic", "001.005S"),
    standard("Palatino-Italic", "001.005S"),
    standard("Palatino-Roman", "001.005S"),
    StandardFont {
        name: "Symbol",
        version: "001.007S",
        special: true,
        charset: "Special",
    },
    standard("Times-Bold", "001.007S"),
    standard("Times-BoldItalic", "001.009S"),
    standard("Times-Italic", "001.007S"),
    standard("Times-Roman", "001.007S"),
    standard("ZapfChancery-MediumItalic", "001.007S"),
    StandardFont {
        name: "ZapfDingbats",
        version: "001.004S",
        special: true,
        charset: "Standard",
    },
];

impl StandardFont {
    /// Value of the `*Font` line: encoding, version, charset, status.
    pub fn descriptor(&self) -> String {
        let encoding = if self.special { "Special" } else { "Standard" };
        format!("{} \"({})\" {} ROM", encoding, self.version, self.charset)
    }
}

impl Emitter<'_> {
    pub(super) fn emit_fonts(&mut self) {
        self.push(Op::Blank);
        self.push(Op::attr("DefaultFont", "Courier"));
        for font in STANDARD_FONTS {
            self.push(Op::attr(&format!("Font {}", font.name), font.descriptor()));
        }
        self.push(Op::Blank);
        self.push(Op::comment(&format!(" End of {}", self.request.filename)));
    }
}
