//! Document header: identification, device capabilities, CUPS filter
//! attributes and the driver attributes read back by the raster filter.

use super::Emitter;
use crate::ir::Op;

/// Longest `*ShortNickName` consumers accept, in bytes.
pub const MAX_SHORT_NICKNAME: usize = 31;

const LICENSE_COMMENTS: &[&str] = &[
    " PPD file for CUPS/Gutenprint.",
    " Copyright 1993-2008 by Mike Sweet and Robert Krawitz.",
    " This program is free software; you can redistribute it and/or",
    " modify it under the terms of the GNU General Public License,",
    " version 2, as published by the Free Software Foundation.",
    "",
    " This program is distributed in the hope that it will be useful, but",
    " WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY",
    " or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU General Public License",
    " for more details.",
    "",
    " You should have received a copy of the GNU General Public License",
    " along with this program; if not, write to the Free Software",
    " Foundation, Inc., 59 Temple Place - Suite 330, Boston, MA 02111-1307, USA.",
    "",
];

/// Truncate to at most `max` bytes without splitting a character.
pub fn truncate_bytes(text: &str, max: usize) -> &str {
    if text.len() <= max {
        return text;
    }
    let mut end = max;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

impl Emitter<'_> {
    pub(super) fn emit_header(&mut self) {
        let source = self.source;
        let info = source.info();
        let config = self.config;
        let variant = self.variant();

        self.push(Op::quoted("PPD-Adobe", "4.3"));
        for line in LICENSE_COMMENTS {
            self.push(Op::comment(line));
        }
        self.push(Op::quoted("FormatVersion", "4.3"));
        self.push(Op::quoted("FileVersion", config.file_version()));
        self.push(Op::attr("LanguageVersion", self.tr.tr("English")));
        let encoding = if self.language.is_some() { "UTF-8" } else { "ISOLatin1" };
        self.push(Op::attr("LanguageEncoding", encoding));

        let pc_number = self.request.model_index + variant.code() * self.request.model_count;
        self.push(Op::quoted("PCFileName", &format!("STP{:05}.PPD", pc_number)));
        self.push(Op::quoted("Manufacturer", &info.manufacturer));
        self.push(Op::quoted("Product", &format!("({})", info.long_name)));
        self.push(Op::quoted("ModelName", &info.long_name));
        self.push(Op::quoted(
            "ShortNickName",
            truncate_bytes(&info.long_name, MAX_SHORT_NICKNAME),
        ));
        self.push(Op::quoted(
            "NickName",
            &config.nickname(&info.long_name, variant.nickname_suffix()),
        ));
        self.push(Op::quoted("PSVersion", config.ps_version()));
        self.push(Op::quoted("LanguageLevel", &config.ps_level.to_string()));

        self.emit_device_capabilities();
        self.emit_cups_attributes();
        self.push(Op::Blank);
        self.emit_driver_attributes();
    }

    /// Color capability is taken from the printing modes; copies from the
    /// driver.
    fn emit_device_capabilities(&mut self) {
        if let Some(mode) = self.source.describe("PrintingMode") {
            self.printer_is_color = mode.choices().iter().any(|c| c.name == "Color");
            let device = if self.printer_is_color { "True" } else { "False" };
            self.push(Op::attr("ColorDevice", device));
            let space = if mode.default_str() == Some("Color") { "RGB" } else { "Gray" };
            self.push(Op::attr("DefaultColorSpace", space));
        }

        let manual = if self.source.native_copies() { "False" } else { "True" };
        self.push(Op::attr("cupsManualCopies", manual));
    }

    fn emit_cups_attributes(&mut self) {
        let source = self.source;
        let info = source.info();

        self.push(Op::attr("FileSystem", "False"));
        self.push(Op::attr("LandscapeOrientation", "Plus90"));
        self.push(Op::attr("TTRasterizer", "Type42"));
        self.push(Op::attr("cupsVersion", "1.2"));
        self.push(Op::quoted(
            "cupsFilter",
            &format!(
                "application/vnd.cups-raster 100 rastertogutenprint.{}",
                self.config.release_version
            ),
        ));
        if info.manufacturer.eq_ignore_ascii_case("EPSON") {
            self.push(Op::quoted(
                "cupsFilter",
                "application/vnd.cups-command 33 commandtoepson",
            ));
        }
        if let Some(device_id) = &info.device_id {
            self.push(Op::quoted("1284DeviceID", device_id));
        }

        if self.language.is_none() {
            let locales = self.locales;
            let languages: Vec<&str> = locales
                .secondary()
                .filter(|lang| locales.load(lang).is_some())
                .collect();
            if !languages.is_empty() {
                self.push(Op::quoted("cupsLanguages", &languages.join(" ")));
            }
        }
    }

    fn emit_driver_attributes(&mut self) {
        let source = self.source;
        let info = source.info();

        self.push(Op::quoted("StpDriverName", &info.driver));
        self.push(Op::quoted(
            "StpDriverModelFamily",
            &format!("{}_{}", info.model, info.family),
        ));
        self.push(Op::quoted("StpPPDLocation", &self.request.ppd_location));
        self.push(Op::quoted("StpLocale", self.language.unwrap_or("C")));
    }
}
