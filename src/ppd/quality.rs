//! Print quality and resolution menus.
//!
//! A printer with a quality axis picks its hardware resolution from the
//! quality setting, so the Resolution menu shrinks to one "Automatic"
//! entry derived from the default quality. Otherwise every resolution is
//! listed under a unique presentable name.

use super::Emitter;
use super::localize::Label;
use super::resolution::{self, presentable_name};
use crate::capability::{ParameterDescriptor, ParameterLevel, ResolutionPair, ResolutionQuery};
use crate::error::Result;
use crate::ir::{Op, Value};

impl Emitter<'_> {
    /// Resolution implied by the default `Resolution` choice.
    fn default_resolution_pair(&self) -> ResolutionPair {
        self.source
            .describe("Resolution")
            .and_then(|desc| desc.default_str().map(str::to_string))
            .map_or(ResolutionPair::NONE, |name| {
                self.source.resolution(ResolutionQuery::Resolution(&name))
            })
    }

    /// Resolution implied by a quality choice, falling back to the default
    /// resolution when the quality has none of its own.
    fn quality_resolution(&self, quality: &str) -> ResolutionPair {
        let pair = self.source.resolution(ResolutionQuery::Quality(quality));
        if pair.is_placeholder() {
            self.default_resolution_pair()
        } else {
            pair
        }
    }

    pub(super) fn emit_quality(&mut self) {
        const KEYWORD: &str = "StpQuality";

        let Some(desc) = self.source.describe("Quality").filter(|d| d.is_usable_list()) else {
            return;
        };
        self.has_quality = true;
        let default = desc.default_str().unwrap_or_default();

        if desc.is_color_option() {
            self.push(Op::ColorKeyword(KEYWORD.into()));
        }
        // Long lists get radio buttons here, the reverse of generic options
        let hints = if desc.choices().len() > 3 { "radiobuttons" } else { "dropdown" };
        self.begin_ui(KEYWORD, Label::message(&desc.text), Some(hints), 10);
        self.metadata(&desc);
        self.push(Op::default(KEYWORD, default));
        for (i, choice) in desc.choices().iter().enumerate() {
            let pair = self.quality_resolution(&choice.name);
            let code = format!(
                "<</HWResolution[{} {}]/cupsRowFeed {}>>setpagedevice",
                pair.x,
                pair.y,
                i + 1
            );
            self.param_option(
                &desc,
                KEYWORD,
                &choice.name,
                Label::message(&choice.text),
                Value::Code(code),
                choice.name == default,
            );
        }
        self.close_ui(KEYWORD);
    }

    /// Fails when the printer's resolutions cannot all be given distinct
    /// names.
    pub(super) fn emit_resolution(&mut self) -> Result<()> {
        const KEYWORD: &str = "Resolution";

        let Some(desc) = self.source.describe(KEYWORD).filter(|d| d.is_usable_list()) else {
            return Ok(());
        };
        if self.variant().is_simplified() && desc.level != ParameterLevel::Basic {
            return Ok(());
        }

        if desc.is_color_option() {
            self.push(Op::ColorKeyword(KEYWORD.into()));
        }
        let hints = if desc.choices().len() > 3 {
            "resolution radiobuttons"
        } else {
            "resolution dropdown"
        };
        self.begin_ui(KEYWORD, Label::message("Resolution"), Some(hints), 10);
        self.metadata(&desc);

        if self.has_quality {
            self.emit_automatic_resolution();
        } else {
            self.emit_resolution_choices(&desc)?;
        }

        self.close_ui(KEYWORD);
        Ok(())
    }

    fn emit_automatic_resolution(&mut self) {
        let default_quality = self
            .source
            .describe("Quality")
            .and_then(|desc| desc.default_str().map(str::to_string))
            .unwrap_or_default();
        let raw = self.quality_resolution(&default_quality);
        if raw.is_placeholder() {
            log::warn!(
                "{}: default quality {} has no resolution",
                self.source.info().driver,
                default_quality
            );
            return;
        }

        let auto = resolution::automatic(raw);
        self.used_names.insert(&auto.name);
        self.push(Op::default("Resolution", &auto.name));
        let code = format!("<</HWResolution[{} {}]>>setpagedevice", raw.x, raw.y);
        self.option("Resolution", &auto.name, Label::message("Automatic"), Value::Code(code));
        self.push(Op::ResolutionMap {
            presentable: auto.name,
            internal: "None".into(),
        });
    }

    fn emit_resolution_choices(&mut self, desc: &ParameterDescriptor) -> Result<()> {
        let default = desc.default_str().unwrap_or_default();
        let default_pair = self.source.resolution(ResolutionQuery::Resolution(default));

        // Seeding the default's name keeps other entries from taking it
        if default_pair.is_placeholder() {
            self.push(Op::default("Resolution", default));
        } else {
            let name = presentable_name(resolution::clamp(default_pair));
            self.used_names.insert(&name);
            self.push(Op::default("Resolution", &name));
        }

        for (i, choice) in desc.choices().iter().enumerate() {
            let raw = self.source.resolution(ResolutionQuery::Resolution(&choice.name));
            if raw.is_placeholder() {
                continue;
            }
            let is_default = choice.name == default;
            let resolved = resolution::resolve(raw, &choice.name, &mut self.used_names, is_default)?;
            let code = format!(
                "<</HWResolution[{} {}]/cupsCompression {}>>setpagedevice",
                raw.x,
                raw.y,
                i + 1
            );
            self.param_option(
                desc,
                "Resolution",
                &resolved.name,
                Label::message(&choice.text),
                Value::Code(code),
                is_default,
            );
            if resolved.needs_map(&choice.name) {
                self.push(Op::ResolutionMap {
                    presentable: resolved.name,
                    internal: choice.name.clone(),
                });
            }
        }
        Ok(())
    }
}
