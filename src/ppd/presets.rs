//! Printer presets and UI constraints.

use super::Emitter;
use super::localize::Label;
use crate::ir::{Choice, Op, Value};

/// Split a constraint on its last `*` into two option references.
///
/// `"*StpQuality Photo *MediaType Transparency"` yields
/// `("*StpQuality Photo", "*MediaType Transparency")`. The character just
/// before the last `*` is the separator and belongs to neither side.
pub fn split_constraint(text: &str) -> Option<(&str, &str)> {
    let star = text.rfind('*')?;
    let (left, _) = text[..star].char_indices().next_back()?;
    let first = &text[..left];
    if first.is_empty() {
        return None;
    }
    Some((first, &text[star..]))
}

impl Emitter<'_> {
    /// One `*APPrinterPreset` per image type, selecting it by name.
    pub(super) fn emit_presets(&mut self) {
        let Some(desc) = self.source.describe("ImageType").filter(|d| d.is_usable_list()) else {
            return;
        };

        for choice in desc.choices().iter().filter(|c| c.name != "None") {
            let value = Value::Quoted(format!("*StpImageType {}", choice.name));
            self.push(Op::Choice(Choice::new(
                "APPrinterPreset",
                &choice.name,
                self.tr.tr(&choice.text),
                value.clone(),
            )));
            self.keys
                .record("APPrinterPreset", &choice.name, Label::message(&choice.text), value);
        }
        self.push(Op::Blank);
    }

    /// Each constraint is written in both directions.
    pub(super) fn emit_constraints(&mut self) {
        let Some(desc) = self
            .source
            .describe("PPDUIConstraints")
            .filter(|d| d.is_usable_list())
        else {
            return;
        };

        self.push(Op::comment(" ===== Constraints ===== "));
        for choice in desc.choices() {
            let Some((first, second)) = split_constraint(&choice.text) else {
                log::warn!("Skipping malformed constraint {:?}", choice.text);
                continue;
            };
            self.push(Op::Constraint {
                keyword: choice.name.clone(),
                first: first.to_string(),
                second: second.to_string(),
            });
            self.push(Op::Constraint {
                keyword: choice.name.clone(),
                first: second.to_string(),
                second: first.to_string(),
            });
        }
        self.push(Op::Blank);
    }
}
