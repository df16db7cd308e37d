//! # Generic Driver Options
//!
//! Every driver parameter without a dedicated section becomes an
//! `Stp<name>` option. Options are bucketed by class and level; each
//! non-empty bucket is wrapped in an option group.
//!
//! | Type | Hints | Choices |
//! |------|-------|---------|
//! | String list | `dropdown` / `radiobuttons` | One per list entry |
//! | Boolean | `checkbox` | `False`, `True` |
//! | Double | `slider input spinbox` | Steps of 0.1, plus a custom value and a hidden fine adjustment |
//! | Dimension | `length slider input spinbox` | Every point value, labelled in millimetres |
//! | Int | `input spinbox` | Every integer in bounds |
//!
//! Non-mandatory options add a `None` choice that leaves the driver
//! default in place.

use super::Emitter;
use super::header::truncate_bytes;
use super::localize::Label;
use crate::capability::{Bounds, ParameterClass, ParameterDescriptor, ParameterLevel, ParameterType};
use crate::ir::{Metadata, Op, Value};

/// Parameters written by a dedicated section, never as generic options.
pub const SPECIAL_OPTIONS: &[&str] = &[
    "PageSize",
    "Color",
    "MediaType",
    "InputSlot",
    "Resolution",
    "OutputOrder",
    "Quality",
    "Duplex",
];

/// Longest group label, in bytes.
pub const MAX_GROUP_LABEL: usize = 39;

/// Step between enumerated double values, in thousandths.
const DOUBLE_STEP: usize = 100;

/// Step between fine adjustment values, in thousandths.
const FINE_STEP: usize = 5;

/// Upper bound of fine adjustment values, in thousandths (exclusive).
const FINE_RANGE: i32 = 100;

pub fn is_special_option(name: &str) -> bool {
    SPECIAL_OPTIONS.contains(&name)
}

/// Whether a parameter is written as a generic option.
pub fn is_generic_option(desc: &ParameterDescriptor) -> bool {
    !is_special_option(&desc.name)
        && !desc.read_only
        && matches!(
            desc.parameter_type(),
            ParameterType::StringList
                | ParameterType::Boolean
                | ParameterType::Dimension
                | ParameterType::Int
                | ParameterType::Double
        )
}

/// Group label: class and level titles, space separated when they fit.
pub fn group_label(class: &str, level: &str) -> String {
    let separator = if class.len() + level.len() < MAX_GROUP_LABEL { " " } else { "" };
    let label = format!("{}{}{}", class, separator, level);
    truncate_bytes(&label, MAX_GROUP_LABEL).to_string()
}

/// `0.100` style label of a value given in thousandths.
fn thousandths(value: i32) -> String {
    format!("{:.3}", f64::from(value) * 0.001)
}

fn to_thousandths(value: f64) -> i32 {
    (value * 1000.0).round() as i32
}

impl Emitter<'_> {
    pub(super) fn emit_option_groups(&mut self) {
        let max_level = if self.variant().is_simplified() {
            ParameterLevel::Basic
        } else {
            ParameterLevel::Advanced4
        };
        let parameters = self.source.parameters();

        for class in ParameterClass::GROUPED {
            for level in ParameterLevel::VISIBLE.into_iter().filter(|l| *l <= max_level) {
                let mut opened = false;
                let bucket = parameters
                    .iter()
                    .filter(|p| p.class == class && p.level == level && is_generic_option(p));
                for param in bucket {
                    let Some(desc) = self.source.describe(&param.name).filter(|d| d.active) else {
                        continue;
                    };
                    if !opened {
                        self.open_group(class, level);
                        opened = true;
                    }
                    self.emit_one_option(&desc);
                }
                if opened {
                    self.push(Op::CloseGroup {
                        class: class.code(),
                        level: level.code(),
                        label: group_label(class.title(), level.title()),
                    });
                }
            }
        }
    }

    fn open_group(&mut self, class: ParameterClass, level: ParameterLevel) {
        let label = Label::Group { class, level };
        self.push(Op::OpenGroup {
            class: class.code(),
            level: level.code(),
            label: label.render(&self.tr),
        });
        let key = format!("C{}L{}", class.code(), level.code());
        self.keys.record("Translation", &key, label, Value::Empty);
    }

    /// Generic options put the order dependency ahead of the hints.
    fn begin_option_ui(&mut self, keyword: &str, label: Label, hints: Option<&str>) {
        self.open_ui(keyword, label);
        self.order_dependency(keyword, 10);
        self.option_hints(keyword, hints);
    }

    /// `None` choice of non-mandatory options.
    fn none_option(&mut self, keyword: &str) {
        self.push(Op::default(keyword, "None"));
        self.option(keyword, "None", Label::message("None"), Value::Empty);
    }

    fn emit_one_option(&mut self, desc: &ParameterDescriptor) {
        let keyword = format!("Stp{}", desc.name);
        let skip_color = self.suppresses_color(desc);
        if desc.is_color_option() {
            self.push(Op::ColorKeyword(keyword.clone()));
        }
        let label = Label::message(&desc.text);

        match &desc.bounds {
            Bounds::StringList { choices, default } => {
                let hints = match (skip_color, choices.len() > 3) {
                    (true, _) => None,
                    (false, true) => Some("dropdown"),
                    (false, false) => Some("radiobuttons"),
                };
                self.begin_option_ui(&keyword, label, hints);
                self.metadata(desc);
                if desc.mandatory {
                    self.push(Op::default(&keyword, default));
                } else {
                    self.none_option(&keyword);
                }
                for choice in choices {
                    let is_default = choice.name == *default;
                    self.param_option(
                        desc,
                        &keyword,
                        &choice.name,
                        Label::message(&choice.text),
                        Value::Empty,
                        is_default,
                    );
                }
                self.close_ui(&keyword);
            }
            Bounds::Boolean { default } => {
                self.begin_option_ui(&keyword, label, Some("checkbox"));
                self.metadata(desc);
                let default_name = if *default { "True" } else { "False" };
                if desc.mandatory {
                    self.push(Op::default(&keyword, default_name));
                } else {
                    self.none_option(&keyword);
                }
                for (name, text) in [("False", "No"), ("True", "Yes")] {
                    let is_default = desc.mandatory && name == default_name;
                    self.param_option(desc, &keyword, name, Label::message(text), Value::Empty, is_default);
                }
                self.close_ui(&keyword);
            }
            Bounds::Double {
                lower,
                upper,
                default,
            } => self.emit_double_option(desc, &keyword, label, (*lower, *upper, *default)),
            Bounds::Dimension {
                lower,
                upper,
                default,
            } => {
                self.begin_option_ui(&keyword, label, Some("length slider input spinbox"));
                self.metadata(desc);
                if desc.mandatory {
                    self.push(Op::default(&keyword, &default.to_string()));
                } else {
                    self.none_option(&keyword);
                }
                if !skip_color {
                    for points in *lower..=*upper {
                        self.option(&keyword, &points.to_string(), Label::Millimetres(points), Value::Empty);
                    }
                }
                self.close_ui(&keyword);
            }
            Bounds::Int {
                lower,
                upper,
                default,
            } => {
                self.begin_option_ui(&keyword, label, Some("input spinbox"));
                self.metadata(desc);
                if desc.mandatory {
                    self.push(Op::default(&keyword, &default.to_string()));
                } else {
                    self.none_option(&keyword);
                }
                for value in *lower..=*upper {
                    let is_default = desc.mandatory && value == *default;
                    self.param_option(
                        desc,
                        &keyword,
                        &value.to_string(),
                        Label::number(value),
                        Value::Empty,
                        is_default,
                    );
                }
                self.close_ui(&keyword);
            }
            _ => log::debug!("{} has no generic option form", desc.name),
        }
    }

    /// Stepped choices, a free-form custom value and a hidden fine
    /// adjustment added to the stepped value by the raster filter.
    fn emit_double_option(
        &mut self,
        desc: &ParameterDescriptor,
        keyword: &str,
        label: Label,
        (lower, upper, default): (f64, f64, f64),
    ) {
        let skip_color = self.suppresses_color(desc);
        let full = !self.variant().is_simplified() && !skip_color;

        self.begin_option_ui(keyword, label, Some("slider input spinbox"));
        self.metadata(desc);
        self.push(Op::default(keyword, "None"));

        let mut printed_default = false;
        if full {
            let default_step = to_thousandths(default);
            for step in (to_thousandths(lower)..=to_thousandths(upper)).step_by(DOUBLE_STEP) {
                if desc.mandatory && step == default_step {
                    self.option(keyword, "None", Label::number(thousandths(step)), Value::Empty);
                    printed_default = true;
                } else {
                    self.option(keyword, &step.to_string(), Label::number(thousandths(step)), Value::Empty);
                }
            }
        }
        if !desc.mandatory {
            self.option(keyword, "None", Label::message("None"), Value::Empty);
        } else if !printed_default {
            self.option(keyword, "None", Label::number(format!("{:.3}", default)), Value::Empty);
        }
        self.close_ui(keyword);

        self.push(Op::quoted(&format!("Custom{} True", keyword), "pop"));
        self.option(
            &format!("ParamCustom{}", keyword),
            "Value",
            Label::message("Value"),
            Value::Bare(format!("1 real {:.3} {:.3}", lower, upper)),
        );
        self.push(Op::Blank);

        if full {
            self.emit_fine_adjustment(desc);
        }
    }

    fn emit_fine_adjustment(&mut self, desc: &ParameterDescriptor) {
        let keyword = format!("StpFine{}", desc.name);

        if desc.is_color_option() {
            self.push(Op::ColorKeyword(keyword.clone()));
        }
        self.begin_option_ui(&keyword, Label::with_suffix(&desc.text, "Fine Adjustment"), Some("hide"));
        self.push(Op::Metadata {
            name: format!("Fine{}", desc.name),
            meta: Metadata::synthetic(),
        });
        self.push(Op::default(&keyword, "None"));
        self.option(&keyword, "None", Label::message(&thousandths(0)), Value::Empty);
        for step in (0..FINE_RANGE).step_by(FINE_STEP) {
            self.option(&keyword, &step.to_string(), Label::number(thousandths(step)), Value::Empty);
        }
        self.close_ui(&keyword);
    }
}
