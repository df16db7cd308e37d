//! # Localization Pass
//!
//! The primary pass records every translatable declaration it writes as a
//! [`LocalizedKey`]. Globalized documents (no language requested) then get
//! one block of `*<lang>.` lines per installed secondary language, replayed
//! from that record in primary order.
//!
//! Replaying instead of re-deriving keeps both passes in lockstep: values
//! only the primary pass computes (resolution names, page sizes that
//! survived filtering) appear with exactly the same keys.

use std::collections::HashSet;

use super::Emitter;
use super::options::group_label;
use crate::capability::{ParameterClass, ParameterLevel};
use crate::i18n::Translator;
use crate::ir::{Choice, Op, Value};

/// Label of a translatable declaration, kept in untranslated form.
#[derive(Debug, Clone, PartialEq)]
pub enum Label {
    /// A catalog message.
    Message(String),
    /// Two messages joined by a space, e.g. `"Density Fine Adjustment"`.
    WithSuffix { text: String, suffix: String },
    /// A plain number; translated only when number localization is on.
    Number(String),
    /// A length in points, shown in millimetres.
    Millimetres(i32),
    /// Title of an option group.
    Group {
        class: ParameterClass,
        level: ParameterLevel,
    },
}

impl Label {
    pub fn message(text: &str) -> Self {
        Label::Message(text.to_string())
    }

    pub fn number(value: impl ToString) -> Self {
        Label::Number(value.to_string())
    }

    pub fn with_suffix(text: &str, suffix: &str) -> Self {
        Label::WithSuffix {
            text: text.to_string(),
            suffix: suffix.to_string(),
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Label::Number(_))
    }

    /// Label text in the translator's language.
    pub fn render(&self, tr: &Translator<'_>) -> String {
        match self {
            Label::Message(text) => tr.tr(text).to_string(),
            Label::WithSuffix { text, suffix } => format!("{} {}", tr.tr(text), tr.tr(suffix)),
            Label::Number(text) => text.clone(),
            Label::Millimetres(points) => {
                let mm = format!("{:.1}", f64::from(*points) * 25.4 / 72.0);
                tr.tr("%.1f mm").replacen("%.1f", &mm, 1)
            }
            Label::Group { class, level } => group_label(tr.tr(class.title()), tr.tr(level.title())),
        }
    }
}

/// One translatable `keyword option` pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedKey {
    pub keyword: String,
    pub option: String,
    pub label: Label,
    /// Value repeated on translation lines; empty for most keys.
    pub value: Value,
}

/// Keys recorded by the primary pass, unique by `(keyword, option)`.
#[derive(Debug, Clone, Default)]
pub struct KeySpace {
    keys: Vec<LocalizedKey>,
    seen: HashSet<(String, String)>,
}

impl KeySpace {
    /// Record a key; repeated keys keep their first label.
    pub fn record(&mut self, keyword: &str, option: &str, label: Label, value: Value) {
        if self.seen.insert((keyword.to_string(), option.to_string())) {
            self.keys.push(LocalizedKey {
                keyword: keyword.to_string(),
                option: option.to_string(),
                label,
                value,
            });
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocalizedKey> {
        self.keys.iter()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl Emitter<'_> {
    /// Translation blocks for every installed secondary language.
    ///
    /// Only globalized documents get them; languages without a loadable
    /// catalog are skipped.
    pub(super) fn emit_localizations(&mut self) {
        if self.language.is_some() {
            return;
        }

        let locales = self.locales;
        for lang in locales.secondary() {
            let Some(catalog) = locales.load(lang) else {
                log::debug!("No catalog for {}, skipping translations", lang);
                continue;
            };
            let tr = Translator::new(catalog);
            let ops = localized_ops(&self.keys, lang, &tr, self.config.localize_numbers);
            self.program.extend(ops);
        }
    }
}

/// Translation lines of one language, in recorded order.
pub fn localized_ops(
    keys: &KeySpace,
    lang: &str,
    tr: &Translator<'_>,
    localize_numbers: bool,
) -> Vec<Op> {
    keys.iter()
        .filter(|key| localize_numbers || !key.label.is_numeric())
        .map(|key| Op::Localized {
            lang: lang.to_string(),
            choice: Choice::new(&key.keyword, &key.option, &key.label.render(tr), key.value.clone()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Catalog;

    fn french() -> Catalog {
        Catalog::from_pairs(
            "fr",
            &[
                ("Density", "Densité"),
                ("Fine Adjustment", "Réglage fin"),
                ("%.1f mm", "%.1f mm (métrique)"),
                ("Printer Features", "Fonctions"),
                ("Common", "Communes"),
            ],
        )
    }

    #[test]
    fn test_label_render() {
        let catalog = french();
        let tr = Translator::new(&catalog);
        assert_eq!(Label::message("Density").render(&tr), "Densité");
        assert_eq!(
            Label::with_suffix("Density", "Fine Adjustment").render(&tr),
            "Densité Réglage fin"
        );
        assert_eq!(Label::number("0.500").render(&tr), "0.500");
        assert_eq!(Label::Millimetres(72).render(&tr), "25.4 mm (métrique)");
        assert_eq!(
            Label::Group {
                class: ParameterClass::Feature,
                level: ParameterLevel::Basic
            }
            .render(&tr),
            "Fonctions Communes"
        );
    }

    #[test]
    fn test_millimetres_untranslated() {
        assert_eq!(Label::Millimetres(1).render(&Translator::identity()), "0.4 mm");
    }

    #[test]
    fn test_keyspace_deduplicates() {
        let mut keys = KeySpace::default();
        keys.record("StpPasses", "2", Label::number(2), Value::Empty);
        keys.record("StpPasses", "2", Label::number("two"), Value::Empty);
        keys.record("StpPasses", "3", Label::number(3), Value::Empty);
        assert_eq!(keys.len(), 2);
        assert_eq!(keys.iter().next().unwrap().label, Label::number(2));
    }

    #[test]
    fn test_localized_ops_skip_numbers() {
        let mut keys = KeySpace::default();
        keys.record("Translation", "StpDensity", Label::message("Density"), Value::Empty);
        keys.record("StpDensity", "500", Label::number("0.500"), Value::Empty);
        let catalog = french();
        let tr = Translator::new(&catalog);

        let ops = localized_ops(&keys, "fr", &tr, false);
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].to_string(), "*fr.Translation StpDensity/Densité: \"\"\n");

        assert_eq!(localized_ops(&keys, "fr", &tr, true).len(), 2);
    }

    #[test]
    fn test_localized_ops_keep_value() {
        let mut keys = KeySpace::default();
        keys.record(
            "APPrinterPreset",
            "Photo",
            Label::message("Photograph"),
            Value::Quoted("*StpImageType Photo".into()),
        );
        let ops = localized_ops(&keys, "de", &Translator::identity(), false);
        assert_eq!(
            ops[0].to_string(),
            "*de.APPrinterPreset Photo/Photograph: \"*StpImageType Photo\"\n"
        );
    }
}
