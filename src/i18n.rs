//! # Message Catalogs
//!
//! Translations for the labels written into documents.
//!
//! A catalog is a flat JSON object mapping an English message to its
//! translation, stored as `<dir>/<tag>.json`:
//!
//! ```json
//! { "Media Size": "Taille du support", "Automatic": "Automatique" }
//! ```
//!
//! The set of *installed* languages may be larger than the set of catalogs
//! that actually load; a language without a usable catalog is skipped
//! wherever translations are needed.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Languages that never get their own translation pass.
pub const BASE_LANGUAGES: [&str; 2] = ["C", "en"];

/// Whether a language tag names the untranslated base language.
pub fn is_base_language(tag: &str) -> bool {
    BASE_LANGUAGES.contains(&tag)
}

/// Messages of one language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub tag: String,
    pub messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(tag: &str, messages: HashMap<String, String>) -> Self {
        Self {
            tag: tag.to_string(),
            messages,
        }
    }

    /// Build a catalog from `(message, translation)` pairs.
    pub fn from_pairs(tag: &str, pairs: &[(&str, &str)]) -> Self {
        let messages = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self::new(tag, messages)
    }

    /// Read `<tag>.json` from a file.
    pub fn from_path(tag: &str, path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let messages: HashMap<String, String> = serde_json::from_str(&json)?;
        Ok(Self::new(tag, messages))
    }

    pub fn lookup(&self, text: &str) -> Option<&str> {
        self.messages.get(text).map(String::as_str)
    }
}

// ============================================================================
// LOCALE STORE
// ============================================================================

/// Installed languages and the catalogs that loaded for them.
#[derive(Debug, Clone, Default)]
pub struct LocaleStore {
    languages: Vec<String>,
    catalogs: BTreeMap<String, Catalog>,
}

impl LocaleStore {
    /// No installed languages at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load catalogs from a directory.
    ///
    /// With `languages` unset, every `*.json` file in `dir` is an installed
    /// language. Listed languages without a file stay installed but have
    /// no catalog. Unreadable catalogs are logged and skipped.
    pub fn from_dir(dir: &Path, languages: Option<Vec<String>>) -> Result<Self> {
        let languages = match languages {
            Some(languages) => languages,
            None => {
                let mut found = Vec::new();
                for entry in fs::read_dir(dir)? {
                    let path = entry?.path();
                    if !path.extension().is_some_and(|ext| ext == "json") {
                        continue;
                    }
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        found.push(stem.to_string());
                    }
                }
                found.sort();
                found
            }
        };

        let mut store = Self::empty();
        for tag in languages {
            let path = dir.join(format!("{}.json", tag));
            if path.is_file() {
                match Catalog::from_path(&tag, &path) {
                    Ok(catalog) => {
                        store.catalogs.insert(tag.clone(), catalog);
                    }
                    Err(e) => log::warn!("Skipping catalog {}: {}", path.display(), e),
                }
            } else {
                log::debug!("No catalog for language {}", tag);
            }
            store.languages.push(tag);
        }
        Ok(store)
    }

    /// Install a language together with its catalog.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        if !self.languages.contains(&catalog.tag) {
            self.languages.push(catalog.tag.clone());
        }
        self.catalogs.insert(catalog.tag.clone(), catalog);
        self
    }

    /// Install a language that has no catalog.
    pub fn with_language(mut self, tag: &str) -> Self {
        if !self.languages.iter().any(|l| l == tag) {
            self.languages.push(tag.to_string());
        }
        self
    }

    /// Every installed language tag, in installation order.
    pub fn installed(&self) -> &[String] {
        &self.languages
    }

    /// Installed languages that get their own translation pass.
    pub fn secondary(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .map(String::as_str)
            .filter(|tag| !is_base_language(tag))
    }

    /// Catalog of a language, `None` if it did not load.
    pub fn load(&self, tag: &str) -> Option<&Catalog> {
        self.catalogs.get(tag)
    }

    /// Translator for a language; identity for the base language or a
    /// missing catalog.
    pub fn translator(&self, tag: Option<&str>) -> Translator<'_> {
        Translator {
            catalog: tag.and_then(|t| self.load(t)),
        }
    }
}

// ============================================================================
// TRANSLATOR
// ============================================================================

/// Message lookup bound to at most one catalog.
#[derive(Debug, Clone, Copy, Default)]
pub struct Translator<'a> {
    catalog: Option<&'a Catalog>,
}

impl<'a> Translator<'a> {
    /// A translator that returns every message unchanged.
    pub fn identity() -> Self {
        Self { catalog: None }
    }

    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog: Some(catalog),
        }
    }

    /// Translate a message, falling back to the message itself.
    pub fn tr<'s>(&self, text: &'s str) -> &'s str
    where
        'a: 's,
    {
        self.catalog.and_then(|c| c.lookup(text)).unwrap_or(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_translator_identity() {
        let tr = Translator::identity();
        assert_eq!(tr.tr("Media Size"), "Media Size");
    }

    #[test]
    fn test_translator_lookup_and_fallback() {
        let catalog = Catalog::from_pairs("fr", &[("Media Size", "Taille du support")]);
        let tr = Translator::new(&catalog);
        assert_eq!(tr.tr("Media Size"), "Taille du support");
        assert_eq!(tr.tr("Resolution"), "Resolution");
    }

    #[test]
    fn test_secondary_skips_base_languages() {
        let store = LocaleStore::empty()
            .with_language("C")
            .with_language("en")
            .with_catalog(Catalog::from_pairs("fr", &[]))
            .with_language("xx");
        let secondary: Vec<&str> = store.secondary().collect();
        assert_eq!(secondary, vec!["fr", "xx"]);
        assert!(store.load("fr").is_some());
        assert!(store.load("xx").is_none());
    }

    #[test]
    fn test_translator_for_missing_catalog_is_identity() {
        let store = LocaleStore::empty().with_language("xx");
        assert_eq!(store.translator(Some("xx")).tr("Automatic"), "Automatic");
        assert_eq!(store.translator(None).tr("Automatic"), "Automatic");
    }

    #[test]
    fn test_from_dir_lists_json_files() {
        let dir = tempfile::tempdir().unwrap();
        let mut fr = fs::File::create(dir.path().join("fr.json")).unwrap();
        fr.write_all(br#"{"Automatic": "Automatique"}"#).unwrap();
        fs::write(dir.path().join("de.json"), "not json").unwrap();
        fs::write(dir.path().join("README"), "ignored").unwrap();

        let store = LocaleStore::from_dir(dir.path(), None).unwrap();
        assert_eq!(store.installed(), ["de", "fr"]);
        assert!(store.load("de").is_none());
        assert_eq!(store.translator(Some("fr")).tr("Automatic"), "Automatique");
    }

    #[test]
    fn test_from_dir_with_explicit_languages() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("fr.json"), "{}").unwrap();
        let store =
            LocaleStore::from_dir(dir.path(), Some(vec!["fr".into(), "xx".into()])).unwrap();
        assert_eq!(store.installed(), ["fr", "xx"]);
        assert!(store.load("fr").is_some());
        assert!(store.load("xx").is_none());
    }
}
