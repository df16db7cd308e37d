//! # Generator Configuration
//!
//! Settings that are identical for every document of a run: version
//! strings stamped into the header, the PostScript level, where the
//! documents will be installed, and how files are named.
//!
//! ## Usage
//!
//! ```
//! use genppd::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.ps_level, 3);
//! assert_eq!(config.nickname("Epson Stylus C88", ""), "Epson Stylus C88 - CUPS+Gutenprint v5.2.11");
//! ```
//!
//! A partial JSON file can override any field:
//!
//! ```json
//! { "ps_level": 2, "model_dir": "/usr/local/share/cups/model" }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{GenppdError, Result};

/// # Generator Configuration
///
/// ## Versioning
///
/// - **version**: full release, written to `*FileVersion` and `*NickName`
/// - **base_version**: used for `*FileVersion` when `use_base_version` is set
/// - **release_version**: major.minor, part of filenames, filter names and URIs
///
/// ## Output
///
/// - **model_dir**: install directory embedded as `*StpPPDLocation`
/// - **file_prefix** / **extension**: `<prefix>-<driver>.<release><ext>`
/// - **compress**: gzip documents and append `.gz`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub version: String,
    pub base_version: String,
    pub release_version: String,
    /// Infix between the model name and version in `*NickName`.
    pub nickname_string: String,
    /// PostScript language level, 2 or 3.
    pub ps_level: u8,
    pub use_base_version: bool,
    /// Also translate labels that are plain numbers.
    pub localize_numbers: bool,
    pub model_dir: String,
    pub file_prefix: String,
    pub extension: String,
    pub compress: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            version: "5.2.11".to_string(),
            base_version: "5.2".to_string(),
            release_version: "5.2".to_string(),
            nickname_string: " - CUPS+Gutenprint v".to_string(),
            ps_level: 3,
            use_base_version: false,
            localize_numbers: false,
            model_dir: "/usr/share/cups/model".to_string(),
            file_prefix: "stp".to_string(),
            extension: ".ppd".to_string(),
            compress: true,
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration file; missing fields keep their defaults.
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no PPD consumer understands.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.ps_level, 2 | 3) {
            return Err(GenppdError::Config(format!(
                "PostScript level must be 2 or 3, got {}",
                self.ps_level
            )));
        }
        if self.release_version.is_empty() {
            return Err(GenppdError::Config("release_version is empty".to_string()));
        }
        Ok(())
    }

    /// Version written to `*FileVersion`.
    pub fn file_version(&self) -> &str {
        if self.use_base_version {
            &self.base_version
        } else {
            &self.version
        }
    }

    /// `*NickName` value: model name, generator tag, version, variant suffix.
    pub fn nickname(&self, long_name: &str, suffix: &str) -> String {
        format!("{}{}{}{}", long_name, self.nickname_string, self.version, suffix)
    }

    /// `*PSVersion` value for the configured language level.
    pub fn ps_version(&self) -> &'static str {
        if self.ps_level == 2 {
            "(2017.000) 550"
        } else {
            "(3010.000) 0"
        }
    }

    /// Driver URI scheme, e.g. `gutenprint.5.2`.
    pub fn uri_scheme(&self) -> String {
        format!("gutenprint.{}", self.release_version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GeneratorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.file_version(), "5.2.11");
        assert_eq!(config.uri_scheme(), "gutenprint.5.2");
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: GeneratorConfig = serde_json::from_str(r#"{"ps_level": 2}"#).unwrap();
        assert_eq!(config.ps_level, 2);
        assert_eq!(config.ps_version(), "(2017.000) 550");
        assert_eq!(config.file_prefix, "stp");
    }

    #[test]
    fn test_invalid_ps_level() {
        let config = GeneratorConfig {
            ps_level: 4,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(GenppdError::Config(_))));
    }

    #[test]
    fn test_base_version() {
        let config = GeneratorConfig {
            use_base_version: true,
            ..Default::default()
        };
        assert_eq!(config.file_version(), "5.2");
    }

    #[test]
    fn test_nickname_suffix() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.nickname("HP LaserJet 4", " Simplified"),
            "HP LaserJet 4 - CUPS+Gutenprint v5.2.11 Simplified"
        );
    }
}
