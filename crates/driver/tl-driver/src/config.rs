//! Checker configuration files

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tl_trace::TraceConfig;

/// Everything a [`crate::TagChecker`] can be configured with
///
/// ```toml
/// [trace]
/// perpetual_roots = ["permission", "text"]
/// max_listed_types = 3
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Root handling and error wording
    pub trace: TraceConfig,
}

impl CheckerConfig {
    /// Parse configuration from TOML text; missing keys keep their defaults
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid configuration TOML.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse checker configuration")
    }

    /// Read and parse a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error naming the file if it cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(CheckerConfig::from_toml_str("").unwrap(), CheckerConfig::default());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[trace]\npseudo_roots = [\"context\"]\npseudo_root_skip = 3").unwrap();
        let config = CheckerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.trace.pseudo_roots, ["context"]);
        assert_eq!(config.trace.pseudo_root_skip, 3);
        assert_eq!(config.trace.max_listed_types, 4);
    }

    #[test]
    fn test_errors_name_the_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[trace]\nmax_listed_types = \"four\"").unwrap();
        let error = CheckerConfig::from_file(file.path()).unwrap_err();
        assert!(error.to_string().contains(&file.path().display().to_string()));

        let missing = CheckerConfig::from_file("/nonexistent/taglens.toml").unwrap_err();
        assert!(missing.to_string().starts_with("Failed to read"));
    }
}
