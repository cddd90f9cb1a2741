//! Company details shown on rendered documents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// The letterhead block for rendered estimates.
///
/// Loaded from a small TOML file; any key left out keeps its default, so an
/// empty file is valid.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CompanyConfig {
    pub name: String,
    pub tagline: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Default for CompanyConfig {
    fn default() -> Self {
        Self {
            name: "ElectriPro".to_string(),
            tagline: "Professional Electrical Estimates".to_string(),
            email: None,
            phone: None,
        }
    }
}

impl CompanyConfig {
    /// Reads company details from `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("cannot read config file '{}'", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("invalid config file '{}'", path.display()))
    }
}
