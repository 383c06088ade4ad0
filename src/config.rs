// src/config.rs

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{
    collections::BTreeMap,
    env, fs,
    path::{Path, PathBuf},
};
use url::Url;

use crate::{
    extract::{HeaderMatcher, TableSelector, DEFAULT_TABLE_INDEX},
    frame::ColumnType,
    output::OutputFormat,
};

pub const CONFIG_ENV: &str = "EREDIVISIE_CONFIG";
pub const URL_ENV: &str = "EREDIVISIE_URL";
pub const OUTPUT_ENV: &str = "EREDIVISIE_OUTPUT";
pub const DEFAULT_CONFIG_FILE: &str = "eredivisie.yaml";

/// What to fetch, which table to take, and where the result goes.
///
/// ```yaml
/// url: https://example.org/standings
/// form:
///   competitie: eredivisie
///   seizoen: "2023-2024"
/// selector:
///   index: 4
/// columns:
///   Pts: int
/// output:
///   path: out/standings.parquet
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScrapeConfig {
    pub url: Url,
    #[serde(default)]
    pub form: BTreeMap<String, String>,
    /// Written as a one-key map, e.g. `index: 4` or `caption: Stand`.
    #[serde(default, with = "serde_yaml::with::singleton_map")]
    pub selector: SelectorConfig,
    /// Declared types for the coercion stage; anything not listed stays utf8.
    #[serde(default)]
    pub columns: BTreeMap<String, ColumnType>,
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorConfig {
    Index(usize),
    Caption(String),
    /// Every listed name must appear in the header row.
    Header(Vec<String>),
}

impl Default for SelectorConfig {
    fn default() -> Self {
        SelectorConfig::Index(DEFAULT_TABLE_INDEX)
    }
}

impl SelectorConfig {
    pub fn to_selector(&self) -> TableSelector {
        match self {
            SelectorConfig::Index(n) => TableSelector::ByIndex(*n),
            SelectorConfig::Caption(text) => TableSelector::ByCaption(text.clone()),
            SelectorConfig::Header(names) => {
                TableSelector::ByHeaderMatch(HeaderMatcher::contains_all(names.iter().cloned()))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    pub path: PathBuf,
    /// Falls back to the path's extension, then parquet.
    #[serde(default)]
    pub format: Option<OutputFormat>,
}

impl OutputConfig {
    pub fn format(&self) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(&self.path))
            .unwrap_or_default()
    }
}

impl ScrapeConfig {
    pub fn from_yaml(text: &str) -> Result<Self> {
        serde_yaml::from_str(text).context("parsing scrape config")
    }

    /// Read `path`, then apply `EREDIVISIE_URL` / `EREDIVISIE_OUTPUT` from the environment.
    pub fn load(path: &Path) -> Result<Self> {
        Self::load_with(path, |key| env::var(key).ok())
    }

    /// [`ScrapeConfig::load`] with overrides taken from `lookup` instead of the environment.
    pub fn load_with<F>(path: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text =
            fs::read_to_string(path).with_context(|| format!("reading config {:?}", path))?;
        let mut cfg = Self::from_yaml(&text).with_context(|| format!("in {:?}", path))?;
        cfg.apply_overrides(lookup)?;
        Ok(cfg)
    }

    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = lookup(URL_ENV) {
            self.url = Url::parse(&raw).with_context(|| format!("{} is not a URL: {}", URL_ENV, raw))?;
        }
        if let Some(path) = lookup(OUTPUT_ENV) {
            let format = self.output.as_ref().and_then(|o| o.format);
            self.output = Some(OutputConfig {
                path: PathBuf::from(path),
                format,
            });
        }
        Ok(())
    }
}

/// First CLI argument, else `$EREDIVISIE_CONFIG`, else `eredivisie.yaml`.
pub fn resolve_config_path(arg: Option<String>) -> PathBuf {
    arg.or_else(|| env::var(CONFIG_ENV).ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
