//! Sorter configuration stored in `sorter.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

use crate::core::collation::{DEFAULT_LOCALE, parse_locale};

/// Sorter configuration (TOML).
///
/// Missing fields default to the built-in record set under Korean collation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SorterConfig {
    /// BCP-47 locale tag used to collate textual columns.
    pub locale: String,

    /// JSON record set, relative to the config directory. Built-in records when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records_path: Option<PathBuf>,
}

impl Default for SorterConfig {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_string(),
            records_path: None,
        }
    }
}

impl SorterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() {
            return Err(anyhow!("locale must be a non-empty BCP-47 tag"));
        }
        // Syntax only; the collator itself is built once, by the session.
        parse_locale(&self.locale).context("locale")?;
        if let Some(path) = &self.records_path {
            if path.as_os_str().is_empty() {
                return Err(anyhow!("records_path must not be empty"));
            }
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SorterConfig::default()`.
pub fn load_config(path: &Path) -> Result<SorterConfig> {
    if !path.exists() {
        let cfg = SorterConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SorterConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SorterConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_missing_returns_default() {
        let temp = tempfile::tempdir().expect("tempdir");
        let cfg = load_config(&temp.path().join("missing.toml")).expect("load");
        assert_eq!(cfg, SorterConfig::default());
    }

    #[test]
    fn write_then_load_round_trips() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("sorter.toml");
        let cfg = SorterConfig {
            locale: "en-US".to_string(),
            records_path: Some(PathBuf::from("data/records.json")),
        };
        write_config(&path, &cfg).expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("sorter.toml");
        fs::write(&path, "records_path = \"people.json\"\n").expect("write");
        let loaded = load_config(&path).expect("load");
        assert_eq!(loaded.locale, DEFAULT_LOCALE);
        assert_eq!(loaded.records_path, Some(PathBuf::from("people.json")));
    }

    #[test]
    fn empty_locale_is_invalid() {
        let cfg = SorterConfig {
            locale: " ".to_string(),
            records_path: None,
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn malformed_locale_is_invalid() {
        let cfg = SorterConfig {
            locale: "not a locale!".to_string(),
            ..SorterConfig::default()
        };
        let err = cfg.validate().expect_err("invalid");
        assert!(format!("{:#}", err).contains("invalid locale"));
    }

    #[test]
    fn empty_records_path_is_invalid() {
        let cfg = SorterConfig {
            records_path: Some(PathBuf::new()),
            ..SorterConfig::default()
        };
        let err = cfg.validate().expect_err("invalid");
        assert!(err.to_string().contains("records_path"));
    }
}
