//! Scaffolding for `sorter init`.

use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use tracing::info;

use super::config::{SorterConfig, write_config};
use super::records::write_records;
use crate::record::default_records;

pub const CONFIG_FILE: &str = "sorter.toml";
pub const RECORDS_FILE: &str = "records.json";

/// Canonical file locations for a project root.
#[derive(Debug, Clone)]
pub struct SorterPaths {
    pub root: PathBuf,
    pub config_path: PathBuf,
    pub records_path: PathBuf,
}

impl SorterPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_path: root.join(CONFIG_FILE),
            records_path: root.join(RECORDS_FILE),
            root,
        }
    }
}

/// Options for `init_sorter`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing config and records.
    pub force: bool,
}

/// Write `sorter.toml` and `records.json` (built-in records) into `root`.
///
/// Fails if either file exists unless `options.force` is set.
pub fn init_sorter(root: &Path, options: &InitOptions) -> Result<SorterPaths> {
    let paths = SorterPaths::new(root);
    for existing in [&paths.config_path, &paths.records_path] {
        if existing.exists() && !options.force {
            return Err(anyhow!(
                "sorter init: {} already exists (use --force to overwrite)",
                existing.display()
            ));
        }
    }

    let config = SorterConfig {
        records_path: Some(PathBuf::from(RECORDS_FILE)),
        ..SorterConfig::default()
    };
    write_config(&paths.config_path, &config)?;
    write_records(&paths.records_path, &default_records())?;
    info!(root = %paths.root.display(), force = options.force, "sorter initialized");
    Ok(paths)
}
