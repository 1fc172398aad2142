//! Test-only helpers for constructing record sets.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::io::records::write_records;
use crate::record::Record;

/// Unsorted record set used by the end-to-end click scenario.
pub fn scenario_records() -> Vec<Record> {
    vec![
        Record::new(789, "나오성", 30),
        Record::new(123, "이낙생", 20),
        Record::new(456, "김문기", 40),
    ]
}

/// Ids in sequence order.
pub fn ids(records: &[Record]) -> Vec<i64> {
    records.iter().map(|record| record.id).collect()
}

/// Write `records` as `records.json` under `root` and return its path.
pub fn write_records_fixture(root: &Path, records: &[Record]) -> Result<PathBuf> {
    let path = root.join("records.json");
    write_records(&path, records)?;
    Ok(path)
}

/// Scratch directory holding the scenario records.
pub fn scenario_dir() -> Result<tempfile::TempDir> {
    let dir = tempfile::tempdir()?;
    write_records_fixture(dir.path(), &scenario_records())?;
    Ok(dir)
}
