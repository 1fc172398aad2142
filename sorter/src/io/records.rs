//! Record set load/save with schema validation.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::{debug, warn};

use crate::record::Record;

pub const RECORDS_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/records/v1.schema.json"
));

/// Load a JSON record set from disk and validate it against the v1 schema.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    debug!(path = %path.display(), "loading records");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read records {}", path.display()))?;
    parse_records(&contents).with_context(|| format!("load records {}", path.display()))
}

/// Parse and validate a JSON record set.
///
/// Duplicate ids are reported as warnings and do not fail the load.
pub fn parse_records(contents: &str) -> Result<Vec<Record>> {
    let value: Value = serde_json::from_str(contents).context("parse records json")?;
    validate_schema(&value)?;
    let records: Vec<Record> =
        serde_json::from_value(value).context("deserialize records")?;
    for id in duplicate_ids(&records) {
        warn!(id, "duplicate record id");
    }
    debug!(count = records.len(), "records loaded");
    Ok(records)
}

/// Atomically write records as pretty-printed JSON (temp file + rename).
pub fn write_records(path: &Path, records: &[Record]) -> Result<()> {
    debug!(path = %path.display(), count = records.len(), "writing records");
    let mut buf = serde_json::to_string_pretty(records).context("serialize records")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("records path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp records {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace records {}", path.display()))?;
    Ok(())
}

/// Ids that occur more than once, in first-repeat order.
pub fn duplicate_ids(records: &[Record]) -> Vec<i64> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    records
        .iter()
        .filter(|record| !seen.insert(record.id) && reported.insert(record.id))
        .map(|record| record.id)
        .collect()
}

fn validate_schema(records: &Value) -> Result<()> {
    let schema: Value = serde_json::from_str(RECORDS_SCHEMA).context("parse records schema")?;
    let compiled = validator_for(&schema).map_err(|err| anyhow!("invalid schema: {}", err))?;
    let messages = compiled
        .iter_errors(records)
        .map(|err| err.to_string())
        .collect::<Vec<_>>();
    if !messages.is_empty() {
        return Err(anyhow!(
            "records schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}
