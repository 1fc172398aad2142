//! Session context: the record sequence and sort state for one table.
//!
//! [`TableSession::select`] is the only way to change either. Each event runs
//! one transition and one stable sort over the order left by the previous
//! event.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::core::collation::Collation;
use crate::core::sort_state::SortState;
use crate::core::sorter::sort_in_place;
use crate::core::types::ColumnKey;
use crate::core::view::TableView;
use crate::io::config::{SorterConfig, load_config};
use crate::io::records::load_records;
use crate::record::{Record, default_records};

#[derive(Debug)]
pub struct TableSession {
    records: Vec<Record>,
    state: SortState,
    collation: Collation,
}

impl TableSession {
    pub fn new(records: Vec<Record>, collation: Collation) -> Self {
        Self {
            records,
            state: SortState::default(),
            collation,
        }
    }

    /// Build a session from config: records file if configured, built-in set otherwise.
    ///
    /// `root` resolves a relative `records_path`.
    pub fn from_config(root: &Path, config: &SorterConfig) -> Result<Self> {
        let collation = Collation::new(&config.locale).context("build collator")?;
        let records = match &config.records_path {
            Some(path) => load_records(&root.join(path))?,
            None => default_records(),
        };
        info!(
            locale = %config.locale,
            records = records.len(),
            "table session ready"
        );
        Ok(Self::new(records, collation))
    }

    /// Load config from `config_path` and build the session.
    ///
    /// `records_override` (a command-line `--records`) replaces the configured
    /// `records_path` and resolves against the working directory; the
    /// configured path resolves against the config file's directory.
    pub fn open(config_path: &Path, records_override: Option<&Path>) -> Result<Self> {
        let mut config = load_config(config_path)?;
        if let Some(records) = records_override {
            let cwd = std::env::current_dir().context("resolve working directory")?;
            config.records_path = Some(cwd.join(records));
        }
        let root = config_path.parent().unwrap_or(Path::new(""));
        debug!(
            config = %config_path.display(),
            records = ?config.records_path,
            "opening session"
        );
        Self::from_config(root, &config)
    }

    /// Apply a column-selection event and return the reordered records.
    pub fn select(&mut self, column: ColumnKey) -> &[Record] {
        let previous = self.state;
        self.state = previous.transition(column);
        let direction = self.state.direction;
        sort_in_place(&mut self.records, column, direction, &self.collation);
        debug!(
            column = %column,
            direction = direction.as_str(),
            previous_column = ?previous.column,
            "column selected"
        );
        &self.records
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn state(&self) -> SortState {
        self.state
    }

    pub fn view(&self) -> TableView {
        TableView::project(&self.records, &self.state)
    }

    /// BCP-47 tag of the collation locale.
    pub fn collation_locale(&self) -> String {
        self.collation.locale().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use crate::core::collation::DEFAULT_LOCALE;
    use crate::core::types::Direction;
    use crate::io::config::write_config;
    use crate::test_support::{ids, scenario_records, write_records_fixture};

    fn session() -> TableSession {
        TableSession::new(
            scenario_records(),
            Collation::new(DEFAULT_LOCALE).expect("collation"),
        )
    }

    #[test]
    fn clicks_drive_state_and_order() {
        let mut session = session();

        assert_eq!(ids(session.select(ColumnKey::Age)), vec![123, 789, 456]);
        assert_eq!(session.state().direction, Direction::Asc);

        assert_eq!(ids(session.select(ColumnKey::Age)), vec![456, 789, 123]);
        assert_eq!(session.state().direction, Direction::Desc);

        assert_eq!(ids(session.select(ColumnKey::Name)), vec![456, 789, 123]);
        assert_eq!(
            session.state().active(),
            Some((ColumnKey::Name, Direction::Asc))
        );
        let names: Vec<&str> = session
            .records()
            .iter()
            .map(|record| record.name.as_str())
            .collect();
        assert_eq!(names, vec!["김문기", "나오성", "이낙생"]);
    }

    #[test]
    fn view_tracks_session_state() {
        let mut session = session();
        assert!(session.view().active_header().is_none());
        session.select(ColumnKey::Id);
        let view = session.view();
        let header = view.active_header().expect("active header");
        assert_eq!(header.column, ColumnKey::Id);
        assert_eq!(view.rows[0].cells[0], "123");
    }

    #[test]
    fn ties_keep_order_left_by_previous_sort() {
        let mut session = TableSession::new(
            vec![
                Record::new(1, "b", 30),
                Record::new(2, "a", 30),
                Record::new(3, "c", 10),
            ],
            Collation::new("en").expect("collation"),
        );
        session.select(ColumnKey::Name);
        assert_eq!(ids(session.select(ColumnKey::Age)), vec![3, 2, 1]);
    }

    #[test]
    fn open_resolves_configured_records_next_to_config() {
        let temp = tempfile::tempdir().expect("tempdir");
        let nested = temp.path().join("conf");
        write_records_fixture(&nested, &scenario_records()).expect("records");
        let config_path = nested.join("sorter.toml");
        write_config(
            &config_path,
            &SorterConfig {
                records_path: Some(PathBuf::from("records.json")),
                ..SorterConfig::default()
            },
        )
        .expect("config");

        let session = TableSession::open(&config_path, None).expect("open");
        assert_eq!(ids(session.records()), vec![789, 123, 456]);
    }

    #[test]
    fn open_prefers_records_override() {
        let temp = tempfile::tempdir().expect("tempdir");
        let records_path =
            write_records_fixture(temp.path(), &scenario_records()).expect("records");

        let session =
            TableSession::open(&temp.path().join("missing.toml"), Some(&records_path))
                .expect("open");
        assert_eq!(ids(session.records()), vec![789, 123, 456]);
    }

    #[test]
    fn from_config_uses_default_records_without_path() {
        let temp = tempfile::tempdir().expect("tempdir");
        let session =
            TableSession::from_config(temp.path(), &SorterConfig::default()).expect("session");
        assert_eq!(session.records(), default_records().as_slice());
        assert_eq!(session.state(), SortState::default());
    }
}
