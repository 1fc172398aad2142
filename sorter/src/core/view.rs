//! Render projection of records and sort state.
//!
//! Renderers consume a [`TableView`] and never look at [`SortState`] directly.

use serde::Serialize;

use crate::core::sort_state::SortState;
use crate::core::types::{ColumnKey, Direction};
use crate::record::Record;

/// Header sort indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Indicator {
    Neutral,
    Ascending,
    Descending,
}

impl Indicator {
    fn for_column(column: ColumnKey, state: &SortState) -> Self {
        match state.active() {
            Some((active, Direction::Asc)) if active == column => Indicator::Ascending,
            Some((active, Direction::Desc)) if active == column => Indicator::Descending,
            _ => Indicator::Neutral,
        }
    }

    /// Material icon name.
    pub fn icon_name(self) -> &'static str {
        match self {
            Indicator::Neutral => "unfold_more",
            Indicator::Ascending => "arrow_upward",
            Indicator::Descending => "arrow_downward",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Indicator::Neutral => "↕",
            Indicator::Ascending => "↑",
            Indicator::Descending => "↓",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub column: ColumnKey,
    pub indicator: Indicator,
    pub icon: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub cells: Vec<String>,
}

/// Everything a renderer needs to draw the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub headers: Vec<HeaderView>,
    pub rows: Vec<RowView>,
}

impl TableView {
    /// Project `records` (already in display order) and `state`.
    pub fn project(records: &[Record], state: &SortState) -> Self {
        let headers = ColumnKey::ALL
            .into_iter()
            .map(|column| {
                let indicator = Indicator::for_column(column, state);
                HeaderView {
                    column,
                    indicator,
                    icon: indicator.icon_name(),
                    active: indicator != Indicator::Neutral,
                }
            })
            .collect();
        let rows = records
            .iter()
            .map(|record| RowView {
                cells: ColumnKey::ALL
                    .into_iter()
                    .map(|column| record.field(column).to_string())
                    .collect(),
            })
            .collect();
        Self { headers, rows }
    }

    pub fn active_header(&self) -> Option<&HeaderView> {
        self.headers.iter().find(|header| header.active)
    }
}
