//! Column-selection state machine.

use serde::{Deserialize, Serialize};

use crate::core::types::{ColumnKey, Direction};

/// Active sort column and direction.
///
/// `direction` is ignored while `column` is `None`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: Option<ColumnKey>,
    pub direction: Direction,
}

impl SortState {
    /// Next state after `selected` is clicked.
    ///
    /// Re-selecting the active column flips the direction; any other column
    /// becomes active in ascending order.
    pub fn transition(self, selected: ColumnKey) -> SortState {
        if self.column == Some(selected) {
            SortState {
                column: self.column,
                direction: self.direction.flipped(),
            }
        } else {
            SortState {
                column: Some(selected),
                direction: Direction::Asc,
            }
        }
    }

    /// Active column paired with its direction, if any.
    pub fn active(&self) -> Option<(ColumnKey, Direction)> {
        self.column.map(|column| (column, self.direction))
    }
}
