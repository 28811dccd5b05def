//! Two-click selection gesture
//!
//! The first click on a cell selects it, a click on the same cell deselects
//! it, and a click on any other cell turns the pair into a move proposal.
//! Legality is not this module's concern: every proposal goes to the
//! applicator, and the tracker is already back to `Empty` by then.

use crate::coords::Cell;

/// A (from, to) pair produced by a completed gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveIntent {
    pub from: Cell,
    pub to: Cell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    #[default]
    Empty,
    PendingFrom(Cell),
}

impl SelectionState {
    pub fn pending(&self) -> Option<Cell> {
        match self {
            SelectionState::Empty => None,
            SelectionState::PendingFrom(cell) => Some(*cell),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureResult {
    SelectionChanged(SelectionState),
    MoveProposed(MoveIntent),
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    state: SelectionState,
}

impl GestureTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Consume one cell click.
    pub fn on_cell_clicked(&mut self, cell: Cell) -> GestureResult {
        match self.state {
            SelectionState::PendingFrom(pending) if pending == cell => {
                self.state = SelectionState::Empty;
                GestureResult::SelectionChanged(self.state)
            }
            SelectionState::Empty => {
                self.state = SelectionState::PendingFrom(cell);
                GestureResult::SelectionChanged(self.state)
            }
            SelectionState::PendingFrom(from) => {
                self.state = SelectionState::Empty;
                GestureResult::MoveProposed(MoveIntent { from, to: cell })
            }
        }
    }

    pub fn reset(&mut self) {
        self.state = SelectionState::Empty;
    }
}
