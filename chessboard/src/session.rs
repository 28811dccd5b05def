//! One game: the rules oracle, the pending selection and the result.
//!
//! The session is the only owner of mutable game state. The window holds one
//! and passes clicks and the restart key into it; rendering reads it back.

use crate::applicator::{self, GameStatus, Outcome};
use crate::config::BoardConfig;
use crate::coords::{map_pixel, Cell};
use crate::gesture::{GestureResult, GestureTracker, MoveIntent, SelectionState};
use crate::oracle::{RulesOracle, ShakmatyOracle};
use std::collections::BTreeSet;
use tracing::{debug, info, instrument, trace};

/// What a single click did to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Outside the board, or the game is already over.
    Ignored,
    Selection(SelectionState),
    Move(MoveIntent, Outcome),
}

impl ClickOutcome {
    /// Whether anything visible changed.
    pub fn changed(&self) -> bool {
        !matches!(self, ClickOutcome::Ignored)
    }
}

#[derive(Debug)]
pub struct Session<O: RulesOracle = ShakmatyOracle> {
    oracle: O,
    tracker: GestureTracker,
    status: GameStatus,
}

impl Default for Session<ShakmatyOracle> {
    fn default() -> Self {
        Self::new(ShakmatyOracle::new())
    }
}

impl<O: RulesOracle> Session<O> {
    pub fn new(oracle: O) -> Self {
        Self {
            oracle,
            tracker: GestureTracker::new(),
            status: GameStatus::InProgress,
        }
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub fn selection(&self) -> SelectionState {
        self.tracker.state()
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Legal destinations of the pending cell, queried live from the oracle.
    pub fn highlighted_destinations(&self) -> BTreeSet<Cell> {
        self.selection()
            .pending()
            .map(|cell| self.oracle.legal_destinations_from(cell))
            .unwrap_or_default()
    }

    /// Handle a click at `(x, y)` pixels relative to the board's top-left corner.
    pub fn click_at(&mut self, x: i32, y: i32, config: &BoardConfig) -> ClickOutcome {
        match map_pixel(x, y, config.square_size(), config.dimension) {
            Some(cell) => self.click_cell(cell),
            None => {
                trace!(x, y, "click outside board");
                ClickOutcome::Ignored
            }
        }
    }

    #[instrument(skip(self))]
    pub fn click_cell(&mut self, cell: Cell) -> ClickOutcome {
        if self.status.is_over() {
            trace!("game over, click ignored");
            return ClickOutcome::Ignored;
        }

        match self.tracker.on_cell_clicked(cell) {
            GestureResult::SelectionChanged(state) => {
                debug!(?state, "selection changed");
                ClickOutcome::Selection(state)
            }
            GestureResult::MoveProposed(intent) => {
                let outcome = applicator::apply(intent, &mut self.oracle, &mut self.status);
                debug!(from = %intent.from, to = %intent.to, ?outcome, "move proposed");
                ClickOutcome::Move(intent, outcome)
            }
        }
    }

    /// Start over from the initial position.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.oracle.reset();
        self.tracker.reset();
        self.status = GameStatus::InProgress;
        info!("session reset");
    }
}
