//! Applying proposed moves and detecting the end of the game

use crate::gesture::MoveIntent;
use crate::oracle::{Color, PieceKind, RulesOracle};
use tracing::{debug, info};

/// Piece a pawn becomes on the last rank. There is no promotion prompt.
pub const AUTO_PROMOTION: PieceKind = PieceKind::Queen;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Rejected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOverReason {
    Checkmate { winner: Color },
    Stalemate,
    OtherDraw,
}

impl GameOverReason {
    pub fn message(&self) -> String {
        match self {
            GameOverReason::Checkmate { winner } => format!("Checkmate! {} wins!", winner.name()),
            GameOverReason::Stalemate => "Stalemate! Draw!".to_string(),
            GameOverReason::OtherDraw => "Game over! Draw!".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    InProgress,
    Over { reason: GameOverReason, message: String },
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Over { .. })
    }

    /// Result text for the overlay; empty while the game is running.
    pub fn message(&self) -> &str {
        match self {
            GameStatus::InProgress => "",
            GameStatus::Over { message, .. } => message,
        }
    }
}

/// Play `intent` through the oracle and update `status` if the move ended
/// the game. Nothing is played once the game is over.
pub fn apply(
    intent: MoveIntent,
    oracle: &mut impl RulesOracle,
    status: &mut GameStatus,
) -> Outcome {
    if status.is_over() {
        debug!(from = %intent.from, to = %intent.to, "move after game over rejected");
        return Outcome::Rejected;
    }

    if !oracle.try_apply_move(intent.from, intent.to, AUTO_PROMOTION) {
        debug!(from = %intent.from, to = %intent.to, "illegal move rejected");
        return Outcome::Rejected;
    }

    if let Some(reason) = terminal_reason(oracle) {
        let message = reason.message();
        info!(?reason, %message, "game over");
        *status = GameStatus::Over { reason, message };
    }
    Outcome::Applied
}

fn terminal_reason(oracle: &impl RulesOracle) -> Option<GameOverReason> {
    if !oracle.is_game_over() {
        return None;
    }
    let reason = if oracle.is_checkmate() {
        // the side to move is the one that got mated
        GameOverReason::Checkmate { winner: oracle.side_to_move().opposite() }
    } else if oracle.is_stalemate() {
        GameOverReason::Stalemate
    } else {
        GameOverReason::OtherDraw
    };
    Some(reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Cell;
    use crate::oracle::tests::{cell, oracle_from_fen};
    use crate::oracle::{Piece, ShakmatyOracle};
    use std::collections::BTreeSet;

    /// Oracle that records how it was called and answers from fixed flags.
    #[derive(Default)]
    struct StubOracle {
        legal: bool,
        game_over: bool,
        checkmate: bool,
        stalemate: bool,
        apply_calls: usize,
        last_promotion: Option<PieceKind>,
    }

    impl RulesOracle for StubOracle {
        fn legal_destinations_from(&self, _cell: Cell) -> BTreeSet<Cell> {
            BTreeSet::new()
        }

        fn try_apply_move(&mut self, _from: Cell, _to: Cell, promotion: PieceKind) -> bool {
            self.apply_calls += 1;
            self.last_promotion = Some(promotion);
            self.legal
        }

        fn is_game_over(&self) -> bool {
            self.game_over
        }

        fn is_checkmate(&self) -> bool {
            self.checkmate
        }

        fn is_stalemate(&self) -> bool {
            self.stalemate
        }

        fn is_check(&self) -> bool {
            self.checkmate
        }

        fn side_to_move(&self) -> Color {
            Color::Black
        }

        fn piece_at(&self, _cell: Cell) -> Option<Piece> {
            None
        }

        fn move_history(&self) -> &[String] {
            &[]
        }

        fn reset(&mut self) {}
    }

    fn intent(from: &str, to: &str) -> MoveIntent {
        MoveIntent { from: cell(from), to: cell(to) }
    }

    #[test]
    fn test_rejected_after_game_over_without_calling_oracle() {
        let mut oracle = StubOracle { legal: true, ..Default::default() };
        let mut status = GameStatus::Over {
            reason: GameOverReason::Stalemate,
            message: "Stalemate! Draw!".into(),
        };
        let before = status.clone();
        assert_eq!(apply(intent("e2", "e4"), &mut oracle, &mut status), Outcome::Rejected);
        assert_eq!(oracle.apply_calls, 0);
        assert_eq!(status, before);
    }

    #[test]
    fn test_illegal_move_leaves_status() {
        let mut oracle = StubOracle::default();
        let mut status = GameStatus::InProgress;
        assert_eq!(apply(intent("e2", "e5"), &mut oracle, &mut status), Outcome::Rejected);
        assert_eq!(oracle.apply_calls, 1);
        assert_eq!(status, GameStatus::InProgress);
    }

    #[test]
    fn test_always_promotes_to_queen() {
        let mut oracle = StubOracle { legal: true, ..Default::default() };
        let mut status = GameStatus::InProgress;
        apply(intent("a7", "a8"), &mut oracle, &mut status);
        assert_eq!(oracle.last_promotion, Some(PieceKind::Queen));
    }

    #[test]
    fn test_checkmate_winner_is_mover() {
        let mut oracle =
            StubOracle { legal: true, game_over: true, checkmate: true, ..Default::default() };
        let mut status = GameStatus::InProgress;
        assert_eq!(apply(intent("d1", "h5"), &mut oracle, &mut status), Outcome::Applied);
        assert_eq!(
            status,
            GameStatus::Over {
                reason: GameOverReason::Checkmate { winner: Color::White },
                message: "Checkmate! White wins!".into(),
            }
        );
    }

    #[test]
    fn test_other_draw_message() {
        let mut oracle = StubOracle { legal: true, game_over: true, ..Default::default() };
        let mut status = GameStatus::InProgress;
        apply(intent("a1", "a2"), &mut oracle, &mut status);
        assert_eq!(status.message(), "Game over! Draw!");
    }

    #[test]
    fn test_fools_mate() {
        let mut oracle = ShakmatyOracle::new();
        let mut status = GameStatus::InProgress;
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
            assert_eq!(apply(intent(from, to), &mut oracle, &mut status), Outcome::Applied);
        }
        assert_eq!(status, GameStatus::InProgress);
        assert_eq!(apply(intent("d8", "h4"), &mut oracle, &mut status), Outcome::Applied);
        assert_eq!(
            status,
            GameStatus::Over {
                reason: GameOverReason::Checkmate { winner: Color::Black },
                message: "Checkmate! Black wins!".into(),
            }
        );
        assert_eq!(apply(intent("e2", "e4"), &mut oracle, &mut status), Outcome::Rejected);
        assert_eq!(oracle.move_history().len(), 4);
    }

    #[test]
    fn test_stalemate() {
        // Qc7 leaves the black king on a8 with no moves and not in check
        let mut oracle = oracle_from_fen("k7/8/1K6/8/8/8/8/2Q5 w - - 0 1");
        let mut status = GameStatus::InProgress;
        assert_eq!(apply(intent("c1", "c7"), &mut oracle, &mut status), Outcome::Applied);
        assert_eq!(status.message(), "Stalemate! Draw!");
    }

    #[test]
    fn test_insufficient_material_draw() {
        // the king takes the last rook, leaving bare kings
        let mut oracle = oracle_from_fen("8/8/8/3k4/8/8/3r4/4K3 w - - 0 1");
        let mut status = GameStatus::InProgress;
        assert_eq!(apply(intent("e1", "d2"), &mut oracle, &mut status), Outcome::Applied);
        assert_eq!(status, other_draw());
    }

    fn other_draw() -> GameStatus {
        GameStatus::Over {
            reason: GameOverReason::OtherDraw,
            message: "Game over! Draw!".into(),
        }
    }

    #[test]
    fn test_seventy_five_move_draw() {
        // 149 quiet halfmoves already played
        let mut oracle = oracle_from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 149 120");
        let mut status = GameStatus::InProgress;
        assert_eq!(apply(intent("a1", "a2"), &mut oracle, &mut status), Outcome::Applied);
        assert_eq!(status, other_draw());
    }

    #[test]
    fn test_checkmate_beats_seventy_five_move_draw() {
        let mut oracle = oracle_from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 149 120");
        let mut status = GameStatus::InProgress;
        assert_eq!(apply(intent("a1", "a8"), &mut oracle, &mut status), Outcome::Applied);
        assert_eq!(
            status,
            GameStatus::Over {
                reason: GameOverReason::Checkmate { winner: Color::White },
                message: "Checkmate! White wins!".into(),
            }
        );
    }

    #[test]
    fn test_fivefold_repetition_draw() {
        let mut oracle = ShakmatyOracle::new();
        let mut status = GameStatus::InProgress;
        let shuffle = [("g1", "f3"), ("g8", "f6"), ("f3", "g1"), ("f6", "g8")];
        for _ in 0..4 {
            assert_eq!(status, GameStatus::InProgress);
            for (from, to) in shuffle {
                assert_eq!(apply(intent(from, to), &mut oracle, &mut status), Outcome::Applied);
            }
        }
        assert_eq!(status, other_draw());
    }

    #[test]
    fn test_promotion_on_real_board() {
        let mut oracle = oracle_from_fen("7k/P7/8/8/8/8/8/K7 w - - 0 1");
        let mut status = GameStatus::InProgress;
        assert_eq!(apply(intent("a7", "a8"), &mut oracle, &mut status), Outcome::Applied);
        assert_eq!(
            oracle.piece_at(cell("a8")),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(status, GameStatus::InProgress);
    }
}
