//! Rules oracle: the seam between the board UI and the chess rules library
//!
//! Everything that needs chess knowledge (legal moves, check, mate, draws,
//! castling, en passant, promotion) is answered by `shakmaty`. This module
//! only translates between our (row, col) cells and its squares.

use crate::coords::Cell;
use shakmaty::san::San;
use shakmaty::zobrist::{Zobrist64, ZobristHash};
use shakmaty::{Chess, EnPassantMode, File, Move, Position, Rank, Role, Square};
use std::collections::BTreeSet;

/// Halfmoves without a capture or pawn move after which the game is drawn.
const SEVENTY_FIVE_MOVE_HALFMOVES: u32 = 150;

/// Occurrences of one position that end the game in a draw.
const FIVEFOLD_REPETITION: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// Glyph used when no sprite is available.
    pub fn symbol(&self) -> &'static str {
        match (self.color, self.kind) {
            (Color::White, PieceKind::King) => "♔",
            (Color::White, PieceKind::Queen) => "♕",
            (Color::White, PieceKind::Rook) => "♖",
            (Color::White, PieceKind::Bishop) => "♗",
            (Color::White, PieceKind::Knight) => "♘",
            (Color::White, PieceKind::Pawn) => "♙",
            (Color::Black, PieceKind::King) => "♚",
            (Color::Black, PieceKind::Queen) => "♛",
            (Color::Black, PieceKind::Rook) => "♜",
            (Color::Black, PieceKind::Bishop) => "♝",
            (Color::Black, PieceKind::Knight) => "♞",
            (Color::Black, PieceKind::Pawn) => "♟",
        }
    }

    /// Sprite name, e.g. `wp` or `bQ`.
    pub fn image_key(&self) -> String {
        let color = match self.color {
            Color::White => 'w',
            Color::Black => 'b',
        };
        let kind = match self.kind {
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
            PieceKind::Rook => 'R',
            PieceKind::Bishop => 'B',
            PieceKind::Knight => 'N',
            PieceKind::Pawn => 'p',
        };
        format!("{}{}", color, kind)
    }

    /// All twelve pieces, in sprite loading order.
    pub fn all() -> impl Iterator<Item = Piece> {
        const KINDS: [PieceKind; 6] = [
            PieceKind::Pawn,
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::King,
            PieceKind::Queen,
        ];
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| KINDS.into_iter().map(move |kind| Piece::new(kind, color)))
    }
}

/// Everything the session needs to know about the game position.
///
/// The oracle owns the authoritative board. Callers never see it directly;
/// they ask questions in terms of cells.
pub trait RulesOracle {
    /// Legal target cells for the piece on `cell`. Empty when there is no
    /// piece, it is not that side's turn, or it has no legal moves.
    fn legal_destinations_from(&self, cell: Cell) -> BTreeSet<Cell>;

    /// Play `from → to` if it is legal. `promotion` is only used when the
    /// move is a pawn reaching the last rank.
    fn try_apply_move(&mut self, from: Cell, to: Cell, promotion: PieceKind) -> bool;

    fn is_game_over(&self) -> bool;
    fn is_checkmate(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn is_check(&self) -> bool;
    fn side_to_move(&self) -> Color;
    fn piece_at(&self, cell: Cell) -> Option<Piece>;

    /// Moves played so far, in SAN.
    fn move_history(&self) -> &[String];

    /// Back to the standard starting position.
    fn reset(&mut self);
}

/// Production oracle backed by `shakmaty`.
#[derive(Clone, Debug)]
pub struct ShakmatyOracle {
    position: Chess,
    history: Vec<String>,
    /// Position hashes since the last capture or pawn move, current one last.
    repetitions: Vec<Zobrist64>,
}

impl Default for ShakmatyOracle {
    fn default() -> Self {
        Self::new()
    }
}

impl ShakmatyOracle {
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_position(position: Chess) -> Self {
        let repetitions = vec![position_hash(&position)];
        Self { position, history: Vec::new(), repetitions }
    }

    fn is_fivefold_repetition(&self) -> bool {
        self.repetitions.last().map_or(false, |current| {
            self.repetitions.iter().filter(|h| *h == current).count() >= FIVEFOLD_REPETITION
        })
    }

    fn find_move(&self, from: Square, to: Square, promotion: Role) -> Option<Move> {
        self.position.legal_moves().into_iter().find(|m| {
            m.from() == Some(from)
                && destination(m) == to
                && m.promotion().map_or(true, |role| role == promotion)
        })
    }
}

impl RulesOracle for ShakmatyOracle {
    fn legal_destinations_from(&self, cell: Cell) -> BTreeSet<Cell> {
        let from = to_square(cell);
        self.position
            .legal_moves()
            .iter()
            .filter(|m| m.from() == Some(from))
            .filter_map(|m| to_cell(destination(m)))
            .collect()
    }

    fn try_apply_move(&mut self, from: Cell, to: Cell, promotion: PieceKind) -> bool {
        let Some(m) = self.find_move(to_square(from), to_square(to), to_role(promotion)) else {
            return false;
        };
        let san = San::from_move(&self.position, &m);
        self.history.push(san.to_string());
        self.position.play_unchecked(&m);

        // captures and pawn moves make earlier positions unreachable
        if self.position.halfmoves() == 0 {
            self.repetitions.clear();
        }
        self.repetitions.push(position_hash(&self.position));
        true
    }

    fn is_game_over(&self) -> bool {
        self.position.is_game_over()
            || self.position.halfmoves() >= SEVENTY_FIVE_MOVE_HALFMOVES
            || self.is_fivefold_repetition()
    }

    fn is_checkmate(&self) -> bool {
        self.position.is_checkmate()
    }

    fn is_stalemate(&self) -> bool {
        self.position.is_stalemate()
    }

    fn is_check(&self) -> bool {
        self.position.is_check()
    }

    fn side_to_move(&self) -> Color {
        from_color(self.position.turn())
    }

    fn piece_at(&self, cell: Cell) -> Option<Piece> {
        self.position.board().piece_at(to_square(cell)).map(from_piece)
    }

    fn move_history(&self) -> &[String] {
        &self.history
    }

    fn reset(&mut self) {
        *self = Self::new();
    }
}

fn position_hash(position: &Chess) -> Zobrist64 {
    position.zobrist_hash(EnPassantMode::Legal)
}

/// Where the moving piece lands. Castling is reported as the king's
/// two-square step rather than the rook square shakmaty stores.
fn destination(m: &Move) -> Square {
    match m {
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Square::from_coords(file, king.rank())
        }
        _ => m.to(),
    }
}

fn to_square(cell: Cell) -> Square {
    let file = File::new(u32::from(cell.col()));
    let rank = Rank::new(7 - u32::from(cell.row()));
    Square::from_coords(file, rank)
}

fn to_cell(square: Square) -> Option<Cell> {
    let row = 7 - square.rank() as u8;
    let col = square.file() as u8;
    Cell::new(row, col)
}

fn to_role(kind: PieceKind) -> Role {
    match kind {
        PieceKind::King => Role::King,
        PieceKind::Queen => Role::Queen,
        PieceKind::Rook => Role::Rook,
        PieceKind::Bishop => Role::Bishop,
        PieceKind::Knight => Role::Knight,
        PieceKind::Pawn => Role::Pawn,
    }
}

fn from_color(color: shakmaty::Color) -> Color {
    match color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    }
}

fn from_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::King => PieceKind::King,
        Role::Queen => PieceKind::Queen,
        Role::Rook => PieceKind::Rook,
        Role::Bishop => PieceKind::Bishop,
        Role::Knight => PieceKind::Knight,
        Role::Pawn => PieceKind::Pawn,
    };
    Piece::new(kind, from_color(piece.color))
}
