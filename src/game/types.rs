//! Type definitions for the chess vocabulary shared by the interaction core,
//! the rules adapter and the renderer
//!
//! These are plain value types with no dependency on Bevy or on the rules
//! engine, so any engine can be adapted to them at the [`RulesEngine`] seam.
//!
//! [`RulesEngine`]: crate::game::rules::RulesEngine

use std::fmt;

/// One of the 64 board squares, stored as a linear index
///
/// `index = rank * 8 + file`, so a1 = 0, h1 = 7, a8 = 56 and h8 = 63.
/// Equality and ordering are by index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Build a square from a linear index, `None` if the index is not in `0..64`
    pub fn from_index(index: u8) -> Option<Self> {
        (index < 64).then_some(Square(index))
    }

    /// Build a square from file (0 = a) and rank (0 = rank 1) indices
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let e4 = Square::from_coords(4, 3).unwrap();
    /// assert_eq!(e4.to_string(), "e4");
    /// ```
    pub fn from_coords(file: u8, rank: u8) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(rank * 8 + file))
        } else {
            None
        }
    }

    /// Parse algebraic notation such as `"e4"`
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file_char = chars.next()?;
        let rank_char = chars.next()?;
        if chars.next().is_some() {
            return None;
        }
        let file = match file_char {
            'a'..='h' => file_char as u8 - b'a',
            _ => return None,
        };
        let rank = match rank_char {
            '1'..='8' => rank_char as u8 - b'1',
            _ => return None,
        };
        Square::from_coords(file, rank)
    }

    /// Every square in index order (a1, b1, ..., h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Linear index in `0..64`
    #[inline]
    pub fn index(self) -> u8 {
        self.0
    }

    /// File index, 0 = file a
    #[inline]
    pub fn file(self) -> u8 {
        self.0 % 8
    }

    /// Rank index, 0 = rank 1
    #[inline]
    pub fn rank(self) -> u8 {
        self.0 / 8
    }

    /// File letter (`'a'..='h'`)
    pub fn file_char(self) -> char {
        (b'a' + self.file()) as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank() + 1)
    }
}

/// Side of a piece or of the player to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Rank index a pawn of this colour promotes on
    pub fn promotion_rank(self) -> u8 {
        match self {
            PieceColor::White => 7,
            PieceColor::Black => 0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// The four kinds a pawn may promote to, in the order the overlay shows them
    pub const PROMOTION_CHOICES: [PieceType; 4] = [
        PieceType::Queen,
        PieceType::Rook,
        PieceType::Bishop,
        PieceType::Knight,
    ];

    /// Uppercase letter used by the fallback glyph set and by logs
    pub fn letter(self) -> char {
        match self {
            PieceType::Pawn => 'P',
            PieceType::Knight => 'N',
            PieceType::Bishop => 'B',
            PieceType::Rook => 'R',
            PieceType::Queen => 'Q',
            PieceType::King => 'K',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Self { color, piece_type }
    }
}

/// A move as submitted to the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MoveCommand {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl MoveCommand {
    pub fn new(from: Square, to: Square, promotion: Option<PieceType>) -> Self {
        Self {
            from,
            to,
            promotion,
        }
    }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "={}", kind.letter())?;
        }
        Ok(())
    }
}

/// A legal move from a known source square, as reported by the rules engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LegalMove {
    pub to: Square,
    pub promotion: Option<PieceType>,
    pub is_capture: bool,
}
