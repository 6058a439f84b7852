//! Coordinate mapping between window pixels, display cells and board squares
//!
//! Three spaces are involved:
//!
//! - **Pixels**: window logical pixels, origin at the top-left, y grows down.
//! - **Display cells**: `(row, col)` on the drawn 8×8 grid, row 0 at the top.
//! - **Squares**: rules-engine squares, independent of how the board is drawn.
//!
//! Orientation only affects the cell ↔ square step. The pixel ↔ cell step only
//! depends on [`BoardGeometry`].

use bevy::math::{Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::game::types::Square;

/// Which side of the board is drawn at the bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// White at the bottom, rank 8 on the top row
    #[default]
    Standard,
    /// Black at the bottom, both axes mirrored
    Flipped,
}

impl Orientation {
    pub fn is_flipped(self) -> bool {
        self == Orientation::Flipped
    }

    pub fn toggled(self) -> Self {
        match self {
            Orientation::Standard => Orientation::Flipped,
            Orientation::Flipped => Orientation::Standard,
        }
    }
}

/// A cell of the drawn grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayCell {
    pub row: u8,
    pub col: u8,
}

impl DisplayCell {
    /// `None` unless both coordinates are in `0..8`
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < 8 && col < 8).then_some(Self { row, col })
    }

    /// Light squares sit where `row + col` is even
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    pub fn all() -> impl Iterator<Item = DisplayCell> {
        (0..8).flat_map(|row| (0..8).map(move |col| DisplayCell { row, col }))
    }
}

/// Where on the screen a square is drawn
pub fn square_to_cell(square: Square, orientation: Orientation) -> DisplayCell {
    let (file, rank) = (square.file(), square.rank());
    match orientation {
        Orientation::Standard => DisplayCell {
            row: 7 - rank,
            col: file,
        },
        Orientation::Flipped => DisplayCell {
            row: rank,
            col: 7 - file,
        },
    }
}

/// Which square a drawn cell shows, `None` for a cell outside the grid
pub fn cell_to_square(cell: DisplayCell, orientation: Orientation) -> Option<Square> {
    if cell.row >= 8 || cell.col >= 8 {
        return None;
    }
    match orientation {
        Orientation::Standard => Square::from_coords(cell.col, 7 - cell.row),
        Orientation::Flipped => Square::from_coords(7 - cell.col, cell.row),
    }
}

/// Pixel sizes of the board and its surroundings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardGeometry {
    pub square_size: f32,
    /// Space between the window edge and the grid, holds the rank labels
    pub outer_margin: f32,
    /// Extra space below the grid for the file labels and status line
    pub label_gap: f32,
    pub square_radius: f32,
    pub frame_radius: f32,
}

impl Default for BoardGeometry {
    fn default() -> Self {
        Self::with_square_size(72.0)
    }
}

impl BoardGeometry {
    pub fn with_square_size(square_size: f32) -> Self {
        Self {
            square_size,
            outer_margin: 40.0,
            label_gap: 28.0,
            square_radius: 10.0,
            frame_radius: 18.0,
        }
    }

    /// Side length of the 8×8 grid
    pub fn board_pixels(&self) -> f32 {
        8.0 * self.square_size
    }

    pub fn window_size(&self) -> Vec2 {
        let board = self.board_pixels();
        Vec2::new(
            2.0 * self.outer_margin + board,
            2.0 * self.outer_margin + self.label_gap + board,
        )
    }

    pub fn board_rect(&self) -> Rect {
        let min = Vec2::splat(self.outer_margin);
        Rect::from_corners(min, min + Vec2::splat(self.board_pixels()))
    }

    /// Border drawn around the grid
    pub fn frame_rect(&self) -> Rect {
        self.board_rect().inflate(8.0)
    }

    /// Grid cell under a pixel, `None` outside the grid (margins included)
    ///
    /// Offsets are floor-divided so the shared edge of two cells always
    /// belongs to the lower-right one.
    pub fn pixel_to_cell(&self, pixel: Vec2) -> Option<DisplayCell> {
        let offset = pixel - Vec2::splat(self.outer_margin);
        let board = self.board_pixels();
        let inside = |v: f32| v >= 0.0 && v < board;
        if !(inside(offset.x) && inside(offset.y)) {
            return None;
        }
        let col = (offset.x / self.square_size).floor() as u8;
        let row = (offset.y / self.square_size).floor() as u8;
        DisplayCell::new(row.min(7), col.min(7))
    }

    pub fn cell_rect(&self, cell: DisplayCell) -> Rect {
        let min = Vec2::new(
            self.outer_margin + f32::from(cell.col) * self.square_size,
            self.outer_margin + f32::from(cell.row) * self.square_size,
        );
        Rect::from_corners(min, min + Vec2::splat(self.square_size))
    }

    pub fn cell_center(&self, cell: DisplayCell) -> Vec2 {
        self.cell_rect(cell).center()
    }

    /// Centre of the file label under grid column `col`
    pub fn file_label_center(&self, col: u8) -> Vec2 {
        Vec2::new(
            self.outer_margin + (f32::from(col) + 0.5) * self.square_size,
            self.outer_margin + self.board_pixels() + 6.0 + 0.5 * self.label_font_size(),
        )
    }

    /// Centre of the rank label left of grid row `row`
    pub fn rank_label_center(&self, row: u8) -> Vec2 {
        Vec2::new(
            self.outer_margin * 0.5 - 2.0,
            self.outer_margin + (f32::from(row) + 0.5) * self.square_size,
        )
    }

    /// Centre of the one-line status caption under the file labels
    pub fn status_line_center(&self) -> Vec2 {
        let size = self.window_size();
        Vec2::new(
            size.x * 0.5,
            self.outer_margin + self.board_pixels() + self.label_gap + 0.5 * self.outer_margin,
        )
    }

    pub fn label_font_size(&self) -> f32 {
        16.0
    }

    pub fn glyph_font_size(&self) -> f32 {
        self.square_size * 0.8
    }
}

/// File letters along the bottom edge, left to right
pub fn file_labels(orientation: Orientation) -> [char; 8] {
    let mut labels = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];
    if orientation.is_flipped() {
        labels.reverse();
    }
    labels
}

/// Rank digits along the left edge, top to bottom
pub fn rank_labels(orientation: Orientation) -> [char; 8] {
    let mut labels = ['8', '7', '6', '5', '4', '3', '2', '1'];
    if orientation.is_flipped() {
        labels.reverse();
    }
    labels
}
