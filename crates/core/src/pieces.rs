//! Pieces module - piece shapes and the active piece instance
//!
//! Every kind has one canonical shape, a square bitmap of 0/1 cells. Pieces
//! own a deep copy of that bitmap; rotating a piece replaces its copy with a
//! rotated one and never touches the canonical definition.

use crate::matrix::rotate_clockwise;
use crate::types::{PieceKind, Rgb};

const I_SHAPE: &[&[u8]] = &[&[0, 0, 0, 0], &[1, 1, 1, 1], &[0, 0, 0, 0], &[0, 0, 0, 0]];
const O_SHAPE: &[&[u8]] = &[&[1, 1], &[1, 1]];
const T_SHAPE: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]];
const S_SHAPE: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]];
const Z_SHAPE: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]];
const J_SHAPE: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]];
const L_SHAPE: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]];

/// Canonical (spawn orientation) bitmap of a piece kind.
pub fn canonical_shape(kind: PieceKind) -> &'static [&'static [u8]] {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
    }
}

/// Owned bitmap of a piece, row-major, nonzero = filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: Vec<Vec<u8>>,
}

impl Shape {
    /// Deep copy of the canonical shape for `kind`.
    pub fn canonical(kind: PieceKind) -> Self {
        Self {
            rows: canonical_shape(kind).iter().map(|row| row.to_vec()).collect(),
        }
    }

    pub fn rows(&self) -> &[Vec<u8>] {
        &self.rows
    }

    /// Number of columns (length of the first row).
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_filled(&self, dx: usize, dy: usize) -> bool {
        self.rows
            .get(dy)
            .and_then(|row| row.get(dx))
            .is_some_and(|&v| v != 0)
    }

    /// Offsets `(dx, dy)` of every filled cell, row by row.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(dy, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &v)| v != 0)
                .map(move |(dx, _)| (dx as i8, dy as i8))
        })
    }

    /// A new shape rotated 90° clockwise.
    pub fn rotated_cw(&self) -> Self {
        Self {
            rows: rotate_clockwise(&self.rows),
        }
    }
}

/// A piece instance: kind, owned shape and position of the shape's top-left cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece in its canonical orientation at (0, 0).
    ///
    /// The caller assigns the start position.
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::canonical(kind),
            x: 0,
            y: 0,
        }
    }

    pub fn color(&self) -> Rgb {
        self.kind.color()
    }

    /// Column that centers the shape horizontally on a board `board_width` wide.
    pub fn centered_x(&self, board_width: u8) -> i8 {
        (board_width as i8 - self.shape.width() as i8).div_euclid(2)
    }
}
