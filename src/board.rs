//! Visit-count board and the digest-driven walk that fills it.

use crate::{Error, Result};
use alloc::{vec, vec::Vec};

/// Direction table indexed by the low 3 bits of a nibble.
///
/// Entries are `(Δrow, Δcol)` with `-1` row meaning up and `-1` col meaning
/// left, laid out clockwise starting from the upper-left neighbor:
///
/// ```text
/// 0 1 2
/// 7 X 3
/// 6 5 4
/// ```
const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1), // 0: up-left
    (-1, 0),  // 1: up
    (-1, 1),  // 2: up-right
    (0, 1),   // 3: right
    (1, 1),   // 4: down-right
    (1, 0),   // 5: down
    (1, -1),  // 6: down-left
    (0, -1),  // 7: left
];

/// Board dimensions.
///
/// The board is a torus: all indexing is reduced modulo the dimensions, so
/// any nonzero pair of dimensions is walkable without bounds errors. The
/// default is the canonical 8×16 layout.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Layout {
    rows: usize,
    cols: usize,
}

impl Layout {
    /// Create a layout with the given dimensions.
    ///
    /// Returns [`Error::LayoutInvalid`] if either dimension is zero.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::LayoutInvalid { rows, cols });
        }

        Ok(Self { rows, cols })
    }

    /// Number of rows.
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub const fn cols(self) -> usize {
        self.cols
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self { rows: 8, cols: 16 }
    }
}

/// Board of signed visit counts produced by walking a digest.
///
/// Each cell accumulates ±1 updates as the walk passes over it. Counts are
/// unbounded in either direction; rendering only ever observes them modulo
/// the alphabet size, via a non-negative remainder.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Board {
    layout: Layout,
    cells: Vec<i32>,
}

impl Board {
    /// Walk the given digest bytes over a fresh board.
    ///
    /// The cursor is seeded from the first byte: the high nibble selects the
    /// starting row and the low 3 bits the starting column, both reduced
    /// into range. Every following byte is processed high nibble first: the
    /// low 3 bits of each nibble pick a step from [`DIRECTIONS`], the cursor
    /// moves with toroidal wraparound, and the nibble's top bit selects
    /// whether the resulting cell is incremented or decremented.
    ///
    /// Digests shorter than 2 bytes are too short to visualize and yield
    /// the all-zero board.
    pub fn walk(layout: Layout, digest: &[u8]) -> Self {
        let mut board = Self {
            layout,
            cells: vec![0; layout.rows() * layout.cols()],
        };

        let Some((seed, rest)) = digest.split_first() else {
            return board;
        };

        if rest.is_empty() {
            return board;
        }

        let mut row = (seed >> 4) as usize % layout.rows();
        let mut col = (seed & 0x7) as usize % layout.cols();

        for byte in rest {
            for nibble in [byte >> 4, byte & 0xF] {
                (row, col) = advance(layout, row, col, nibble & 0x7);

                let cell = &mut board.cells[row * layout.cols() + col];
                *cell += if nibble >> 3 == 0 { -1 } else { 1 };
            }
        }

        board
    }

    /// Get the layout this board was allocated with.
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Get the count at the given position, or `None` if out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        if row < self.layout.rows() && col < self.layout.cols() {
            self.cells.get(row * self.layout.cols() + col).copied()
        } else {
            None
        }
    }

    /// Get all counts in row-major order.
    pub fn cells(&self) -> &[i32] {
        &self.cells
    }
}

/// Move the cursor one step in direction `d` (0..8), wrapping around the
/// board edges.
fn advance(layout: Layout, row: usize, col: usize, d: u8) -> (usize, usize) {
    let (dr, dc) = DIRECTIONS[(d & 0x7) as usize];

    let row = (row as isize + dr as isize).rem_euclid(layout.rows() as isize);
    let col = (col as isize + dc as isize).rem_euclid(layout.cols() as isize);

    (row as usize, col as usize)
}

#[cfg(test)]
mod tests {
    use super::{advance, Board, Layout, DIRECTIONS};
    use crate::Error;

    #[test]
    fn layout_rejects_zero_dimensions() {
        assert_eq!(
            Layout::new(0, 16),
            Err(Error::LayoutInvalid { rows: 0, cols: 16 })
        );
        assert_eq!(
            Layout::new(8, 0),
            Err(Error::LayoutInvalid { rows: 8, cols: 0 })
        );
        assert_eq!(
            Layout::new(0, 0),
            Err(Error::LayoutInvalid { rows: 0, cols: 0 })
        );
        assert!(Layout::new(1, 1).is_ok());
    }

    #[test]
    fn direction_table_is_a_bijection_onto_the_neighborhood() {
        let mut seen = [[false; 3]; 3];

        for (dr, dc) in DIRECTIONS {
            assert!((-1..=1).contains(&dr));
            assert!((-1..=1).contains(&dc));
            assert!((dr, dc) != (0, 0), "no direction may stand still");

            let cell = &mut seen[(dr + 1) as usize][(dc + 1) as usize];
            assert!(!*cell, "duplicate direction ({dr}, {dc})");
            *cell = true;
        }
    }

    #[test]
    fn wraparound_from_every_corner() {
        let layout = Layout::default();
        let corners = [
            (0, 0),
            (0, layout.cols() - 1),
            (layout.rows() - 1, 0),
            (layout.rows() - 1, layout.cols() - 1),
        ];

        for (row, col) in corners {
            for d in 0..8u8 {
                let (new_row, new_col) = advance(layout, row, col, d);
                assert!(new_row < layout.rows());
                assert!(new_col < layout.cols());
            }
        }
    }

    #[test]
    fn wraparound_on_a_single_cell_board() {
        let layout = Layout::new(1, 1).expect("valid layout");

        for d in 0..8u8 {
            assert_eq!(advance(layout, 0, 0, d), (0, 0));
        }
    }

    #[test]
    fn degenerate_digests_yield_the_zero_board() {
        let layout = Layout::default();

        for digest in [&[][..], &[0x00][..], &[0xff][..]] {
            let board = Board::walk(layout, digest);
            assert!(board.cells().iter().all(|&c| c == 0));
            assert_eq!(board.cells().len(), layout.rows() * layout.cols());
        }
    }

    #[test]
    fn walk_is_deterministic() {
        let digest = [0xde, 0xad, 0xbe, 0xef, 0x01, 0x23, 0x45, 0x67];
        let layout = Layout::default();

        assert_eq!(Board::walk(layout, &digest), Board::walk(layout, &digest));
    }

    #[test]
    fn two_byte_digest_decrements_two_cells() {
        // Seed 0x7a: row 7, col 2. Byte 0x00 steps up-left twice, both times
        // with the increment flag clear.
        let board = Board::walk(Layout::default(), &[0x7a, 0x00]);

        assert_eq!(board.get(6, 1), Some(-1));
        assert_eq!(board.get(5, 0), Some(-1));
        assert_eq!(board.cells().iter().map(|&c| c.abs()).sum::<i32>(), 2);
    }

    #[test]
    fn two_byte_digest_increments_two_cells() {
        // Seed 0xff: row 7 (15 % 8), col 7. Byte 0x88 steps up-left twice
        // with the increment flag set.
        let board = Board::walk(Layout::default(), &[0xff, 0x88]);

        assert_eq!(board.get(6, 6), Some(1));
        assert_eq!(board.get(5, 5), Some(1));
        assert_eq!(board.cells().iter().sum::<i32>(), 2);
    }

    #[test]
    fn walk_wraps_left_edge() {
        // Seed 0x00: row 0, col 0. Nibble 0xf stays on row 0 and steps left,
        // wrapping to the last column, incrementing as it goes.
        let board = Board::walk(Layout::default(), &[0x00, 0xff]);

        assert_eq!(board.get(0, 15), Some(1));
        assert_eq!(board.get(0, 14), Some(1));
    }

    #[test]
    fn update_conservation() {
        // Every processed byte applies exactly two ±1 updates, so the total
        // absolute magnitude of all counts never exceeds 2 * (len - 1) and
        // the signed sum has the same parity.
        let digest = [
            0x7f, 0x0a, 0xd4, 0xc9, 0x6e, 0x98, 0x1b, 0x04, 0x12, 0xff, 0xd4, 0xdf, 0x6a, 0x14,
            0x7e, 0x72,
        ];
        let board = Board::walk(Layout::default(), &digest);
        let updates = 2 * (digest.len() as i32 - 1);

        let magnitude: i32 = board.cells().iter().map(|&c| c.abs()).sum();
        let sum: i32 = board.cells().iter().sum();

        assert!(magnitude <= updates);
        assert_eq!(magnitude % 2, updates % 2);
        assert_eq!(sum.rem_euclid(2), 0);
    }

    #[test]
    fn custom_layouts_walk_without_panicking() {
        let digest = [0xab, 0xcd, 0xef, 0x12, 0x34];

        for (rows, cols) in [(1, 1), (1, 16), (8, 1), (3, 5), (16, 32)] {
            let layout = Layout::new(rows, cols).expect("valid layout");
            let board = Board::walk(layout, &digest);
            assert_eq!(board.cells().len(), rows * cols);
        }
    }
}
