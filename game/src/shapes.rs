//! The seven tetromino shapes and the rotation transform.

use engine::graphics::{Color, rgb};

/// Largest extent of any shape in either direction.
pub const MAX_SHAPE_DIM: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    pub fn color(self) -> Color {
        match self {
            ShapeKind::I => rgb(0, 255, 255),
            ShapeKind::J => rgb(0, 0, 255),
            ShapeKind::L => rgb(255, 165, 0),
            ShapeKind::O => rgb(255, 255, 0),
            ShapeKind::S => rgb(0, 255, 0),
            ShapeKind::T => rgb(128, 0, 128),
            ShapeKind::Z => rgb(255, 0, 0),
        }
    }

    /// The spawn orientation. Padding rows are part of the matrix.
    pub fn shape(self) -> Shape {
        match self {
            ShapeKind::I => Shape::from_rows(&["0000", "1111", "0000", "0000"]),
            ShapeKind::J => Shape::from_rows(&["100", "111", "000"]),
            ShapeKind::L => Shape::from_rows(&["001", "111", "000"]),
            ShapeKind::O => Shape::from_rows(&["11", "11"]),
            ShapeKind::S => Shape::from_rows(&["011", "110", "000"]),
            ShapeKind::T => Shape::from_rows(&["010", "111", "000"]),
            ShapeKind::Z => Shape::from_rows(&["110", "011", "000"]),
        }
    }
}

/// One orientation of a shape: up to four rows, each with its own length.
///
/// Rows may be ragged once a rotation has trimmed trailing empty cells; a cell past the end of
/// its row is empty. Cells past a row's length are always stored as `false`, so derived equality
/// compares orientations exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    row_len: [u8; MAX_SHAPE_DIM],
    rows: u8,
}

impl Shape {
    const EMPTY: Shape = Shape {
        cells: [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
        row_len: [0; MAX_SHAPE_DIM],
        rows: 0,
    };

    /// Builds a shape from rows of `'1'` (filled) and anything else (empty).
    ///
    /// Input beyond [`MAX_SHAPE_DIM`] rows or columns is ignored.
    pub fn from_rows(rows: &[&str]) -> Self {
        let mut shape = Self::EMPTY;
        for (r, row) in rows.iter().take(MAX_SHAPE_DIM).enumerate() {
            let mut len = 0;
            for (c, ch) in row.chars().take(MAX_SHAPE_DIM).enumerate() {
                shape.cells[r][c] = ch == '1';
                len = c + 1;
            }
            shape.row_len[r] = len as u8;
            shape.rows = (r + 1) as u8;
        }
        shape
    }

    /// Bounding-box width: the longest row.
    pub fn width(&self) -> usize {
        self.row_len[..self.height()]
            .iter()
            .copied()
            .max()
            .unwrap_or(0) as usize
    }

    pub fn height(&self) -> usize {
        self.rows as usize
    }

    pub fn row_len(&self, row: usize) -> usize {
        if row < self.height() {
            self.row_len[row] as usize
        } else {
            0
        }
    }

    pub fn is_filled(&self, col: usize, row: usize) -> bool {
        col < self.row_len(row) && self.cells[row][col]
    }

    /// Occupied cells as `(col, row)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(move |row| {
            (0..self.row_len(row))
                .filter(move |&col| self.cells[row][col])
                .map(move |col| (col, row))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }

    /// Quarter turn clockwise.
    ///
    /// The result has `width()` rows of `height()` columns with
    /// `new[r][c] = old[height - 1 - c][r]`; each new row then drops its trailing empty cells.
    pub fn rotated(&self) -> Shape {
        let old_w = self.width();
        let old_h = self.height();

        let mut out = Self::EMPTY;
        out.rows = old_w as u8;
        for new_row in 0..old_w {
            let mut len = 0;
            for new_col in 0..old_h {
                if self.is_filled(new_row, old_h - 1 - new_col) {
                    out.cells[new_row][new_col] = true;
                    len = new_col + 1;
                }
            }
            out.row_len[new_row] = len as u8;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_shapes_keep_padding_rows() {
        let i = ShapeKind::I.shape();
        assert_eq!((i.width(), i.height()), (4, 4));
        assert_eq!(i.cells().collect::<Vec<_>>(), vec![(0, 1), (1, 1), (2, 1), (3, 1)]);

        let o = ShapeKind::O.shape();
        assert_eq!((o.width(), o.height()), (2, 2));
    }

    #[test]
    fn every_shape_has_four_cells() {
        for kind in ShapeKind::ALL {
            assert_eq!(kind.shape().cell_count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn t_rotation_trims_trailing_columns() {
        let t = ShapeKind::T.shape().rotated();
        assert_eq!(t.height(), 3);
        assert_eq!((t.row_len(0), t.row_len(1), t.row_len(2)), (2, 3, 2));
        assert_eq!(t.cells().collect::<Vec<_>>(), vec![(1, 0), (1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn empty_rows_trim_to_zero_length_but_still_count() {
        // Two turns of I: the first two rows end up empty.
        let i = ShapeKind::I.shape().rotated().rotated();
        assert_eq!(i.height(), 3);
        assert_eq!(i.row_len(0), 0);
        assert_eq!(i.row_len(1), 0);
        assert_eq!(i.cells().collect::<Vec<_>>(), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn o_is_a_fixed_point() {
        let o = ShapeKind::O.shape();
        assert_eq!(o.rotated(), o);
    }
}
