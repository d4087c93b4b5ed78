use engine::graphics::Color;

use crate::piece::Piece;

pub const COLS: usize = 10;
pub const ROWS: usize = 20;

/// Points for clearing 0..=4 rows at once, multiplied by the level before the clear.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];
pub const LINES_PER_LEVEL: u32 = 10;

/// `None` is empty; a locked cell remembers the color of the piece that filled it.
pub type Cell = Option<Color>;

/// What a single line-clear pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineClear {
    pub rows: u32,
    pub points: u32,
}

/// The fixed 10x20 playfield plus score, level and line count.
///
/// Row 0 is the top. The board never holds a reference to the falling piece; pieces are passed
/// in for validity checks and copied in on lock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: [[Cell; COLS]; ROWS],
    score: u32,
    level: u32,
    lines: u32,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            grid: [[None; COLS]; ROWS],
            score: 0,
            level: 1,
            lines: 0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn rows(&self) -> &[[Cell; COLS]; ROWS] {
        &self.grid
    }

    /// The cell at `(x, y)`, or `None` both for empty and out-of-range coordinates.
    pub fn cell(&self, x: i32, y: i32) -> Cell {
        if !Self::is_inside(x, y) {
            return None;
        }
        self.grid[y as usize][x as usize]
    }

    /// Overwrites one cell. Used to set up positions directly.
    pub fn set_cell(&mut self, x: usize, y: usize, cell: Cell) {
        if x < COLS && y < ROWS {
            self.grid[y][x] = cell;
        }
    }

    pub fn filled_count(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    /// Anything locked into the top row ends the game.
    pub fn is_topped_out(&self) -> bool {
        self.grid[0].iter().any(|cell| cell.is_some())
    }

    pub fn is_inside(x: i32, y: i32) -> bool {
        (0..COLS as i32).contains(&x) && (0..ROWS as i32).contains(&y)
    }

    /// Whether `piece` shifted by `(dx, dy)` fits.
    ///
    /// Every occupied cell must lie within the columns and above the floor. Cells above the top
    /// row (y < 0) are allowed and skip the occupancy check, so pieces can hang off the top but
    /// never off the sides.
    pub fn is_valid(&self, piece: &Piece, dx: i32, dy: i32) -> bool {
        piece.cells_at(dx, dy).all(|(x, y)| {
            if x < 0 || x >= COLS as i32 || y >= ROWS as i32 {
                return false;
            }
            y < 0 || self.grid[y as usize][x as usize].is_none()
        })
    }

    /// Copies the piece's cells into the grid, then clears completed rows.
    ///
    /// Cells outside the grid (only possible above the top) are dropped.
    pub fn lock_piece(&mut self, piece: &Piece) -> LineClear {
        let color = piece.color();
        for (x, y) in piece.cells() {
            if Self::is_inside(x, y) {
                self.grid[y as usize][x as usize] = Some(color);
            }
        }
        self.clear_lines()
    }

    /// Removes every full row, shifting the rows above down and refilling the top with empty
    /// rows. Scores with the level in effect before the clear, then recomputes the level.
    pub fn clear_lines(&mut self) -> LineClear {
        let mut kept = [[None; COLS]; ROWS];
        let mut write = ROWS;
        for row in self.grid.iter().rev() {
            if row.iter().all(|cell| cell.is_some()) {
                continue;
            }
            write -= 1;
            kept[write] = *row;
        }

        let cleared = write as u32;
        if cleared == 0 {
            return LineClear::default();
        }
        self.grid = kept;

        let base = LINE_SCORES[(cleared as usize).min(LINE_SCORES.len() - 1)];
        let points = base.saturating_mul(self.level);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(cleared);
        self.level = 1 + self.lines / LINES_PER_LEVEL;

        LineClear {
            rows: cleared,
            points,
        }
    }
}
