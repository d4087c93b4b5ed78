use engine::graphics::Color;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::board::COLS;
use crate::shapes::{Shape, ShapeKind};

/// The falling (or previewed) tetromino.
///
/// Position is the top-left of the shape's bounding box in board cells. Nothing here checks
/// bounds or collisions: callers validate against the board before committing a change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    shape: Shape,
    color: Color,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Spawn orientation, horizontally centred, top row at 0.
    pub fn new(kind: ShapeKind) -> Self {
        let shape = kind.shape();
        let x = (COLS / 2) as i32 - (shape.width() / 2) as i32;
        Self {
            kind,
            shape,
            color: kind.color(),
            x,
            y: 0,
        }
    }

    pub fn with_position(mut self, x: i32, y: i32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn shape(&self) -> Shape {
        self.shape
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn rotate(&mut self) {
        self.shape = self.shape.rotated();
    }

    /// Absolute board coordinates `(x, y)` of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.cells_at(0, 0)
    }

    pub fn cells_at(&self, dx: i32, dy: i32) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (ox, oy) = (self.x + dx, self.y + dy);
        self.shape
            .cells()
            .map(move |(col, row)| (ox + col as i32, oy + row as i32))
    }
}

/// Uniform random piece selection from an injected generator.
///
/// Every draw is independent: no bag, no history.
#[derive(Debug, Clone)]
pub struct PieceSource {
    rng: StdRng,
}

impl PieceSource {
    pub fn from_rng(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    pub fn next_kind(&mut self) -> ShapeKind {
        ShapeKind::ALL[self.rng.gen_range(0..ShapeKind::ALL.len())]
    }

    pub fn next_piece(&mut self) -> Piece {
        Piece::new(self.next_kind())
    }
}
