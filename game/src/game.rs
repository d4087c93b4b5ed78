//! The controller: owns the board and the current/next pieces and turns keys and elapsed time
//! into moves, locks and line clears.

use std::time::Duration;

use engine::GameLogic;

use crate::board::Board;
use crate::piece::{Piece, PieceSource};

pub const DEFAULT_BASE_FALL: Duration = Duration::from_millis(800);

/// Each level above the first divides the fall interval by a further 0.12.
pub const LEVEL_SPEEDUP: f64 = 0.12;

/// Offsets tried, in order, when a rotation lands somewhere invalid.
const ROTATION_NUDGES: [(i32, i32); 3] = [(-1, 0), (1, 0), (0, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Falling,
    Paused,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Down,
    Up,
    Space,
    Pause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameInput {
    Key(Key),
    Tick(Duration),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEffect {
    Moved,
    Rotated,
    Locked { lines: u32 },
    LinesCleared { rows: u32, points: u32, level: u32 },
    LevelUp(u32),
    /// Something locked into the top row; the board was replaced with an empty one.
    BoardReset { final_score: u32, final_lines: u32 },
    Paused,
    Resumed,
}

#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    current: Piece,
    next: Piece,
    source: PieceSource,
    mode: Mode,
    fall_time: Duration,
    base_fall: Duration,
}

impl Game {
    pub fn new(seed: u64, base_fall: Duration) -> Self {
        Self::with_source(PieceSource::seeded(seed), base_fall)
    }

    pub fn with_source(mut source: PieceSource, base_fall: Duration) -> Self {
        let current = source.next_piece();
        let next = source.next_piece();
        Self {
            board: Board::new(),
            current,
            next,
            source,
            mode: Mode::Falling,
            fall_time: Duration::ZERO,
            base_fall,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> &Piece {
        &self.current
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn set_current_piece(&mut self, piece: Piece) {
        self.current = piece;
    }

    pub fn set_next_piece(&mut self, piece: Piece) {
        self.next = piece;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_paused(&self) -> bool {
        self.mode == Mode::Paused
    }

    pub fn fall_time(&self) -> Duration {
        self.fall_time
    }

    pub fn base_fall(&self) -> Duration {
        self.base_fall
    }

    /// Time between gravity steps at the current level.
    pub fn fall_interval(&self) -> Duration {
        let level = self.board.level().max(1);
        let divisor = 1.0 + f64::from(level - 1) * LEVEL_SPEEDUP;
        self.base_fall.div_f64(divisor)
    }

    pub fn apply(&mut self, input: GameInput) -> Vec<GameEffect> {
        match input {
            GameInput::Key(key) => self.key(key),
            GameInput::Tick(dt) => self.tick(dt),
        }
    }

    /// Handles one key-down. While paused only `Pause` does anything.
    pub fn key(&mut self, key: Key) -> Vec<GameEffect> {
        let mut effects = Vec::new();
        if key == Key::Pause {
            self.toggle_pause(&mut effects);
            return effects;
        }
        if self.is_paused() {
            return effects;
        }

        match key {
            Key::Left => self.shift(-1, &mut effects),
            Key::Right => self.shift(1, &mut effects),
            Key::Down => {
                if self.board.is_valid(&self.current, 0, 1) {
                    self.current.y += 1;
                    self.fall_time = Duration::ZERO;
                    effects.push(GameEffect::Moved);
                }
            }
            Key::Up => {
                if self.rotate_current() {
                    effects.push(GameEffect::Rotated);
                }
            }
            Key::Space => {
                while self.board.is_valid(&self.current, 0, 1) {
                    self.current.y += 1;
                }
                self.lock_current(&mut effects);
            }
            Key::Pause => {}
        }
        effects
    }

    /// Advances the fall timer; at most one gravity step per tick.
    pub fn tick(&mut self, dt: Duration) -> Vec<GameEffect> {
        let mut effects = Vec::new();
        if self.is_paused() {
            return effects;
        }

        self.fall_time = self.fall_time.saturating_add(dt);
        if self.fall_time > self.fall_interval() {
            self.fall_time = Duration::ZERO;
            if self.board.is_valid(&self.current, 0, 1) {
                self.current.y += 1;
            } else {
                self.lock_current(&mut effects);
            }
        }
        effects
    }

    fn toggle_pause(&mut self, effects: &mut Vec<GameEffect>) {
        self.mode = match self.mode {
            Mode::Falling => {
                effects.push(GameEffect::Paused);
                Mode::Paused
            }
            Mode::Paused => {
                effects.push(GameEffect::Resumed);
                Mode::Falling
            }
        };
    }

    fn shift(&mut self, dx: i32, effects: &mut Vec<GameEffect>) {
        if self.board.is_valid(&self.current, dx, 0) {
            self.current.x += dx;
            effects.push(GameEffect::Moved);
        }
    }

    /// Rotates in place, nudging left, right, then up if needed. Reverts when nothing fits.
    fn rotate_current(&mut self) -> bool {
        let before = self.current;
        self.current.rotate();
        if self.board.is_valid(&self.current, 0, 0) {
            return true;
        }
        for (dx, dy) in ROTATION_NUDGES {
            if self.board.is_valid(&self.current, dx, dy) {
                self.current.x += dx;
                self.current.y += dy;
                return true;
            }
        }
        self.current = before;
        false
    }

    fn lock_current(&mut self, effects: &mut Vec<GameEffect>) {
        let level_before = self.board.level();
        let clear = self.board.lock_piece(&self.current);
        effects.push(GameEffect::Locked { lines: clear.rows });

        if clear.rows > 0 {
            let level = self.board.level();
            effects.push(GameEffect::LinesCleared {
                rows: clear.rows,
                points: clear.points,
                level,
            });
            if level > level_before {
                effects.push(GameEffect::LevelUp(level));
            }
        }

        if self.board.is_topped_out() {
            effects.push(GameEffect::BoardReset {
                final_score: self.board.score(),
                final_lines: self.board.lines(),
            });
            self.board = Board::new();
        }

        let spawned = self.source.next_piece();
        self.current = std::mem::replace(&mut self.next, spawned);
        self.fall_time = Duration::ZERO;
    }
}

/// [`Game`] as a pure transition for headless runs and render-hash checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlocksLogic {
    pub seed: u64,
    pub base_fall: Duration,
}

impl BlocksLogic {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            base_fall: DEFAULT_BASE_FALL,
        }
    }

    pub fn with_base_fall(mut self, base_fall: Duration) -> Self {
        self.base_fall = base_fall;
        self
    }
}

impl GameLogic for BlocksLogic {
    type State = Game;
    type Input = GameInput;
    type Effect = GameEffect;

    fn initial_state(&self) -> Self::State {
        Game::new(self.seed, self.base_fall)
    }

    fn step(&self, state: &Self::State, input: Self::Input) -> (Self::State, Vec<Self::Effect>) {
        let mut next = state.clone();
        let effects = next.apply(input);
        (next, effects)
    }
}
