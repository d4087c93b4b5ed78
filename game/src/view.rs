use engine::graphics::{Color, Renderer2d, rgb, text_width};
use engine::surface::SurfaceSize;
use engine::ui::Rect;

use crate::board::{COLS, ROWS};
use crate::game::Game;
use crate::piece::Piece;

pub const CELL_SIZE: u32 = 30;
pub const PANEL_WIDTH: u32 = 200;

pub const PLAY_WIDTH: u32 = CELL_SIZE * COLS as u32;
pub const PLAY_HEIGHT: u32 = CELL_SIZE * ROWS as u32;
pub const WINDOW_SIZE: SurfaceSize = SurfaceSize::new(PLAY_WIDTH + PANEL_WIDTH, PLAY_HEIGHT);

pub const COLOR_BACKGROUND: Color = rgb(0, 0, 0);
pub const COLOR_GRID: Color = rgb(128, 128, 128);
pub const COLOR_TEXT: Color = rgb(255, 255, 255);
pub const COLOR_PANEL_BG: Color = rgb(30, 30, 30);
pub const COLOR_PREVIEW_BG: Color = rgb(20, 20, 20);

pub const TITLE: &str = "OM BLOCKS";
pub const CONTROLS: [&str; 4] = ["ARROWS: MOVE", "UP: ROTATE", "SPACE: HARD DROP", "P: PAUSE"];

const TITLE_SCALE: u32 = 3;
const TEXT_SCALE: u32 = 2;
const TEXT_INDENT: u32 = 8;

const PREVIEW_CELLS: u32 = 4;
const PREVIEW_OFFSET_X: u32 = 40;
const PREVIEW_Y: u32 = 90;

const NEXT_LABEL_Y: u32 = 60;
const STATS_Y: u32 = 220;
const CONTROLS_Y: u32 = 340;
const LINE_SPACING: u32 = 20;

/// Fixed screen regions. The window does not resize, so this never changes at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub board: Rect,
    pub panel: Rect,
    pub preview: Rect,
}

pub const LAYOUT: Layout = Layout {
    board: Rect::new(0, 0, PLAY_WIDTH, PLAY_HEIGHT),
    panel: Rect::new(PLAY_WIDTH, 0, PANEL_WIDTH, PLAY_HEIGHT),
    preview: Rect::new(
        PLAY_WIDTH + PREVIEW_OFFSET_X,
        PREVIEW_Y,
        PREVIEW_CELLS * CELL_SIZE,
        PREVIEW_CELLS * CELL_SIZE,
    ),
};

/// Pixel rect of board cell `(x, y)`, inset one pixel so the grid shows between cells.
///
/// `None` for cells above the top of the board.
pub fn cell_rect(x: i32, y: i32) -> Option<Rect> {
    if x < 0 || y < 0 {
        return None;
    }
    Some(cell_square(x as u32 * CELL_SIZE, y as u32 * CELL_SIZE))
}

fn cell_square(px: u32, py: u32) -> Rect {
    Rect::new(px, py, CELL_SIZE, CELL_SIZE).inset(1)
}

pub fn draw_game(gfx: &mut dyn Renderer2d, game: &Game) {
    gfx.clear(COLOR_BACKGROUND);

    draw_board(gfx, game);
    draw_piece(gfx, game.current());
    draw_grid(gfx);

    draw_panel(gfx, game);

    if game.is_paused() {
        draw_pause_banner(gfx);
    }
}

fn draw_board(gfx: &mut dyn Renderer2d, game: &Game) {
    for (y, row) in game.board().rows().iter().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if let (Some(color), Some(rect)) = (cell, cell_rect(x as i32, y as i32)) {
                gfx.fill_rect(rect, *color);
            }
        }
    }
}

fn draw_piece(gfx: &mut dyn Renderer2d, piece: &Piece) {
    for (x, y) in piece.cells() {
        if let Some(rect) = cell_rect(x, y) {
            gfx.fill_rect(rect, piece.color());
        }
    }
}

fn draw_grid(gfx: &mut dyn Renderer2d) {
    let board = LAYOUT.board;
    for col in 0..COLS as u32 {
        gfx.vline(board.x + col * CELL_SIZE, board.y, board.h, COLOR_GRID);
    }
    for row in 0..ROWS as u32 {
        gfx.hline(board.x, board.y + row * CELL_SIZE, board.w, COLOR_GRID);
    }
}

fn draw_panel(gfx: &mut dyn Renderer2d, game: &Game) {
    let panel = LAYOUT.panel;
    gfx.fill_rect(panel, COLOR_PANEL_BG);

    let title_x = panel.x + panel.w.saturating_sub(text_width(TITLE, TITLE_SCALE)) / 2;
    gfx.draw_text_bold(title_x, 10, TITLE, COLOR_TEXT, TITLE_SCALE);

    let text_x = panel.x + TEXT_INDENT;
    gfx.draw_text_scaled(text_x, NEXT_LABEL_Y, "NEXT:", COLOR_TEXT, TEXT_SCALE);
    draw_preview(gfx, game.next());

    let board = game.board();
    let stats = [
        format!("SCORE: {}", board.score()),
        format!("LEVEL: {}", board.level()),
        format!("LINES: {}", board.lines()),
    ];
    for (i, line) in stats.iter().enumerate() {
        let y = STATS_Y + i as u32 * LINE_SPACING;
        gfx.draw_text_scaled(text_x, y, line, COLOR_TEXT, TEXT_SCALE);
    }

    for (i, line) in CONTROLS.iter().enumerate() {
        let y = CONTROLS_Y + i as u32 * LINE_SPACING;
        gfx.draw_text_scaled(text_x, y, line, COLOR_TEXT, TEXT_SCALE);
    }
}

/// The next piece in its spawn orientation, centred on its occupied cells.
fn draw_preview(gfx: &mut dyn Renderer2d, piece: &Piece) {
    let area = LAYOUT.preview;
    gfx.fill_rect(area, COLOR_PREVIEW_BG);

    let shape = piece.shape();
    let (mut min_c, mut max_c, mut min_r, mut max_r) = (usize::MAX, 0, usize::MAX, 0);
    for (col, row) in shape.cells() {
        min_c = min_c.min(col);
        max_c = max_c.max(col);
        min_r = min_r.min(row);
        max_r = max_r.max(row);
    }
    if min_c == usize::MAX {
        return;
    }

    let used_w = (max_c - min_c + 1) as u32 * CELL_SIZE;
    let used_h = (max_r - min_r + 1) as u32 * CELL_SIZE;
    let origin_x = area.x + area.w.saturating_sub(used_w) / 2;
    let origin_y = area.y + area.h.saturating_sub(used_h) / 2;

    for (col, row) in shape.cells() {
        let px = origin_x + (col - min_c) as u32 * CELL_SIZE;
        let py = origin_y + (row - min_r) as u32 * CELL_SIZE;
        gfx.fill_rect(cell_square(px, py), piece.color());
    }
}

fn draw_pause_banner(gfx: &mut dyn Renderer2d) {
    const LABEL: &str = "PAUSED";
    let board = LAYOUT.board;
    let banner = Rect::new(board.x, board.y + board.h / 2 - 30, board.w, 60);
    gfx.fill_rect(banner, COLOR_BACKGROUND);
    gfx.rect_outline(banner, COLOR_TEXT);

    let label_w = text_width(LABEL, TITLE_SCALE);
    let label_h = engine::graphics::GLYPH_H * TITLE_SCALE;
    let x = banner.x + banner.w.saturating_sub(label_w) / 2;
    let y = banner.y + banner.h.saturating_sub(label_h) / 2;
    gfx.draw_text_bold(x, y, LABEL, COLOR_TEXT, TITLE_SCALE);
}
