use engine::graphics::CpuRenderer;
use engine::surface::RgbaBufferSurface;
use omblocks::game::{DEFAULT_BASE_FALL, Game, Key};
use omblocks::piece::Piece;
use omblocks::shapes::ShapeKind;
use omblocks::view::{
    CELL_SIZE, COLOR_BACKGROUND, COLOR_GRID, COLOR_PANEL_BG, COLOR_PREVIEW_BG, COLOR_TEXT, LAYOUT,
    WINDOW_SIZE, draw_game,
};

fn render(game: &Game) -> RgbaBufferSurface {
    let mut surface = RgbaBufferSurface::new(WINDOW_SIZE);
    {
        let mut gfx = CpuRenderer::new(surface.frame_mut(), WINDOW_SIZE);
        draw_game(&mut gfx, game);
    }
    surface
}

fn cell_centre(x: u32, y: u32) -> (u32, u32) {
    (x * CELL_SIZE + CELL_SIZE / 2, y * CELL_SIZE + CELL_SIZE / 2)
}

fn quiet_game() -> Game {
    let mut game = Game::new(1, DEFAULT_BASE_FALL);
    // Park the falling piece in the bottom-right corner, out of the way.
    game.set_current_piece(Piece::new(ShapeKind::O).with_position(8, 18));
    game.set_next_piece(Piece::new(ShapeKind::O));
    game
}

#[test]
fn locked_cells_and_the_piece_use_their_colors() {
    let mut game = quiet_game();
    let stone = [12, 34, 56, 255];
    game.board_mut().set_cell(2, 10, Some(stone));
    let surface = render(&game);

    let (x, y) = cell_centre(2, 10);
    assert_eq!(surface.pixel(x, y), Some(stone));

    let (x, y) = cell_centre(9, 19);
    assert_eq!(surface.pixel(x, y), Some(ShapeKind::O.color()));

    let (x, y) = cell_centre(5, 5);
    assert_eq!(surface.pixel(x, y), Some(COLOR_BACKGROUND));
}

#[test]
fn grid_lines_are_drawn_over_cells() {
    let mut game = quiet_game();
    game.board_mut().set_cell(0, 0, Some([200, 0, 0, 255]));
    let surface = render(&game);

    assert_eq!(surface.pixel(CELL_SIZE, 5), Some(COLOR_GRID));
    assert_eq!(surface.pixel(5, CELL_SIZE), Some(COLOR_GRID));
    assert_eq!(surface.pixel(0, 200), Some(COLOR_GRID));
    // The one-pixel inset leaves a dark gap next to the line.
    assert_eq!(surface.pixel(CELL_SIZE + 1, CELL_SIZE * 3 + 5), Some(COLOR_BACKGROUND));
}

#[test]
fn cells_above_the_board_are_not_drawn() {
    let mut game = quiet_game();
    game.set_current_piece(Piece::new(ShapeKind::O).with_position(3, -1));
    let surface = render(&game);

    let (x, y) = cell_centre(3, 0);
    assert_eq!(surface.pixel(x, y), Some(ShapeKind::O.color()));
    let (x, y) = cell_centre(3, 1);
    assert_eq!(surface.pixel(x, y), Some(COLOR_BACKGROUND));
}

#[test]
fn side_panel_holds_the_preview() {
    let surface = render(&quiet_game());

    let panel = LAYOUT.panel;
    assert_eq!(surface.pixel(panel.x + 2, panel.bottom() - 2), Some(COLOR_PANEL_BG));

    let preview = LAYOUT.preview;
    assert_eq!(surface.pixel(preview.x + 2, preview.y + 2), Some(COLOR_PREVIEW_BG));
    // The O is two cells wide, centred in a four-cell box.
    let (cx, cy) = (preview.x + CELL_SIZE + CELL_SIZE / 2, preview.y + CELL_SIZE + CELL_SIZE / 2);
    assert_eq!(surface.pixel(cx, cy), Some(ShapeKind::O.color()));
}

#[test]
fn pause_banner_covers_the_middle_of_the_board() {
    let mut game = quiet_game();
    let row_y = LAYOUT.board.h / 2 - 20;

    let running = render(&game);
    assert_eq!(running.pixel(0, row_y), Some(COLOR_GRID));

    game.key(Key::Pause);
    let paused = render(&game);
    assert_eq!(paused.pixel(0, row_y), Some(COLOR_TEXT));
    assert_ne!(running.frame(), paused.frame());
}

#[test]
fn score_text_changes_the_panel() {
    let game = quiet_game();
    let before = render(&game);

    let mut scored = quiet_game();
    for x in 0..10 {
        scored.board_mut().set_cell(x, 5, Some([1, 2, 3, 255]));
    }
    scored.board_mut().clear_lines();
    let after = render(&scored);

    let panel = LAYOUT.panel;
    let differs = (220..280).any(|y| {
        (panel.x..panel.right()).any(|x| before.pixel(x, y) != after.pixel(x, y))
    });
    assert!(differs);
}
