use engine::graphics::{Color, rgb};
use omblocks::board::{Board, COLS, LINE_SCORES, LineClear, ROWS};
use omblocks::piece::Piece;
use omblocks::shapes::ShapeKind;

const STONE: Color = rgb(70, 70, 70);

fn fill_row_except(board: &mut Board, y: usize, gaps: &[usize]) {
    for x in 0..COLS {
        if !gaps.contains(&x) {
            board.set_cell(x, y, Some(STONE));
        }
    }
}

/// Clears single rows until the board has `lines` lines.
fn board_with_lines(lines: u32) -> Board {
    let mut board = Board::new();
    for _ in 0..lines {
        fill_row_except(&mut board, ROWS - 1, &[]);
        board.clear_lines();
    }
    assert_eq!(board.lines(), lines);
    board
}

#[test]
fn is_inside_covers_exactly_the_grid() {
    assert!(Board::is_inside(0, 0));
    assert!(Board::is_inside(COLS as i32 - 1, ROWS as i32 - 1));
    assert!(!Board::is_inside(-1, 0));
    assert!(!Board::is_inside(0, -1));
    assert!(!Board::is_inside(COLS as i32, 0));
    assert!(!Board::is_inside(0, ROWS as i32));
}

#[test]
fn is_valid_rejects_sides_and_floor() {
    let board = Board::new();
    let o = Piece::new(ShapeKind::O).with_position(0, 0);

    assert!(board.is_valid(&o, 0, 0));
    assert!(!board.is_valid(&o, -1, 0));
    assert!(board.is_valid(&o, 8, 0));
    assert!(!board.is_valid(&o, 9, 0));
    assert!(board.is_valid(&o, 0, 18));
    assert!(!board.is_valid(&o, 0, 19));
}

#[test]
fn is_valid_allows_cells_above_the_top_but_not_beside_it() {
    let board = Board::new();
    let o = Piece::new(ShapeKind::O).with_position(3, 0);

    assert!(board.is_valid(&o, 0, -1));
    assert!(board.is_valid(&o, 0, -5));
    assert!(!board.is_valid(&o, -4, -1));
    assert!(!board.is_valid(&o, 6, -3));
}

#[test]
fn is_valid_rejects_occupied_cells() {
    let mut board = Board::new();
    board.set_cell(5, 10, Some(STONE));
    let o = Piece::new(ShapeKind::O).with_position(4, 9);

    assert!(!board.is_valid(&o, 0, 0));
    assert!(!board.is_valid(&o, 0, 1));
    assert!(board.is_valid(&o, -2, 0));
    assert!(board.is_valid(&o, 0, -2));
}

#[test]
fn clear_scores_by_row_count_at_level_one() {
    for rows in 0..=4usize {
        let mut board = Board::new();
        for y in ROWS - rows..ROWS {
            fill_row_except(&mut board, y, &[]);
        }
        let clear = board.clear_lines();
        assert_eq!(clear.rows, rows as u32);
        assert_eq!(board.score(), LINE_SCORES[rows]);
        assert_eq!(board.lines(), rows as u32);
    }
}

#[test]
fn clear_scores_are_multiplied_by_the_level() {
    for rows in 1..=4usize {
        let mut board = board_with_lines(20);
        assert_eq!(board.level(), 3);
        let before = board.score();

        for y in ROWS - rows..ROWS {
            fill_row_except(&mut board, y, &[]);
        }
        let clear = board.clear_lines();
        assert_eq!(clear.points, LINE_SCORES[rows] * 3);
        assert_eq!(board.score() - before, LINE_SCORES[rows] * 3);
    }
}

#[test]
fn score_uses_the_level_before_the_clear() {
    let mut board = board_with_lines(9);
    assert_eq!(board.level(), 1);
    let before = board.score();

    for y in ROWS - 4..ROWS {
        fill_row_except(&mut board, y, &[]);
    }
    let clear = board.clear_lines();

    assert_eq!(clear, LineClear { rows: 4, points: 800 });
    assert_eq!(board.score() - before, 800);
    assert_eq!(board.level(), 2);
}

#[test]
fn level_tracks_total_lines() {
    let mut board = Board::new();
    for n in 1..=35u32 {
        fill_row_except(&mut board, ROWS - 1, &[]);
        board.clear_lines();
        assert_eq!(board.lines(), n);
        assert_eq!(board.level(), 1 + n / 10);
    }
}

#[test]
fn locking_an_o_without_completing_a_row() {
    let mut board = Board::new();
    let o = Piece::new(ShapeKind::O).with_position(4, ROWS as i32 - 2);

    let clear = board.lock_piece(&o);

    assert_eq!(clear, LineClear::default());
    assert_eq!(board.score(), 0);
    assert_eq!(board.lines(), 0);
    assert_eq!(board.filled_count(), 4);
    for (x, y) in o.cells() {
        assert_eq!(board.cell(x, y), Some(ShapeKind::O.color()));
    }
}

#[test]
fn completing_one_row_removes_only_that_row() {
    let mut board = Board::new();
    fill_row_except(&mut board, ROWS - 1, &[4, 5]);
    board.set_cell(0, ROWS - 2, Some(STONE));
    let level = board.level();

    let o = Piece::new(ShapeKind::O).with_position(4, ROWS as i32 - 2);
    let clear = board.lock_piece(&o);

    assert_eq!(clear, LineClear { rows: 1, points: 100 * level });
    assert_eq!(board.score(), 100 * level);
    assert!(board.rows()[0].iter().all(|cell| cell.is_none()));
    // The row above slid down, keeping the stone and the top half of the O.
    let bottom = ROWS as i32 - 1;
    assert_eq!(board.cell(0, bottom), Some(STONE));
    assert_eq!(board.cell(4, bottom), Some(ShapeKind::O.color()));
    assert_eq!(board.cell(5, bottom), Some(ShapeKind::O.color()));
    assert_eq!(board.filled_count(), 3);
}

#[test]
fn lock_leaves_row_zero_occupied_for_the_caller_to_notice() {
    let mut board = Board::new();
    assert!(!board.is_topped_out());
    board.lock_piece(&Piece::new(ShapeKind::T));
    assert!(board.is_topped_out());
}
