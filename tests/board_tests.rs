use mnk::{Axis, Board, BoardError, Cell, GameConfig, Mark, Outcome, WinRule};

fn place_all(board: &mut Board, cells: &[(isize, isize)], mark: Mark) {
    for &(x, y) in cells {
        board.place(x, y, mark).unwrap();
    }
}

#[test]
fn test_new_board_is_empty() {
    let mut board = Board::new(4, 3, 3);
    assert_eq!(board.width(), 4);
    assert_eq!(board.height(), 3);
    assert_eq!(board.k(), 3);
    assert_eq!(board.win_rule(), WinRule::Exact);
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.result(), None);
    for row in 0..3 {
        for col in 0..4 {
            assert_eq!(board.cell(row, col), Some(Cell::Empty));
        }
    }
    assert_eq!(board.cell(3, 0), None);
    assert_eq!(board.cell(0, 4), None);
    assert!(board.can_continue());
}

#[test]
fn test_place_writes_cell_and_counts() {
    let mut board = Board::new(3, 3, 3);
    board.place(2, 1, Mark::O).unwrap();
    assert_eq!(board.cell(1, 2), Some(Cell::O));
    assert_eq!(board.move_count(), 1);
    assert_eq!(board.empty_cells().count(), 8);
    assert!(!board.empty_cells().any(|c| c == (1, 2)));
}

#[test]
fn test_occupied_cell_rejected() {
    let mut board = Board::new(3, 3, 3);
    board.place(0, 0, Mark::X).unwrap();
    let before = board.clone();

    assert_eq!(
        board.place(0, 0, Mark::O).unwrap_err(),
        BoardError::CellOccupied { row: 0, col: 0 }
    );
    assert_eq!(board.move_count(), 1);
    assert_eq!(board.cell(0, 0), Some(Cell::X));
    assert_eq!(board, before);
}

#[test]
fn test_out_of_bounds_rejected() {
    let mut board = Board::new(3, 3, 3);
    assert_eq!(
        board.place(-1, 0, Mark::X).unwrap_err(),
        BoardError::OutOfBounds { x: -1, y: 0 }
    );
    assert_eq!(
        board.place(3, 0, Mark::X).unwrap_err(),
        BoardError::OutOfBounds { x: 3, y: 0 }
    );
    assert_eq!(
        board.place(0, 3, Mark::X).unwrap_err(),
        BoardError::OutOfBounds { x: 0, y: 3 }
    );
    assert_eq!(board.move_count(), 0);
    assert_eq!(board.result(), None);
}

#[test]
fn test_horizontal_win() {
    let mut board = Board::new(3, 3, 3);
    place_all(&mut board, &[(0, 1), (2, 1)], Mark::X);
    assert_eq!(board.result(), None);
    board.place(1, 1, Mark::X).unwrap();
    assert_eq!(board.result(), Some(Outcome::Winner(Mark::X)));
}

#[test]
fn test_vertical_win() {
    let mut board = Board::new(3, 4, 3);
    place_all(&mut board, &[(2, 1), (2, 2), (2, 3)], Mark::O);
    assert_eq!(board.result(), Some(Outcome::Winner(Mark::O)));
}

#[test]
fn test_main_diagonal_win() {
    let mut board = Board::new(3, 3, 3);
    place_all(&mut board, &[(0, 0), (2, 2), (1, 1)], Mark::X);
    assert_eq!(board.result(), Some(Outcome::Winner(Mark::X)));
}

#[test]
fn test_anti_diagonal_win() {
    let mut board = Board::new(3, 3, 3);
    place_all(&mut board, &[(2, 0), (1, 1), (0, 2)], Mark::O);
    assert_eq!(board.result(), Some(Outcome::Winner(Mark::O)));
}

#[test]
fn test_mixed_marks_do_not_win() {
    let mut board = Board::new(3, 3, 3);
    board.place(0, 0, Mark::X).unwrap();
    board.place(1, 0, Mark::O).unwrap();
    board.place(2, 0, Mark::X).unwrap();
    assert_eq!(board.result(), None);
}

#[test]
fn test_unreachable_k_only_draws() {
    let mut board = Board::new(3, 3, 4);
    for y in 0..3 {
        for x in 0..3 {
            assert!(board.can_continue());
            board.place(x, y, Mark::X).unwrap();
        }
    }
    assert_eq!(board.result(), Some(Outcome::Draw));
    assert!(!board.can_continue());
}

#[test]
fn test_exact_rule_ignores_overlong_line() {
    let mut board = Board::new(5, 1, 3);
    place_all(&mut board, &[(0, 0), (1, 0), (3, 0), (4, 0)], Mark::X);
    assert_eq!(board.result(), None);
    // joins 2 + 1 + 2 into a line of five
    board.place(2, 0, Mark::X).unwrap();
    assert_eq!(board.line_length(0, 2, Axis::Horizontal), 5);
    assert_eq!(board.result(), Some(Outcome::Draw));
}

#[test]
fn test_at_least_rule_flags_overlong_line() {
    let config = GameConfig::new(5, 1, 3).with_win_rule(WinRule::AtLeast);
    let mut board = Board::from_config(&config);
    place_all(&mut board, &[(0, 0), (1, 0), (3, 0), (4, 0)], Mark::X);
    assert_eq!(board.result(), None);
    board.place(2, 0, Mark::X).unwrap();
    assert_eq!(board.result(), Some(Outcome::Winner(Mark::X)));
}

#[test]
fn test_result_is_write_once() {
    let mut board = Board::new(4, 4, 3);
    place_all(&mut board, &[(0, 0), (1, 0), (2, 0)], Mark::X);
    assert_eq!(board.result(), Some(Outcome::Winner(Mark::X)));

    let before = board.clone();
    assert_eq!(board.place(0, 3, Mark::O).unwrap_err(), BoardError::GameOver);
    assert_eq!(board, before);
    assert!(!board.can_continue());
    assert!(!board.can_continue());
    assert_eq!(board.result(), Some(Outcome::Winner(Mark::X)));
}

#[test]
fn test_can_continue_finalizes_empty_grid() {
    let mut board = Board::new(0, 0, 3);
    assert_eq!(board.result(), None);
    assert!(!board.can_continue());
    assert_eq!(board.result(), Some(Outcome::Draw));
    assert_eq!(board.render(), "");
}

#[test]
fn test_ray_and_line_lengths() {
    let mut board = Board::new(4, 4, 4);
    place_all(&mut board, &[(0, 0), (1, 1), (2, 2)], Mark::X);
    board.place(3, 3, Mark::O).unwrap();

    assert_eq!(board.ray_length(1, 1, (-1, -1)), 1);
    assert_eq!(board.ray_length(1, 1, (1, 1)), 1);
    assert_eq!(board.line_length(1, 1, Axis::MainDiagonal), 3);
    assert_eq!(board.line_length(1, 1, Axis::Horizontal), 1);
    assert_eq!(board.line_length(3, 3, Axis::MainDiagonal), 1);
    assert_eq!(board.line_length(0, 3, Axis::Vertical), 0);
    assert_eq!(board.line_length(9, 9, Axis::Vertical), 0);
}

#[test]
fn test_axes_follow_their_lines() {
    // middle row
    let mut board = Board::new(3, 3, 4);
    place_all(&mut board, &[(0, 1), (1, 1), (2, 1)], Mark::X);
    assert_eq!(board.line_length(1, 1, Axis::Horizontal), 3);
    assert_eq!(board.line_length(1, 1, Axis::Vertical), 1);

    // middle column
    let mut board = Board::new(3, 3, 4);
    place_all(&mut board, &[(1, 0), (1, 1), (1, 2)], Mark::X);
    assert_eq!(board.line_length(1, 1, Axis::Vertical), 3);
    assert_eq!(board.line_length(1, 1, Axis::Horizontal), 1);

    // top-left to bottom-right
    let mut board = Board::new(3, 3, 4);
    place_all(&mut board, &[(0, 0), (1, 1), (2, 2)], Mark::X);
    assert_eq!(board.line_length(1, 1, Axis::MainDiagonal), 3);
    assert_eq!(board.line_length(1, 1, Axis::AntiDiagonal), 1);

    // top-right to bottom-left
    let mut board = Board::new(3, 3, 4);
    place_all(&mut board, &[(2, 0), (1, 1), (0, 2)], Mark::X);
    assert_eq!(board.line_length(1, 1, Axis::AntiDiagonal), 3);
    assert_eq!(board.line_length(1, 1, Axis::MainDiagonal), 1);
}

#[test]
fn test_axis_steps_geometry() {
    assert_eq!(Axis::Horizontal.steps(), [(0, -1), (0, 1)]);
    assert_eq!(Axis::Vertical.steps(), [(-1, 0), (1, 0)]);
    assert_eq!(Axis::MainDiagonal.steps(), [(-1, -1), (1, 1)]);
    assert_eq!(Axis::AntiDiagonal.steps(), [(-1, 1), (1, -1)]);
}

#[test]
fn test_axis_order_and_steps() {
    assert_eq!(
        Axis::ALL,
        [
            Axis::Horizontal,
            Axis::Vertical,
            Axis::MainDiagonal,
            Axis::AntiDiagonal
        ]
    );
    for axis in Axis::ALL {
        let [(r1, c1), (r2, c2)] = axis.steps();
        assert_eq!((r1 + r2, c1 + c2), (0, 0));
    }
}

#[test]
fn test_render_standard_board() {
    let mut board = Board::new(3, 3, 3);
    board.place(0, 0, Mark::X).unwrap();
    board.place(1, 1, Mark::O).unwrap();
    board.place(2, 2, Mark::X).unwrap();
    assert_eq!(board.render(), "X| | \n-----\n |O| \n-----\n | |X");
    assert_eq!(board.to_string(), board.render());
}

#[test]
fn test_render_rule_width() {
    let board = Board::new(4, 2, 3);
    let text = board.render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec![" | | | ", "-------", " | | | "]);
    assert_eq!(Board::new(1, 1, 1).render(), " ");
}

#[test]
fn test_outcome_and_mark_display() {
    assert_eq!(Outcome::Winner(Mark::O).to_string(), "Player O wins.");
    assert_eq!(Outcome::Draw.to_string(), "Draw");
    assert_eq!(Mark::X.other(), Mark::O);
    assert_eq!(Cell::from(Mark::O).symbol(), 'O');
    assert_eq!(Cell::Empty.symbol(), ' ');
}
