use super::*;

#[test]
fn test_symbol_order() {
    assert_eq!(Symbol::ALL, [Symbol::O, Symbol::S]);
}

#[test]
fn test_symbol_from_char() {
    assert_eq!(Symbol::from_char('o'), Some(Symbol::O));
    assert_eq!(Symbol::from_char('S'), Some(Symbol::S));
    assert_eq!(Symbol::from_char('x'), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(2, 3);
    assert_eq!(pos.to_index(5), 13);

    let pos2 = Pos::from_index(13, 5);
    assert_eq!(pos2, pos);
}

#[test]
fn test_board_bounds() {
    let board = Board::new(3);
    assert!(board.in_bounds(0, 0));
    assert!(board.in_bounds(2, 2));
    assert!(!board.in_bounds(-1, 0));
    assert!(!board.in_bounds(0, -1));
    assert!(!board.in_bounds(3, 0));
    assert!(!board.in_bounds(0, 3));
    assert!(!board.contains(Pos::new(3, 1)));
}

#[test]
fn test_board_set_and_clear() {
    let mut board = Board::new(3);
    let pos = Pos::new(1, 2);

    assert!(board.is_empty(pos));
    board.set(pos, Symbol::S);
    assert_eq!(board.get(pos), Some(Symbol::S));
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.empty_count(), 8);

    board.clear(pos);
    assert!(board.is_empty(pos));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_out_of_range_is_not_empty() {
    let board = Board::new(2);
    assert!(!board.is_empty(Pos::new(2, 0)));
    assert_eq!(board.get(Pos::new(0, 5)), None);
}

#[test]
fn test_empty_cells_row_major() {
    let mut board = Board::new(2);
    board.set(Pos::new(0, 1), Symbol::O);

    let cells: Vec<Pos> = board.empty_cells().collect();
    assert_eq!(cells, vec![Pos::new(0, 0), Pos::new(1, 0), Pos::new(1, 1)]);
}

#[test]
fn test_board_full() {
    let mut board = Board::new(1);
    assert!(!board.is_full());
    board.set(Pos::new(0, 0), Symbol::O);
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

#[test]
fn test_board_display() {
    let mut board = Board::new(2);
    board.set(Pos::new(0, 0), Symbol::O);
    board.set(Pos::new(1, 1), Symbol::S);

    let text = board.to_string();
    assert!(text.contains(" 0  O ."));
    assert!(text.contains(" 1  . S"));
}
