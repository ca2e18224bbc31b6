#[cfg(test)]
mod tests {
    use crate::core::{Board, Cell, MoveError, Position, Side};
    use crate::logic::{
        apply_move, flips_for, is_terminal, legal_moves, undo_move,
    };

    fn pos(row: usize, col: usize) -> Position {
        Position::new(row, col)
    }

    #[test]
    fn initial_black_moves() {
        // 初期盤面の黒の合法手は4箇所
        let board = Board::new();
        let moves = legal_moves(&board, Side::Black);
        assert_eq!(moves.len(), 4);
        for expected in [pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)] {
            assert!(moves.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn initial_white_moves_are_symmetric() {
        let board = Board::new();
        let moves = legal_moves(&board, Side::White);
        assert_eq!(moves.len(), 4);
        for expected in [pos(2, 4), pos(4, 2), pos(3, 5), pos(5, 3)] {
            assert!(moves.contains(&expected), "missing {}", expected);
        }
    }

    #[test]
    fn apply_first_move_flips_one_disc() {
        let mut board = Board::new();
        let undo = apply_move(&mut board, pos(2, 3), Side::Black).unwrap();
        assert_eq!(undo.flipped, vec![pos(3, 3)]);
        assert_eq!(board.get(pos(2, 3)), Cell::Black);
        assert_eq!(board.get(pos(3, 3)), Cell::Black);
        assert_eq!(board.count_discs(), (4, 1));
    }

    #[test]
    fn undo_restores_previous_board() {
        let mut board = Board::new();
        let before = board.clone();
        let undo = apply_move(&mut board, pos(2, 3), Side::Black).unwrap();
        assert_ne!(board, before);
        undo_move(&mut board, &undo);
        assert_eq!(board, before);
    }

    #[test]
    fn occupied_count_grows_by_one_per_move() {
        let mut board = Board::new();
        let mut side = Side::Black;
        for _ in 0..6 {
            let moves = legal_moves(&board, side);
            let (b0, w0) = board.count_discs();
            let mv = moves[0];
            apply_move(&mut board, mv, side).unwrap();
            let (b1, w1) = board.count_discs();
            // 裏返しは所有が変わるだけで総数は置いた1枚分しか増えない
            assert_eq!(b1 as u16 + w1 as u16, b0 as u16 + w0 as u16 + 1);
            side = side.opponent();
        }
    }

    #[test]
    fn legal_moves_only_empty_cells_with_flips() {
        let mut board = Board::new();
        apply_move(&mut board, pos(2, 3), Side::Black).unwrap();
        for side in [Side::Black, Side::White] {
            for mv in legal_moves(&board, side) {
                assert_eq!(board.get(mv), Cell::Empty);
                assert!(!flips_for(&board, mv, side).is_empty());
            }
        }
    }

    #[test]
    fn flips_connect_placement_to_anchor() {
        // 裏返った各石について、置いたマスから見て直線上にある
        let mut board = Board::new();
        apply_move(&mut board, pos(2, 3), Side::Black).unwrap();
        let moves = legal_moves(&board, Side::White);
        let mv = moves[0];
        let flips = flips_for(&board, mv, Side::White);
        assert!(!flips.is_empty());
        for f in flips {
            let dr = f.row as i32 - mv.row as i32;
            let dc = f.col as i32 - mv.col as i32;
            assert!(dr == 0 || dc == 0 || dr.abs() == dc.abs());
        }
    }

    #[test]
    fn multi_direction_capture_flips_every_line() {
        // 黒 (2,2) で縦と斜めの2方向を同時に挟む局面
        let mut board = Board::new();
        board.set(pos(3, 2), Cell::White);
        board.set(pos(4, 2), Cell::Black);
        board.set(pos(5, 5), Cell::Black);
        let undo = apply_move(&mut board, pos(2, 2), Side::Black).unwrap();
        assert!(undo.flipped.contains(&pos(3, 2)));
        assert!(undo.flipped.contains(&pos(3, 3)));
        assert!(undo.flipped.contains(&pos(4, 4)));
        assert_eq!(undo.flipped.len(), 3);
        assert_eq!(board.get(pos(3, 2)), Cell::Black);
        assert_eq!(board.get(pos(3, 3)), Cell::Black);
        assert_eq!(board.get(pos(4, 4)), Cell::Black);
        // 既存の黒石はそのまま
        assert_eq!(board.get(pos(3, 4)), Cell::Black);
    }

    #[test]
    fn out_of_bounds_is_distinct_error() {
        let mut board = Board::new();
        let before = board.clone();
        let err = apply_move(&mut board, pos(8, 0), Side::Black).unwrap_err();
        assert_eq!(err, MoveError::OutOfBounds(pos(8, 0)));
        let err = apply_move(&mut board, pos(0, 0), Side::Black).unwrap_err();
        assert_eq!(err, MoveError::IllegalMove(pos(0, 0)));
        // 占有マスへの着手も不正
        let err = apply_move(&mut board, pos(3, 3), Side::Black).unwrap_err();
        assert_eq!(err, MoveError::IllegalMove(pos(3, 3)));
        assert_eq!(board, before);
    }

    #[test]
    fn one_sided_position_is_not_terminal() {
        // 黒だけ打てる局面はパスであって終局ではない
        let mut board = Board::new();
        for row in 0..8 {
            for col in 0..8 {
                board.set(pos(row, col), Cell::Empty);
            }
        }
        board.set(pos(0, 0), Cell::Black);
        board.set(pos(0, 1), Cell::White);
        assert!(!legal_moves(&board, Side::Black).is_empty());
        assert!(legal_moves(&board, Side::White).is_empty());
        assert!(!is_terminal(&board));
    }

    #[test]
    fn full_black_board_is_terminal() {
        let mut board = Board::new();
        for row in 0..8 {
            for col in 0..8 {
                board.set(pos(row, col), Cell::Black);
            }
        }
        assert!(is_terminal(&board));
        assert_eq!(board.count_discs(), (64, 0));
    }

    #[test]
    fn queries_do_not_mutate_the_board() {
        let board = Board::new();
        let snapshot = board.clone();
        let first = legal_moves(&board, Side::Black);
        let second = legal_moves(&board, Side::Black);
        assert_eq!(first, second);
        assert_eq!(board, snapshot);
    }
}
