use crate::core::{Board, Cell, MoveError, Position, Side, BOARD_SIZE};

/// 8方向のオフセット (行, 列)
pub const DIRECTIONS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// 着手の取り消し記録 (置いたマスと裏返したマス)
#[derive(Debug, Clone)]
pub struct Undo {
    pub side: Side,
    pub placed: Position,
    pub flipped: Vec<Position>,
}

fn offset(pos: Position, dr: i32, dc: i32) -> Option<Position> {
    let row = pos.row as i32 + dr;
    let col = pos.col as i32 + dc;
    if row >= 0 && row < BOARD_SIZE as i32 && col >= 0 && col < BOARD_SIZE as i32 {
        Some(Position::new(row as usize, col as usize))
    } else {
        None
    }
}

/// 指定方向に挟んで裏返せる相手石の列を返す (挟めなければ空)
fn flips_in_direction(board: &Board, pos: Position, side: Side, dr: i32, dc: i32) -> Vec<Position> {
    let own = side.cell();
    let opp = side.opponent().cell();
    let mut path = Vec::new();
    let mut cur = pos;
    while let Some(next) = offset(cur, dr, dc) {
        match board.get(next) {
            c if c == opp => {
                path.push(next);
                cur = next;
            }
            c if c == own && !path.is_empty() => return path,
            _ => break,
        }
    }
    Vec::new()
}

/// 指定方向に挟めるか (裏返す石は集めない)
fn captures_in_direction(board: &Board, pos: Position, side: Side, dr: i32, dc: i32) -> bool {
    let own = side.cell();
    let opp = side.opponent().cell();
    let mut seen_opponent = false;
    let mut cur = pos;
    while let Some(next) = offset(cur, dr, dc) {
        match board.get(next) {
            c if c == opp => {
                seen_opponent = true;
                cur = next;
            }
            c if c == own => return seen_opponent,
            _ => return false,
        }
    }
    false
}

/// そのマスが side の合法手か判定
pub fn is_legal_move(board: &Board, pos: Position, side: Side) -> bool {
    if !pos.on_board() || board.get(pos) != Cell::Empty {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(dr, dc)| captures_in_direction(board, pos, side, dr, dc))
}

/// 合法手生成 (行優先の走査順)
pub fn legal_moves(board: &Board, side: Side) -> Vec<Position> {
    let mut moves = Vec::new();
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            let pos = Position::new(row, col);
            if is_legal_move(board, pos, side) {
                moves.push(pos);
            }
        }
    }
    moves
}

/// 合法手の数 (モビリティ評価用、Vec を作らない)
pub fn count_legal_moves(board: &Board, side: Side) -> usize {
    let mut count = 0;
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if is_legal_move(board, Position::new(row, col), side) {
                count += 1;
            }
        }
    }
    count
}

/// side に合法手が1つでもあるか
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    for row in 0..BOARD_SIZE {
        for col in 0..BOARD_SIZE {
            if is_legal_move(board, Position::new(row, col), side) {
                return true;
            }
        }
    }
    false
}

/// 着手前の盤面に対して、全方向で裏返る石をまとめて返す
pub fn flips_for(board: &Board, pos: Position, side: Side) -> Vec<Position> {
    let mut flips = Vec::new();
    for &(dr, dc) in DIRECTIONS.iter() {
        flips.extend(flips_in_direction(board, pos, side, dr, dc));
    }
    flips
}

/// 着手適用。石を置き、挟んだ全方向の石を裏返す。
/// 裏返し判定はすべて着手前の盤面に対して行う。
/// 失敗時は盤面を変更せずエラーを返す。
pub fn apply_move(board: &mut Board, pos: Position, side: Side) -> Result<Undo, MoveError> {
    if !pos.on_board() {
        return Err(MoveError::OutOfBounds(pos));
    }
    if board.get(pos) != Cell::Empty {
        return Err(MoveError::IllegalMove(pos));
    }
    let flipped = flips_for(board, pos, side);
    if flipped.is_empty() {
        return Err(MoveError::IllegalMove(pos));
    }
    board.set(pos, side.cell());
    for &p in flipped.iter() {
        board.set(p, side.cell());
    }
    Ok(Undo {
        side,
        placed: pos,
        flipped,
    })
}

/// 着手の取り消し。apply_move 直後の盤面を元に戻す。
pub fn undo_move(board: &mut Board, undo: &Undo) {
    board.set(undo.placed, Cell::Empty);
    let opp = undo.side.opponent().cell();
    for &p in undo.flipped.iter() {
        board.set(p, opp);
    }
}

/// 終局判定: 双方に合法手がない場合のみ真。
/// 片方だけ打てない局面はパスであって終局ではない。
pub fn is_terminal(board: &Board) -> bool {
    !has_legal_move(board, Side::Black) && !has_legal_move(board, Side::White)
}
