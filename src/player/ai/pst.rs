use crate::core::{Position, BOARD_SIZE};

/// 位置評価テーブルの型 (8x8, 回転・鏡映対称)
pub type WeightTable = [[i32; BOARD_SIZE]; BOARD_SIZE];

// 盤面の位置評価 (角=高、辺=中、角の隣=低)
pub const POS_WEIGHT: WeightTable = [
    [120, -20, 20, 5, 5, 20, -20, 120],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [5, -5, 3, 3, 3, 3, -5, 5],
    [20, -5, 15, 3, 3, 15, -5, 20],
    [-20, -40, -5, -5, -5, -5, -40, -20],
    [120, -20, 20, 5, 5, 20, -20, 120],
];

/// テーブルから座標の重みを引く
pub fn pos_weight(table: &WeightTable, pos: Position) -> i32 {
    table[pos.row][pos.col]
}
