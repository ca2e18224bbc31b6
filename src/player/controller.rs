use crate::core::{Board, Position};

/// プレイヤー操作のtrait。フロントエンド (人間入力・AI) の共通の継ぎ目。
/// 合法手が空の局面では呼ばず、セッション側でパスを処理する。
pub trait PlayerController {
    fn choose_move(&self, board: &Board, legal_moves: &[Position]) -> Option<Position>;
    fn name(&self) -> &str;
}
