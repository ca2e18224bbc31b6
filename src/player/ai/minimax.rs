use super::config::AIConfig;
use super::eval::evaluate;
use super::pst::pos_weight;
use crate::core::{Board, Position, Side};
use crate::logic::{apply_move, is_terminal, legal_moves, undo_move};
use crate::player::PlayerController;

/// αβ枝刈りミニマックスの対局AI。
/// 探索は手元のスクラッチ盤面を apply/undo で進めるので、
/// 呼び出し元の盤面は変更されない。
pub struct MinimaxAI {
    pub side: Side,
    pub name: String,
    config: AIConfig,
}

impl MinimaxAI {
    pub fn new(side: Side, name: &str) -> Self {
        Self::with_config(side, name, AIConfig::default())
    }

    pub fn with_config(side: Side, name: &str, config: AIConfig) -> Self {
        MinimaxAI {
            side,
            name: name.to_string(),
            config,
        }
    }

    pub fn config(&self) -> &AIConfig {
        &self.config
    }

    /// 指定深さで探索し、評価値と最善手を返す。
    /// 評価値は常に self.side 視点 (有利なら正)。
    pub fn search(&self, board: &Board, depth: u8) -> (i32, Option<Position>) {
        let mut scratch = board.clone();
        self.minimax(&mut scratch, depth, i32::MIN, i32::MAX, true, self.side)
    }

    /// 最善手の選択。合法手がなければ None (パス)。
    /// 終盤は深さを1段ブーストする (呼び出し側のポリシーであり
    /// 探索プリミティブの性質ではない)。
    pub fn choose(&self, board: &Board) -> Option<Position> {
        let moves = legal_moves(board, self.side);
        if moves.is_empty() {
            return None;
        }

        let (_score, best) = self.search(board, self.search_depth(board));
        // 念のためのフォールバック: 探索がパス連鎖しか見なかった場合でも
        // 合法手がある以上は必ず手を返す
        best.or_else(|| self.best_by_weight(&moves))
    }

    /// この局面で使う探索深さ。終盤は深く読む。
    fn search_depth(&self, board: &Board) -> u8 {
        let search = &self.config.search;
        if board.count_empty() <= search.endgame_threshold {
            search.endgame_max_depth.min(search.depth + 1)
        } else {
            search.depth
        }
    }

    /// 位置重み最大の合法手 (フォールバック用)
    fn best_by_weight(&self, moves: &[Position]) -> Option<Position> {
        let weights = &self.config.evaluation.weights;
        moves
            .iter()
            .copied()
            .max_by_key(|&mv| pos_weight(weights, mv))
    }

    /// 単一の再帰関数で最大化・最小化の両ノードを扱う。
    /// is_maximizing が交互に反転し、葉では常に self.side 視点で評価する。
    fn minimax(
        &self,
        board: &mut Board,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
        is_maximizing: bool,
        current_player: Side,
    ) -> (i32, Option<Position>) {
        if depth == 0 || is_terminal(board) {
            return (evaluate(board, self.side, &self.config.evaluation), None);
        }

        let mut moves = legal_moves(board, current_player);
        if moves.is_empty() {
            // パスして相手の手番へ。ウィンドウはそのまま引き継ぐ。
            let (score, _) = self.minimax(
                board,
                depth - 1,
                alpha,
                beta,
                !is_maximizing,
                current_player.opponent(),
            );
            return (score, None);
        }

        // 枝刈り効率のための並べ替え。安定ソートなので同点の手は
        // 生成順 (行優先) を保ち、返る評価値には影響しない。
        let weights = &self.config.evaluation.weights;
        if is_maximizing {
            moves.sort_by_key(|&mv| -pos_weight(weights, mv));
        } else {
            moves.sort_by_key(|&mv| pos_weight(weights, mv));
        }

        let mut best_move = None;
        for mv in moves {
            let undo = match apply_move(board, mv, current_player) {
                Ok(undo) => undo,
                // legal_moves の手なので失敗しない
                Err(_) => continue,
            };
            let (score, _) = self.minimax(
                board,
                depth - 1,
                alpha,
                beta,
                !is_maximizing,
                current_player.opponent(),
            );
            undo_move(board, &undo);

            if is_maximizing {
                if score > alpha {
                    alpha = score;
                    best_move = Some(mv);
                }
            } else if score < beta {
                beta = score;
                best_move = Some(mv);
            }
            if alpha >= beta {
                break;
            }
        }

        let score = if is_maximizing { alpha } else { beta };
        (score, best_move)
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, _legal_moves: &[Position]) -> Option<Position> {
        self.choose(board)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
