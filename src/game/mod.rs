use crate::core::{Board, MoveError, Position, Side};
use crate::logic::{apply_move, has_legal_move, is_terminal, legal_moves};

/// 終局結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Win(Side),
    Draw,
}

/// 対局セッション。盤面と手番を保持し、着手の検証・適用と
/// パス・終局の管理だけを行う薄いオーケストレータ。
/// 描画や入力はフロントエンド側の責務。
pub struct Game {
    pub board: Board,
    pub current_player: Side,
    last_pass: Option<Side>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_player: Side::Black,
            last_pass: None,
        }
    }

    /// 任意の局面から開始 (テスト・検討用)
    pub fn from_position(board: Board, current_player: Side) -> Self {
        Game {
            board,
            current_player,
            last_pass: None,
        }
    }

    /// 手番側の合法手
    pub fn legal_moves(&self) -> Vec<Position> {
        legal_moves(&self.board, self.current_player)
    }

    /// 検証付きの着手適用。成功したら手番を進め、
    /// 次の手番に合法手がなければ自動でパスして手番を戻す。
    /// 失敗時は盤面・手番とも変更しない。
    pub fn apply_if_legal(&mut self, pos: Position) -> Result<(), MoveError> {
        apply_move(&mut self.board, pos, self.current_player)?;
        self.last_pass = None;
        self.current_player = self.current_player.opponent();

        // 相手が打てず自分は打てるならパス (終局なら手番はそのまま)
        if !has_legal_move(&self.board, self.current_player)
            && has_legal_move(&self.board, self.current_player.opponent())
        {
            self.last_pass = Some(self.current_player);
            self.current_player = self.current_player.opponent();
        }
        Ok(())
    }

    /// 直前の着手で発生したパス (あれば)
    pub fn last_pass(&self) -> Option<Side> {
        self.last_pass
    }

    /// 終局判定 (双方打てない場合のみ)
    pub fn is_over(&self) -> bool {
        is_terminal(&self.board)
    }

    /// 石の数 (黒, 白)
    pub fn disc_counts(&self) -> (u8, u8) {
        self.board.count_discs()
    }

    /// 終局後の勝敗。終局前は None。
    pub fn winner(&self) -> Option<GameResult> {
        if !self.is_over() {
            return None;
        }
        let (black, white) = self.disc_counts();
        Some(if black > white {
            GameResult::Win(Side::Black)
        } else if white > black {
            GameResult::Win(Side::White)
        } else {
            GameResult::Draw
        })
    }
}

impl Default for Game {
    fn default() -> Self {
        Game::new()
    }
}
