//! オセロ (リバーシ) のゲームエンジン。
//!
//! 盤面・合法手生成・評価関数・αβ枝刈りミニマックス探索と、
//! それらを束ねる薄い対局セッションを提供する。描画や入力処理は
//! 持たないので、CLI/GUI/ネットワークどのフロントエンドからでも
//! 同じAPIで駆動できる。

pub mod core;
pub mod game;
pub mod logic;
pub mod player;

mod logic_tests;

pub use crate::core::{Board, Cell, MoveError, Position, Side, BOARD_SIZE};
pub use game::{Game, GameResult};
pub use player::{AIConfig, MinimaxAI, PlayerController, RandomAI};
