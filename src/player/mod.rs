pub mod ai;
pub mod controller;

pub use ai::{AIConfig, MinimaxAI, RandomAI};
pub use controller::PlayerController;
