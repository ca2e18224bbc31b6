pub mod config;
pub mod eval;
pub mod minimax;
pub mod pst;
pub mod random;

pub use config::{AIConfig, EvaluationConfig, SearchConfig};
pub use minimax::MinimaxAI;
pub use random::RandomAI;
