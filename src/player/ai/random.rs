use crate::core::{Board, Position, Side};
use crate::player::PlayerController;
use rand::seq::SliceRandom;

/// 合法手から一様ランダムに選ぶベースラインAI
pub struct RandomAI {
    pub name: String,
}

impl RandomAI {
    pub fn new(_side: Side, name: &str) -> Self {
        RandomAI {
            name: name.to_string(),
        }
    }
}

impl PlayerController for RandomAI {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, _board: &Board, legal_moves: &[Position]) -> Option<Position> {
        let mut rng = rand::thread_rng();
        legal_moves.choose(&mut rng).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::legal_moves;

    #[test]
    fn picks_one_of_the_legal_moves() {
        let board = Board::new();
        let moves = legal_moves(&board, Side::Black);
        let ai = RandomAI::new(Side::Black, "Random");
        for _ in 0..20 {
            let mv = ai.choose_move(&board, &moves).unwrap();
            assert!(moves.contains(&mv));
        }
    }

    #[test]
    fn returns_none_on_empty_move_list() {
        let board = Board::new();
        let ai = RandomAI::new(Side::White, "Random");
        assert_eq!(ai.choose_move(&board, &[]), None);
    }
}
