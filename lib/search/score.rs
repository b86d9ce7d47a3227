use crate::nimm::Role;
use derive_more::Display;

/// The minimax score, from the point of view of the human player.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[display(fmt = "{_0:+}")]
pub struct Score(i8);

impl Score {
    /// The human player wins.
    pub const HUMAN_WINS: Self = Score(10);

    /// The machine player wins.
    pub const MACHINE_WINS: Self = Score(-10);

    /// The score of a game that is over by the time `turn` is to move.
    pub fn terminal(turn: Role) -> Self {
        match turn {
            Role::Human => Score::MACHINE_WINS,
            Role::Machine => Score::HUMAN_WINS,
        }
    }

    /// The raw score.
    pub fn get(&self) -> i8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[test]
    fn machine_wins_scores_lower() {
        assert!(Score::MACHINE_WINS < Score::HUMAN_WINS);
        assert_eq!(Score::MACHINE_WINS.get(), -10);
        assert_eq!(Score::HUMAN_WINS.get(), 10);
    }

    #[proptest]
    fn side_to_move_at_a_terminal_node_loses(r: Role) {
        assert_ne!(Score::terminal(r), Score::terminal(!r));
        assert_eq!(Score::terminal(Role::Human), Score::MACHINE_WINS);
    }

    #[test]
    fn score_is_displayed_with_sign() {
        assert_eq!(Score::HUMAN_WINS.to_string(), "+10");
        assert_eq!(Score::MACHINE_WINS.to_string(), "-10");
    }
}
