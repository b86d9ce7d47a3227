use super::Role;
use derive_more::Display;
use test_strategy::Arbitrary;

/// One of the possible outcomes of a game.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Arbitrary)]
pub enum Outcome {
    /// The pile was emptied by the given player.
    #[display(fmt = "the pile is empty")]
    Emptied(Role),

    /// The given player has no quantity left to take.
    #[display(fmt = "the {_0} player can't move anymore")]
    Stuck(Role),
}

impl Outcome {
    /// The side that won the game.
    pub fn winner(&self) -> Role {
        match *self {
            Outcome::Emptied(r) => r,
            Outcome::Stuck(r) => !r,
        }
    }
}
