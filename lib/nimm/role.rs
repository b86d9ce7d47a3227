use derive_more::Display;
use std::ops::Not;
use test_strategy::Arbitrary;

/// One of the two players taking tokens from the pile.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[repr(u8)]
pub enum Role {
    /// The player typing moves in, always the first to move.
    #[display(fmt = "human")]
    Human,

    /// The player whose moves are found by search.
    #[display(fmt = "machine")]
    Machine,
}

impl Not for Role {
    type Output = Self;

    fn not(self) -> Self {
        match self {
            Role::Human => Role::Machine,
            Role::Machine => Role::Human,
        }
    }
}
