use derive_more::{DebugCustom, Display};
use test_strategy::Arbitrary;

/// A turn of the game, the quantity of tokens taken from the pile.
#[derive(DebugCustom, Display, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Arbitrary)]
#[debug(fmt = "Move({self})")]
#[display(fmt = "{_0}")]
pub struct Move(#[strategy(1..=16u32)] u32);

impl Move {
    /// Constructs a [`Move`] that takes `pick` tokens.
    pub fn new(pick: u32) -> Self {
        Move(pick)
    }

    /// The quantity of tokens taken.
    pub fn pick(&self) -> u32 {
        self.0
    }

    /// The zero-based slot of this quantity in a used-quantity record.
    pub(crate) fn index(&self) -> usize {
        self.0 as usize - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_strategy::proptest;

    #[proptest]
    fn move_displays_the_quantity_taken(#[strategy(1..1000u32)] n: u32) {
        assert_eq!(Move::new(n).to_string(), n.to_string());
    }

    #[proptest]
    fn index_is_one_less_than_pick(m: Move) {
        assert_eq!(m.index() + 1, m.pick() as usize);
    }
}
