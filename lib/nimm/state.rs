use super::{bound, Move, Outcome, Role};
use bitvec::{bitvec, slice::BitSlice, vec::BitVec};
use derive_more::Display;
use proptest::sample::{Selector, SelectorStrategy};
use proptest::{prelude::*, strategy::Map};
use std::ops::{Range, RangeInclusive};

/// The state of a single game.
///
/// Besides the tokens left in the pile, it records which quantities each
/// player has already taken, since every quantity is usable once per player.
#[derive(Debug, Display, Clone, Eq, PartialEq, Hash)]
#[display(fmt = "{}/{} tokens left, at most {} per turn", count, pile, bound)]
pub struct GameState {
    pile: u32,
    count: i64,
    bound: u32,
    used: [BitVec; 2],
}

impl Arbitrary for GameState {
    type Parameters = ();
    type Strategy = Map<
        (RangeInclusive<u32>, Range<usize>, SelectorStrategy),
        fn((u32, usize, Selector)) -> GameState,
    >;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1..=16, 0..8, any::<Selector>()).prop_map(|(pile, plies, selector)| {
            let mut state = GameState::new(pile);
            let mut turn = Role::Human;

            for _ in 0..plies {
                if state.outcome(turn).is_some() {
                    break;
                }

                let Some(m) = selector.try_select(state.moves(turn)) else {
                    break;
                };

                state.apply(m, turn);
                turn = !turn;
            }

            state
        })
    }
}

impl GameState {
    /// Starts a game from a pile of `pile` tokens.
    pub fn new(pile: u32) -> Self {
        let bound = bound(pile);

        GameState {
            pile,
            count: pile.into(),
            bound,
            used: [bitvec![0; bound as usize], bitvec![0; bound as usize]],
        }
    }

    /// The initial size of the pile.
    pub fn pile(&self) -> u32 {
        self.pile
    }

    /// The number of tokens left in the pile.
    ///
    /// May drop below zero, since quantities one past the count are generated as legal.
    pub fn count(&self) -> i64 {
        self.count
    }

    /// The largest quantity that may be taken in a single turn.
    pub fn bound(&self) -> u32 {
        self.bound
    }

    /// The quantities already taken by a player, where quantity `q` lives at index `q - 1`.
    pub fn used(&self, role: Role) -> &BitSlice {
        &self.used[role as usize]
    }

    /// Takes tokens from the pile on behalf of a player.
    ///
    /// The move is not validated, legality is left to the caller.
    pub fn apply(&mut self, m: Move, role: Role) {
        debug_assert!((1..=self.bound).contains(&m.pick()), "{m} ∉ 1..={}", self.bound);
        debug_assert!(!self.used(role)[m.index()], "{m} already taken by the {role}");

        self.used[role as usize].set(m.index(), true);
        self.count -= i64::from(m.pick());
    }

    /// Reverts a previous call to [`GameState::apply`].
    pub fn undo(&mut self, m: Move, role: Role) {
        debug_assert!((1..=self.bound).contains(&m.pick()), "{m} ∉ 1..={}", self.bound);
        debug_assert!(self.used(role)[m.index()], "{m} never taken by the {role}");

        self.used[role as usize].set(m.index(), false);
        self.count += i64::from(m.pick());
    }

    /// An iterator over the legal moves for a player, in ascending order.
    ///
    /// A quantity is legal if unused and its zero-based index does not exceed the count,
    /// which admits taking one token more than what is left.
    pub fn moves(&self, role: Role) -> impl DoubleEndedIterator<Item = Move> + '_ {
        self.used(role)
            .iter_zeros()
            .filter(move |&i| i as i64 <= self.count)
            .map(|i| Move::new(i as u32 + 1))
    }

    /// Whether a player has nothing left to take.
    ///
    /// Only slots `1..bound` are inspected, each compared by its raw index against the count,
    /// so an unused quantity of one never keeps a player from being stuck.
    pub fn is_stuck(&self, role: Role) -> bool {
        let used = self.used(role);
        !(1..self.bound as usize).any(|i| self.count - i as i64 >= 0 && !used[i])
    }

    /// The outcome of the game, if it is over by the time `turn` is to move.
    pub fn outcome(&self, turn: Role) -> Option<Outcome> {
        if self.count <= 0 {
            Some(Outcome::Emptied(!turn))
        } else if self.is_stuck(turn) {
            Some(Outcome::Stuck(turn))
        } else {
            None
        }
    }
}
