use super::Score;
use crate::nimm::Move;
use derive_more::{Constructor, Display};

/// A move available at the root of the search, paired with its [`Score`].
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Constructor)]
#[display(fmt = "{}: {}", m, score)]
pub struct Candidate {
    m: Move,
    score: Score,
}

impl Candidate {
    /// The move.
    pub fn m(&self) -> Move {
        self.m
    }

    /// The score of the move.
    pub fn score(&self) -> Score {
        self.score
    }
}
