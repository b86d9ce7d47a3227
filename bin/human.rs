use derive_more::{Display, Error};
use lib::nimm::{GameState, Move, Role};

/// The reason why the human player's pick was rejected.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Error)]
pub enum InvalidPick {
    #[display(fmt = "Please enter a whole number.")]
    NotANumber,

    #[display(fmt = "You have to take at least one token per turn.")]
    TooFew,

    #[display(fmt = "You can't take that many tokens! (Maximum {_0})")]
    AboveBound(#[error(not(source))] u32),

    #[display(fmt = "There aren't that many tokens left in the pile!")]
    AboveCount,

    #[display(fmt = "You cannot take the same amount twice!")]
    AlreadyTaken,
}

/// Parses and validates the human player's pick against the current state.
pub fn pick(line: &str, state: &GameState) -> Result<Move, InvalidPick> {
    let n: i64 = line.trim().parse().map_err(|_| InvalidPick::NotANumber)?;

    if n < 1 {
        return Err(InvalidPick::TooFew);
    }

    if n > i64::from(state.bound()) {
        return Err(InvalidPick::AboveBound(state.bound()));
    }

    if n > state.count() {
        return Err(InvalidPick::AboveCount);
    }

    let m = Move::new(n as u32);
    if state.used(Role::Human)[m.pick() as usize - 1] {
        return Err(InvalidPick::AlreadyTaken);
    }

    Ok(m)
}
