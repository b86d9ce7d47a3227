/// Domain types of the token-removal game.
pub mod nimm;
/// Exhaustive minimax searching algorithm.
pub mod search;
