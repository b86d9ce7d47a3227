use crate::nimm::{GameState, Move, Role};
use derive_more::{Display, Error};
use tracing::{debug, instrument, trace};

mod candidate;
mod metrics;
mod score;

pub use candidate::*;
pub use metrics::*;
pub use score::*;

/// The reason why the search failed.
#[derive(Debug, Display, Copy, Clone, Eq, PartialEq, Hash, Error)]
pub enum SearchError {
    /// A node was neither terminal nor had any moves to aggregate.
    #[display(fmt = "the {_0} player has no moves left at a non-terminal node")]
    Exhausted(#[error(not(source))] Role),

    /// The root had no moves to choose from.
    #[display(fmt = "the machine player has no moves to choose from")]
    NoCandidates,
}

/// An implementation of [minimax] that exhausts the game tree.
///
/// The human player maximizes the [`Score`] and the machine player minimizes it.
/// There is no pruning, caching, or depth limit, every line is played out to the end.
///
/// [minimax]: https://en.wikipedia.org/wiki/Minimax
#[derive(Debug, Default)]
pub struct Searcher {
    candidates: Vec<Candidate>,
    metrics: Metrics,
}

impl Searcher {
    /// Constructs a [`Searcher`].
    pub fn new() -> Self {
        Self::default()
    }

    /// The moves available at the root of the last search, in the order they were generated.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// The metrics accumulated over all searches so far.
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    /// Scores the game from the point of view of `turn`, the side to move.
    ///
    /// The state is mutated while searching, but restored before returning.
    #[instrument(level = "debug", skip(self, state), fields(%state), ret, err)]
    pub fn search(&mut self, state: &mut GameState, turn: Role) -> Result<Score, SearchError> {
        self.candidates.clear();

        let mut counters = MetricsCounters::default();
        let result = self.minimax(state, turn, 0, &mut counters);

        let metrics = counters.snapshot();
        self.metrics += metrics;
        debug!(%metrics);

        result
    }

    /// Finds the machine player's move.
    ///
    /// Among the root moves, the one with the lowest score wins, ties going to the smallest quantity.
    #[instrument(level = "debug", skip(self, state), fields(%state), ret, err)]
    pub fn choose(&mut self, state: &mut GameState) -> Result<Move, SearchError> {
        self.search(state, Role::Machine)?;

        for c in &self.candidates {
            trace!(candidate = %c);
        }

        self.candidates
            .iter()
            .min_by_key(|c| c.score())
            .map(Candidate::m)
            .ok_or(SearchError::NoCandidates)
    }

    fn minimax(
        &mut self,
        state: &mut GameState,
        turn: Role,
        ply: u32,
        counters: &mut MetricsCounters,
    ) -> Result<Score, SearchError> {
        counters.node();

        if state.count() == 0 || state.is_stuck(turn) {
            counters.terminal();
            return Ok(Score::terminal(turn));
        }

        let moves: Vec<_> = state.moves(turn).collect();
        let mut scores = Vec::with_capacity(moves.len());

        for m in moves {
            state.apply(m, turn);
            let score = self.minimax(state, !turn, ply + 1, counters);
            state.undo(m, turn);

            let score = score?;
            if ply == 0 {
                self.candidates.push(Candidate::new(m, score));
            }

            scores.push(score);
        }

        match turn {
            Role::Human => scores.into_iter().max(),
            Role::Machine => scores.into_iter().min(),
        }
        .ok_or(SearchError::Exhausted(turn))
    }
}
