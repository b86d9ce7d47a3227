use lib::nimm::{GameState, Move, Role};
use lib::search::{Score, Searcher};
use proptest::sample::Selector;
use std::collections::HashSet;
use test_strategy::proptest;

#[proptest]
fn games_against_the_machine_always_end(#[strategy(1..=14u32)] pile: u32, selector: Selector) {
    let mut state = GameState::new(pile);
    let mut searcher = Searcher::new();
    let mut taken = [HashSet::new(), HashSet::new()];
    let mut total = 0i64;
    let mut turn = Role::Human;
    let mut plies = 0;

    while state.outcome(turn).is_none() {
        let m = match turn {
            Role::Machine => searcher.choose(&mut state)?,
            Role::Human => match selector.try_select(state.moves(turn)) {
                Some(m) => m,
                None => break,
            },
        };

        assert!(taken[turn as usize].insert(m), "{m} taken twice by the {turn}");

        state.apply(m, turn);
        total += i64::from(m.pick());
        plies += 1;
        turn = !turn;

        assert_eq!(state.count(), i64::from(pile) - total);
    }

    assert!(plies <= 2 * state.bound());
}

#[proptest]
fn machine_choice_does_not_depend_on_earlier_searches(
    #[strategy(4..=14u32)] pile: u32,
    #[strategy(1..=2u32)] first: u32,
) {
    let mut state = GameState::new(pile);
    state.apply(Move::new(first), Role::Human);

    let mut warm = Searcher::new();
    warm.search(&mut GameState::new(pile), Role::Human)?;

    assert_eq!(warm.choose(&mut state)?, Searcher::new().choose(&mut state)?);
}

#[test]
fn machine_wins_from_four_tokens_when_moving_first() {
    let mut state = GameState::new(4);
    let mut searcher = Searcher::new();

    assert_eq!(searcher.search(&mut state, Role::Machine), Ok(Score::MACHINE_WINS));
    assert_eq!(searcher.choose(&mut state), Ok(Move::new(1)));
}
