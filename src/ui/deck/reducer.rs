//! Reducer for deck navigation.

use crate::ui::mvi::Reducer;

use super::intent::DeckIntent;
use super::state::DeckState;

/// Two-phase slide transitions.
///
/// `GoTo` locks the deck and marks the outgoing slide as exiting; `Commit`
/// activates the target and releases the lock. Requests that arrive while
/// locked, point at the current slide, or fall outside the deck are
/// returned unchanged. Scheduling the commit is the caller's job.
pub struct DeckReducer;

impl Reducer for DeckReducer {
    type State = DeckState;
    type Intent = DeckIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        let current = state.current_index() as isize;
        match intent {
            DeckIntent::GoTo(target) => start(&mut state, target),
            DeckIntent::Next => start(&mut state, current + 1),
            DeckIntent::Previous => start(&mut state, current - 1),
            DeckIntent::Commit => state.commit(),
        }
        debug_assert!(state.invariant_holds(), "deck visual invariant broken: {state:?}");
        state
    }
}

fn start(state: &mut DeckState, target: isize) {
    if state.is_transitioning() {
        return;
    }
    let Ok(target) = usize::try_from(target) else {
        return;
    };
    if target >= state.slide_count() || target == state.current_index() {
        return;
    }
    state.begin_transition(target);
}
