use std::time::Duration;
use tokio::time::Instant;

use crate::ui::mvi::Reducer;

use super::intent::DeckIntent;
use super::reducer::DeckReducer;
use super::state::{DeckState, NavigationState, SlideVisual};
use super::timer::TransitionTimer;

/// Transition timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionTiming {
    /// Delay between locking the deck and committing the new slide.
    pub commit_delay: Duration,
    /// Length of the exit animation. Never longer than `commit_delay`.
    pub animation: Duration,
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self {
            commit_delay: Duration::from_millis(300),
            animation: Duration::from_millis(280),
        }
    }
}

/// Owns the deck state and is the only thing allowed to change which slide
/// is active.
///
/// Navigation calls run phase one through [`DeckReducer`] and arm the
/// transition timer; [`DeckController::poll_commit`] runs phase two once the
/// deadline passes.
#[derive(Debug)]
pub struct DeckController {
    state: DeckState,
    timing: TransitionTiming,
    timer: TransitionTimer,
    disposed: bool,
}

impl DeckController {
    pub fn new(slide_count: usize, timing: TransitionTiming) -> Self {
        Self {
            state: DeckState::new(slide_count),
            timing,
            timer: TransitionTimer::default(),
            disposed: false,
        }
    }

    pub fn state(&self) -> &DeckState {
        &self.state
    }

    pub fn slide_count(&self) -> usize {
        self.state.slide_count()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn is_transitioning(&self) -> bool {
        self.state.is_transitioning()
    }

    pub fn navigation(&self) -> NavigationState {
        self.state.navigation()
    }

    pub fn visual(&self, index: usize) -> SlideVisual {
        self.state.visual(index)
    }

    pub fn progress_fraction(&self) -> f64 {
        self.state.progress_fraction()
    }

    pub fn can_go_previous(&self) -> bool {
        self.state.can_go_previous()
    }

    pub fn can_go_next(&self) -> bool {
        self.state.can_go_next()
    }

    /// Returns whether the request started a transition.
    pub fn go_to(&mut self, target: isize) -> bool {
        self.navigate(DeckIntent::GoTo(target))
    }

    pub fn next(&mut self) -> bool {
        self.navigate(DeckIntent::Next)
    }

    pub fn previous(&mut self) -> bool {
        self.navigate(DeckIntent::Previous)
    }

    fn navigate(&mut self, intent: DeckIntent) -> bool {
        if self.disposed || self.state.is_transitioning() {
            return false;
        }
        self.dispatch(intent);
        if !self.state.is_transitioning() {
            return false;
        }
        self.timer.schedule(Instant::now(), self.timing.commit_delay);
        tracing::debug!(
            from = self.state.current_index(),
            to = ?self.state.pending_target(),
            "slide transition started"
        );
        true
    }

    pub fn commit_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Commit the running transition if its deadline has passed.
    pub fn poll_commit(&mut self, now: Instant) -> bool {
        if !self.timer.take_due(now) {
            return false;
        }
        self.dispatch(DeckIntent::Commit);
        tracing::trace!(current = self.state.current_index(), "slide transition committed");
        true
    }

    /// Exit animation progress, `None` while steady.
    pub fn transition_progress(&self, now: Instant) -> Option<f32> {
        if !self.state.is_transitioning() {
            return None;
        }
        self.timer.progress(now, self.timing.animation)
    }

    /// Cancel the scheduled commit and stop accepting navigation.
    pub fn dispose(&mut self) {
        self.timer.cancel();
        self.disposed = true;
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn dispatch(&mut self, intent: DeckIntent) {
        self.state = DeckReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[tokio::test(start_paused = true)]
    async fn commit_waits_for_deadline() {
        let mut deck = DeckController::new(10, TransitionTiming::default());
        assert!(deck.next());

        tokio::time::advance(Duration::from_millis(299)).await;
        assert!(!deck.poll_commit(Instant::now()));
        assert_eq!(deck.current_index(), 0);

        tokio::time::advance(Duration::from_millis(1)).await;
        assert!(deck.poll_commit(Instant::now()));
        assert_eq!(deck.current_index(), 1);
        assert!(!deck.is_transitioning());
    }

    #[tokio::test(start_paused = true)]
    async fn rejected_request_does_not_arm_timer() {
        let mut deck = DeckController::new(10, TransitionTiming::default());
        assert!(!deck.previous());
        assert!(deck.commit_deadline().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn dispose_cancels_pending_commit() {
        let mut deck = DeckController::new(10, TransitionTiming::default());
        deck.go_to(4);
        deck.dispose();

        tokio::time::advance(WINDOW).await;
        assert!(!deck.poll_commit(Instant::now()));
        assert!(!deck.go_to(2));
        assert!(deck.is_disposed());
    }

    #[tokio::test(start_paused = true)]
    async fn progress_tracks_animation_span() {
        let timing = TransitionTiming {
            commit_delay: WINDOW,
            animation: Duration::from_millis(200),
        };
        let mut deck = DeckController::new(10, timing);
        assert!(deck.transition_progress(Instant::now()).is_none());

        deck.next();
        tokio::time::advance(Duration::from_millis(100)).await;
        let progress = deck.transition_progress(Instant::now()).unwrap();
        assert!((progress - 0.5).abs() < 1e-3);
    }
}
