use std::time::Duration;
use tokio::time::Instant;

/// Deferred commit of a slide transition.
///
/// Holds the deadline on the tokio clock instead of owning a sleeping task,
/// so the event loop can wait on it and tests can move time forward with
/// `tokio::time::advance`.
#[derive(Debug, Clone, Default)]
pub struct TransitionTimer {
    window: Option<Window>,
}

#[derive(Debug, Clone, Copy)]
struct Window {
    started: Instant,
    deadline: Instant,
}

impl TransitionTimer {
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.window = Some(Window {
            started: now,
            deadline: now + delay,
        });
    }

    pub fn cancel(&mut self) {
        self.window = None;
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.window.map(|w| w.deadline)
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.window.is_some_and(|w| now >= w.deadline)
    }

    /// Clear the timer if it has fired. Returns whether it did.
    pub fn take_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.window = None;
            true
        } else {
            false
        }
    }

    /// Fraction of `span` elapsed since scheduling, clamped to `0.0..=1.0`.
    pub fn progress(&self, now: Instant, span: Duration) -> Option<f32> {
        let window = self.window?;
        if span.is_zero() {
            return Some(1.0);
        }
        let elapsed = now.saturating_duration_since(window.started);
        Some((elapsed.as_secs_f32() / span.as_secs_f32()).min(1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_is_never_due() {
        let timer = TransitionTimer::default();
        assert!(timer.deadline().is_none());
        assert!(!timer.is_due(Instant::now()));
        assert!(timer.progress(Instant::now(), Duration::from_millis(10)).is_none());
    }

    #[test]
    fn fires_at_deadline_once() {
        let now = Instant::now();
        let mut timer = TransitionTimer::default();
        timer.schedule(now, Duration::from_millis(300));

        assert!(!timer.take_due(now + Duration::from_millis(299)));
        assert!(timer.take_due(now + Duration::from_millis(300)));
        assert!(!timer.take_due(now + Duration::from_millis(301)));
    }

    #[test]
    fn cancel_clears_deadline() {
        let now = Instant::now();
        let mut timer = TransitionTimer::default();
        timer.schedule(now, Duration::from_millis(300));
        timer.cancel();
        assert!(!timer.is_due(now + Duration::from_secs(1)));
    }

    #[test]
    fn progress_is_clamped() {
        let now = Instant::now();
        let mut timer = TransitionTimer::default();
        timer.schedule(now, Duration::from_millis(300));
        let span = Duration::from_millis(200);

        assert_eq!(timer.progress(now, span), Some(0.0));
        let half = timer.progress(now + Duration::from_millis(100), span).unwrap();
        assert!((half - 0.5).abs() < 1e-6);
        assert_eq!(timer.progress(now + Duration::from_millis(250), span), Some(1.0));
    }
}
