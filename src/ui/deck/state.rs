//! Navigation and per-slide visual state.

use crate::ui::mvi::UiState;

/// Rendering mode of a single slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideVisual {
    /// On screen and accepting pointer input.
    Active,
    /// Leaving towards a later slide; drifts left while it fades.
    ExitForward,
    /// Leaving towards an earlier slide; drifts right while it fades.
    ExitBackward,
    /// Not drawn. Waits off to the right.
    #[default]
    Hidden,
}

impl SlideVisual {
    pub fn opacity(self) -> f32 {
        match self {
            Self::Active => 1.0,
            _ => 0.0,
        }
    }

    /// Sign of the horizontal offset the slide is drawn at.
    pub fn offset_direction(self) -> i8 {
        match self {
            Self::Active => 0,
            Self::ExitForward => -1,
            Self::ExitBackward | Self::Hidden => 1,
        }
    }

    pub fn is_interactive(self) -> bool {
        self == Self::Active
    }

    pub fn is_exiting(self) -> bool {
        matches!(self, Self::ExitForward | Self::ExitBackward)
    }
}

/// Current slide plus the re-entrancy lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: usize,
    pub transitioning: bool,
}

/// Full deck state: navigation, the in-flight target and every slide's
/// visual mode.
#[derive(Debug, Clone, PartialEq)]
pub struct DeckState {
    current: usize,
    pending: Option<usize>,
    visuals: Vec<SlideVisual>,
}

impl UiState for DeckState {}

/// A single-slide deck. Only used as the placeholder while a dispatcher
/// swaps state through the reducer.
impl Default for DeckState {
    fn default() -> Self {
        Self::new(1)
    }
}

impl DeckState {
    /// Steady state on the first slide. `slide_count` is clamped to at
    /// least one slide.
    pub fn new(slide_count: usize) -> Self {
        let slide_count = slide_count.max(1);
        let mut visuals = vec![SlideVisual::Hidden; slide_count];
        visuals[0] = SlideVisual::Active;
        Self {
            current: 0,
            pending: None,
            visuals,
        }
    }

    pub fn slide_count(&self) -> usize {
        self.visuals.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Slide that becomes active when the running transition commits.
    pub fn pending_target(&self) -> Option<usize> {
        self.pending
    }

    pub fn navigation(&self) -> NavigationState {
        NavigationState {
            current_index: self.current,
            transitioning: self.is_transitioning(),
        }
    }

    pub fn visual(&self, index: usize) -> SlideVisual {
        self.visuals.get(index).copied().unwrap_or_default()
    }

    pub fn visuals(&self) -> &[SlideVisual] {
        &self.visuals
    }

    pub fn progress_fraction(&self) -> f64 {
        (self.current + 1) as f64 / self.slide_count() as f64
    }

    pub fn can_go_previous(&self) -> bool {
        self.current > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current + 1 < self.slide_count()
    }

    /// Steady: exactly one `Active`, no exit. In flight: exactly one exit,
    /// no `Active`.
    pub fn invariant_holds(&self) -> bool {
        let active = self.visuals.iter().filter(|v| **v == SlideVisual::Active).count();
        let exiting = self.visuals.iter().filter(|v| v.is_exiting()).count();
        if self.is_transitioning() {
            active == 0 && exiting == 1 && self.visuals[self.current].is_exiting()
        } else {
            active == 1 && exiting == 0 && self.visuals[self.current] == SlideVisual::Active
        }
    }

    pub(super) fn begin_transition(&mut self, target: usize) {
        let exit = if target > self.current {
            SlideVisual::ExitForward
        } else {
            SlideVisual::ExitBackward
        };
        for visual in &mut self.visuals {
            *visual = SlideVisual::Hidden;
        }
        self.visuals[self.current] = exit;
        self.pending = Some(target);
    }

    pub(super) fn commit(&mut self) {
        let Some(target) = self.pending.take() else {
            return;
        };
        for visual in &mut self.visuals {
            *visual = SlideVisual::Hidden;
        }
        self.visuals[target] = SlideVisual::Active;
        self.current = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_deck_starts_on_first_slide() {
        let state = DeckState::new(10);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_transitioning());
        assert_eq!(state.visual(0), SlideVisual::Active);
        assert!((1..10).all(|i| state.visual(i) == SlideVisual::Hidden));
        assert!(state.invariant_holds());
    }

    #[test]
    fn zero_slides_is_clamped_to_one() {
        let state = DeckState::new(0);
        assert_eq!(state.slide_count(), 1);
        assert!(state.invariant_holds());
    }

    #[test]
    fn render_mapping() {
        assert_eq!(SlideVisual::Active.opacity(), 1.0);
        assert_eq!(SlideVisual::Hidden.opacity(), 0.0);
        assert_eq!(SlideVisual::Active.offset_direction(), 0);
        assert_eq!(SlideVisual::ExitForward.offset_direction(), -1);
        assert_eq!(SlideVisual::ExitBackward.offset_direction(), 1);
        assert_eq!(SlideVisual::Hidden.offset_direction(), 1);
        assert!(SlideVisual::Active.is_interactive());
        assert!(!SlideVisual::ExitForward.is_interactive());
        assert!(!SlideVisual::Hidden.is_interactive());
    }

    #[test]
    fn out_of_range_visual_reads_as_hidden() {
        let state = DeckState::new(3);
        assert_eq!(state.visual(7), SlideVisual::Hidden);
    }

    #[test]
    fn progress_fraction_counts_current_slide() {
        let state = DeckState::new(4);
        assert_eq!(state.progress_fraction(), 0.25);
    }

    #[test]
    fn boundary_controls_on_first_slide() {
        let state = DeckState::new(10);
        assert!(!state.can_go_previous());
        assert!(state.can_go_next());
    }
}
