use crate::ui::mvi::Intent;

/// Intents handled by the deck reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckIntent {
    /// Start a transition to the given slide. Any integer is accepted;
    /// out-of-range targets are ignored.
    GoTo(isize),
    Next,
    Previous,
    /// The transition window elapsed: make the pending target active.
    Commit,
}

impl Intent for DeckIntent {}
