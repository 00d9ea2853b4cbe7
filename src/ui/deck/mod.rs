//! Slide navigation.
//!
//! - `state.rs` - navigation state and per-slide visual mode
//! - `intent.rs` - navigation requests and the timed commit
//! - `reducer.rs` - pure two-phase transition logic
//! - `timer.rs` - commit deadline on the tokio clock
//! - `controller.rs` - owns the state, arms the timer, exposes the intents

mod controller;
mod intent;
mod reducer;
mod state;
mod timer;

pub use controller::{DeckController, TransitionTiming};
pub use intent::DeckIntent;
pub use reducer::DeckReducer;
pub use state::{DeckState, NavigationState, SlideVisual};
pub use timer::TransitionTimer;
