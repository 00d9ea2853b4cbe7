//! Unidirectional state primitives shared by the deck UI.
//!
//! ```text
//! input ──→ Intent ──→ Reducer ──→ State ──→ draw
//!   ↑                                          │
//!   └──────────────── next frame ──────────────┘
//! ```
//!
//! Reducers own every state transition. Side effects such as scheduling a
//! timed commit live in the caller that dispatches the intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
