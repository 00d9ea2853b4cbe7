pub mod app;
pub mod deck;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod slide_view;
pub mod swipe;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
