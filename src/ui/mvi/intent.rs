/// Marker for values that request a state change.
///
/// Navigation requests from the keyboard, the mouse and the transition
/// timer all arrive as intents.
pub trait Intent: Send + 'static {}
