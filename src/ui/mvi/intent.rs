//! Base trait for intents (user/system actions) in the MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (key presses)
/// - Navigation events
///
/// Intents are processed by reducers to produce new states. A screen with
/// nothing to handle declares an empty intent enum, which makes dispatch
/// a no-op by construction.
pub trait Intent: Send + 'static {}
