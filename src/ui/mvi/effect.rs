//! Base trait for one-shot effects in the MVI architecture.

/// Marker trait for effect objects.
///
/// Effects are one-shot signals (transient notifications, sounds) that do
/// not belong in persistent state. They travel on a channel separate from
/// the state stream so replaying the latest state never replays them.
///
/// No reducer emits effects yet; the per-screen effect enums exist as the
/// contract's extension point.
pub trait Effect: Send + 'static {}
