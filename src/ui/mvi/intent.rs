//! Base trait for intents (user actions) in the MVI architecture.

/// Marker trait for intent objects.
///
/// An intent names something that happened (a key press, a navigation
/// request) without saying how state should change; that is the reducer's
/// job.
pub trait Intent: Send + 'static {}
