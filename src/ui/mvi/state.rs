//! Base trait for UI state in the MVI architecture.

/// Marker trait for UI state objects.
///
/// A state value is a complete snapshot: cloning it captures everything a
/// view needs, and `PartialEq` detects whether a transition changed
/// anything at all.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
