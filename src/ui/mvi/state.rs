//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are plain values: cloned to derive the next state, compared to
/// detect changes, and defaulted to their empty form so a reducer can
/// take ownership with `std::mem::take`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
