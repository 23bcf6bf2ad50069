//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents on this page are:
/// - Key presses (previous/next slide)
/// - Timer ticks from the auto-advance ticker
/// - Data arrivals (the loaded vehicle list)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
