//! Responsive layout tracking.
//!
//! The tracker never reads global window state; it is handed a
//! [`ViewportSignal`] so tests can drive it with synthetic widths.

mod signal;
mod terminal;
mod tracker;

pub use signal::{Subscription, ViewportHub, ViewportSignal, WidthListener};
pub use terminal::{current_width, pixel_width, width_from_columns};
pub use tracker::{ViewportMode, ViewportTracker, COMPACT_BREAKPOINT};
