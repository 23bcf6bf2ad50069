//! Hero slider: index selection, auto-advance and manual override.

mod controller;
mod intent;
mod reducer;
mod state;
mod ticker;

pub use controller::GalleryController;
pub use intent::GalleryIntent;
pub use reducer::{next_index, previous_index, GalleryReducer};
pub use state::GalleryState;
pub use ticker::{GalleryTick, Ticker};
