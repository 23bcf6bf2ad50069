//! Intents for the hero slider.

use crate::model::Vehicle;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum GalleryIntent {
    /// The vehicle list was (re)loaded. Replaces the whole set.
    Replace { items: Vec<Vehicle> },

    /// Auto-advance period elapsed.
    Tick,

    /// User asked for the next slide.
    Next,

    /// User asked for the previous slide.
    Previous,
}

impl Intent for GalleryIntent {}
