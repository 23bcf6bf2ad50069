//! Terminal showcase page for a car-rental fleet.
//!
//! The page fetches the vehicle collection once, shows it in an
//! auto-rotating hero slider and a responsive card grid, and switches
//! between wide and compact layouts as the viewport is resized.

pub mod cli;
pub mod config;
pub mod loader;
pub mod logging;
pub mod model;
pub mod scope;
pub mod shutdown;
pub mod source;
pub mod ui;
pub mod viewport;
