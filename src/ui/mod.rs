//! Terminal presentation of the showcase page.

pub mod app;
pub mod events;
pub mod gallery;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
