//! Viewport width of the hosting terminal.

use crossterm::terminal::{window_size, WindowSize};

/// Width in pixels for a terminal window.
///
/// Uses the pixel width the terminal reports; terminals that report 0
/// fall back to `columns × cell_width_px`.
pub fn pixel_width(size: &WindowSize, cell_width_px: u32) -> u32 {
    if size.width > 0 {
        u32::from(size.width)
    } else {
        u32::from(size.columns).saturating_mul(cell_width_px)
    }
}

/// Pixel width estimated from a column count alone (resize events carry
/// only cells).
pub fn width_from_columns(columns: u16, cell_width_px: u32) -> u32 {
    u32::from(columns).saturating_mul(cell_width_px)
}

/// Current terminal width in pixels, if the terminal can be queried.
pub fn current_width(cell_width_px: u32) -> Option<u32> {
    match window_size() {
        Ok(size) => Some(pixel_width(&size, cell_width_px)),
        Err(err) => {
            tracing::warn!(error = %err, "Failed to query terminal size");
            crossterm::terminal::size()
                .ok()
                .map(|(cols, _)| width_from_columns(cols, cell_width_px))
        }
    }
}
