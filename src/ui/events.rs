use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use tokio::sync::mpsc::UnboundedSender;

use crate::model::Vehicle;
use crate::shutdown::ShutdownHandle;
use crate::ui::gallery::GalleryTick;

/// Everything the page reacts to, funneled through one channel so all
/// state changes happen on the event loop in arrival order.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    /// Terminal resized to (columns, rows).
    Resize(u16, u16),
    /// One-shot fetch finished. Empty on failure.
    VehiclesLoaded(Vec<Vehicle>),
    GalleryTick(GalleryTick),
    /// OS signal received (SIGINT)
    Shutdown,
}

impl From<GalleryTick> for AppEvent {
    fn from(tick: GalleryTick) -> Self {
        AppEvent::GalleryTick(tick)
    }
}

/// Reads terminal input on a background thread.
pub struct EventHandler {
    handle: Option<thread::JoinHandle<()>>,
}

impl EventHandler {
    pub fn start(tx: UnboundedSender<AppEvent>, shutdown: ShutdownHandle) -> Self {
        let handle = thread::Builder::new()
            .name("terminal-input".to_string())
            .spawn(move || input_loop(tx, shutdown))
            .map_err(|err| tracing::error!(error = %err, "Failed to spawn input thread"))
            .ok();
        Self { handle }
    }

    /// Wait for the input thread to notice shutdown and exit.
    pub fn join(mut self) {
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn input_loop(tx: UnboundedSender<AppEvent>, shutdown: ShutdownHandle) {
    // Short poll timeout so the shutdown flag is checked frequently
    let poll_timeout = Duration::from_millis(50);
    loop {
        if shutdown.is_shutting_down() {
            break;
        }

        match event::poll(poll_timeout) {
            Ok(false) => continue,
            Ok(true) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                break;
            }
        }

        let forwarded = match event::read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => tx.send(AppEvent::Key(key)),
            Ok(Event::Resize(cols, rows)) => tx.send(AppEvent::Resize(cols, rows)),
            Ok(_) => Ok(()),
            Err(err) => {
                tracing::error!(error = %err, "Terminal read failed");
                break;
            }
        };

        if forwarded.is_err() {
            break;
        }
    }
}
