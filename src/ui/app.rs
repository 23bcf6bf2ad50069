use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::config::{Config, ContactConfig, PageConfig};
use crate::loader::{self, LoadTask};
use crate::model::Vehicle;
use crate::scope::Scope;
use crate::source::VehicleSource;
use crate::ui::events::AppEvent;
use crate::ui::gallery::{GalleryController, GalleryState, GalleryTick};
use crate::ui::input::{map_key, InputAction};
use crate::ui::layout::{grid_columns, grid_rows};
use crate::viewport::{ViewportMode, ViewportSignal, ViewportTracker};

/// The showcase page: loading flag, slider, layout mode and grid scroll.
///
/// Owns every timer, subscription and in-flight fetch it starts;
/// [`App::teardown`] (or drop) releases all of them.
pub struct App {
    should_quit: bool,
    loading: bool,
    load_started: bool,
    closed: bool,
    grid_scroll: usize,
    gallery: GalleryController<AppEvent>,
    viewport: ViewportTracker,
    load: Scope<LoadTask>,
    tx: UnboundedSender<AppEvent>,
    page: PageConfig,
    contact: ContactConfig,
}

impl App {
    pub fn new(config: &Config, tx: UnboundedSender<AppEvent>, signal: &dyn ViewportSignal) -> Self {
        let period = Duration::from_millis(config.gallery.interval_ms);
        Self {
            should_quit: false,
            loading: true,
            load_started: false,
            closed: false,
            grid_scroll: 0,
            gallery: GalleryController::new(period, tx.clone()),
            viewport: ViewportTracker::start(signal, config.viewport.compact_breakpoint),
            load: Scope::new(),
            tx,
            page: config.page.clone(),
            contact: config.contact.clone(),
        }
    }

    /// Issue the one-shot fetch. Further calls are ignored.
    pub fn start_loading(&mut self, source: Arc<dyn VehicleSource>) {
        if self.closed {
            tracing::warn!("Page already torn down; not fetching vehicles");
            return;
        }
        if self.load_started {
            tracing::warn!("Vehicle fetch already issued; ignoring");
            return;
        }
        self.load_started = true;
        self.loading = true;
        let task = loader::spawn(source, self.tx.clone(), AppEvent::VehiclesLoaded);
        self.load.rearm(Some(task));
    }

    pub fn on_vehicles_loaded(&mut self, vehicles: Vec<Vehicle>) {
        if self.closed {
            return;
        }
        self.loading = false;
        self.load.cancel();
        self.grid_scroll = 0;
        self.gallery.replace_items(vehicles);
    }

    pub fn on_tick(&mut self, tick: GalleryTick) {
        self.gallery.on_tick(tick);
    }

    pub fn next(&mut self) {
        self.gallery.next();
    }

    pub fn previous(&mut self) {
        self.gallery.previous();
    }

    /// Apply one event from the loop. Resize events are handled by the
    /// owner of the viewport signal, not here.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Key(key) => match map_key(key) {
                InputAction::Previous => self.previous(),
                InputAction::Next => self.next(),
                InputAction::ScrollUp => self.grid_scroll = self.grid_scroll.saturating_sub(1),
                InputAction::ScrollDown => self.scroll_down(),
                InputAction::Quit => self.request_quit(),
                InputAction::None => {}
            },
            AppEvent::VehiclesLoaded(vehicles) => self.on_vehicles_loaded(vehicles),
            AppEvent::GalleryTick(tick) => self.on_tick(tick),
            AppEvent::Shutdown => self.request_quit(),
            AppEvent::Resize(..) => {}
        }
    }

    fn scroll_down(&mut self) {
        let rows = grid_rows(self.items().len(), grid_columns(self.is_compact()));
        self.grid_scroll = (self.grid_scroll + 1).min(rows.saturating_sub(1));
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn items(&self) -> &[Vehicle] {
        self.gallery.state().items()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.gallery.current_index()
    }

    pub fn gallery(&self) -> &GalleryState {
        self.gallery.state()
    }

    pub fn is_timer_running(&self) -> bool {
        self.gallery.is_timer_running()
    }

    pub fn is_compact(&self) -> bool {
        self.viewport.is_compact()
    }

    pub fn viewport_mode(&self) -> ViewportMode {
        self.viewport.mode()
    }

    pub fn is_fetch_in_flight(&self) -> bool {
        self.load.get().is_some_and(|task| !task.is_finished())
    }

    pub fn is_viewport_subscribed(&self) -> bool {
        self.viewport.is_subscribed()
    }

    /// First grid row to draw.
    pub fn grid_scroll(&self) -> usize {
        self.grid_scroll
    }

    pub fn page(&self) -> &PageConfig {
        &self.page
    }

    pub fn contact(&self) -> &ContactConfig {
        &self.contact
    }

    /// Release the fetch, the timer and the resize subscription.
    pub fn teardown(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        self.load.cancel();
        self.gallery.teardown();
        self.viewport.stop();
        tracing::debug!("Page torn down");
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.teardown();
    }
}
