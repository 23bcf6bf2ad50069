//! Owner of the slider state and its auto-advance timer.

use std::time::Duration;

use tokio::sync::mpsc::UnboundedSender;

use crate::dispatch_mvi;
use crate::model::Vehicle;
use crate::scope::Scope;
use crate::ui::gallery::intent::GalleryIntent;
use crate::ui::gallery::reducer::GalleryReducer;
use crate::ui::gallery::state::GalleryState;
use crate::ui::gallery::ticker::{GalleryTick, Ticker};

/// Drives [`GalleryState`] and keeps exactly one timer armed while the
/// slider is active.
///
/// Every list replacement cancels the running timer before arming a new
/// one, and ticks tagged with an older generation are ignored. Manual
/// `next`/`previous` never touch the timer, so the auto-advance phase is
/// preserved across clicks.
pub struct GalleryController<E>
where
    E: From<GalleryTick> + Send + 'static,
{
    state: GalleryState,
    period: Duration,
    timer: Scope<Ticker>,
    generation: u64,
    ticks_applied: u64,
    closed: bool,
    tx: UnboundedSender<E>,
}

impl<E> GalleryController<E>
where
    E: From<GalleryTick> + Send + 'static,
{
    pub fn new(period: Duration, tx: UnboundedSender<E>) -> Self {
        Self {
            state: GalleryState::default(),
            period,
            timer: Scope::new(),
            generation: 0,
            ticks_applied: 0,
            closed: false,
            tx,
        }
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn current_index(&self) -> Option<usize> {
        self.state.current_index()
    }

    pub fn is_timer_running(&self) -> bool {
        self.timer.is_armed()
    }

    /// Generation of the currently armed timer (or of the last one).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of timer ticks that moved the slider.
    pub fn ticks_applied(&self) -> u64 {
        self.ticks_applied
    }

    /// Replace the vehicle list and re-arm the timer for it.
    pub fn replace_items(&mut self, items: Vec<Vehicle>) {
        if self.closed {
            return;
        }
        dispatch_mvi!(self.state, GalleryReducer, GalleryIntent::Replace { items });
        self.generation += 1;

        if self.state.is_active() {
            let ticker = Ticker::start(self.period, self.generation, self.tx.clone());
            self.timer.rearm(Some(ticker));
        } else {
            self.timer.cancel();
        }
    }

    pub fn next(&mut self) {
        if !self.closed {
            dispatch_mvi!(self.state, GalleryReducer, GalleryIntent::Next);
        }
    }

    pub fn previous(&mut self) {
        if !self.closed {
            dispatch_mvi!(self.state, GalleryReducer, GalleryIntent::Previous);
        }
    }

    /// Apply a timer tick. Returns whether it moved the slider.
    pub fn on_tick(&mut self, tick: GalleryTick) -> bool {
        let live = self
            .timer
            .get()
            .is_some_and(|t| t.generation() == tick.generation);
        if self.closed || !live {
            tracing::trace!(generation = tick.generation, "Ignoring stale gallery tick");
            return false;
        }
        dispatch_mvi!(self.state, GalleryReducer, GalleryIntent::Tick);
        self.ticks_applied += 1;
        true
    }

    /// Stop the timer for good. Later ticks and commands are ignored.
    pub fn teardown(&mut self) {
        self.closed = true;
        self.timer.cancel();
    }
}
