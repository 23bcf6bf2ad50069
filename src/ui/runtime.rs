use std::io;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::Config;
use crate::shutdown::{ShutdownCoordinator, ShutdownPhase};
use crate::source::VehicleSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::viewport::{self, ViewportHub};

/// Width assumed when the terminal cannot be queried at startup.
const FALLBACK_WIDTH: u32 = 1024;

/// Run the page until the user quits or SIGINT arrives.
pub async fn run(config: Config, source: Arc<dyn VehicleSource>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let shutdown = ShutdownCoordinator::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    let cell_width = config.viewport.cell_width_px;
    let hub = ViewportHub::new(viewport::current_width(cell_width).unwrap_or(FALLBACK_WIDTH));
    let events = EventHandler::start(tx.clone(), shutdown.handle());

    let signal_tx = tx.clone();
    let signal_shutdown = shutdown.handle();
    let signal_task = tokio::spawn(async move {
        tokio::select! {
            result = tokio::signal::ctrl_c() => {
                if result.is_ok() {
                    let _ = signal_tx.send(AppEvent::Shutdown);
                }
            }
            _ = signal_shutdown.wait() => {}
        }
    });
    // Stop the input thread and signal listener on every exit path.
    let stop = shutdown.handle();
    scopeguard::defer! {
        stop.signal();
    }

    let mut app = App::new(&config, tx, &hub);
    app.start_loading(source);

    while !app.should_quit() {
        terminal.draw(|frame| draw(frame, &app))?;

        let Some(event) = rx.recv().await else {
            break;
        };
        apply(&mut app, &hub, event, cell_width);
        // Coalesce whatever else is already queued into one redraw.
        while let Ok(event) = rx.try_recv() {
            apply(&mut app, &hub, event, cell_width);
        }
    }

    shutdown.signal();
    shutdown.advance(ShutdownPhase::ReleasingPage);
    app.teardown();

    shutdown.advance(ShutdownPhase::StoppingInput);
    signal_task.abort();
    events.join();

    shutdown.advance(ShutdownPhase::RestoringTerminal);
    drop(terminal);
    drop(guard);
    shutdown.advance(ShutdownPhase::Complete);
    Ok(())
}

fn apply(app: &mut App, hub: &ViewportHub, event: AppEvent, cell_width: u32) {
    match event {
        AppEvent::Resize(cols, _) => {
            let width = viewport::current_width(cell_width)
                .unwrap_or_else(|| viewport::width_from_columns(cols, cell_width));
            hub.publish(width);
        }
        other => app.handle_event(other),
    }
}
