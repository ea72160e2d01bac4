use crate::context::AppContext;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;
use tokio::runtime::Handle;

pub fn run(ctx: AppContext, runtime: Handle) -> io::Result<()> {
    let tick_rate = Duration::from_millis(ctx.config.ui.tick_rate_ms.max(10));
    let debounce = Duration::from_millis(ctx.config.ui.search_debounce_ms);

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(ctx.stores, ctx.images, runtime, events.sender(), debounce);
    app.on_start();
    tracing::info!("Terminal UI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::StoreUpdated) => app.on_store_updated(),
            Ok(AppEvent::Notice(message)) => app.on_notice(message),
            Ok(AppEvent::InputClosed) => {
                tracing::warn!("Input thread stopped, leaving the UI");
                break;
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    tracing::info!("Terminal UI stopped");
    Ok(())
}
