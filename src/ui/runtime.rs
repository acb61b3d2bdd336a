use crate::api::StoreClient;
use crate::ui::app::App;
use crate::ui::events::EventHandler;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

const TICK_RATE: Duration = Duration::from_millis(250);

/// Runs the console until the user quits.
pub async fn run(client: Arc<StoreClient>, per_page: u32) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut events = EventHandler::new(TICK_RATE);
    let mut app = App::new(client, per_page, events.sender());
    app.start();
    info!(base_url = app.base_url(), "console started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        tokio::select! {
            event = events.next() => match event {
                Some(event) => app.on_event(event),
                None => break,
            },
            _ = tokio::signal::ctrl_c() => app.request_quit(),
        }
    }

    drop(guard);
    info!("console stopped");
    Ok(())
}
