use crate::api::ImageSource;
use crate::clipboard::SystemClipboard;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::fetcher::Fetcher;
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

pub fn run(
    config: &Config,
    source: Arc<dyn ImageSource>,
    runtime: Handle,
    initial_query: Option<&str>,
) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(100);
    let events = EventHandler::new(tick_rate);

    let mut app = App::new(&config.gallery);
    app.attach_fetcher(Fetcher::new(runtime, source, events.sender()));
    app.attach_clipboard(Box::new(SystemClipboard::new()));
    if let Some(query) = initial_query {
        app.submit_text(query);
    }
    tracing::info!("tui started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(event) => handle_event(&mut app, event),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    tracing::info!("tui stopped");
    drop(app);
    drop(guard);
    Ok(())
}

fn handle_event(app: &mut App, event: AppEvent) {
    match event {
        AppEvent::Key(key) => handle_key(app, key),
        AppEvent::Paste(text) => handle_paste(app, &text),
        AppEvent::Tick => app.on_tick(),
        AppEvent::Resize(_, _) => {}
        AppEvent::FetchCompleted { generation, result } => {
            app.on_fetch_completed(generation, result)
        }
        AppEvent::FetchSettled { generation } => app.on_fetch_settled(generation),
        AppEvent::InputClosed(reason) => {
            tracing::error!(reason = %reason, "terminal input closed, quitting");
            app.request_quit();
        }
    }
}
