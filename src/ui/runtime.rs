use crate::config::Config;
use crate::slides::SlideRegistry;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use tokio::time::Instant;

/// Present the deck until the user quits or the process is asked to stop.
pub async fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let mut app = App::new(SlideRegistry::clasy(), config);
    let mut events = EventHandler::new(config.deck.tick_interval());
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    tracing::info!(slides = app.deck().slide_count(), "deck started");

    loop {
        let now = Instant::now();
        app.on_tick(now);
        terminal.draw(|frame| draw(frame, &app, now))?;
        if app.should_quit() {
            break;
        }

        let wake = app.next_wake(now);
        tokio::select! {
            event = events.next() => match event {
                Some(AppEvent::Key(key)) => handle_key(&mut app, key),
                Some(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse),
                Some(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
                Some(AppEvent::Tick) => {}
                Some(AppEvent::Shutdown) => {
                    tracing::info!("termination signal received");
                    app.request_quit();
                }
                None => break,
            },
            () = sleep_until(wake) => {}
        }
    }

    app.dispose();
    events.dispose();
    drop(guard);
    tracing::info!(slide = app.deck().current_index(), "deck closed");
    Ok(())
}

async fn sleep_until(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(deadline).await,
        None => std::future::pending().await,
    }
}
