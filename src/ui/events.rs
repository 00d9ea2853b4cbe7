use crossterm::event::{Event, EventStream, KeyEvent, MouseEvent};
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub enum AppEvent {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),
    Tick,
    /// SIGTERM received.
    Shutdown,
}

/// Terminal input, ticks and termination signals on one channel.
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<AppEvent>,
    task: JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(pump(tx, tick_rate));
        Self { rx, task }
    }

    /// `None` once the input stream has closed.
    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn dispose(&self) {
        self.task.abort();
    }
}

impl Drop for EventHandler {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn pump(tx: mpsc::UnboundedSender<AppEvent>, tick_rate: Duration) {
    let mut reader = EventStream::new();
    let mut ticks = tokio::time::interval(tick_rate);
    ticks.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
    let terminate = terminate_signal();
    tokio::pin!(terminate);

    loop {
        let event = tokio::select! {
            _ = ticks.tick() => AppEvent::Tick,
            () = &mut terminate => {
                let _ = tx.send(AppEvent::Shutdown);
                break;
            }
            next = reader.next() => match next {
                Some(Ok(event)) => match translate(event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(err)) => {
                    tracing::error!(error = %err, "terminal input failed");
                    break;
                }
                None => break,
            },
        };
        if tx.send(event).is_err() {
            break;
        }
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        Event::Key(key) => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
        _ => None,
    }
}

#[cfg(unix)]
async fn terminate_signal() {
    use tokio::signal::unix::{signal, SignalKind};
    match signal(SignalKind::terminate()) {
        Ok(mut stream) => {
            stream.recv().await;
        }
        Err(err) => {
            tracing::warn!(error = %err, "cannot listen for SIGTERM");
            std::future::pending::<()>().await;
        }
    }
}

#[cfg(not(unix))]
async fn terminate_signal() {
    std::future::pending::<()>().await;
}
