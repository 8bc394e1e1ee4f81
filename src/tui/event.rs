//! Terminal event source
//!
//! One background task merges a periodic animation tick with crossterm's
//! async key stream and feeds both into a single queue. The event loop is
//! the only consumer. Dropping the source cancels the task.

use crossterm::event::{Event as CrosstermEvent, EventStream, KeyEvent};
use futures::{Stream, StreamExt};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

/// Events delivered to the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Animation frame
    Tick,
    Key(KeyEvent),
    /// Terminal size changed; redraw
    Resize,
}

pub struct EventSource {
    rx: mpsc::UnboundedReceiver<Event>,
    cancel: CancellationToken,
    _task: JoinHandle<()>,
}

impl EventSource {
    /// Read keys from the real terminal
    pub fn new(tick_rate: Duration) -> Self {
        Self::with_input(EventStream::new(), tick_rate)
    }

    /// Read keys from any crossterm event stream
    pub fn with_input<S>(input: S, tick_rate: Duration) -> Self
    where
        S: Stream<Item = io::Result<CrosstermEvent>> + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancellationToken::new();
        let task = tokio::spawn(pump(input, tx, cancel.clone(), tick_rate));
        Self {
            rx,
            cancel,
            _task: task,
        }
    }

    /// Next event, or None once the producer has stopped
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }
}

impl Drop for EventSource {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

async fn pump<S>(
    mut input: S,
    tx: mpsc::UnboundedSender<Event>,
    cancel: CancellationToken,
    tick_rate: Duration,
) where
    S: Stream<Item = io::Result<CrosstermEvent>> + Unpin,
{
    let mut ticker = tokio::time::interval(tick_rate);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        let event = tokio::select! {
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => Event::Tick,
            next = input.next() => match next {
                Some(Ok(CrosstermEvent::Key(key))) => Event::Key(key),
                Some(Ok(CrosstermEvent::Resize(_, _))) => Event::Resize,
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    tracing::warn!("Terminal input error: {}", e);
                    break;
                }
                None => {
                    tracing::debug!("Terminal input stream closed");
                    break;
                }
            },
        };

        if tx.send(event).is_err() {
            break;
        }
    }

    tracing::debug!("Event source stopped");
}
