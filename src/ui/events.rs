use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures::StreamExt;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::warn;

use crate::model::Product;
use crate::ui::categories::CategoryIntent;
use crate::ui::list::ListIntent;
use crate::ui::orders::OrdersIntent;

/// Everything the UI loop reacts to: terminal input, timer ticks and the
/// outcomes of backend calls spawned by the app.
#[derive(Debug)]
pub enum AppEvent {
    Key(KeyEvent),
    Resize(u16, u16),
    Tick,
    Products(ListIntent<Product>),
    Categories(CategoryIntent),
    Orders(OrdersIntent),
}

pub type AppEventSender = UnboundedSender<AppEvent>;

pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: AppEventSender,
}

impl EventHandler {
    /// Starts forwarding terminal events and ticks into the app channel.
    ///
    /// Must be called inside a tokio runtime.
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        tokio::spawn(async move {
            let mut reader = EventStream::new();
            let mut ticker = tokio::time::interval(tick_rate);

            loop {
                let event = tokio::select! {
                    _ = ticker.tick() => AppEvent::Tick,
                    input = reader.next() => match input {
                        Some(Ok(Event::Key(key))) => AppEvent::Key(key),
                        Some(Ok(Event::Resize(cols, rows))) => AppEvent::Resize(cols, rows),
                        Some(Ok(_)) => continue,
                        Some(Err(err)) => {
                            warn!(error = %err, "terminal input error");
                            break;
                        }
                        None => break,
                    },
                };

                if event_tx.send(event).is_err() {
                    break;
                }
            }
        });

        Self { rx, tx }
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> AppEventSender {
        self.tx.clone()
    }
}
