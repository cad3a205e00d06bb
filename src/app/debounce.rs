use std::time::Duration;
use tokio::sync::mpsc;

/// Collapses bursts of values into the last one
///
/// A value is emitted once no newer value has arrived for `delay`. When every
/// sender is dropped, a pending value is emitted immediately and the stream
/// ends after it.
#[derive(Debug)]
pub struct Debouncer<T> {
    rx: mpsc::UnboundedReceiver<T>,
    delay: Duration,
}

impl<T> Debouncer<T> {
    /// Creates a debouncer and the sender that feeds it
    pub fn new(delay: Duration) -> (mpsc::UnboundedSender<T>, Self) {
        let (tx, rx) = mpsc::unbounded_channel();
        (tx, Self { rx, delay })
    }

    /// Waits for the next settled value, or `None` once input is exhausted
    pub async fn next(&mut self) -> Option<T> {
        let mut pending = self.rx.recv().await?;

        loop {
            tokio::select! {
                value = self.rx.recv() => match value {
                    Some(value) => pending = value,
                    None => return Some(pending),
                },
                _ = tokio::time::sleep(self.delay) => return Some(pending),
            }
        }
    }
}
