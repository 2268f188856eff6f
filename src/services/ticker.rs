// src/services/ticker.rs

//! Breaking-news rotation.
//!
//! The ticker owns its headline list and a background tokio task that advances
//! the visible index on a fixed period. Observers follow the index through a
//! `watch` channel. The task only exists while there is something to rotate.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant};

use crate::models::TickerConfig;

/// Default rotation period.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// Cycles through a list of items on a timer, wrapping back to the first.
///
/// Must be created inside a tokio runtime.
pub struct BreakingNewsTicker<T> {
    items: Vec<T>,
    period: Duration,
    index: Arc<watch::Sender<usize>>,
    task: Option<JoinHandle<()>>,
}

impl<T> BreakingNewsTicker<T> {
    /// Start rotating `items` every `period`. A zero period falls back to
    /// [`DEFAULT_INTERVAL`].
    pub fn new(items: Vec<T>, period: Duration) -> Self {
        let (index, _) = watch::channel(0);
        let mut ticker = Self {
            items,
            period: if period.is_zero() {
                DEFAULT_INTERVAL
            } else {
                period
            },
            index: Arc::new(index),
            task: None,
        };
        ticker.start();
        ticker
    }

    pub fn from_config(items: Vec<T>, config: &TickerConfig) -> Self {
        Self::new(items, Duration::from_millis(config.interval_ms))
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn current_index(&self) -> usize {
        *self.index.borrow()
    }

    /// The item currently shown, `None` for an empty list.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.current_index())
    }

    /// Follow index changes.
    pub fn subscribe(&self) -> watch::Receiver<usize> {
        self.index.subscribe()
    }

    /// Whether a rotation task is alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Swap in a new list; the index restarts at 0 and the timer restarts.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.stop();
        self.items = items;
        self.index.send_replace(0);
        self.start();
    }

    /// Cancel the rotation. The current index is kept.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn start(&mut self) {
        let len = self.items.len();
        if len < 2 {
            return;
        }

        let index = Arc::clone(&self.index);
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            loop {
                interval.tick().await;
                index.send_modify(|i| *i = (*i + 1) % len);
            }
        }));
    }
}

impl<T> Drop for BreakingNewsTicker<T> {
    fn drop(&mut self) {
        self.stop();
    }
}
