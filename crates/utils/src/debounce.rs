//! Debounced value holder.
//!
//! [`Debounced`] wraps a value that changes often (a search box, a filter
//! field) and only publishes it once it has stayed unchanged for a quiet
//! period. At most one timer is outstanding per holder, and dropping the
//! holder cancels it.

use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};

use tokio::{sync::watch, task::JoinHandle};
use tracing::trace;

/// Quiet period used by [`Debounced::new`].
pub const DEFAULT_DEBOUNCE_DELAY: Duration = Duration::from_millis(500);

/// Holds the debounced view of an externally owned value.
///
/// Every [`set`](Self::set) restarts the timer; the published value only
/// changes when a timer fires without having been superseded. Readers either
/// sample with [`get`](Self::get) or await changes through
/// [`subscribe`](Self::subscribe).
///
/// Scheduling spawns a tokio task, so `set` must be called from within a
/// tokio runtime.
pub struct Debounced<T> {
    delay: Duration,
    output: Arc<watch::Sender<T>>,
    /// Bumped on every cancellation; a timer only publishes if it still
    /// carries the current generation.
    generation: Arc<AtomicU64>,
    pending: Option<JoinHandle<()>>,
    latest: Option<T>,
}

impl<T> Debounced<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a holder with [`DEFAULT_DEBOUNCE_DELAY`].
    pub fn new(initial: T) -> Self {
        Self::with_delay(initial, DEFAULT_DEBOUNCE_DELAY)
    }

    pub fn with_delay(initial: T, delay: Duration) -> Self {
        let (output, _) = watch::channel(initial);
        Self {
            delay,
            output: Arc::new(output),
            generation: Arc::new(AtomicU64::new(0)),
            pending: None,
            latest: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new observed value and (re)start the quiet-period timer.
    pub fn set(&mut self, value: T) {
        self.cancel();

        let generation = self.generation.load(Ordering::Acquire);
        let current = Arc::clone(&self.generation);
        let output = Arc::clone(&self.output);
        let delay = self.delay;
        self.latest = Some(value.clone());

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let published = output.send_if_modified(|slot| {
                if current.load(Ordering::Acquire) != generation {
                    return false;
                }
                *slot = value;
                true
            });
            trace!(generation, published, "debounce timer fired");
        }));
    }

    /// Current debounced value.
    pub fn get(&self) -> T {
        self.output.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.output.subscribe()
    }

    /// Whether an update is scheduled and has not fired yet.
    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Drop the pending update, if any, without publishing it.
    pub fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        self.latest = None;
    }

    /// Publish the pending value right away instead of waiting for the timer.
    pub fn flush(&mut self) {
        let was_pending = self.is_pending();
        let value = self.latest.take();
        self.cancel();
        if let (true, Some(value)) = (was_pending, value) {
            self.output.send_replace(value);
        }
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
