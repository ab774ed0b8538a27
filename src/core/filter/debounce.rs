//! Debounced values

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// A value whose updates take effect after a quiet period
///
/// Each [`set`](Self::set) restarts the timer; the applied value only
/// changes once no further update arrived for `delay`. Outside a tokio
/// runtime there is no timer, so updates apply immediately.
#[derive(Debug)]
pub struct Debounced<T> {
    raw: T,
    applied: Arc<Mutex<T>>,
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl<T> Debounced<T>
where
    T: Clone + Send + 'static,
{
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            raw: initial.clone(),
            applied: Arc::new(Mutex::new(initial)),
            delay,
            pending: None,
        }
    }

    /// Update the raw value and restart the quiet period
    pub fn set(&mut self, value: T) {
        self.cancel();
        self.raw = value.clone();

        let runtime = match Handle::try_current() {
            Ok(runtime) if !self.delay.is_zero() => runtime,
            _ => {
                *self.applied.lock() = value;
                return;
            }
        };

        let applied = Arc::clone(&self.applied);
        let delay = self.delay;
        self.pending = Some(runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            *applied.lock() = value;
        }));
    }

    /// Apply the raw value now
    pub fn flush(&mut self) {
        self.cancel();
        *self.applied.lock() = self.raw.clone();
    }

    /// Latest value passed to [`set`](Self::set)
    pub fn raw(&self) -> &T {
        &self.raw
    }

    /// Value filters should use
    pub fn applied(&self) -> T {
        self.applied.lock().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl<T> Drop for Debounced<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}
