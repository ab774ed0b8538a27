//! Service result type

use crate::utils::error::{ErrorBanner, FetchError};
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Data plus the outcome of each independent fetch behind it
///
/// `errors` has a fixed length per service; a slot is `None` when its fetch
/// succeeded or was never issued.
#[derive(Debug, Clone, Serialize)]
pub struct Resolved<T> {
    pub data: T,
    #[serde(skip)]
    pub errors: Vec<Option<FetchError>>,
    pub is_validating: bool,
}

impl<T> Resolved<T> {
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(Option::is_some)
    }

    /// Banners for the populated error slots, in slot order
    pub fn banners(&self) -> Vec<ErrorBanner> {
        ErrorBanner::from_slots(&self.errors)
    }
}

/// Count of loads in progress, decremented when the guard drops
#[derive(Debug, Default, Clone)]
pub(super) struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    pub(super) fn enter(&self) -> InFlightGuard {
        self.0.fetch_add(1, Ordering::SeqCst);
        InFlightGuard(Arc::clone(&self.0))
    }

    pub(super) fn is_active(&self) -> bool {
        self.0.load(Ordering::SeqCst) > 0
    }
}

pub(super) struct InFlightGuard(Arc<AtomicUsize>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}
