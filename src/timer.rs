use std::time::{Duration, Instant};

use crate::types::FocusTarget;

/// A one-shot deferred focus request.
///
/// The host drives it by calling [`poll`](Self::poll) from its frame loop.
/// A pending request can be cancelled at any time before it fires.
#[derive(Debug, Clone, Default)]
pub struct DeferredSelect {
    pending: Option<(Instant, FocusTarget)>,
}

impl DeferredSelect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `target` to fire `delay` after `now`, replacing any pending request.
    pub fn schedule(&mut self, now: Instant, delay: Duration, target: FocusTarget) {
        self.pending = Some((now + delay, target));
    }

    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            log::debug!("deferred select cancelled");
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Returns the target once its deadline has passed. Fires at most once.
    pub fn poll(&mut self, now: Instant) -> Option<FocusTarget> {
        let due = matches!(&self.pending, Some((due, _)) if now >= *due);
        if !due {
            return None;
        }
        self.pending.take().map(|(_, target)| target)
    }
}
