//! Session outcomes and the single-flight guard.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::ExchangeError;

/// Why a submission was dropped without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Query was empty after trimming.
    EmptyQuery,
    /// Another request is still in flight.
    Busy,
}

/// What happened to a submitted query.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Silently dropped; nothing was rendered or sent.
    Ignored(IgnoreReason),
    /// The service answered; the raw response text is returned.
    Answered(String),
    /// The exchange failed and the fallback message was shown.
    Failed(ExchangeError),
    /// The session was cleared while the request was in flight, so the
    /// reply was dropped.
    Discarded,
}

/// Guard that clears the `busy` flag on drop, ensuring it is always released
/// even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy flag. Returns `None` if already busy.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
