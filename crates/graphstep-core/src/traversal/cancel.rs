//! External cancellation of an in-flight event stream
//!
//! The token is polled between event emissions. Once set, the stream ends;
//! events already yielded remain valid and the wrapper remembers that it
//! stopped early.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::event::VisitationEvent;

/// Shared stop flag, cheap to clone into a signal handler
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Event stream that stops once its token is cancelled
#[derive(Debug)]
pub struct Cancellable<I> {
    inner: I,
    token: CancelToken,
    yielded: u64,
    interrupted: bool,
}

impl<I> Cancellable<I> {
    /// Whether the stream was cut short by cancellation
    pub fn interrupted(&self) -> bool {
        self.interrupted
    }

    /// Events yielded before the stream ended
    pub fn yielded(&self) -> u64 {
        self.yielded
    }
}

impl<I> Iterator for Cancellable<I>
where
    I: Iterator<Item = VisitationEvent>,
{
    type Item = VisitationEvent;

    fn next(&mut self) -> Option<Self::Item> {
        if self.interrupted {
            return None;
        }
        if self.token.is_cancelled() {
            self.interrupted = true;
            tracing::debug!(yielded = self.yielded, "traversal cancelled");
            return None;
        }

        let event = self.inner.next()?;
        self.yielded += 1;
        Some(event)
    }
}

/// Adds `.cancel_with(token)` to any event stream
pub trait CancelExt: Iterator<Item = VisitationEvent> + Sized {
    fn cancel_with(self, token: CancelToken) -> Cancellable<Self> {
        Cancellable {
            inner: self,
            token,
            yielded: 0,
            interrupted: false,
        }
    }
}

impl<I: Iterator<Item = VisitationEvent>> CancelExt for I {}
