//! Fixed-period tick loop with explicit cancellation.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Interval;

/// Shared flag telling a running tick loop to stop writing state.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Stop,
}

/// Calls a closure every `period_ms` until it returns `TickControl::Stop`
/// or the ticker is cancelled. Dropping the ticker cancels it.
pub struct StepTicker {
    interval: Rc<RefCell<Option<Interval>>>,
    token: CancelToken,
}

impl StepTicker {
    /// A ticker that was never started. Cancelling it is a no-op.
    pub fn idle() -> Self {
        Self {
            interval: Rc::new(RefCell::new(None)),
            token: CancelToken::new(),
        }
    }

    pub fn start<F>(period_ms: u32, mut on_tick: F) -> Self
    where
        F: FnMut() -> TickControl + 'static,
    {
        let ticker = Self::idle();
        let handle = {
            let interval = ticker.interval.clone();
            let token = ticker.token.clone();
            Interval::new(period_ms, move || {
                if token.is_cancelled() {
                    return;
                }
                if on_tick() == TickControl::Stop {
                    token.cancel();
                    // wasm-bindgen defers freeing the closure that is running right now.
                    interval.borrow_mut().take();
                }
            })
        };
        *ticker.interval.borrow_mut() = Some(handle);
        ticker
    }

    pub fn is_running(&self) -> bool {
        !self.token.is_cancelled() && self.interval.borrow().is_some()
    }

    /// Clears the pending timer. Safe to call repeatedly.
    pub fn cancel(&self) {
        self.token.cancel();
        self.interval.borrow_mut().take();
    }
}

impl Drop for StepTicker {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_is_shared_between_clones() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }

    #[test]
    fn test_idle_ticker_cancel_is_safe() {
        let ticker = StepTicker::idle();
        assert!(!ticker.is_running());
        ticker.cancel();
        ticker.cancel();
        assert!(ticker.token.is_cancelled());
        assert!(ticker.interval.borrow().is_none());
    }

    #[test]
    fn test_drop_cancels_token() {
        let ticker = StepTicker::idle();
        let token = ticker.token.clone();
        drop(ticker);
        assert!(token.is_cancelled());
    }
}
