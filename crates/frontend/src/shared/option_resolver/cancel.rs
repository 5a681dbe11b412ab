use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Handle that can abort one in-flight option request
pub trait Cancellation {
    fn cancel(&self);
    fn is_cancelled(&self) -> bool;
}

/// Shared flag, cloned into the request future
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Cancellation for CancelToken {
    fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Browser requests are aborted through the controller whose signal was
/// handed to `fetch`
impl Cancellation for web_sys::AbortController {
    fn cancel(&self) {
        self.abort();
    }

    fn is_cancelled(&self) -> bool {
        self.signal().aborted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let seen_by_request = token.clone();
        assert!(!seen_by_request.is_cancelled());
        token.cancel();
        assert!(seen_by_request.is_cancelled());
    }
}
