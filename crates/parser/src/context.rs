use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Lets a caller stop a parse running on another thread.
///
/// Clones share the same flag. Parsing observes it between statements.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
