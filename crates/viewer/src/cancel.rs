//! Cooperative cancellation for in-flight page rasters
//!
//! The rasterization collaborator holds a clone of the token for the render
//! it is working on and checks it periodically; the viewer cancels the token
//! when the render is superseded by a scale or page change.

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared cancellation flag for one raster request
///
/// All clones observe a cancel; cancelling twice is safe.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
