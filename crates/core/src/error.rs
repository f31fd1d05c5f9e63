//! Collaborator-failure error types
//!
//! The engine never raises errors across its boundary for input-validation
//! conditions (unknown ids, out-of-range navigation, degenerate commits) —
//! those are silent no-ops. The only host-visible failure class is a
//! collaborator failure: the document failed to load, or a page failed to
//! rasterize. Render cancellations caused by supersession are a normal
//! resource-lifecycle condition and are filtered from reporting.

use thiserror::Error;

/// Failures originating in the rasterization collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("document failed to load: {0}")]
    DocumentLoad(String),

    #[error("page {page} failed to rasterize: {reason}")]
    PageRender { page: u16, reason: String },

    /// In-flight render superseded by a newer scale or page change; not a
    /// failure, filtered from reporting
    #[error("render cancelled")]
    Cancelled,
}

impl RenderError {
    /// Whether this condition is reported to the logging sink
    ///
    /// Cancellations are expected supersession, never surfaced as failures.
    pub fn is_reportable(&self) -> bool {
        !matches!(self, RenderError::Cancelled)
    }

    /// Report the failure once to the logging sink, best effort
    pub fn report(&self) {
        if self.is_reportable() {
            log::error!("{self}");
        }
    }
}

/// Result alias for render-collaborator operations
pub type RenderResult<T> = Result<T, RenderError>;
