//! Pagemark Viewer Library
//!
//! Viewport and page-window management for the annotation engine: zoom and
//! fit-to-width state, the current ± 1 materialization window, and per-page
//! render slots enforcing the cancel-before-replace discipline for the
//! external rasterization collaborator.

pub mod cancel;
pub mod render;
pub mod viewport;

pub use cancel::CancellationToken;
pub use render::{RenderSlots, RenderTicket};
pub use viewport::{Viewport, FIT_PADDING_PX, MAX_SCALE, MIN_SCALE, ZOOM_STEP};
