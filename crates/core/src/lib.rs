//! Pagemark Core Library
//!
//! Annotation geometry and interaction engine for a multi-page document
//! viewer: normalized coordinate transforms, the annotation store, the
//! pointer-driven interaction state machine and selection/detail
//! coordination. Page rasterization is an external collaborator; the engine
//! only consumes page counts, native page sizes and render-complete signals.

pub mod annotation;
pub mod config;
pub mod coords;
pub mod engine;
pub mod error;
pub mod events;
pub mod geometry;
pub mod interaction;
pub mod selection;
pub mod store;

pub use annotation::{
    Annotation, AnnotationId, AnnotationKind, AnnotationPatch, Category, Color, Tag,
};
pub use config::{EngineConfig, Mode};
pub use coords::{
    normalized_to_viewport, viewport_to_normalized, viewport_to_page_units, PageOrigin,
};
pub use engine::{AnnotationEngine, ViewContext};
pub use error::{RenderError, RenderResult};
pub use events::{EngineEvent, EventQueue};
pub use geometry::{Point, Rect};
pub use interaction::{
    GestureOutcome, GestureState, InteractionMachine, PointerInput, COMMIT_EPSILON,
};
pub use selection::{AnchorSource, ScreenPoint, SelectionCoordinator};
pub use store::{AnnotationStore, HIT_TOLERANCE};
