//! Annotation data model
//!
//! Annotation geometry is stored in normalized page space and is immutable
//! with respect to its owning page; metadata (content, color, thickness,
//! category, tags) is editable through explicit update calls on the store.

use crate::geometry::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Unique identifier for an annotation
///
/// Stable for the life of the process, assigned at creation, never reused.
pub type AnnotationId = uuid::Uuid;

/// RGBA color, stored as the final resolved value at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
}

/// The closed set of annotation kinds
///
/// `Highlight` and `Underline` are reserved: they remain valid stored data
/// (an imported collection may contain them) but the interaction machine
/// never creates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    Strikeout,
    Rectangle,
    Drawing,
    Highlighting,
    Text,
    Comment,
    Pin,
    Highlight,
    Underline,
}

impl AnnotationKind {
    /// Kinds carrying a replayable polyline in `points`
    pub fn is_freeform(self) -> bool {
        matches!(self, AnnotationKind::Drawing | AnnotationKind::Highlighting)
    }

    /// Kinds drawn as a rubber-band rectangle
    pub fn is_rect_tool(self) -> bool {
        matches!(self, AnnotationKind::Rectangle | AnnotationKind::Strikeout)
    }
}

/// Grouping category an annotation may reference
///
/// Used for read-time filtering and color resolution, not ownership.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub display_name: String,
    pub color: Color,
}

/// Tag attached to a pin annotation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub label: String,
}

/// A committed annotation record
///
/// Created by the interaction machine on gesture completion, mutated only
/// through explicit store updates, deleted by explicit delete. The store is
/// the sole owner; other components hold only the id for lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub kind: AnnotationKind,
    pub rect: Rect,
    /// Ordered stroke points for freeform kinds, insertion order significant
    #[serde(default)]
    pub points: Vec<Point>,
    /// Free-form text (comment body, text-box text); empty allowed
    #[serde(default)]
    pub content: String,
    pub color: Color,
    pub thickness: f32,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

/// Partial update applied to an existing annotation
///
/// Only the present fields are merged; geometry and kind are not patchable
/// (an annotation never migrates pages or changes shape class).
#[derive(Debug, Clone, Default)]
pub struct AnnotationPatch {
    pub content: Option<String>,
    pub color: Option<Color>,
    pub thickness: Option<f32>,
    pub category: Option<Option<Category>>,
    pub tags: Option<Vec<Tag>>,
}

impl AnnotationPatch {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }

    pub fn tags(tags: Vec<Tag>) -> Self {
        Self {
            tags: Some(tags),
            ..Self::default()
        }
    }
}
