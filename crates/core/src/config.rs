//! Engine configuration
//!
//! Mode, active category, default colors and thickness are explicit
//! configuration on the engine instance rather than process-wide state, so
//! several engines can coexist and be tested in isolation.

use crate::annotation::{AnnotationKind, Category, Color};
use serde::{Deserialize, Serialize};

/// The single active interaction interpretation
///
/// Exactly one mode is active at a time. `Selection` is the neutral mode:
/// pointer input selects existing annotations instead of drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    Selection,
    Strikeout,
    Rectangle,
    Drawing,
    Highlighting,
    Text,
    Comment,
    Pin,
}

impl Mode {
    /// The annotation kind a drawing/placement mode produces
    pub fn kind(self) -> Option<AnnotationKind> {
        match self {
            Mode::Selection => None,
            Mode::Strikeout => Some(AnnotationKind::Strikeout),
            Mode::Rectangle => Some(AnnotationKind::Rectangle),
            Mode::Drawing => Some(AnnotationKind::Drawing),
            Mode::Highlighting => Some(AnnotationKind::Highlighting),
            Mode::Text => Some(AnnotationKind::Text),
            Mode::Comment => Some(AnnotationKind::Comment),
            Mode::Pin => Some(AnnotationKind::Pin),
        }
    }
}

/// Default text-box size in page-native units (points at magnification 1.0)
pub const TEXT_BOX_WIDTH_PT: f32 = 120.0;
pub const TEXT_BOX_HEIGHT_PT: f32 = 36.0;

/// Pin hit-target square size in page-native units
///
/// Sized for hit-testing, not for visual bounds.
pub const PIN_EXTENT_PT: f32 = 24.0;

/// Per-engine configuration supplied by the host
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Stroke width stamped onto new annotations
    pub default_thickness: f32,

    /// Per-kind color overrides; falls back to built-in defaults
    #[serde(default)]
    pub kind_colors: Vec<(AnnotationKind, Color)>,

    /// Active category: new annotations inherit its color unless a per-kind
    /// override exists, and reference it for grouping
    #[serde(default)]
    pub active_category: Option<Category>,

    /// When set, all create/update/delete/mode-change/category-change
    /// requests are rejected; read-only selection still works
    #[serde(default)]
    pub view_only: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_thickness: 2.0,
            kind_colors: Vec::new(),
            active_category: None,
            view_only: false,
        }
    }
}

impl EngineConfig {
    /// Resolve the creation-time color for a kind
    ///
    /// Precedence: explicit per-kind override > active category color >
    /// built-in kind default. The result is stored on the record and never
    /// re-derived.
    pub fn resolve_color(&self, kind: AnnotationKind) -> Color {
        if let Some((_, color)) = self.kind_colors.iter().find(|(k, _)| *k == kind) {
            return *color;
        }
        if let Some(category) = &self.active_category {
            return category.color;
        }
        builtin_color(kind)
    }
}

fn builtin_color(kind: AnnotationKind) -> Color {
    match kind {
        AnnotationKind::Strikeout => Color::RED,
        AnnotationKind::Rectangle => Color::RED,
        AnnotationKind::Drawing => Color::BLUE,
        AnnotationKind::Highlighting | AnnotationKind::Highlight => {
            Color::rgba(255, 255, 0, 128)
        }
        AnnotationKind::Text => Color::BLACK,
        AnnotationKind::Comment => Color::rgb(255, 165, 0),
        AnnotationKind::Pin => Color::rgb(200, 0, 120),
        AnnotationKind::Underline => Color::BLUE,
    }
}
