//! Selection and detail-panel coordination
//!
//! Decides where the detail UI for a selected annotation is anchored on
//! screen, and when it auto-closes. Anchor resolution order: the pointer
//! position when selection came from a direct click; a geometric projection
//! of the annotation rect when selection is programmatic; a fixed fallback
//! near the viewport center when neither is available (e.g. the owning page
//! is not materialized yet).

use crate::annotation::AnnotationId;
use crate::config::Mode;
use crate::coords::{normalized_to_viewport, PageOrigin};
use crate::geometry::Rect;

/// Fraction of the annotation box the projected anchor is inset by, so the
/// detail panel does not sit on the annotation's corner and occlude it
const ANCHOR_INSET: f32 = 0.2;

/// A screen position for the detail UI
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Where an anchor came from, mostly of interest to tests and the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSource {
    Pointer,
    Projected,
    Fallback,
}

/// Programmatic selection on a page that is not materialized yet arms one
/// retry, resolved when that page's render completes
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingAnchor {
    id: AnnotationId,
    page_index: u16,
    retried: bool,
}

/// Detail-panel coordination state for the single selection
#[derive(Debug, Default)]
pub struct SelectionCoordinator {
    anchor: Option<(ScreenPoint, AnchorSource)>,
    newly_created: bool,
    just_opened: bool,
    pending: Option<PendingAnchor>,
}

impl SelectionCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current anchor, if any
    pub fn anchor(&self) -> Option<ScreenPoint> {
        self.anchor.map(|(point, _)| point)
    }

    pub fn anchor_source(&self) -> Option<AnchorSource> {
        self.anchor.map(|(_, source)| source)
    }

    /// Whether the selected annotation was just created (detail UI opens in
    /// edit mode once); cleared on the first update or on deselection
    pub fn is_newly_created(&self) -> bool {
        self.newly_created
    }

    /// Selection originated from a direct click with a pointer position
    pub fn opened_from_click(&mut self, pointer: ScreenPoint) {
        self.anchor = Some((pointer, AnchorSource::Pointer));
        self.just_opened = true;
        self.pending = None;
    }

    /// Programmatic selection (e.g. select-by-id)
    ///
    /// When the owning page is materialized the anchor projects 20% into the
    /// annotation box; otherwise a fallback anchor is used and one retry is
    /// armed for when the page render completes.
    #[allow(clippy::too_many_arguments)]
    pub fn opened_programmatically(
        &mut self,
        id: AnnotationId,
        rect: Rect,
        page_ready: bool,
        page_origin: PageOrigin,
        scale: f32,
        native_size: (f32, f32),
        viewport_size: (f32, f32),
    ) {
        self.just_opened = true;
        if page_ready {
            self.anchor = Some((
                project_anchor(rect, page_origin, scale, native_size),
                AnchorSource::Projected,
            ));
            self.pending = None;
        } else {
            self.anchor = Some((
                ScreenPoint::new(viewport_size.0 / 2.0, viewport_size.1 / 2.0),
                AnchorSource::Fallback,
            ));
            self.pending = Some(PendingAnchor {
                id,
                page_index: rect.page_index,
                retried: false,
            });
        }
    }

    /// A page render completed; resolve a pending anchor retry if it was
    /// waiting for this page. At most one retry per programmatic selection.
    pub fn page_rendered(
        &mut self,
        page_index: u16,
        selected: Option<AnnotationId>,
        rect: Option<Rect>,
        page_origin: PageOrigin,
        scale: f32,
        native_size: (f32, f32),
    ) {
        let Some(pending) = self.pending else {
            return;
        };
        if pending.page_index != page_index || pending.retried {
            return;
        }
        self.pending = Some(PendingAnchor {
            retried: true,
            ..pending
        });
        if selected == Some(pending.id) {
            if let Some(rect) = rect {
                self.anchor = Some((
                    project_anchor(rect, page_origin, scale, native_size),
                    AnchorSource::Projected,
                ));
                self.pending = None;
            }
        }
    }

    /// Mark the selection as freshly created
    pub fn mark_created(&mut self) {
        self.newly_created = true;
    }

    /// First explicit update clears the edit-once flag
    pub fn on_update(&mut self) {
        self.newly_created = false;
    }

    /// Container scroll always closes the detail UI
    ///
    /// Returns whether selection should be cleared.
    pub fn on_scroll(&mut self) -> bool {
        self.reset();
        true
    }

    /// Pointer-down that hit neither the annotation nor the detail region
    ///
    /// Closes only while in selection mode — drawing modes never auto-close
    /// on their own gesture clicks. The `just_opened` guard consumes the
    /// gesture that opened the panel instead of closing it (the explicit
    /// replacement for timer-based suppression).
    pub fn on_outside_pointer_down(&mut self, mode: Mode) -> bool {
        if mode != Mode::Selection {
            return false;
        }
        if self.just_opened {
            self.just_opened = false;
            return false;
        }
        self.reset();
        true
    }

    /// Switching away from selection mode closes the detail UI
    pub fn on_mode_changed(&mut self, new_mode: Mode) -> bool {
        if new_mode == Mode::Selection {
            return false;
        }
        self.reset();
        true
    }

    /// Selection was cleared (by any path)
    pub fn deselected(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.anchor = None;
        self.newly_created = false;
        self.just_opened = false;
        self.pending = None;
    }
}

/// Project the annotation rect into viewport pixels, inset into the box
fn project_anchor(
    rect: Rect,
    page_origin: PageOrigin,
    scale: f32,
    native_size: (f32, f32),
) -> ScreenPoint {
    let inset = crate::geometry::Point::new(
        rect.x + rect.width * ANCHOR_INSET,
        rect.y + rect.height * ANCHOR_INSET,
    );
    let (x, y) = normalized_to_viewport(inset, scale, native_size.0, native_size.1);
    ScreenPoint::new(page_origin.left + x, page_origin.top + y)
}
