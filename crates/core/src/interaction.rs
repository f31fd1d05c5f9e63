//! Pointer-driven interaction state machine
//!
//! Consumes a stream of pointer events plus the externally-set mode and
//! produces [`GestureOutcome`] values the engine maps onto store calls. The
//! machine owns all transient drawing state (in-progress stroke points, the
//! rubber-band rectangle); readers of the overlay preview get the current
//! snapshot via [`InteractionMachine::state`], never partially-updated data,
//! because every operation runs to completion before the next event.

use crate::annotation::AnnotationKind;
use crate::config::{
    Mode, PIN_EXTENT_PT, TEXT_BOX_HEIGHT_PT, TEXT_BOX_WIDTH_PT,
};
use crate::geometry::{Point, Rect};

/// Minimum rubber-band extent for a rectangle/strikeout commit, in
/// normalized units. One device pixel on a 612 pt US-Letter page at scale
/// 1.0 is 1/612 ≈ 0.0016; anything smaller is an accidental click, not a
/// drawn shape, and is discarded.
pub const COMMIT_EPSILON: f32 = 0.0015;

/// Fallback native page size when dimensions are not known yet (US Letter)
const FALLBACK_PAGE_SIZE: (f32, f32) = (612.0, 792.0);

/// A pointer event position: normalized point plus owning page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerInput {
    pub point: Point,
    pub page_index: u16,
}

impl PointerInput {
    pub fn new(point: Point, page_index: u16) -> Self {
        Self { point, page_index }
    }
}

/// Transient gesture state
#[derive(Debug, Clone, PartialEq)]
pub enum GestureState {
    Idle,
    /// Freehand stroke in progress (Drawing/Highlighting)
    DrawingFreeform {
        kind: AnnotationKind,
        page_index: u16,
        points: Vec<Point>,
    },
    /// Rubber-band rectangle in progress (Rectangle/Strikeout)
    DrawingRect {
        kind: AnnotationKind,
        page_index: u16,
        anchor: Point,
        current: Point,
    },
    /// Click point captured, waiting for text-box content from the host
    AwaitingTextInput { page_index: u16, point: Point },
    /// Click point captured, waiting for pin content from the host
    AwaitingPinInput { page_index: u16, point: Point },
    /// Secondary-click point captured, waiting for comment content
    AwaitingCommentInput { page_index: u16, point: Point },
}

impl GestureState {
    pub fn is_idle(&self) -> bool {
        matches!(self, GestureState::Idle)
    }

    fn is_awaiting(&self) -> bool {
        matches!(
            self,
            GestureState::AwaitingTextInput { .. }
                | GestureState::AwaitingPinInput { .. }
                | GestureState::AwaitingCommentInput { .. }
        )
    }
}

/// What an event meant, for the engine to act on
#[derive(Debug, Clone, PartialEq)]
pub enum GestureOutcome {
    /// Nothing to do
    None,
    /// Selection-mode pointer-down; the engine hit-tests the store at this
    /// position and either selects or treats it as an outside click
    SelectAt { page_index: u16, point: Point },
    /// A gesture completed; the engine creates the annotation
    Commit {
        kind: AnnotationKind,
        rect: Rect,
        points: Vec<Point>,
        content: String,
    },
    /// Entered an awaiting-input state; the engine opens the matching popup
    AwaitingInput,
    /// A gesture ended without producing an annotation
    Discarded,
}

/// The interaction state machine
#[derive(Debug, Default)]
pub struct InteractionMachine {
    state: GestureState,
}

impl Default for GestureState {
    fn default() -> Self {
        GestureState::Idle
    }
}

impl InteractionMachine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current transient state, for overlay preview rendering
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Primary pointer-down
    ///
    /// Starts a freeform or rubber-band gesture in the drawing modes;
    /// in selection mode it yields a hit-test request. Text/pin/comment
    /// placement triggers on pointer-up or the secondary action, so their
    /// modes ignore pointer-down.
    pub fn pointer_down(&mut self, mode: Mode, input: PointerInput) -> GestureOutcome {
        if self.state.is_awaiting() {
            return GestureOutcome::None;
        }
        match mode {
            Mode::Selection => GestureOutcome::SelectAt {
                page_index: input.page_index,
                point: input.point,
            },
            Mode::Drawing | Mode::Highlighting => {
                let kind = mode.kind().unwrap_or(AnnotationKind::Drawing);
                self.state = GestureState::DrawingFreeform {
                    kind,
                    page_index: input.page_index,
                    points: vec![input.point],
                };
                GestureOutcome::None
            }
            Mode::Rectangle | Mode::Strikeout => {
                let kind = mode.kind().unwrap_or(AnnotationKind::Rectangle);
                self.state = GestureState::DrawingRect {
                    kind,
                    page_index: input.page_index,
                    anchor: input.point,
                    current: input.point,
                };
                GestureOutcome::None
            }
            Mode::Text | Mode::Pin | Mode::Comment => GestureOutcome::None,
        }
    }

    /// Pointer-move while a gesture may be active
    ///
    /// Appends to the stroke or drags the rubber-band corner. Moves on a
    /// different page than the gesture started on are ignored; a gesture
    /// never spans pages.
    pub fn pointer_move(&mut self, input: PointerInput) -> GestureOutcome {
        match &mut self.state {
            GestureState::DrawingFreeform {
                page_index, points, ..
            } if *page_index == input.page_index => {
                if points.last() != Some(&input.point) {
                    points.push(input.point);
                }
            }
            GestureState::DrawingRect {
                page_index, current, ..
            } if *page_index == input.page_index => {
                *current = input.point;
            }
            _ => {}
        }
        GestureOutcome::None
    }

    /// Primary pointer-up: commit point for drawing gestures, trigger point
    /// for text/pin placement
    pub fn pointer_up(&mut self, mode: Mode, input: PointerInput) -> GestureOutcome {
        match std::mem::take(&mut self.state) {
            GestureState::DrawingFreeform {
                kind,
                page_index,
                mut points,
            } => {
                if page_index == input.page_index && points.last() != Some(&input.point) {
                    points.push(input.point);
                }
                // A bare click yields a single (deduplicated) sample and is
                // discarded, so draw modes never leave single-click artifacts
                if points.len() < 2 {
                    log::debug!("freeform gesture with {} point(s) discarded", points.len());
                    return GestureOutcome::Discarded;
                }
                // Non-empty by the length check above
                let Some(rect) = Rect::bounding(&points, page_index) else {
                    return GestureOutcome::Discarded;
                };
                GestureOutcome::Commit {
                    kind,
                    rect,
                    points,
                    content: String::new(),
                }
            }
            GestureState::DrawingRect {
                kind,
                page_index,
                anchor,
                current,
            } => {
                let end = if page_index == input.page_index {
                    input.point
                } else {
                    current
                };
                let rect = Rect::from_corners(anchor, end, page_index);
                if rect.width < COMMIT_EPSILON || rect.height < COMMIT_EPSILON {
                    log::debug!("zero-size {kind:?} commit discarded");
                    return GestureOutcome::Discarded;
                }
                GestureOutcome::Commit {
                    kind,
                    rect,
                    points: Vec::new(),
                    content: String::new(),
                }
            }
            idle_or_awaiting => {
                // Not mid-drag: a click in Text/Pin mode opens the input popup
                self.state = idle_or_awaiting;
                if !self.state.is_idle() {
                    return GestureOutcome::None;
                }
                match mode {
                    Mode::Text => {
                        self.state = GestureState::AwaitingTextInput {
                            page_index: input.page_index,
                            point: input.point,
                        };
                        GestureOutcome::AwaitingInput
                    }
                    Mode::Pin => {
                        self.state = GestureState::AwaitingPinInput {
                            page_index: input.page_index,
                            point: input.point,
                        };
                        GestureOutcome::AwaitingInput
                    }
                    _ => GestureOutcome::None,
                }
            }
        }
    }

    /// Secondary pointer action: the comment trigger
    pub fn secondary_down(&mut self, mode: Mode, input: PointerInput) -> GestureOutcome {
        if mode != Mode::Comment || !self.state.is_idle() {
            return GestureOutcome::None;
        }
        self.state = GestureState::AwaitingCommentInput {
            page_index: input.page_index,
            point: input.point,
        };
        GestureOutcome::AwaitingInput
    }

    /// Resolve an awaiting-input state with host-supplied content
    ///
    /// `native_size` is the owning page's native (magnification-1.0) size,
    /// used to convert the fixed page-unit box constants into normalized
    /// units. Always returns to `Idle`.
    pub fn submit(&mut self, content: String, native_size: (f32, f32)) -> GestureOutcome {
        let (w, h) = if native_size.0 > 0.0 && native_size.1 > 0.0 {
            native_size
        } else {
            FALLBACK_PAGE_SIZE
        };
        match std::mem::take(&mut self.state) {
            GestureState::AwaitingTextInput { page_index, point } => GestureOutcome::Commit {
                kind: AnnotationKind::Text,
                rect: Rect::new(
                    point.x,
                    point.y,
                    TEXT_BOX_WIDTH_PT / w,
                    TEXT_BOX_HEIGHT_PT / h,
                    page_index,
                ),
                points: Vec::new(),
                content,
            },
            GestureState::AwaitingPinInput { page_index, point } => GestureOutcome::Commit {
                kind: AnnotationKind::Pin,
                rect: pin_rect(point, page_index, w, h),
                points: Vec::new(),
                content,
            },
            GestureState::AwaitingCommentInput { page_index, point } => GestureOutcome::Commit {
                kind: AnnotationKind::Comment,
                rect: pin_rect(point, page_index, w, h),
                points: Vec::new(),
                content,
            },
            other => {
                self.state = other;
                GestureOutcome::None
            }
        }
    }

    /// Discard an awaiting-input state without creating anything
    pub fn cancel(&mut self) -> GestureOutcome {
        if self.state.is_idle() {
            return GestureOutcome::None;
        }
        self.state = GestureState::Idle;
        GestureOutcome::Discarded
    }

    /// External mode change: any in-progress, uncommitted geometry is
    /// discarded, never committed
    pub fn mode_changed(&mut self) {
        if !self.state.is_idle() {
            log::debug!("mode change discarded in-progress gesture");
            self.state = GestureState::Idle;
        }
    }
}

/// Small fixed square centered on the click point, sized for hit-testing
fn pin_rect(point: Point, page_index: u16, w: f32, h: f32) -> Rect {
    let half_w = PIN_EXTENT_PT / w / 2.0;
    let half_h = PIN_EXTENT_PT / h / 2.0;
    Rect::new(
        point.x - half_w,
        point.y - half_h,
        PIN_EXTENT_PT / w,
        PIN_EXTENT_PT / h,
        page_index,
    )
}
