//! Annotation engine facade
//!
//! Wires the store, interaction machine and selection coordinator together,
//! owns configuration and the outbound event queue, and is the single entry
//! point a host embeds. All operations are synchronous and run to completion
//! before the next pointer/UI event is processed; no two gestures interleave.

use std::collections::{HashMap, HashSet};

use crate::annotation::{
    Annotation, AnnotationId, AnnotationPatch, Category, Tag,
};
use crate::config::{EngineConfig, Mode};
use crate::coords::PageOrigin;
use crate::error::RenderError;
use crate::events::{EngineEvent, EventQueue};
use crate::geometry::Point;
use crate::interaction::{GestureOutcome, GestureState, InteractionMachine, PointerInput};
use crate::selection::{ScreenPoint, SelectionCoordinator};

/// Current view geometry the host passes along with view-dependent calls
///
/// `page_origin` is the viewport-pixel offset of the page relevant to the
/// call (the target page for selection, the rendered page for completions).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewContext {
    pub scale: f32,
    pub viewport_size: (f32, f32),
    pub page_origin: PageOrigin,
}

/// The annotation engine
///
/// Instantiable any number of times; all mode/category/thickness state is
/// per-instance configuration, never process-wide.
#[derive(Debug, Default)]
pub struct AnnotationEngine {
    config: EngineConfig,
    mode: Mode,
    store: crate::store::AnnotationStore,
    machine: InteractionMachine,
    coordinator: SelectionCoordinator,
    events: EventQueue,

    page_count: u16,
    /// Native (magnification 1.0) page sizes by page index
    page_sizes: HashMap<u16, (f32, f32)>,
    /// Pages whose raster is complete; gates overlay rendering
    ready_pages: HashSet<u16>,
    current_page: u16,
    /// Last primary-pointer screen position, used as the detail anchor for
    /// click-originated selection
    last_screen: Option<ScreenPoint>,
}

impl AnnotationEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Create an engine seeded with a host-supplied annotation collection
    pub fn with_annotations(config: EngineConfig, annotations: Vec<Annotation>) -> Self {
        let mut engine = Self::new(config);
        engine.store.load(annotations);
        engine
    }

    // ----- document lifecycle ------------------------------------------

    /// The rendering collaborator finished loading the document
    pub fn document_loaded(&mut self, page_sizes: Vec<(f32, f32)>) {
        self.page_count = page_sizes.len() as u16;
        self.page_sizes = page_sizes
            .into_iter()
            .enumerate()
            .map(|(i, size)| (i as u16, size))
            .collect();
        self.ready_pages.clear();
        self.current_page = 0;
        self.events.push(EngineEvent::DocumentLoaded {
            page_count: self.page_count,
        });
    }

    /// A page raster completed at the current scale
    pub fn page_rendered(&mut self, page_index: u16, view: ViewContext) {
        self.ready_pages.insert(page_index);
        let selected = self.store.selected();
        let rect = selected
            .and_then(|id| self.store.get(id))
            .map(|a| a.rect);
        self.coordinator.page_rendered(
            page_index,
            selected,
            rect,
            view.page_origin,
            view.scale,
            self.native_size(page_index),
        );
    }

    /// A page raster was invalidated (scale or page change); its overlay
    /// must not render against the stale canvas
    pub fn page_invalidated(&mut self, page_index: u16) {
        self.ready_pages.remove(&page_index);
    }

    /// A collaborator failure: reported once, page left un-materialized.
    /// Navigation to the page stays possible; rendering may be retried by
    /// the collaborator on the next attempt.
    pub fn page_render_failed(&mut self, page_index: u16, error: &RenderError) {
        error.report();
        self.ready_pages.remove(&page_index);
    }

    /// Whether the annotation overlay for a page may be shown
    pub fn page_ready(&self, page_index: u16) -> bool {
        self.ready_pages.contains(&page_index)
    }

    pub fn page_count(&self) -> u16 {
        self.page_count
    }

    pub fn current_page(&self) -> u16 {
        self.current_page
    }

    /// Navigate to a page; out-of-range is a silent no-op
    pub fn set_current_page(&mut self, page_index: u16) -> bool {
        if page_index >= self.page_count || page_index == self.current_page {
            return false;
        }
        self.current_page = page_index;
        self.events.push(EngineEvent::PageChanged(page_index));
        true
    }

    // ----- configuration ------------------------------------------------

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the active mode
    ///
    /// Discards any in-progress gesture (never commits it) and closes the
    /// detail panel when leaving selection mode. Rejected in view-only.
    pub fn set_mode(&mut self, mode: Mode) -> bool {
        if self.config.view_only || mode == self.mode {
            return false;
        }
        self.mode = mode;
        self.machine.mode_changed();
        if self.coordinator.on_mode_changed(mode) {
            self.clear_selection();
        }
        self.events.push(EngineEvent::ModeChanged(mode));
        true
    }

    /// Change the active category; new annotations inherit it
    pub fn set_active_category(&mut self, category: Option<Category>) -> bool {
        if self.config.view_only {
            return false;
        }
        let id = category.as_ref().map(|c| c.id.clone());
        self.config.active_category = category;
        self.events.push(EngineEvent::CategoryChanged(id));
        true
    }

    pub fn set_default_thickness(&mut self, thickness: f32) -> bool {
        if self.config.view_only {
            return false;
        }
        self.config.default_thickness = thickness;
        true
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ----- pointer stream -----------------------------------------------

    /// Primary pointer-down
    ///
    /// `screen` is the raw viewport-pixel position (detail-anchor source);
    /// `in_detail_region` tells the engine the pointer landed on the detail
    /// panel itself, which never counts as an outside click.
    pub fn pointer_down(
        &mut self,
        input: PointerInput,
        screen: ScreenPoint,
        in_detail_region: bool,
    ) {
        self.last_screen = Some(screen);
        if let GestureOutcome::SelectAt { page_index, point } =
            self.machine.pointer_down(self.mode, input)
        {
            self.resolve_selection_click(page_index, point, screen, in_detail_region);
        }
    }

    pub fn pointer_move(&mut self, input: PointerInput) {
        self.machine.pointer_move(input);
    }

    pub fn pointer_up(&mut self, input: PointerInput, screen: ScreenPoint) {
        self.last_screen = Some(screen);
        let outcome = self.machine.pointer_up(self.mode, input);
        self.apply_outcome(outcome);
    }

    /// Secondary pointer action (comment placement trigger)
    pub fn secondary_down(&mut self, input: PointerInput, screen: ScreenPoint) {
        self.last_screen = Some(screen);
        let outcome = self.machine.secondary_down(self.mode, input);
        self.apply_outcome(outcome);
    }

    /// The host popup submitted content for an awaiting text/pin/comment
    pub fn submit_pending(&mut self, content: impl Into<String>) {
        let native = self
            .awaiting_page()
            .map(|page| self.native_size(page))
            .unwrap_or((0.0, 0.0));
        let outcome = self.machine.submit(content.into(), native);
        self.apply_outcome(outcome);
    }

    /// The host popup was dismissed without content
    pub fn cancel_pending(&mut self) {
        self.machine.cancel();
    }

    /// Transient gesture snapshot for overlay preview rendering
    pub fn gesture(&self) -> &GestureState {
        self.machine.state()
    }

    /// Container scrolled: selection and detail panel close
    pub fn scrolled(&mut self) {
        if self.coordinator.on_scroll() {
            self.clear_selection();
        }
    }

    // ----- store operations ----------------------------------------------

    pub fn annotations(&self) -> &[Annotation] {
        self.store.all()
    }

    pub fn annotation(&self, id: AnnotationId) -> Option<&Annotation> {
        self.store.get(id)
    }

    /// Read-time category projection; never mutates stored records
    pub fn annotations_in_category(&self, category_id: Option<&str>) -> Vec<&Annotation> {
        self.store.filter_by_category(category_id)
    }

    /// Insertion-order interchange projection for host persistence
    pub fn serialized_annotations(&self) -> Vec<Annotation> {
        self.store.all().to_vec()
    }

    /// Merge a patch into an existing annotation
    pub fn update_annotation(&mut self, id: AnnotationId, patch: AnnotationPatch) -> bool {
        if self.config.view_only {
            return false;
        }
        if !self.store.update(id, patch) {
            return false;
        }
        if self.store.selected() == Some(id) {
            self.coordinator.on_update();
        }
        self.events.push(EngineEvent::Updated(id));
        self.events.push(EngineEvent::CollectionChanged);
        true
    }

    /// Second step of the pin contract: tags arrive after creation
    pub fn set_tags(&mut self, id: AnnotationId, tags: Vec<Tag>) -> bool {
        self.update_annotation(id, AnnotationPatch::tags(tags))
    }

    /// Delete an annotation; clears selection if it was selected
    pub fn delete_annotation(&mut self, id: AnnotationId) -> bool {
        if self.config.view_only {
            return false;
        }
        let was_selected = self.store.selected() == Some(id);
        if !self.store.remove(id) {
            return false;
        }
        self.events.push(EngineEvent::Deleted(id));
        self.events.push(EngineEvent::CollectionChanged);
        if was_selected {
            self.coordinator.deselected();
            self.events.push(EngineEvent::SelectionChanged(None));
        }
        true
    }

    pub fn selected(&self) -> Option<AnnotationId> {
        self.store.selected()
    }

    /// Detail anchor for the current selection, if resolved
    pub fn detail_anchor(&self) -> Option<ScreenPoint> {
        self.coordinator.anchor()
    }

    /// Whether the detail UI opens pre-focused for editing
    pub fn selection_is_newly_created(&self) -> bool {
        self.coordinator.is_newly_created()
    }

    /// Select or clear programmatically without anchor resolution
    ///
    /// Read-only selection stays permitted in view-only.
    pub fn select(&mut self, id: Option<AnnotationId>) -> bool {
        let changed = self.store.select(id);
        if changed {
            if id.is_none() {
                self.coordinator.deselected();
            }
            self.events.push(EngineEvent::SelectionChanged(id));
        }
        changed
    }

    /// Select an annotation by id, navigating to its page when needed
    ///
    /// Returns `false` on an unknown id, leaving selection unchanged. On
    /// success, if the owning page differs from the current page the engine
    /// navigates there (emitting `PageChanged`) and anchors the detail panel
    /// geometrically — deferred once when that page is not materialized yet.
    pub fn select_annotation_by_id(&mut self, id: AnnotationId, view: ViewContext) -> bool {
        let Some(annotation) = self.store.get(id) else {
            return false;
        };
        let rect = annotation.rect;
        let page = rect.page_index;
        if page != self.current_page {
            self.set_current_page(page);
        }
        self.store.select(Some(id));
        self.coordinator.opened_programmatically(
            id,
            rect,
            self.page_ready(page),
            view.page_origin,
            view.scale,
            self.native_size(page),
            view.viewport_size,
        );
        self.events.push(EngineEvent::SelectionChanged(Some(id)));
        true
    }

    /// Drain pending lifecycle events in commit order
    pub fn take_events(&mut self) -> Vec<EngineEvent> {
        self.events.take()
    }

    // ----- internals -----------------------------------------------------

    fn native_size(&self, page_index: u16) -> (f32, f32) {
        self.page_sizes.get(&page_index).copied().unwrap_or((0.0, 0.0))
    }

    fn awaiting_page(&self) -> Option<u16> {
        match self.machine.state() {
            GestureState::AwaitingTextInput { page_index, .. }
            | GestureState::AwaitingPinInput { page_index, .. }
            | GestureState::AwaitingCommentInput { page_index, .. } => Some(*page_index),
            _ => None,
        }
    }

    fn resolve_selection_click(
        &mut self,
        page_index: u16,
        point: Point,
        screen: ScreenPoint,
        in_detail_region: bool,
    ) {
        if let Some(hit) = self.store.hit_test(page_index, point) {
            let id = hit.id;
            self.store.select(Some(id));
            self.coordinator.opened_from_click(screen);
            self.events.push(EngineEvent::SelectionChanged(Some(id)));
        } else if !in_detail_region && self.coordinator.on_outside_pointer_down(self.mode) {
            self.clear_selection();
        }
    }

    fn clear_selection(&mut self) {
        if self.store.selected().is_some() {
            self.store.select(None);
            self.coordinator.deselected();
            self.events.push(EngineEvent::SelectionChanged(None));
        }
    }

    fn apply_outcome(&mut self, outcome: GestureOutcome) {
        if let GestureOutcome::Commit {
            kind,
            rect,
            points,
            content,
        } = outcome
        {
            if self.config.view_only {
                log::debug!("create rejected: engine is view-only");
                return;
            }
            let id = self.store.create(kind, rect, points, content, &self.config);
            self.events.push(EngineEvent::Created(id));
            self.events.push(EngineEvent::CollectionChanged);

            // the just-created record becomes the selection, with the edit-
            // once flag set for the detail UI
            self.store.select(Some(id));
            if let Some(screen) = self.last_screen {
                self.coordinator.opened_from_click(screen);
            }
            self.coordinator.mark_created();
            self.events.push(EngineEvent::SelectionChanged(Some(id)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::AnnotationKind;
    use crate::geometry::Rect;

    const LETTER: (f32, f32) = (612.0, 792.0);

    fn at(x: f32, y: f32, page: u16) -> PointerInput {
        PointerInput::new(Point::new(x, y), page)
    }

    fn screen(x: f32, y: f32) -> ScreenPoint {
        ScreenPoint::new(x, y)
    }

    fn loaded_engine(pages: usize) -> AnnotationEngine {
        let mut engine = AnnotationEngine::new(EngineConfig::default());
        engine.document_loaded(vec![LETTER; pages]);
        engine.take_events();
        engine
    }

    #[test]
    fn rectangle_creation_end_to_end() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Rectangle);
        engine.take_events();

        engine.pointer_down(at(0.2, 0.2, 0), screen(100.0, 100.0), false);
        engine.pointer_move(at(0.5, 0.4, 0));
        engine.pointer_up(at(0.5, 0.4, 0), screen(300.0, 250.0));

        assert_eq!(engine.annotations().len(), 1);
        let annotation = &engine.annotations()[0];
        assert_eq!(annotation.kind, AnnotationKind::Rectangle);
        assert!((annotation.rect.x - 0.2).abs() < 1e-6);
        assert!((annotation.rect.y - 0.2).abs() < 1e-6);
        assert!((annotation.rect.width - 0.3).abs() < 1e-6);
        assert!((annotation.rect.height - 0.2).abs() < 1e-6);
        assert_eq!(annotation.rect.page_index, 0);

        // the new annotation is selected with the edit-once flag
        assert_eq!(engine.selected(), Some(annotation.id));
        assert!(engine.selection_is_newly_created());

        let events = engine.take_events();
        assert!(matches!(events[0], EngineEvent::Created(_)));
        assert_eq!(events[1], EngineEvent::CollectionChanged);
        assert!(matches!(events[2], EngineEvent::SelectionChanged(Some(_))));
    }

    #[test]
    fn degenerate_drawing_click_creates_nothing() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Drawing);
        engine.pointer_down(at(0.3, 0.3, 0), screen(10.0, 10.0), false);
        engine.pointer_up(at(0.3, 0.3, 0), screen(10.0, 10.0));
        assert!(engine.annotations().is_empty());
    }

    #[test]
    fn text_annotation_via_popup_submit() {
        let mut engine = loaded_engine(3);
        engine.set_mode(Mode::Text);
        engine.pointer_up(at(0.1, 0.1, 2), screen(50.0, 60.0));
        engine.submit_pending("Note");

        assert_eq!(engine.annotations().len(), 1);
        let annotation = &engine.annotations()[0];
        assert_eq!(annotation.kind, AnnotationKind::Text);
        assert_eq!(annotation.content, "Note");
        assert_eq!(annotation.rect.page_index, 2);
        assert!(annotation.rect.width > 0.0 && annotation.rect.height > 0.0);
    }

    #[test]
    fn popup_cancel_discards_and_returns_to_idle() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Pin);
        engine.pointer_up(at(0.5, 0.5, 0), screen(1.0, 1.0));
        engine.cancel_pending();
        assert!(engine.annotations().is_empty());
        assert!(engine.gesture().is_idle());
    }

    #[test]
    fn pin_tags_arrive_as_a_second_update() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Pin);
        engine.pointer_up(at(0.5, 0.5, 0), screen(1.0, 1.0));
        engine.submit_pending("site visit");
        engine.take_events();

        let id = engine.annotations()[0].id;
        assert!(engine.set_tags(
            id,
            vec![Tag {
                id: "t1".into(),
                label: "urgent".into()
            }]
        ));
        assert_eq!(engine.annotation(id).unwrap().tags.len(), 1);
        let events = engine.take_events();
        assert_eq!(events[0], EngineEvent::Updated(id));
    }

    #[test]
    fn select_by_id_navigates_to_owning_page() {
        let mut engine = loaded_engine(6);
        engine.set_mode(Mode::Rectangle);
        engine.pointer_down(at(0.1, 0.1, 5), screen(1.0, 1.0), false);
        engine.pointer_up(at(0.4, 0.4, 5), screen(2.0, 2.0));
        let id = engine.annotations()[0].id;
        engine.set_mode(Mode::Selection);
        engine.set_current_page(1);
        engine.take_events();

        assert!(engine.select_annotation_by_id(id, ViewContext::default()));
        assert_eq!(engine.current_page(), 5);
        assert_eq!(engine.selected(), Some(id));

        let events = engine.take_events();
        assert!(events.contains(&EngineEvent::PageChanged(5)));
        assert!(events.contains(&EngineEvent::SelectionChanged(Some(id))));
    }

    #[test]
    fn select_by_unknown_id_returns_false_and_changes_nothing() {
        let mut engine = loaded_engine(2);
        assert!(!engine.select_annotation_by_id(AnnotationId::new_v4(), ViewContext::default()));
        assert_eq!(engine.selected(), None);
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn deleting_selected_annotation_emits_selection_cleared() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Rectangle);
        engine.pointer_down(at(0.1, 0.1, 0), screen(1.0, 1.0), false);
        engine.pointer_up(at(0.4, 0.4, 0), screen(2.0, 2.0));
        let id = engine.annotations()[0].id;
        engine.take_events();

        assert!(engine.delete_annotation(id));
        assert_eq!(engine.selected(), None);
        let events = engine.take_events();
        assert_eq!(events[0], EngineEvent::Deleted(id));
        assert!(events.contains(&EngineEvent::SelectionChanged(None)));
    }

    #[test]
    fn mode_switch_mid_gesture_discards_without_creating() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Drawing);
        engine.pointer_down(at(0.1, 0.1, 0), screen(1.0, 1.0), false);
        engine.pointer_move(at(0.5, 0.5, 0));
        engine.set_mode(Mode::Selection);
        engine.pointer_up(at(0.6, 0.6, 0), screen(2.0, 2.0));
        assert!(engine.annotations().is_empty());
        assert!(engine.gesture().is_idle());
    }

    #[test]
    fn view_only_rejects_all_mutation_but_permits_selection() {
        let config = EngineConfig {
            view_only: true,
            ..EngineConfig::default()
        };
        let existing = Annotation {
            id: AnnotationId::new_v4(),
            kind: AnnotationKind::Rectangle,
            rect: Rect::new(0.1, 0.1, 0.3, 0.3, 0),
            points: Vec::new(),
            content: String::new(),
            color: crate::annotation::Color::RED,
            thickness: 2.0,
            category: None,
            tags: Vec::new(),
        };
        let id = existing.id;
        let mut engine = AnnotationEngine::with_annotations(config, vec![existing]);
        engine.document_loaded(vec![LETTER]);

        assert!(!engine.set_mode(Mode::Rectangle));
        assert!(!engine.set_active_category(None));
        assert!(!engine.update_annotation(id, AnnotationPatch::content("x")));
        assert!(!engine.delete_annotation(id));
        assert_eq!(engine.annotations().len(), 1);

        // read-only selection still works
        assert!(engine.select(Some(id)));
        assert_eq!(engine.selected(), Some(id));
    }

    #[test]
    fn selection_click_hits_topmost_and_outside_click_clears() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Rectangle);
        engine.pointer_down(at(0.1, 0.1, 0), screen(1.0, 1.0), false);
        engine.pointer_up(at(0.5, 0.5, 0), screen(2.0, 2.0));
        let id = engine.annotations()[0].id;
        engine.set_mode(Mode::Selection);
        engine.take_events();

        engine.pointer_down(at(0.3, 0.3, 0), screen(120.0, 140.0), false);
        assert_eq!(engine.selected(), Some(id));
        assert_eq!(engine.detail_anchor(), Some(screen(120.0, 140.0)));

        // first outside click is consumed by the just-opened guard
        engine.pointer_down(at(0.9, 0.9, 0), screen(500.0, 500.0), false);
        assert_eq!(engine.selected(), Some(id));
        // second outside click closes
        engine.pointer_down(at(0.9, 0.9, 0), screen(500.0, 500.0), false);
        assert_eq!(engine.selected(), None);
    }

    #[test]
    fn detail_region_click_is_not_an_outside_click() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Rectangle);
        engine.pointer_down(at(0.1, 0.1, 0), screen(1.0, 1.0), false);
        engine.pointer_up(at(0.5, 0.5, 0), screen(2.0, 2.0));
        let id = engine.annotations()[0].id;
        engine.set_mode(Mode::Selection);
        engine.pointer_down(at(0.3, 0.3, 0), screen(120.0, 140.0), false);
        engine.pointer_down(at(0.9, 0.9, 0), screen(10.0, 10.0), false); // guard

        engine.pointer_down(at(0.9, 0.9, 0), screen(10.0, 10.0), true);
        assert_eq!(engine.selected(), Some(id));
    }

    #[test]
    fn scroll_clears_selection() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Rectangle);
        engine.pointer_down(at(0.1, 0.1, 0), screen(1.0, 1.0), false);
        engine.pointer_up(at(0.5, 0.5, 0), screen(2.0, 2.0));
        assert!(engine.selected().is_some());
        engine.scrolled();
        assert_eq!(engine.selected(), None);
    }

    #[test]
    fn newly_created_flag_clears_on_first_update() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Rectangle);
        engine.pointer_down(at(0.1, 0.1, 0), screen(1.0, 1.0), false);
        engine.pointer_up(at(0.5, 0.5, 0), screen(2.0, 2.0));
        let id = engine.annotations()[0].id;
        assert!(engine.selection_is_newly_created());

        engine.update_annotation(id, AnnotationPatch::content("edited"));
        assert!(!engine.selection_is_newly_created());
    }

    #[test]
    fn out_of_range_navigation_is_a_noop() {
        let mut engine = loaded_engine(3);
        assert!(!engine.set_current_page(7));
        assert_eq!(engine.current_page(), 0);
        assert!(engine.take_events().is_empty());
    }

    #[test]
    fn failed_render_is_reported_and_page_stays_unready() {
        let mut engine = loaded_engine(2);
        engine.page_rendered(1, ViewContext::default());
        assert!(engine.page_ready(1));

        engine.page_render_failed(
            1,
            &RenderError::PageRender {
                page: 1,
                reason: "decode".into(),
            },
        );
        assert!(!engine.page_ready(1));
        // navigation to the failed page remains possible
        assert!(engine.set_current_page(1));
    }

    #[test]
    fn serialized_collection_preserves_creation_order() {
        let mut engine = loaded_engine(1);
        engine.set_mode(Mode::Rectangle);
        for i in 0..3 {
            let base = 0.1 + i as f32 * 0.2;
            engine.pointer_down(at(base, base, 0), screen(1.0, 1.0), false);
            engine.pointer_up(at(base + 0.1, base + 0.1, 0), screen(2.0, 2.0));
        }
        let records = engine.serialized_annotations();
        assert_eq!(records.len(), 3);
        let ids: Vec<_> = engine.annotations().iter().map(|a| a.id).collect();
        let record_ids: Vec<_> = records.iter().map(|a| a.id).collect();
        assert_eq!(ids, record_ids);
    }
}
