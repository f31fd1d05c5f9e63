//! Annotation store and lifecycle
//!
//! Sole owner of the annotation collection. Records live in a single vec in
//! creation order (insertion order is the serialization order), with id
//! lookup by scan — collections are small and order preservation matters
//! more than lookup speed here.

use crate::annotation::{
    Annotation, AnnotationId, AnnotationKind, AnnotationPatch, Tag,
};
use crate::config::EngineConfig;
use crate::geometry::{Point, Rect};

/// Hit-test tolerance in normalized units, inflating hairline geometry
/// (strikeouts, thin rectangles) into a selectable target.
pub const HIT_TOLERANCE: f32 = 0.005;

/// In-memory annotation collection with single selection
#[derive(Debug, Default)]
pub struct AnnotationStore {
    annotations: Vec<Annotation>,
    selected: Option<AnnotationId>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the store with a host-supplied initial collection
    ///
    /// Existing ids are kept; order of the input is preserved.
    pub fn load(&mut self, annotations: Vec<Annotation>) {
        self.annotations = annotations;
        self.selected = None;
    }

    /// Create a fully-populated record and append it to the collection
    ///
    /// Assigns a fresh id, resolves the color per the configured precedence
    /// and stamps the current thickness. Returns the new id; callers never
    /// need to know the id in advance.
    pub fn create(
        &mut self,
        kind: AnnotationKind,
        rect: Rect,
        points: Vec<Point>,
        content: String,
        config: &EngineConfig,
    ) -> AnnotationId {
        let annotation = Annotation {
            id: AnnotationId::new_v4(),
            kind,
            rect,
            points,
            content,
            color: config.resolve_color(kind),
            thickness: config.default_thickness,
            category: config.active_category.clone(),
            tags: Vec::new(),
        };
        let id = annotation.id;
        self.annotations.push(annotation);
        id
    }

    /// Merge a patch into the record matching `id`
    ///
    /// Unknown ids are a silent no-op; the `false` return is a reported
    /// condition for callers that need confirmation, not an error.
    pub fn update(&mut self, id: AnnotationId, patch: AnnotationPatch) -> bool {
        let Some(annotation) = self.annotations.iter_mut().find(|a| a.id == id) else {
            log::debug!("update for unknown annotation {id} ignored");
            return false;
        };
        if let Some(content) = patch.content {
            annotation.content = content;
        }
        if let Some(color) = patch.color {
            annotation.color = color;
        }
        if let Some(thickness) = patch.thickness {
            annotation.thickness = thickness;
        }
        if let Some(category) = patch.category {
            annotation.category = category;
        }
        if let Some(tags) = patch.tags {
            annotation.tags = tags;
        }
        true
    }

    /// Replace the tag list of a pin annotation (second step of the pin
    /// creation contract)
    pub fn set_tags(&mut self, id: AnnotationId, tags: Vec<Tag>) -> bool {
        self.update(id, AnnotationPatch::tags(tags))
    }

    /// Remove the record matching `id`
    ///
    /// If the removed annotation is currently selected the selection is
    /// cleared as a side effect — a dangling selection reference must never
    /// survive a delete.
    pub fn remove(&mut self, id: AnnotationId) -> bool {
        let before = self.annotations.len();
        self.annotations.retain(|a| a.id != id);
        let removed = self.annotations.len() != before;
        if removed && self.selected == Some(id) {
            self.selected = None;
        }
        removed
    }

    /// Set or clear the active selection
    ///
    /// Selecting an unknown id is a no-op returning `false`.
    pub fn select(&mut self, id: Option<AnnotationId>) -> bool {
        match id {
            Some(id) if self.get(id).is_none() => false,
            other => {
                self.selected = other;
                true
            }
        }
    }

    pub fn selected(&self) -> Option<AnnotationId> {
        self.selected
    }

    pub fn get(&self, id: AnnotationId) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.id == id)
    }

    /// All annotations in insertion (creation) order
    pub fn all(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    /// Read-time projection by category id
    ///
    /// Never mutates stored records; `None` returns the full collection in
    /// order, and filtering twice by the same category yields the same set.
    pub fn filter_by_category(&self, category_id: Option<&str>) -> Vec<&Annotation> {
        match category_id {
            None => self.annotations.iter().collect(),
            Some(wanted) => self
                .annotations
                .iter()
                .filter(|a| a.category.as_ref().is_some_and(|c| c.id == wanted))
                .collect(),
        }
    }

    /// Annotations on a page, in insertion order
    pub fn on_page(&self, page_index: u16) -> Vec<&Annotation> {
        self.annotations
            .iter()
            .filter(|a| a.rect.page_index == page_index)
            .collect()
    }

    /// Topmost annotation whose rect contains the point
    ///
    /// Later-created annotations render on top, so the scan runs newest
    /// first.
    pub fn hit_test(&self, page_index: u16, point: Point) -> Option<&Annotation> {
        self.annotations
            .iter()
            .rev()
            .find(|a| {
                a.rect.page_index == page_index
                    && a.rect.contains_with_tolerance(point, HIT_TOLERANCE)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Category, Color};

    fn rect(page: u16) -> Rect {
        Rect::new(0.1, 0.1, 0.2, 0.2, page)
    }

    fn create_default(store: &mut AnnotationStore, kind: AnnotationKind) -> AnnotationId {
        store.create(kind, rect(0), Vec::new(), String::new(), &EngineConfig::default())
    }

    #[test]
    fn create_assigns_unique_ids_and_preserves_order() {
        let mut store = AnnotationStore::new();
        let a = create_default(&mut store, AnnotationKind::Rectangle);
        let b = create_default(&mut store, AnnotationKind::Text);
        assert_ne!(a, b);
        let order: Vec<_> = store.all().iter().map(|ann| ann.id).collect();
        assert_eq!(order, vec![a, b]);
    }

    #[test]
    fn create_stamps_color_and_thickness_from_config() {
        let mut store = AnnotationStore::new();
        let config = EngineConfig {
            default_thickness: 5.0,
            active_category: Some(Category {
                id: "c".into(),
                display_name: "C".into(),
                color: Color::rgb(9, 9, 9),
            }),
            ..EngineConfig::default()
        };
        let id = store.create(
            AnnotationKind::Drawing,
            rect(0),
            vec![Point::new(0.1, 0.1)],
            String::new(),
            &config,
        );
        let annotation = store.get(id).unwrap();
        assert_eq!(annotation.thickness, 5.0);
        assert_eq!(annotation.color, Color::rgb(9, 9, 9));
        assert_eq!(annotation.category.as_ref().unwrap().id, "c");
    }

    #[test]
    fn update_unknown_id_is_silent_noop() {
        let mut store = AnnotationStore::new();
        assert!(!store.update(AnnotationId::new_v4(), AnnotationPatch::content("x")));
    }

    #[test]
    fn update_merges_only_present_fields() {
        let mut store = AnnotationStore::new();
        let id = create_default(&mut store, AnnotationKind::Text);
        let original_color = store.get(id).unwrap().color;

        assert!(store.update(id, AnnotationPatch::content("hello")));
        let annotation = store.get(id).unwrap();
        assert_eq!(annotation.content, "hello");
        assert_eq!(annotation.color, original_color);
    }

    #[test]
    fn removing_selected_annotation_clears_selection() {
        let mut store = AnnotationStore::new();
        let id = create_default(&mut store, AnnotationKind::Pin);
        assert!(store.select(Some(id)));
        assert!(store.remove(id));
        assert_eq!(store.selected(), None);
    }

    #[test]
    fn removing_other_annotation_keeps_selection() {
        let mut store = AnnotationStore::new();
        let keep = create_default(&mut store, AnnotationKind::Pin);
        let drop = create_default(&mut store, AnnotationKind::Text);
        store.select(Some(keep));
        store.remove(drop);
        assert_eq!(store.selected(), Some(keep));
    }

    #[test]
    fn selecting_unknown_id_leaves_selection_unchanged() {
        let mut store = AnnotationStore::new();
        let id = create_default(&mut store, AnnotationKind::Text);
        store.select(Some(id));
        assert!(!store.select(Some(AnnotationId::new_v4())));
        assert_eq!(store.selected(), Some(id));
    }

    #[test]
    fn category_filter_is_idempotent_and_order_preserving() {
        let mut store = AnnotationStore::new();
        let config_a = EngineConfig {
            active_category: Some(Category {
                id: "a".into(),
                display_name: "A".into(),
                color: Color::RED,
            }),
            ..EngineConfig::default()
        };
        let first = store.create(
            AnnotationKind::Rectangle,
            rect(0),
            Vec::new(),
            String::new(),
            &config_a,
        );
        create_default(&mut store, AnnotationKind::Text);
        let third = store.create(
            AnnotationKind::Pin,
            rect(1),
            Vec::new(),
            String::new(),
            &config_a,
        );

        let once: Vec<_> = store
            .filter_by_category(Some("a"))
            .iter()
            .map(|a| a.id)
            .collect();
        let twice: Vec<_> = store
            .filter_by_category(Some("a"))
            .iter()
            .map(|a| a.id)
            .collect();
        assert_eq!(once, vec![first, third]);
        assert_eq!(once, twice);

        let unfiltered: Vec<_> = store.filter_by_category(None).iter().map(|a| a.id).collect();
        assert_eq!(unfiltered.len(), 3);
        assert_eq!(unfiltered[0], first);
    }

    #[test]
    fn hit_test_prefers_most_recent_on_overlap() {
        let mut store = AnnotationStore::new();
        let config = EngineConfig::default();
        let _under = store.create(
            AnnotationKind::Rectangle,
            Rect::new(0.1, 0.1, 0.4, 0.4, 0),
            Vec::new(),
            String::new(),
            &config,
        );
        let over = store.create(
            AnnotationKind::Rectangle,
            Rect::new(0.2, 0.2, 0.4, 0.4, 0),
            Vec::new(),
            String::new(),
            &config,
        );

        let hit = store.hit_test(0, Point::new(0.3, 0.3)).unwrap();
        assert_eq!(hit.id, over);
        assert!(store.hit_test(1, Point::new(0.3, 0.3)).is_none());
        assert!(store.hit_test(0, Point::new(0.9, 0.9)).is_none());
    }
}
