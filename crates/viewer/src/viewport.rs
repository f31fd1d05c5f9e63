//! Viewport and page window management
//!
//! Decides which pages are materialized (current ± 1), owns the zoom scale
//! with fit-to-width recomputation, and clamps page navigation. The actual
//! scroll/layout rendering belongs to the host; this is the state it reads.

/// Manual zoom bounds and step
pub const MIN_SCALE: f32 = 0.25;
pub const MAX_SCALE: f32 = 4.0;
pub const ZOOM_STEP: f32 = 0.25;

/// Horizontal padding subtracted from the container in fit-to-width
pub const FIT_PADDING_PX: f32 = 32.0;

/// Viewport state for a document of known page count
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    page_count: u16,
    current_page: u16,
    scale: f32,
}

impl Viewport {
    pub fn new(page_count: u16) -> Self {
        Self {
            page_count,
            current_page: 0,
            scale: 1.0,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn current_page(&self) -> u16 {
        self.current_page
    }

    pub fn page_count(&self) -> u16 {
        self.page_count
    }

    /// Navigate to a page (0-based); out of range is a no-op
    pub fn go_to_page(&mut self, page_index: u16) -> bool {
        if page_index >= self.page_count {
            return false;
        }
        self.current_page = page_index;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.current_page + 1 < self.page_count && self.go_to_page(self.current_page + 1)
    }

    pub fn prev_page(&mut self) -> bool {
        self.current_page > 0 && self.go_to_page(self.current_page - 1)
    }

    /// Step the zoom by the fixed increment, clamped to the scale bounds
    pub fn zoom_in(&mut self) -> f32 {
        self.set_scale(self.scale + ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> f32 {
        self.set_scale(self.scale - ZOOM_STEP)
    }

    pub fn set_scale(&mut self, scale: f32) -> f32 {
        self.scale = scale.clamp(MIN_SCALE, MAX_SCALE);
        self.scale
    }

    /// Fit the page to the container width, minus fixed padding
    ///
    /// Recomputed on every container resize. Degenerate container or native
    /// widths fall back to scale 1.0 instead of producing a zero or negative
    /// scale.
    pub fn fit_to_width(&mut self, container_width: f32, native_page_width: f32) -> f32 {
        let usable = container_width - FIT_PADDING_PX;
        if usable <= 0.0 || native_page_width <= 0.0 {
            self.scale = 1.0;
            return self.scale;
        }
        self.scale = (usable / native_page_width).clamp(MIN_SCALE, MAX_SCALE);
        self.scale
    }

    /// Pages that should be materialized: current ± 1, clamped to the
    /// document, in ascending order
    pub fn materialized_pages(&self) -> Vec<u16> {
        if self.page_count == 0 {
            return Vec::new();
        }
        let first = self.current_page.saturating_sub(1);
        let last = (self.current_page + 1).min(self.page_count - 1);
        (first..=last).collect()
    }

    pub fn is_materialized(&self, page_index: u16) -> bool {
        self.materialized_pages().contains(&page_index)
    }
}
