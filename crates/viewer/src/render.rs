//! Per-page render slots with cancel-before-replace discipline
//!
//! At most one raster request is outstanding per page slot. Beginning a new
//! render for a slot (scale or page change) cancels the in-flight token
//! first; a superseded render that completes late is discarded by its stale
//! generation — "latest scale wins". A readiness flag per page gates whether
//! the annotation overlay for that page may be shown, so the overlay never
//! renders against a stale or mid-render canvas.

use std::collections::HashMap;

use pagemark_core::RenderError;

use crate::cancel::CancellationToken;

/// Handle for one raster request, given to the collaborator
#[derive(Debug, Clone)]
pub struct RenderTicket {
    page_index: u16,
    generation: u64,
    token: CancellationToken,
}

impl RenderTicket {
    pub fn page_index(&self) -> u16 {
        self.page_index
    }

    /// Token the rasterizer polls to stop early
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u64,
    token: CancellationToken,
    ready: bool,
}

/// Render-slot table for the materialized pages
#[derive(Debug, Default)]
pub struct RenderSlots {
    slots: HashMap<u16, Slot>,
}

impl RenderSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a render for a page slot
    ///
    /// Any in-flight render for the slot is cancelled before the new ticket
    /// is issued, and the page's overlay-readiness is withdrawn until the
    /// new raster completes.
    pub fn begin(&mut self, page_index: u16) -> RenderTicket {
        let slot = self.slots.entry(page_index).or_default();
        slot.token.cancel();
        slot.generation += 1;
        slot.token = CancellationToken::new();
        slot.ready = false;
        RenderTicket {
            page_index,
            generation: slot.generation,
            token: slot.token.clone(),
        }
    }

    /// A raster completed
    ///
    /// Marks the page overlay-ready only when the ticket is still current;
    /// a cancelled or superseded completion is discarded silently — never
    /// reported as an error.
    pub fn complete(&mut self, ticket: &RenderTicket) -> bool {
        if ticket.token.is_cancelled() {
            log::debug!("render for page {} superseded, result discarded", ticket.page_index);
            return false;
        }
        let Some(slot) = self.slots.get_mut(&ticket.page_index) else {
            return false;
        };
        if slot.generation != ticket.generation {
            log::debug!("stale render generation for page {} discarded", ticket.page_index);
            return false;
        }
        slot.ready = true;
        true
    }

    /// A raster failed; reported once, the page stays un-materialized
    ///
    /// Cancellations never reach the reporting path.
    pub fn fail(&mut self, ticket: &RenderTicket, error: &RenderError) {
        error.report();
        if let Some(slot) = self.slots.get_mut(&ticket.page_index) {
            if slot.generation == ticket.generation {
                slot.ready = false;
            }
        }
    }

    /// Cancel the in-flight render for a page and withdraw readiness
    pub fn invalidate(&mut self, page_index: u16) {
        if let Some(slot) = self.slots.get_mut(&page_index) {
            slot.token.cancel();
            slot.ready = false;
        }
    }

    /// Scale changed: every slot's raster is stale
    pub fn invalidate_all(&mut self) {
        for slot in self.slots.values_mut() {
            slot.token.cancel();
            slot.ready = false;
        }
    }

    /// Drop slots for pages that left the materialization window
    pub fn retain_pages(&mut self, pages: &[u16]) {
        self.slots.retain(|page, slot| {
            let keep = pages.contains(page);
            if !keep {
                slot.token.cancel();
            }
            keep
        });
    }

    /// Whether the annotation overlay for a page may be shown
    pub fn page_ready(&self, page_index: u16) -> bool {
        self.slots.get(&page_index).is_some_and(|s| s.ready)
    }
}
