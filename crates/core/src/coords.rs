//! Coordinate transforms between viewport pixels and page space
//!
//! Three spaces are involved: viewport pixels (on-screen, scale-dependent),
//! page-native units (points at magnification 1.0), and normalized units
//! (fractions of the native page size). Stored geometry is always
//! normalized; only rendering converts back to pixels, fresh on every draw.
//!
//! All conversions are pure functions of the page's native size `(W, H)` and
//! the active zoom factor. Degenerate inputs (zero scale or unknown native
//! size during initial load) yield a safe default instead of dividing by
//! zero.

use crate::geometry::Point;

/// Viewport-pixel offset of a page's top-left corner inside the container
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PageOrigin {
    pub left: f32,
    pub top: f32,
}

impl PageOrigin {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }
}

/// Convert a viewport-pixel position to a normalized page point
///
/// The result is clamped to [0, 1] on both axes, so pointer positions
/// outside the page canvas still map to valid stored geometry. Returns
/// `Point::ZERO` when `scale`, `native_width` or `native_height` is zero
/// (native dimensions not known yet).
pub fn viewport_to_normalized(
    vx: f32,
    vy: f32,
    origin: PageOrigin,
    scale: f32,
    native_width: f32,
    native_height: f32,
) -> Point {
    if scale == 0.0 || native_width == 0.0 || native_height == 0.0 {
        return Point::ZERO;
    }
    Point::clamped(
        (vx - origin.left) / scale / native_width,
        (vy - origin.top) / scale / native_height,
    )
}

/// Convert a normalized page point to viewport pixels
///
/// Exact inverse of [`viewport_to_normalized`] modulo clamping: for any
/// point already in [0, 1]² and any scale > 0, converting there and back
/// reproduces the point within floating-point tolerance.
pub fn normalized_to_viewport(
    point: Point,
    scale: f32,
    native_width: f32,
    native_height: f32,
) -> (f32, f32) {
    (
        point.x * native_width * scale,
        point.y * native_height * scale,
    )
}

/// Convert a viewport-pixel position to page-native units
///
/// Same as [`viewport_to_normalized`] without the final division by the
/// native size; the result is bounded to `[0, W] × [0, H]`.
pub fn viewport_to_page_units(
    vx: f32,
    vy: f32,
    origin: PageOrigin,
    scale: f32,
    native_width: f32,
    native_height: f32,
) -> (f32, f32) {
    if scale == 0.0 {
        return (0.0, 0.0);
    }
    (
        ((vx - origin.left) / scale).clamp(0.0, native_width.max(0.0)),
        ((vy - origin.top) / scale).clamp(0.0, native_height.max(0.0)),
    )
}
