//! Window Fitting
//!
//! Keeps a placed tooltip inside the window.
//!
//! # Algorithm
//!
//! 1. **Place**: compute the position for the preferred side.
//! 2. **Flip**: if the tooltip crosses the window edge on that side, try the
//!    opposite side and keep it only when it fits there.
//! 3. **Clamp**: shift the result so it lies inside the window.
//!
//! Steps 2 and 3 can each be switched off through [`FitPolicy`].

use log::debug;

use crate::position::Placement;
use crate::types::{Bounds, Edges, Margins, Point, TipHorizontalGravity, TipVerticalGravity};

// =============================================================================
// REQUEST / RESULT
// =============================================================================

/// Everything a placement needs, bundled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementRequest {
    pub placement: Placement,
    pub horizontal: TipHorizontalGravity,
    pub vertical: TipVerticalGravity,
    pub tip: Bounds,
    pub anchor: Bounds,
    pub anchor_position: Point,
    pub margins: Margins,
}

impl PlacementRequest {
    /// Position for the requested side.
    pub fn compute(&self) -> Point {
        self.compute_on(self.placement)
    }

    /// Position for an arbitrary side, keeping everything else.
    pub fn compute_on(&self, placement: Placement) -> Point {
        placement.compute(
            self.horizontal,
            self.vertical,
            &self.tip,
            &self.anchor,
            self.anchor_position,
            &self.margins,
        )
    }
}

/// Which fitting steps run after placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FitPolicy {
    /// Try the opposite side when the preferred one runs off the window.
    pub flip: bool,
    /// Shift the final position into the window.
    pub clamp: bool,
}

impl Default for FitPolicy {
    fn default() -> Self {
        Self {
            flip: true,
            clamp: true,
        }
    }
}

/// Outcome of [`fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fitted {
    /// Final top-left corner in window coordinates.
    pub position: Point,
    /// Side actually used.
    pub placement: Placement,
    /// True when `placement` is the opposite of the requested side.
    pub flipped: bool,
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// Window edges crossed by `tip` drawn at `position`.
pub fn overflow(position: Point, tip: &Bounds, window: &Bounds) -> Edges {
    let placed = Bounds::at(position, tip.width(), tip.height());
    let mut edges = Edges::NONE;

    if placed.left < window.left {
        edges |= Edges::LEFT;
    }
    if placed.top < window.top {
        edges |= Edges::TOP;
    }
    if placed.right > window.right {
        edges |= Edges::RIGHT;
    }
    if placed.bottom > window.bottom {
        edges |= Edges::BOTTOM;
    }
    edges
}

/// Shift `position` so `tip` lies inside `window`.
///
/// A tooltip larger than the window on some axis is pinned to the window's
/// left/top edge on that axis.
pub fn clamp(position: Point, tip: &Bounds, window: &Bounds) -> Point {
    Point::new(
        clamp_axis(position.x, tip.width(), window.left, window.right),
        clamp_axis(position.y, tip.height(), window.top, window.bottom),
    )
}

fn clamp_axis(value: f32, size: f32, min: f32, max: f32) -> f32 {
    let limit = max - size;
    // NaN limits pin too
    if !(limit >= min) {
        return min;
    }
    value.clamp(min, limit)
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Place a tooltip and fit it into `window`.
pub fn fit(request: &PlacementRequest, window: &Bounds, policy: FitPolicy) -> Fitted {
    let mut placement = request.placement;
    let mut position = request.compute();
    let mut flipped = false;

    if policy.flip && overflow(position, &request.tip, window).contains(placement.leading_edge()) {
        let opposite = placement.opposite();
        let candidate = request.compute_on(opposite);

        if overflow(candidate, &request.tip, window).contains(opposite.leading_edge()) {
            debug!(
                "tooltip overflows {:?} and {:?}, keeping {:?}",
                placement, opposite, placement
            );
        } else {
            debug!("tooltip overflows {:?}, flipping to {:?}", placement, opposite);
            placement = opposite;
            position = candidate;
            flipped = true;
        }
    }

    if policy.clamp {
        position = clamp(position, &request.tip, window);
    }

    Fitted {
        position,
        placement,
        flipped,
    }
}
