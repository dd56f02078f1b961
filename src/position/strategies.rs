//! The four side strategies.

use log::trace;

use crate::types::{Bounds, Margins, Point, TipHorizontalGravity, TipVerticalGravity};

use super::PositionCalculator;

// =============================================================================
// GRAVITY ALIGNMENT
// =============================================================================

/// X coordinate for a tooltip sitting above or below the anchor.
fn align_horizontal(
    gravity: TipHorizontalGravity,
    tip: &Bounds,
    anchor: &Bounds,
    anchor_position: Point,
    margins: &Margins,
) -> f32 {
    match gravity {
        TipHorizontalGravity::Left => anchor_position.x + margins.left(),
        TipHorizontalGravity::Right => {
            anchor_position.x + anchor.width() - tip.width() - margins.right()
        }
        TipHorizontalGravity::Center => {
            anchor_position.x + anchor.width() / 2.0 - tip.width() / 2.0
        }
    }
}

/// Y coordinate for a tooltip sitting left or right of the anchor.
fn align_vertical(
    gravity: TipVerticalGravity,
    tip: &Bounds,
    anchor: &Bounds,
    anchor_position: Point,
    margins: &Margins,
) -> f32 {
    match gravity {
        TipVerticalGravity::Top => anchor_position.y + margins.top(),
        TipVerticalGravity::Bottom => {
            anchor_position.y + anchor.height() - tip.height() - margins.bottom()
        }
        TipVerticalGravity::Center => {
            anchor_position.y + anchor.height() / 2.0 - tip.height() / 2.0
        }
    }
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// Above the anchor, separated by the tooltip's bottom margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TopStrategy {
    pub gravity: TipHorizontalGravity,
}

impl TopStrategy {
    pub const fn new(gravity: TipHorizontalGravity) -> Self {
        Self { gravity }
    }
}

impl PositionCalculator for TopStrategy {
    fn compute_position(
        &self,
        tip: &Bounds,
        anchor: &Bounds,
        anchor_position: Point,
        margins: &Margins,
    ) -> Point {
        let x = align_horizontal(self.gravity, tip, anchor, anchor_position, margins);
        let y = anchor_position.y - tip.height() - margins.bottom();
        trace!("top/{:?} -> ({}, {})", self.gravity, x, y);
        Point::new(x, y)
    }
}

/// Below the anchor, separated by the tooltip's top margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BottomStrategy {
    pub gravity: TipHorizontalGravity,
}

impl BottomStrategy {
    pub const fn new(gravity: TipHorizontalGravity) -> Self {
        Self { gravity }
    }
}

impl PositionCalculator for BottomStrategy {
    fn compute_position(
        &self,
        tip: &Bounds,
        anchor: &Bounds,
        anchor_position: Point,
        margins: &Margins,
    ) -> Point {
        let x = align_horizontal(self.gravity, tip, anchor, anchor_position, margins);
        let y = anchor_position.y + anchor.height() + margins.top();
        trace!("bottom/{:?} -> ({}, {})", self.gravity, x, y);
        Point::new(x, y)
    }
}

/// Left of the anchor, separated by the tooltip's right margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LeftStrategy {
    pub gravity: TipVerticalGravity,
}

impl LeftStrategy {
    pub const fn new(gravity: TipVerticalGravity) -> Self {
        Self { gravity }
    }
}

impl PositionCalculator for LeftStrategy {
    fn compute_position(
        &self,
        tip: &Bounds,
        anchor: &Bounds,
        anchor_position: Point,
        margins: &Margins,
    ) -> Point {
        let x = anchor_position.x - tip.width() - margins.right();
        let y = align_vertical(self.gravity, tip, anchor, anchor_position, margins);
        trace!("left/{:?} -> ({}, {})", self.gravity, x, y);
        Point::new(x, y)
    }
}

/// Right of the anchor, separated by the tooltip's left margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RightStrategy {
    pub gravity: TipVerticalGravity,
}

impl RightStrategy {
    pub const fn new(gravity: TipVerticalGravity) -> Self {
        Self { gravity }
    }
}

impl PositionCalculator for RightStrategy {
    fn compute_position(
        &self,
        tip: &Bounds,
        anchor: &Bounds,
        anchor_position: Point,
        margins: &Margins,
    ) -> Point {
        let x = anchor_position.x + anchor.width() + margins.left();
        let y = align_vertical(self.gravity, tip, anchor, anchor_position, margins);
        trace!("right/{:?} -> ({}, {})", self.gravity, x, y);
        Point::new(x, y)
    }
}
