//! Tooltip Placement
//!
//! Each strategy answers one question: where does the tooltip's top-left
//! corner go, in window coordinates, given
//!
//! 1. the tooltip's bounds (only its size matters),
//! 2. the anchor's bounds (only its size matters),
//! 3. the anchor's top-left corner in window coordinates,
//! 4. the tooltip margins, indexed by `MARGIN_*_INDEX`.
//!
//! The side a strategy places on fixes one axis; the gravity picks the other.
//! The margin applied on the fixed axis is the one facing the anchor.
//!
//! # Example
//!
//! ```
//! use spark_tooltips::position::{PositionCalculator, TopStrategy};
//! use spark_tooltips::{Bounds, Margins, Point, TipHorizontalGravity};
//!
//! let position = TopStrategy::new(TipHorizontalGravity::Left).compute_position(
//!     &Bounds::from_size(300.0, 100.0),
//!     &Bounds::from_size(100.0, 150.0),
//!     Point::new(0.0, 500.0),
//!     &Margins::uniform(20.0),
//! );
//! assert_eq!(position, Point::new(20.0, 380.0));
//! ```

mod placement;
mod strategies;

pub use placement::Placement;
pub use strategies::{BottomStrategy, LeftStrategy, RightStrategy, TopStrategy};

use crate::types::{Bounds, Margins, Point};

/// A placement strategy.
pub trait PositionCalculator {
    /// Compute the window-space top-left corner of the tooltip.
    fn compute_position(
        &self,
        tip: &Bounds,
        anchor: &Bounds,
        anchor_position: Point,
        margins: &Margins,
    ) -> Point;
}
