//! Placement enum: picks a strategy by side.

use serde::{Deserialize, Serialize};

use crate::types::{Bounds, Edges, Margins, Point, TipHorizontalGravity, TipVerticalGravity};

use super::{BottomStrategy, LeftStrategy, PositionCalculator, RightStrategy, TopStrategy};

/// Side of the anchor the tooltip is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Placement {
    #[default]
    Top = 0,
    Bottom = 1,
    Left = 2,
    Right = 3,
}

impl Placement {
    /// The side across the anchor.
    pub const fn opposite(&self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Check if the tooltip stacks vertically with the anchor (Top or Bottom).
    pub const fn is_vertical(&self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// The window edge a tooltip on this side runs into first.
    pub const fn leading_edge(&self) -> Edges {
        match self {
            Self::Top => Edges::TOP,
            Self::Bottom => Edges::BOTTOM,
            Self::Left => Edges::LEFT,
            Self::Right => Edges::RIGHT,
        }
    }

    /// Boxed strategy for this side.
    ///
    /// Only the gravity matching the side's free axis is used.
    pub fn calculator(
        &self,
        horizontal: TipHorizontalGravity,
        vertical: TipVerticalGravity,
    ) -> Box<dyn PositionCalculator> {
        match self {
            Self::Top => Box::new(TopStrategy::new(horizontal)),
            Self::Bottom => Box::new(BottomStrategy::new(horizontal)),
            Self::Left => Box::new(LeftStrategy::new(vertical)),
            Self::Right => Box::new(RightStrategy::new(vertical)),
        }
    }

    /// Compute the tooltip position without boxing.
    pub fn compute(
        &self,
        horizontal: TipHorizontalGravity,
        vertical: TipVerticalGravity,
        tip: &Bounds,
        anchor: &Bounds,
        anchor_position: Point,
        margins: &Margins,
    ) -> Point {
        match self {
            Self::Top => TopStrategy::new(horizontal)
                .compute_position(tip, anchor, anchor_position, margins),
            Self::Bottom => BottomStrategy::new(horizontal)
                .compute_position(tip, anchor, anchor_position, margins),
            Self::Left => LeftStrategy::new(vertical)
                .compute_position(tip, anchor, anchor_position, margins),
            Self::Right => RightStrategy::new(vertical)
                .compute_position(tip, anchor, anchor_position, margins),
        }
    }
}

impl From<u8> for Placement {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Top,
            1 => Self::Bottom,
            2 => Self::Left,
            3 => Self::Right,
            _ => Self::Top,
        }
    }
}
