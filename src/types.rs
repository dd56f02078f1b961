//! Core types for spark-tooltips.
//!
//! Plain value types in window coordinates. Everything here is `Copy` and
//! immutable once built; a placement computation only ever reads them.

use std::ops::Index;

use serde::{Deserialize, Serialize};

// =============================================================================
// Margin Indices
// =============================================================================

/// Position of the left margin inside [`Margins`].
pub const MARGIN_LEFT_INDEX: usize = 0;
/// Position of the top margin inside [`Margins`].
pub const MARGIN_TOP_INDEX: usize = 1;
/// Position of the right margin inside [`Margins`].
pub const MARGIN_RIGHT_INDEX: usize = 2;
/// Position of the bottom margin inside [`Margins`].
pub const MARGIN_BOTTOM_INDEX: usize = 3;

// =============================================================================
// Point
// =============================================================================

/// A coordinate in window space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Window origin.
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Return this point moved by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

// =============================================================================
// Bounds
// =============================================================================

/// A rectangle described by its four edges.
///
/// Tooltip and anchor sizes usually arrive with a zero origin
/// (`Bounds::from_size`), while windows carry a real origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Create bounds from edges.
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Bounds of the given size anchored at the origin.
    pub const fn from_size(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Bounds of the given size with its top-left corner at `origin`.
    pub fn at(origin: Point, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, origin.x + width, origin.y + height)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    /// Top-left corner.
    #[inline]
    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.left + self.width() / 2.0,
            self.top + self.height() / 2.0,
        )
    }

    /// Check if `other` lies entirely inside these bounds (edges inclusive).
    pub fn contains(&self, other: &Bounds) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }
}

// =============================================================================
// Margins
// =============================================================================

/// Spacing reserved around the tooltip, one value per side.
///
/// Stored in the fixed order left, top, right, bottom so the
/// `MARGIN_*_INDEX` constants can index it directly.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margins([f32; 4]);

impl Margins {
    /// No spacing on any side.
    pub const ZERO: Self = Self([0.0; 4]);

    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self([left, top, right, bottom])
    }

    /// Same spacing on every side.
    pub const fn uniform(value: f32) -> Self {
        Self([value; 4])
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.0[MARGIN_LEFT_INDEX]
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.0[MARGIN_TOP_INDEX]
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.0[MARGIN_RIGHT_INDEX]
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.0[MARGIN_BOTTOM_INDEX]
    }

    /// Raw values in index order.
    pub fn as_array(&self) -> [f32; 4] {
        self.0
    }
}

impl Index<usize> for Margins {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.0[index]
    }
}

impl From<[f32; 4]> for Margins {
    fn from(values: [f32; 4]) -> Self {
        Self(values)
    }
}

/// Pixel margins as most host toolkits hand them out.
impl From<[i32; 4]> for Margins {
    fn from(values: [i32; 4]) -> Self {
        Self(values.map(|v| v as f32))
    }
}

// =============================================================================
// Gravity
// =============================================================================

/// Horizontal alignment of a tooltip placed above or below its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TipHorizontalGravity {
    /// Left edges line up, shifted right by the left margin.
    Left = 0,
    /// Right edges line up, shifted left by the right margin.
    Right = 1,
    /// Centers line up; margins are ignored.
    #[default]
    Center = 2,
}

impl From<u8> for TipHorizontalGravity {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Left,
            1 => Self::Right,
            2 => Self::Center,
            _ => Self::Center,
        }
    }
}

/// Vertical alignment of a tooltip placed left or right of its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum TipVerticalGravity {
    /// Top edges line up, shifted down by the top margin.
    Top = 0,
    /// Bottom edges line up, shifted up by the bottom margin.
    Bottom = 1,
    /// Centers line up; margins are ignored.
    #[default]
    Center = 2,
}

impl From<u8> for TipVerticalGravity {
    fn from(value: u8) -> Self {
        match value {
            0 => Self::Top,
            1 => Self::Bottom,
            2 => Self::Center,
            _ => Self::Center,
        }
    }
}

// =============================================================================
// Edges (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Window edges crossed by a placed tooltip.
    ///
    /// Combine with bitwise OR: `Edges::TOP | Edges::RIGHT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Edges: u8 {
        const NONE = 0;
        const LEFT = 1 << 0;
        const TOP = 1 << 1;
        const RIGHT = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}
