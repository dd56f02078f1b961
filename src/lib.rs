//! # spark-tooltips
//!
//! Tooltip placement geometry for spark-tui widgets.
//!
//! Given a tooltip's size, an anchor's size, the anchor's position in window
//! coordinates and four margins, compute where the tooltip's top-left corner
//! goes. Placement is pure arithmetic; fitting the result into a window is a
//! separate, optional pass.
//!
//! ## Pipeline
//!
//! ```text
//! TooltipConfig → PlacementRequest → Placement strategy → fit (flip, clamp) → Point
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Point, Bounds, Margins, gravities, Edges)
//! - [`position`] - PositionCalculator and the four side strategies
//! - [`fit`] - Overflow detection, flipping and clamping against a window
//! - [`config`] - TOML-backed tooltip configuration
//! - [`tooltip`] - Configured tooltip facade
//! - [`layout`] - Taffy and terminal bridges

pub mod config;
pub mod error;
pub mod fit;
pub mod layout;
pub mod position;
pub mod tooltip;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use config::TooltipConfig;
pub use error::{Error, Result};
pub use fit::{clamp, fit, overflow, FitPolicy, Fitted, PlacementRequest};
pub use layout::{anchor_of, bounds_of, terminal_window, window_position};
pub use position::{
    BottomStrategy, LeftStrategy, Placement, PositionCalculator, RightStrategy, TopStrategy,
};
pub use tooltip::Tooltip;
