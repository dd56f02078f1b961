//! Layout Module
//!
//! Bridges between tooltip geometry and the outside world.
//!
//! # Architecture
//!
//! Anchors come from a [Taffy](https://github.com/DioxusLabs/taffy) tree
//! after layout has been computed; the window comes from the terminal.
//!
//! # Example
//!
//! ```ignore
//! use spark_tooltips::layout::{anchor_of, terminal_window};
//! use spark_tooltips::Tooltip;
//!
//! let (anchor, position) = anchor_of(&tree, button)?;
//! let fitted = Tooltip::default().position_in(&tip, &anchor, position, &terminal_window()?);
//! ```

mod taffy_bridge;
mod terminal;

pub use taffy_bridge::{anchor_of, bounds_of, window_position};
pub use terminal::terminal_window;
