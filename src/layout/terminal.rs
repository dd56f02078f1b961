//! Terminal window bounds.

use crate::error::Result;
use crate::types::Bounds;

/// Current terminal size in cells, as window bounds at the origin.
pub fn terminal_window() -> Result<Bounds> {
    let (columns, rows) = crossterm::terminal::size()?;
    Ok(Bounds::from_size(columns as f32, rows as f32))
}
