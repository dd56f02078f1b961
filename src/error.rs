//! Error type for spark-tooltips.
//!
//! Placement arithmetic never fails; errors only come from the edges of the
//! crate: loading configuration, reading a layout tree, querying the terminal.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("margin {index} must be finite and non-negative, got {value}")]
    InvalidMargin { index: usize, value: f32 },
    #[error("layout error: {0}")]
    Layout(String),
}

pub type Result<T> = std::result::Result<T, Error>;
