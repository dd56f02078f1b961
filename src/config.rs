//! Tooltip configuration, persisted as TOML.
//!
//! ```toml
//! placement = "bottom"
//! horizontal_gravity = "left"
//! margins = [1.0, 0.0, 1.0, 0.0]
//! flip = true
//! ```

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fit::{FitPolicy, PlacementRequest};
use crate::position::Placement;
use crate::types::{Bounds, Margins, Point, TipHorizontalGravity, TipVerticalGravity};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    pub placement: Placement,
    pub horizontal_gravity: TipHorizontalGravity,
    pub vertical_gravity: TipVerticalGravity,
    /// Left, top, right, bottom.
    pub margins: [f32; 4],
    pub flip: bool,
    pub clamp: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            placement: Placement::default(),
            horizontal_gravity: TipHorizontalGravity::default(),
            vertical_gravity: TipVerticalGravity::default(),
            margins: [0.0; 4],
            flip: true,
            clamp: true,
        }
    }
}

impl TooltipConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        debug!("loaded tooltip config: {:?}", config);
        Ok(config)
    }

    /// Loads config from a TOML file. Returns default config if file doesn't exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("no tooltip config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Saves config to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Every margin must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        match self
            .margins
            .iter()
            .position(|m| !m.is_finite() || *m < 0.0)
        {
            Some(index) => Err(Error::InvalidMargin {
                index,
                value: self.margins[index],
            }),
            None => Ok(()),
        }
    }

    pub fn margins(&self) -> Margins {
        Margins::from(self.margins)
    }

    pub fn policy(&self) -> FitPolicy {
        FitPolicy {
            flip: self.flip,
            clamp: self.clamp,
        }
    }

    /// Bundle this config with concrete geometry.
    pub fn request(&self, tip: Bounds, anchor: Bounds, anchor_position: Point) -> PlacementRequest {
        PlacementRequest {
            placement: self.placement,
            horizontal: self.horizontal_gravity,
            vertical: self.vertical_gravity,
            tip,
            anchor,
            anchor_position,
            margins: self.margins(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::MARGIN_RIGHT_INDEX;

    #[test]
    fn test_empty_document_is_default() {
        let config = TooltipConfig::from_toml_str("").unwrap();
        assert_eq!(config, TooltipConfig::default());
        assert_eq!(config.policy(), FitPolicy::default());
    }

    #[test]
    fn test_parse_full_document() {
        let config = TooltipConfig::from_toml_str(
            r#"
            placement = "left"
            horizontal_gravity = "right"
            vertical_gravity = "bottom"
            margins = [1.0, 2.0, 3.0, 4.0]
            flip = false
            clamp = false
            "#,
        )
        .unwrap();

        assert_eq!(config.placement, Placement::Left);
        assert_eq!(config.horizontal_gravity, TipHorizontalGravity::Right);
        assert_eq!(config.vertical_gravity, TipVerticalGravity::Bottom);
        assert_eq!(config.margins()[MARGIN_RIGHT_INDEX], 3.0);
        assert!(!config.policy().flip);
        assert!(!config.policy().clamp);
    }

    #[test]
    fn test_unknown_gravity_is_parse_error() {
        let err = TooltipConfig::from_toml_str(r#"horizontal_gravity = "middle""#).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_negative_margin_rejected() {
        let err = TooltipConfig::from_toml_str("margins = [0.0, 0.0, -2.0, 0.0]").unwrap_err();
        match err {
            Error::InvalidMargin { index, value } => {
                assert_eq!(index, 2);
                assert_eq!(value, -2.0);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_finite_margin_rejected() {
        let config = TooltipConfig {
            margins: [0.0, f32::NAN, 0.0, 0.0],
            ..TooltipConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidMargin { index: 1, .. })
        ));
    }

    #[test]
    fn test_request_carries_config() {
        let config = TooltipConfig {
            placement: Placement::Bottom,
            margins: [2.0; 4],
            ..TooltipConfig::default()
        };
        let request = config.request(
            Bounds::from_size(10.0, 1.0),
            Bounds::from_size(4.0, 1.0),
            Point::new(3.0, 3.0),
        );
        assert_eq!(request.placement, Placement::Bottom);
        assert_eq!(request.margins, Margins::uniform(2.0));
        assert_eq!(request.compute(), Point::new(0.0, 6.0));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tooltip.toml");
        assert_eq!(TooltipConfig::load(&path).unwrap(), TooltipConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tooltip.toml");
        let config = TooltipConfig {
            placement: Placement::Right,
            vertical_gravity: TipVerticalGravity::Top,
            margins: [1.0, 0.5, 1.0, 0.5],
            ..TooltipConfig::default()
        };
        config.save(&path).unwrap();
        let loaded = TooltipConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }
}
