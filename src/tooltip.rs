//! Tooltip - configured placement
//!
//! Holds a [`TooltipConfig`] and answers position queries with it.
//!
//! ```
//! use spark_tooltips::{Bounds, Margins, Placement, Point, TipHorizontalGravity, Tooltip};
//!
//! let tooltip = Tooltip::default()
//!     .placement(Placement::Top)
//!     .horizontal_gravity(TipHorizontalGravity::Right)
//!     .margins(Margins::uniform(20.0));
//!
//! let position = tooltip.position(
//!     &Bounds::from_size(300.0, 100.0),
//!     &Bounds::from_size(100.0, 150.0),
//!     Point::new(350.0, 20.0),
//! );
//! assert_eq!(position, Point::new(130.0, -100.0));
//! ```

use crate::config::TooltipConfig;
use crate::fit::{fit, Fitted};
use crate::position::Placement;
use crate::types::{Bounds, Margins, Point, TipHorizontalGravity, TipVerticalGravity};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tooltip {
    config: TooltipConfig,
}

impl Tooltip {
    pub fn new(config: TooltipConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TooltipConfig {
        &self.config
    }

    pub fn placement(mut self, placement: Placement) -> Self {
        self.config.placement = placement;
        self
    }

    pub fn horizontal_gravity(mut self, gravity: TipHorizontalGravity) -> Self {
        self.config.horizontal_gravity = gravity;
        self
    }

    pub fn vertical_gravity(mut self, gravity: TipVerticalGravity) -> Self {
        self.config.vertical_gravity = gravity;
        self
    }

    pub fn margins(mut self, margins: impl Into<Margins>) -> Self {
        self.config.margins = margins.into().as_array();
        self
    }

    /// Position on the configured side, ignoring the window.
    pub fn position(&self, tip: &Bounds, anchor: &Bounds, anchor_position: Point) -> Point {
        self.config.request(*tip, *anchor, anchor_position).compute()
    }

    /// Position fitted into `window` with the configured flip/clamp policy.
    pub fn position_in(
        &self,
        tip: &Bounds,
        anchor: &Bounds,
        anchor_position: Point,
        window: &Bounds,
    ) -> Fitted {
        let request = self.config.request(*tip, *anchor, anchor_position);
        fit(&request, window, self.config.policy())
    }
}

impl From<TooltipConfig> for Tooltip {
    fn from(config: TooltipConfig) -> Self {
        Self::new(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_updates_config() {
        let tooltip = Tooltip::default()
            .placement(Placement::Left)
            .vertical_gravity(TipVerticalGravity::Top)
            .margins([1, 2, 3, 4]);

        assert_eq!(tooltip.config().placement, Placement::Left);
        assert_eq!(tooltip.config().vertical_gravity, TipVerticalGravity::Top);
        assert_eq!(tooltip.config().margins, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_position_in_flips_near_window_edge() {
        let tooltip = Tooltip::default().margins(Margins::uniform(1.0));
        let window = Bounds::from_size(80.0, 24.0);

        let fitted = tooltip.position_in(
            &Bounds::from_size(20.0, 3.0),
            &Bounds::from_size(10.0, 1.0),
            Point::new(30.0, 1.0),
            &window,
        );
        assert!(fitted.flipped);
        assert_eq!(fitted.placement, Placement::Bottom);
        assert_eq!(fitted.position, Point::new(25.0, 3.0));
    }

    #[test]
    fn test_position_in_without_window_pressure_matches_position() {
        let tooltip = Tooltip::default().placement(Placement::Right);
        let tip = Bounds::from_size(20.0, 3.0);
        let anchor = Bounds::from_size(10.0, 1.0);
        let at = Point::new(5.0, 10.0);

        let fitted = tooltip.position_in(&tip, &anchor, at, &Bounds::from_size(80.0, 24.0));
        assert_eq!(fitted.position, tooltip.position(&tip, &anchor, at));
        assert_eq!(fitted.position, Point::new(15.0, 9.0));
    }
}
