//! Panel geometry resolution.
//!
//! Geometry is resolved once per (re)construction, never per frame: the
//! container width is sampled from the content surface and the margin is
//! fixed until the surfaces are torn down and rebuilt.

use sidle_core::{Dp, Orientation};

use crate::config::LandscapeWidth;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelGeometry {
    container_width: i32,
    margin_px: i32,
}

impl PanelGeometry {
    /// Resolve the margin and panel width for the current display metrics.
    ///
    /// In landscape with a fixed panel width, the margin is back-computed
    /// so the open panel lands on exactly that width regardless of the
    /// configured dp margin.
    pub fn resolve(
        container_width: i32,
        margin: Dp,
        landscape_width: LandscapeWidth,
        density: f32,
        orientation: Orientation,
    ) -> Self {
        let margin = match (orientation, landscape_width) {
            (Orientation::Landscape, LandscapeWidth::Fixed(panel)) => {
                Dp(container_width as f32 / density - panel.0)
            }
            _ => margin,
        };

        Self {
            container_width,
            margin_px: margin.to_px_ceil(density),
        }
    }

    pub fn container_width(&self) -> i32 {
        self.container_width
    }

    pub fn margin_px(&self) -> i32 {
        self.margin_px
    }

    /// Width of the fully open panel.
    pub fn panel_width(&self) -> i32 {
        self.container_width - self.margin_px
    }

    /// Content width at offset zero; the content's far edge stays anchored
    /// by growing its width with the offset on top of this base.
    pub fn base_width(&self) -> i32 {
        self.panel_width() + self.margin_px
    }
}

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
