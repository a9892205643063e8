//! Offset-to-effects mapping.
//!
//! A single scalar offset (0 = closed, panel width = open) fans out into
//! attribute writes on the four collaborating surfaces. Everything is
//! recomputed from the offset on every call; the proxy holds geometry
//! constants only and receives the surface handles per call.

use sidle_core::{Dp, SurfaceHandle};

use crate::config::EffectConfig;
use crate::geometry::PanelGeometry;

/// Width of the shadow strip trailing the panel's leading edge.
pub(crate) const SHADOW_WIDTH: Dp = Dp(8.0);

/// The surfaces the drawer animates. Owned by the controller; handed to the
/// proxy for the duration of one offset application.
#[derive(Clone)]
pub struct SurfaceSet {
    /// The host's own content, pushed aside as the panel opens.
    pub content: SurfaceHandle,
    /// The sliding panel.
    pub panel: SurfaceHandle,
    /// Shadow strip under the panel's leading edge.
    pub shadow: SurfaceHandle,
    /// Thin strip along the open edge that catches taps/drags to close.
    pub catcher: SurfaceHandle,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PositionProxy {
    panel_width: i32,
    base_width: i32,
    shadow_width: i32,
    supports_3d: bool,
}

impl PositionProxy {
    pub fn new(geometry: &PanelGeometry, shadow_width: i32, supports_3d: bool) -> Self {
        Self {
            panel_width: geometry.panel_width(),
            base_width: geometry.base_width(),
            shadow_width,
            supports_3d,
        }
    }

    /// Apply `offset` to every surface, gated by `effects`.
    pub fn set_offset(&self, surfaces: &SurfaceSet, effects: EffectConfig, offset: i32) {
        let offset = offset.clamp(0, self.panel_width.max(0));
        // Zero panel width degenerates every ratio-derived effect to its
        // fully-closed value.
        let ratio = if self.panel_width > 0 {
            offset as f32 / self.panel_width as f32
        } else {
            0.0
        };

        let content_padding = surfaces.content.padding();
        surfaces.content.set_padding(content_padding.with_left(offset));
        surfaces.content.set_width(self.base_width + offset);

        let shadow_padding = surfaces.shadow.padding();
        surfaces
            .shadow
            .set_padding(shadow_padding.with_left(offset - self.shadow_width));
        surfaces.shadow.set_width(offset);

        surfaces.panel.set_width(offset);

        if (effects.move_content || effects.scale_drawer) && !effects.transform_3d {
            // Panel content trails its leading edge at a fifth of the speed.
            let lag = -(self.panel_width / 5 - offset / 5);
            let panel_padding = surfaces.panel.padding();
            surfaces.panel.set_padding(panel_padding.with_left(lag));
        }

        if effects.fade_drawer {
            surfaces.panel.set_alpha(ratio * 0.7 + 0.3);
        }

        if effects.scale_drawer || effects.transform_3d {
            let scale = ratio * 0.2 + 0.8;
            surfaces.panel.set_scale(scale, scale);
        }

        if effects.transform_3d && self.supports_3d {
            let lag = -((self.panel_width as f32 * 0.9 - offset as f32 * 0.9).round() as i32);
            let panel_padding = surfaces.panel.padding();
            surfaces.panel.set_padding(panel_padding.with_left(lag));
            surfaces
                .panel
                .set_rotation_y(-45.0 + (ratio * 0.9 + 0.1) * 45.0);
        }
    }
}

#[cfg(test)]
#[path = "tests/proxy_tests.rs"]
mod tests;
