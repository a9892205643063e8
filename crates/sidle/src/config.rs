//! Drawer configuration.

use sidle_core::Dp;

/// Width of the open panel in landscape orientation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LandscapeWidth {
    /// Keep the portrait margin in landscape too.
    NoChange,
    /// Pin the open panel to an exact width; the margin is back-computed
    /// from the container so rotation does not stretch the panel.
    Fixed(Dp),
}

/// Constructor-time drawer configuration, immutable per instance except for
/// `reuse_surfaces` (see [`Drawer::set_reuse`](crate::Drawer::set_reuse)).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Horizontal band near the left edge, in pixels, where a pointer-down
    /// arms the swipe gesture. Also serves as the vertical wander budget
    /// while armed. Zero disables bezel arming entirely.
    pub bezel_width: i32,
    /// Vertical band at the top of the window, in pixels, where gestures
    /// are never intercepted (status/action bar territory).
    pub ignored_top_band: i32,
    /// Gap kept between the open panel's edge and the container's far edge.
    pub margin: Dp,
    pub landscape_width: LandscapeWidth,
    /// Keep surfaces attached (at zero width) after closing instead of
    /// tearing them down and re-inflating on the next open.
    pub reuse_surfaces: bool,
    /// Duration of a full-width open/close transition. Partial transitions
    /// are shortened proportionally.
    pub default_duration_ms: u64,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            bezel_width: 20,
            ignored_top_band: 0,
            margin: Dp(48.0),
            landscape_width: LandscapeWidth::NoChange,
            reuse_surfaces: false,
            default_duration_ms: 350,
        }
    }
}

/// Independently settable behavior/effect toggles, read on every offset
/// application. Orthogonal to the visibility and drag state machines.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EffectConfig {
    /// Animate open/close transitions; when false they are immediate.
    pub animation_enabled: bool,
    /// Whether releasing a touch may close the panel. Cleared during an
    /// active bezel drag so the release snaps open instead.
    pub allow_close_on_touch: bool,
    /// Whether touch moves the panel at all.
    pub movable: bool,
    /// Fade the panel in as it opens (alpha 0.3 → 1.0).
    pub fade_drawer: bool,
    /// Let the panel content lag behind the leading edge (parallax).
    pub move_content: bool,
    /// Scale the panel up as it opens (0.8 → 1.0). Implies parallax.
    pub scale_drawer: bool,
    /// 3D entrance: deep parallax plus a rotation about the vertical axis,
    /// on platforms whose capability flag allows it. Supersedes the flat
    /// parallax.
    pub transform_3d: bool,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self {
            animation_enabled: true,
            allow_close_on_touch: true,
            movable: true,
            fade_drawer: false,
            move_content: false,
            scale_drawer: false,
            transform_3d: false,
        }
    }
}
