//! Host window contract
//!
//! The drawer core cannot run headless: it needs a host that inflates
//! surfaces, reports display metrics, and parents/unparents surfaces in its
//! window. Acquisition failures are fatal and propagate to whichever drawer
//! operation needed the surface.

use crate::error::SurfaceError;
use crate::surface::SurfaceHandle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    Portrait,
    Landscape,
}

pub trait WindowHost {
    /// Display density (pixels per dp).
    fn density(&self) -> f32;

    fn orientation(&self) -> Orientation;

    /// The top-level decor surface. Its background is swapped for a
    /// placeholder while the drawer is open so the sliding content never
    /// reveals the raw window behind it.
    fn decor(&self) -> SurfaceHandle;

    /// The host's content surface — the one the drawer pushes aside.
    fn content(&self) -> Result<SurfaceHandle, SurfaceError>;

    /// Inflate the panel surface from the host's layout description.
    fn inflate_panel(&self) -> Result<SurfaceHandle, SurfaceError>;

    /// Create an empty overlay surface (shadow strip, edge-catcher).
    fn create_overlay(&self) -> Result<SurfaceHandle, SurfaceError>;

    fn attach(&self, surface: &SurfaceHandle) -> Result<(), SurfaceError>;
    fn detach(&self, surface: &SurfaceHandle);

    /// Whether the platform can rotate surfaces about the vertical axis.
    /// Resolved once at startup; the effect pipeline reads it as a plain
    /// capability flag.
    fn supports_3d(&self) -> bool;
}
