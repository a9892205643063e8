//! Host surface abstraction
//!
//! A [`Surface`] is a handle to one visual rectangle owned by the host UI
//! layer. The drawer only ever mutates attributes through this trait; it
//! never draws. Methods take `&self` — implementations are expected to use
//! interior mutability, since the same surface is reachable from attribute
//! writers and input-handler closures at once.

use std::rc::Rc;

use crate::pointer::PointerEvent;

/// Width sentinel: size the surface to fill its parent.
pub const MATCH_PARENT: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    /// Not drawn and not hit-tested.
    Gone,
}

/// Packed ARGB color used as an opaque background token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
}

/// Four-sided padding in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct EdgeInsets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl EdgeInsets {
    pub const fn from_components(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub const ZERO: EdgeInsets = EdgeInsets::from_components(0, 0, 0, 0);

    /// Replace only the left component.
    pub fn with_left(mut self, left: i32) -> Self {
        self.left = left;
        self
    }
}

pub type ClickHandler = Box<dyn Fn()>;
pub type TouchHandler = Box<dyn FnMut(&PointerEvent) -> bool>;

pub trait Surface {
    fn width(&self) -> i32;
    fn set_width(&self, width: i32);

    fn padding(&self) -> EdgeInsets;
    fn set_padding(&self, padding: EdgeInsets);

    fn background(&self) -> Option<Color>;
    fn set_background(&self, background: Option<Color>);

    fn set_visibility(&self, visibility: Visibility);

    fn set_alpha(&self, alpha: f32);
    fn set_scale(&self, scale_x: f32, scale_y: f32);

    /// Rotation about the vertical axis, in degrees. Hosts without the 3D
    /// capability flag never receive this call.
    fn set_rotation_y(&self, degrees: f32);

    /// Install or clear the tap handler. `None` detaches.
    fn set_click_handler(&self, handler: Option<ClickHandler>);

    /// Install or clear the raw-touch handler. `None` detaches. The handler
    /// returns whether it consumed the event.
    fn set_touch_handler(&self, handler: Option<TouchHandler>);
}

pub type SurfaceHandle = Rc<dyn Surface>;
