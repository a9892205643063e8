//! Recording fakes for the surface/host boundary.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use sidle_core::{
    ClickHandler, Color, EdgeInsets, Orientation, PointerEvent, Surface, SurfaceError,
    SurfaceHandle, TouchHandler, Visibility,
};

struct SurfaceState {
    width: i32,
    padding: EdgeInsets,
    background: Option<Color>,
    visibility: Visibility,
    alpha: f32,
    scale: (f32, f32),
    rotation_y: f32,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            width: 0,
            padding: EdgeInsets::ZERO,
            background: None,
            visibility: Visibility::Visible,
            alpha: 1.0,
            scale: (1.0, 1.0),
            rotation_y: 0.0,
        }
    }
}

/// A surface that records every attribute write and can fire its own
/// registered handlers, standing in for a real host view.
#[derive(Default)]
pub struct FakeSurface {
    state: RefCell<SurfaceState>,
    click: RefCell<Option<Rc<dyn Fn()>>>,
    touch: RefCell<Option<TouchHandler>>,
    /// Bumped on every touch-handler (re)install or detach, so a handler
    /// fired while temporarily checked out is not restored over a newer
    /// registration.
    touch_epoch: Cell<u64>,
}

impl FakeSurface {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn with_width(width: i32) -> Rc<Self> {
        let surface = Self::new();
        surface.set_width(width);
        surface
    }

    pub fn alpha(&self) -> f32 {
        self.state.borrow().alpha
    }

    pub fn scale(&self) -> (f32, f32) {
        self.state.borrow().scale
    }

    pub fn rotation_y(&self) -> f32 {
        self.state.borrow().rotation_y
    }

    pub fn is_visible(&self) -> bool {
        self.state.borrow().visibility == Visibility::Visible
    }

    pub fn has_click_handler(&self) -> bool {
        self.click.borrow().is_some()
    }

    pub fn has_touch_handler(&self) -> bool {
        self.touch.borrow().is_some()
    }

    /// Fire the registered click handler. Returns false if none is set.
    pub fn click(&self) -> bool {
        let handler = self.click.borrow().clone();
        match handler {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }

    /// Fire the registered touch handler with `event`. Returns the
    /// handler's consumed flag, or false if none is set.
    pub fn touch(&self, event: &PointerEvent) -> bool {
        let epoch = self.touch_epoch.get();
        let handler = self.touch.borrow_mut().take();
        let Some(mut handler) = handler else {
            return false;
        };
        let consumed = handler(event);
        // The handler may have detached or replaced itself while it ran.
        if self.touch_epoch.get() == epoch {
            let mut slot = self.touch.borrow_mut();
            if slot.is_none() {
                *slot = Some(handler);
            }
        }
        consumed
    }
}

impl Surface for FakeSurface {
    fn width(&self) -> i32 {
        self.state.borrow().width
    }

    fn set_width(&self, width: i32) {
        self.state.borrow_mut().width = width;
    }

    fn padding(&self) -> EdgeInsets {
        self.state.borrow().padding
    }

    fn set_padding(&self, padding: EdgeInsets) {
        self.state.borrow_mut().padding = padding;
    }

    fn background(&self) -> Option<Color> {
        self.state.borrow().background
    }

    fn set_background(&self, background: Option<Color>) {
        self.state.borrow_mut().background = background;
    }

    fn set_visibility(&self, visibility: Visibility) {
        self.state.borrow_mut().visibility = visibility;
    }

    fn set_alpha(&self, alpha: f32) {
        self.state.borrow_mut().alpha = alpha;
    }

    fn set_scale(&self, scale_x: f32, scale_y: f32) {
        self.state.borrow_mut().scale = (scale_x, scale_y);
    }

    fn set_rotation_y(&self, degrees: f32) {
        self.state.borrow_mut().rotation_y = degrees;
    }

    fn set_click_handler(&self, handler: Option<ClickHandler>) {
        *self.click.borrow_mut() = handler.map(Rc::from);
    }

    fn set_touch_handler(&self, handler: Option<TouchHandler>) {
        *self.touch.borrow_mut() = handler;
        self.touch_epoch.set(self.touch_epoch.get() + 1);
    }
}

/// A window host that manufactures [`FakeSurface`]s and records
/// attachment, with scriptable metrics and failure injection.
pub struct FakeHost {
    density: Cell<f32>,
    orientation: Cell<Orientation>,
    supports_3d: Cell<bool>,
    decor: Rc<FakeSurface>,
    content: Rc<FakeSurface>,
    panels: RefCell<Vec<Rc<FakeSurface>>>,
    overlays: RefCell<Vec<Rc<FakeSurface>>>,
    attached: RefCell<Vec<SurfaceHandle>>,
    fail_panel_inflation: Cell<bool>,
}

impl FakeHost {
    pub fn new(container_width: i32, density: f32) -> Rc<Self> {
        Rc::new(Self {
            density: Cell::new(density),
            orientation: Cell::new(Orientation::Portrait),
            supports_3d: Cell::new(false),
            decor: FakeSurface::new(),
            content: FakeSurface::with_width(container_width),
            panels: RefCell::new(Vec::new()),
            overlays: RefCell::new(Vec::new()),
            attached: RefCell::new(Vec::new()),
            fail_panel_inflation: Cell::new(false),
        })
    }

    pub fn set_density(&self, density: f32) {
        self.density.set(density);
    }

    pub fn set_orientation(&self, orientation: Orientation) {
        self.orientation.set(orientation);
    }

    pub fn set_supports_3d(&self, supported: bool) {
        self.supports_3d.set(supported);
    }

    pub fn set_fail_panel_inflation(&self, fail: bool) {
        self.fail_panel_inflation.set(fail);
    }

    pub fn decor_surface(&self) -> Rc<FakeSurface> {
        Rc::clone(&self.decor)
    }

    pub fn content_surface(&self) -> Rc<FakeSurface> {
        Rc::clone(&self.content)
    }

    /// The most recently inflated panel surface.
    pub fn panel_surface(&self) -> Option<Rc<FakeSurface>> {
        self.panels.borrow().last().cloned()
    }

    /// The drawer creates the shadow overlay first, then the edge-catcher.
    pub fn shadow_surface(&self) -> Option<Rc<FakeSurface>> {
        let overlays = self.overlays.borrow();
        overlays.len().checked_sub(2).and_then(|i| overlays.get(i).cloned())
    }

    pub fn catcher_surface(&self) -> Option<Rc<FakeSurface>> {
        self.overlays.borrow().last().cloned()
    }

    pub fn inflated_panel_count(&self) -> usize {
        self.panels.borrow().len()
    }

    pub fn attached_count(&self) -> usize {
        self.attached.borrow().len()
    }

    pub fn is_attached(&self, surface: &Rc<FakeSurface>) -> bool {
        let target = Rc::as_ptr(surface) as *const u8;
        self.attached
            .borrow()
            .iter()
            .any(|handle| Rc::as_ptr(handle) as *const u8 == target)
    }
}

impl sidle_core::WindowHost for FakeHost {
    fn density(&self) -> f32 {
        self.density.get()
    }

    fn orientation(&self) -> Orientation {
        self.orientation.get()
    }

    fn decor(&self) -> SurfaceHandle {
        let decor: Rc<FakeSurface> = Rc::clone(&self.decor);
        decor
    }

    fn content(&self) -> Result<SurfaceHandle, SurfaceError> {
        let content: Rc<FakeSurface> = Rc::clone(&self.content);
        Ok(content)
    }

    fn inflate_panel(&self) -> Result<SurfaceHandle, SurfaceError> {
        if self.fail_panel_inflation.get() {
            return Err(SurfaceError::Inflation {
                reason: "scripted inflation failure",
            });
        }
        let panel = FakeSurface::new();
        self.panels.borrow_mut().push(Rc::clone(&panel));
        Ok(panel)
    }

    fn create_overlay(&self) -> Result<SurfaceHandle, SurfaceError> {
        let overlay = FakeSurface::new();
        self.overlays.borrow_mut().push(Rc::clone(&overlay));
        Ok(overlay)
    }

    fn attach(&self, surface: &SurfaceHandle) -> Result<(), SurfaceError> {
        self.attached.borrow_mut().push(Rc::clone(surface));
        Ok(())
    }

    fn detach(&self, surface: &SurfaceHandle) {
        let target = Rc::as_ptr(surface) as *const u8;
        self.attached
            .borrow_mut()
            .retain(|handle| Rc::as_ptr(handle) as *const u8 != target);
    }

    fn supports_3d(&self) -> bool {
        self.supports_3d.get()
    }
}
