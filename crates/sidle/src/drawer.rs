//! The panel controller.
//!
//! [`Drawer`] owns the visibility/drag state machine, the injected
//! surfaces, and the open/close transitions. It is a cheap clonable handle
//! around shared state so that input-handler and tween-completion closures
//! can call back into it.

use std::cell::RefCell;
use std::rc::Rc;

use sidle_animation::{CompleteFn, Easing, TweenDriver, TweenSpec, UpdateFn};
use sidle_core::{
    Color, EdgeInsets, PointerEvent, PointerEventKind, SurfaceError, Visibility, WindowHost,
    MATCH_PARENT,
};

use crate::config::{DrawerConfig, EffectConfig, LandscapeWidth};
use crate::geometry::PanelGeometry;
use crate::proxy::{PositionProxy, SurfaceSet, SHADOW_WIDTH};

/// Builder for [`Drawer`].
///
/// Example:
/// ```no_run
/// # use std::rc::Rc;
/// # use sidle::DrawerBuilder;
/// # use sidle_core::Dp;
/// # fn demo(host: Rc<dyn sidle_core::WindowHost>, driver: Rc<dyn sidle_animation::TweenDriver>) {
/// let drawer = DrawerBuilder::new()
///     .margin(Dp(64.0))
///     .reuse_surfaces(true)
///     .build(host, driver);
/// # }
/// ```
pub struct DrawerBuilder {
    config: DrawerConfig,
    effects: EffectConfig,
    listener: Option<Rc<dyn Fn()>>,
}

impl DrawerBuilder {
    pub fn new() -> Self {
        Self {
            config: DrawerConfig::default(),
            effects: EffectConfig::default(),
            listener: None,
        }
    }

    pub fn bezel_width(mut self, px: i32) -> Self {
        self.config.bezel_width = px;
        self
    }

    pub fn ignored_top_band(mut self, px: i32) -> Self {
        self.config.ignored_top_band = px;
        self
    }

    pub fn margin(mut self, margin: sidle_core::Dp) -> Self {
        self.config.margin = margin;
        self
    }

    pub fn landscape_width(mut self, width: LandscapeWidth) -> Self {
        self.config.landscape_width = width;
        self
    }

    pub fn reuse_surfaces(mut self, reuse: bool) -> Self {
        self.config.reuse_surfaces = reuse;
        self
    }

    pub fn duration_ms(mut self, duration: u64) -> Self {
        self.config.default_duration_ms = duration;
        self
    }

    pub fn effects(mut self, effects: EffectConfig) -> Self {
        self.effects = effects;
        self
    }

    /// Hook invoked synchronously before any close transition begins.
    pub fn on_before_cancel(mut self, listener: impl Fn() + 'static) -> Self {
        self.listener = Some(Rc::new(listener));
        self
    }

    /// Construct the drawer and inflate/attach its surfaces. Fails if the
    /// host cannot supply a required surface.
    pub fn build(
        self,
        host: Rc<dyn WindowHost>,
        driver: Rc<dyn TweenDriver>,
    ) -> Result<Drawer, SurfaceError> {
        let inner = DrawerInner {
            host,
            driver,
            config: self.config,
            effects: self.effects,
            geometry: PanelGeometry::default(),
            proxy: PositionProxy::default(),
            surfaces: None,
            saved_background: None,
            visible: false,
            needs_reinit: false,
            moved: false,
            moved_position: 0,
            moved_beyond_margin: false,
            deviation: 0,
            generation: 0,
            on_before_cancel: self.listener,
        };
        let drawer = Drawer {
            inner: Rc::new(RefCell::new(inner)),
        };
        drawer.inner.borrow_mut().initialize()?;
        Ok(drawer)
    }
}

impl Default for DrawerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A tween ready to hand to the driver once all borrows are released.
struct PendingTween {
    spec: TweenSpec,
    update: UpdateFn,
    complete: CompleteFn,
}

struct DrawerInner {
    host: Rc<dyn WindowHost>,
    driver: Rc<dyn TweenDriver>,
    config: DrawerConfig,
    effects: EffectConfig,
    geometry: PanelGeometry,
    proxy: PositionProxy,
    surfaces: Option<SurfaceSet>,
    saved_background: Option<Color>,
    visible: bool,
    needs_reinit: bool,
    moved: bool,
    /// Offset reached by the current/last drag, clamped to [0, panel width].
    moved_position: i32,
    /// Set once a drag's raw position dipped below the fully-open width.
    moved_beyond_margin: bool,
    /// Raw-x correction so a drag that began mid-gesture tracks relative
    /// movement.
    deviation: i32,
    /// Bumped at every transition start; stale tween completions compare
    /// against it and back off, so a superseded tween can never tear down
    /// or reveal state owned by a newer transition.
    generation: u64,
    on_before_cancel: Option<Rc<dyn Fn()>>,
}

impl DrawerInner {
    /// (Re)acquire surfaces from the host and resolve geometry.
    fn initialize(&mut self) -> Result<(), SurfaceError> {
        let content = self.host.content()?;
        let container_width = content.width();

        let panel = self.host.inflate_panel()?;
        let content_padding = content.padding();
        // The panel clears system chrome the same way the content does.
        panel.set_padding(EdgeInsets::from_components(
            0,
            content_padding.top,
            0,
            content_padding.bottom,
        ));
        self.host.attach(&panel)?;

        let shadow = self.host.create_overlay()?;
        shadow.set_visibility(Visibility::Gone);
        self.host.attach(&shadow)?;

        let catcher = self.host.create_overlay()?;
        catcher.set_visibility(Visibility::Gone);
        self.host.attach(&catcher)?;

        self.geometry = PanelGeometry::resolve(
            container_width,
            self.config.margin,
            self.config.landscape_width,
            self.host.density(),
            self.host.orientation(),
        );
        if self.geometry.panel_width() <= 0 {
            log::warn!(
                "panel width resolved to {}px; the drawer will open to nothing",
                self.geometry.panel_width()
            );
        }
        self.proxy = PositionProxy::new(
            &self.geometry,
            SHADOW_WIDTH.to_px_ceil(self.host.density()),
            self.host.supports_3d(),
        );

        panel.set_width(0);

        self.surfaces = Some(SurfaceSet {
            content,
            panel,
            shadow,
            catcher,
        });
        self.needs_reinit = false;
        Ok(())
    }

    fn reset_drag(&mut self) {
        self.moved = false;
        self.moved_position = 0;
        self.moved_beyond_margin = false;
        self.deviation = 0;
    }

    fn apply_offset(&self, offset: i32) {
        if let Some(surfaces) = &self.surfaces {
            self.proxy.set_offset(surfaces, self.effects, offset);
        }
    }

    /// Swap the decor background for a placeholder so the sliding content
    /// never reveals the raw window; the original is restored on teardown.
    fn capture_background(&mut self) {
        let decor = self.host.decor();
        self.saved_background = decor.background();
        decor.set_background(Some(Color::BLACK));
    }

    /// Duration of the next transition. A panel already part-way through a
    /// drag finishes in proportionally less time, preserving apparent
    /// velocity across a blended drag-then-release gesture.
    fn transition_duration(&self, opening: bool) -> u64 {
        let default = self.config.default_duration_ms;
        if !self.moved {
            return default;
        }
        let width = self.geometry.panel_width();
        let ratio = if width > 0 {
            self.moved_position as f32 / width as f32
        } else {
            0.0
        };
        let factor = if opening { 1.0 - ratio } else { ratio };
        (default as f32 * factor).round().max(0.0) as u64
    }

    /// Size, show, and wire the edge-catcher, and show the shadow.
    ///
    /// Handlers hold the drawer weakly: the catcher is itself owned by the
    /// drawer, and a strong capture would cycle.
    fn reveal_chrome(&mut self, drawer: &Drawer) {
        let Some(surfaces) = &self.surfaces else {
            return;
        };
        surfaces.catcher.set_width(self.geometry.margin_px());
        surfaces.catcher.set_visibility(Visibility::Visible);
        let on_click = Rc::downgrade(&drawer.inner);
        surfaces.catcher.set_click_handler(Some(Box::new(move || {
            if let Some(inner) = on_click.upgrade() {
                Drawer { inner }.cancel();
            }
        })));
        let on_touch = Rc::downgrade(&drawer.inner);
        surfaces.catcher.set_touch_handler(Some(Box::new(move |event| {
            match on_touch.upgrade() {
                Some(inner) => Drawer { inner }.on_touch(event),
                None => false,
            }
        })));
        surfaces.shadow.set_visibility(Visibility::Visible);
    }

    /// Undo every override and either park or detach the surfaces.
    fn teardown(&mut self) {
        self.moved_position = 0;
        self.moved_beyond_margin = false;

        self.host.decor().set_background(self.saved_background.take());

        if let Some(surfaces) = &self.surfaces {
            surfaces.content.set_width(MATCH_PARENT);
            let content_padding = surfaces.content.padding();
            surfaces.content.set_padding(content_padding.with_left(0));
            surfaces.catcher.set_visibility(Visibility::Gone);
            surfaces.shadow.set_visibility(Visibility::Gone);
        }

        if self.config.reuse_surfaces {
            if let Some(surfaces) = &self.surfaces {
                surfaces.panel.set_width(0);
            }
            return;
        }

        if let Some(surfaces) = self.surfaces.take() {
            self.host.detach(&surfaces.panel);
            self.host.detach(&surfaces.catcher);
            self.host.detach(&surfaces.shadow);
            self.needs_reinit = true;
        }
    }
}

/// Slide-in side panel controller. Cloning yields another handle to the
/// same panel.
pub struct Drawer {
    inner: Rc<RefCell<DrawerInner>>,
}

impl Clone for Drawer {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl Drawer {
    /// Open the panel. No-op if already visible. Reinitializes surfaces if
    /// they were torn down on a previous close.
    pub fn show(&self) -> Result<(), SurfaceError> {
        let (driver, pending) = {
            let mut inner = self.inner.borrow_mut();
            if inner.visible {
                return Ok(());
            }
            if inner.needs_reinit || inner.surfaces.is_none() {
                inner.initialize()?;
            }
            inner.reset_drag();
            inner.visible = true;
            inner.generation += 1;
            inner.capture_background();

            let pending = if inner.effects.animation_enabled {
                self.opening_tween(&mut inner)
            } else {
                let width = inner.geometry.panel_width();
                inner.apply_offset(width);
                let drawer = self.clone();
                inner.reveal_chrome(&drawer);
                None
            };
            (inner.driver.clone(), pending)
        };
        self.run_transition(driver, pending);
        Ok(())
    }

    /// Open the panel directly into dragging mode: the offset starts at 0
    /// and tracks subsequent [`on_touch`](Drawer::on_touch) moves relative
    /// to `deviation` (the raw x where the drag began). No tween runs.
    pub fn show_with_touch(&self, deviation: i32) -> Result<(), SurfaceError> {
        let driver = {
            let mut inner = self.inner.borrow_mut();
            if inner.visible {
                return Ok(());
            }
            if inner.needs_reinit || inner.surfaces.is_none() {
                inner.initialize()?;
            }
            inner.reset_drag();
            inner.moved = true;
            inner.deviation = deviation;
            inner.visible = true;
            inner.generation += 1;
            inner.capture_background();
            inner.apply_offset(0);
            inner.driver.clone()
        };
        // A closing tween may still be in flight; only one writer may drive
        // the offset.
        driver.stop();
        Ok(())
    }

    /// Close the panel. No-op if already hidden.
    pub fn cancel(&self) {
        let listener = {
            let mut inner = self.inner.borrow_mut();
            if !inner.visible {
                return;
            }
            inner.visible = false;
            inner.generation += 1;
            inner.on_before_cancel.clone()
        };
        if let Some(listener) = listener {
            listener();
        }

        let (driver, pending) = {
            let mut inner = self.inner.borrow_mut();
            // No further input reaches the closing panel.
            if let Some(surfaces) = &inner.surfaces {
                surfaces.catcher.set_click_handler(None);
                surfaces.catcher.set_touch_handler(None);
            }
            let pending = if inner.effects.animation_enabled {
                self.closing_tween(&mut inner)
            } else {
                inner.teardown();
                None
            };
            (inner.driver.clone(), pending)
        };
        self.run_transition(driver, pending);
    }

    /// Feed a raw touch event into the drag logic. Returns whether the
    /// event was consumed.
    pub fn on_touch(&self, event: &PointerEvent) -> bool {
        enum UpAction {
            Close,
            Snap(Rc<dyn TweenDriver>, Option<PendingTween>),
        }

        let action = {
            let mut inner = self.inner.borrow_mut();
            if !inner.effects.movable {
                return false;
            }
            match event.kind {
                PointerEventKind::Move => {
                    inner.moved = true;
                    let width = inner.geometry.panel_width();
                    let raw = event.global_position.x - inner.deviation;
                    inner.moved_position = raw.clamp(0, width.max(0));
                    if raw < width {
                        inner.moved_beyond_margin = true;
                    }
                    inner.apply_offset(inner.moved_position);
                    return true;
                }
                PointerEventKind::Up => {
                    let width = inner.geometry.panel_width();
                    let should_close = inner.effects.allow_close_on_touch
                        && (inner.moved_position < width / 3
                            || (inner.moved_position >= width && !inner.moved_beyond_margin));
                    if should_close {
                        UpAction::Close
                    } else {
                        inner.moved_beyond_margin = false;
                        inner.generation += 1;
                        let pending = if inner.effects.animation_enabled {
                            self.opening_tween(&mut inner)
                        } else {
                            inner.apply_offset(width);
                            let drawer = self.clone();
                            inner.reveal_chrome(&drawer);
                            None
                        };
                        inner.moved = false;
                        inner.deviation = 0;
                        UpAction::Snap(inner.driver.clone(), pending)
                    }
                }
                PointerEventKind::Down | PointerEventKind::Cancel => return false,
            }
        };

        match action {
            UpAction::Close => self.cancel(),
            UpAction::Snap(driver, pending) => self.run_transition(driver, pending),
        }
        true
    }

    /// Paint the panel's background and drop its padding so the paint
    /// reaches the edges. Prefer this over a background baked into the
    /// host's panel layout.
    pub fn set_panel_background(&self, color: Color) {
        let inner = self.inner.borrow();
        if let Some(surfaces) = &inner.surfaces {
            surfaces.panel.set_background(Some(color));
            surfaces.panel.set_padding(EdgeInsets::ZERO);
        }
    }

    pub fn is_visible(&self) -> bool {
        self.inner.borrow().visible
    }

    pub fn is_movable(&self) -> bool {
        self.inner.borrow().effects.movable
    }

    pub fn is_animation_enabled(&self) -> bool {
        self.inner.borrow().effects.animation_enabled
    }

    pub fn config(&self) -> DrawerConfig {
        self.inner.borrow().config
    }

    pub fn effects(&self) -> EffectConfig {
        self.inner.borrow().effects
    }

    pub fn set_movable(&self, movable: bool) {
        self.inner.borrow_mut().effects.movable = movable;
    }

    pub fn set_animation_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().effects.animation_enabled = enabled;
    }

    pub fn set_allow_close_on_touch(&self, allow: bool) {
        self.inner.borrow_mut().effects.allow_close_on_touch = allow;
    }

    pub fn set_fade_drawer(&self, fade: bool) {
        self.inner.borrow_mut().effects.fade_drawer = fade;
    }

    pub fn set_move_content(&self, move_content: bool) {
        self.inner.borrow_mut().effects.move_content = move_content;
    }

    pub fn set_scale_drawer(&self, scale: bool) {
        self.inner.borrow_mut().effects.scale_drawer = scale;
    }

    pub fn set_transform_3d(&self, transform_3d: bool) {
        self.inner.borrow_mut().effects.transform_3d = transform_3d;
    }

    pub fn set_reuse(&self, reuse: bool) {
        self.inner.borrow_mut().config.reuse_surfaces = reuse;
    }

    pub fn set_on_before_cancel(&self, listener: impl Fn() + 'static) {
        self.inner.borrow_mut().on_before_cancel = Some(Rc::new(listener));
    }

    fn opening_tween(&self, inner: &mut DrawerInner) -> Option<PendingTween> {
        let surfaces = inner.surfaces.clone()?;
        let from = if inner.moved { inner.moved_position } else { 0 };
        let spec = TweenSpec::new(
            from,
            inner.geometry.panel_width(),
            inner.transition_duration(true),
            Easing::Accelerate,
        );

        let proxy = inner.proxy;
        let effects = inner.effects;
        let update: UpdateFn = Box::new(move |value| proxy.set_offset(&surfaces, effects, value));

        let generation = inner.generation;
        let weak = Rc::downgrade(&self.inner);
        let complete: CompleteFn = Box::new(move || {
            let Some(strong) = weak.upgrade() else {
                return;
            };
            let drawer = Drawer {
                inner: Rc::clone(&strong),
            };
            let mut inner = strong.borrow_mut();
            if inner.generation != generation || !inner.visible {
                return;
            }
            inner.reveal_chrome(&drawer);
        });

        Some(PendingTween {
            spec,
            update,
            complete,
        })
    }

    fn closing_tween(&self, inner: &mut DrawerInner) -> Option<PendingTween> {
        let surfaces = inner.surfaces.clone()?;
        let from = if inner.moved {
            inner.moved_position
        } else {
            inner.geometry.panel_width()
        };
        let spec = TweenSpec::new(from, 0, inner.transition_duration(false), Easing::Decelerate);

        let proxy = inner.proxy;
        let effects = inner.effects;
        let update: UpdateFn = Box::new(move |value| proxy.set_offset(&surfaces, effects, value));

        let generation = inner.generation;
        let weak = Rc::downgrade(&self.inner);
        let complete: CompleteFn = Box::new(move || {
            let Some(strong) = weak.upgrade() else {
                return;
            };
            let mut inner = strong.borrow_mut();
            if inner.generation != generation || inner.visible {
                return;
            }
            inner.teardown();
        });

        Some(PendingTween {
            spec,
            update,
            complete,
        })
    }

    /// Stop whatever tween is in flight, then start the new one. Must be
    /// called with no borrows held: stopping fires the superseded tween's
    /// completion synchronously.
    fn run_transition(&self, driver: Rc<dyn TweenDriver>, pending: Option<PendingTween>) {
        driver.stop();
        if let Some(pending) = pending {
            driver.start(pending.spec, pending.update, pending.complete);
        }
    }

    #[cfg(test)]
    pub(crate) fn drag_position(&self) -> i32 {
        self.inner.borrow().moved_position
    }

    #[cfg(test)]
    pub(crate) fn is_mid_drag(&self) -> bool {
        self.inner.borrow().moved
    }

    #[cfg(test)]
    pub(crate) fn panel_width(&self) -> i32 {
        self.inner.borrow().geometry.panel_width()
    }
}

#[cfg(test)]
#[path = "tests/drawer_tests.rs"]
mod tests;
