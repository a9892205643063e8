//! Deterministic tween driving for tests.

use std::cell::RefCell;
use std::rc::Rc;

use sidle_animation::{CompleteFn, TweenDriver, TweenSpec, UpdateFn};

struct ScriptedTween {
    spec: TweenSpec,
    on_update: UpdateFn,
    on_complete: Option<CompleteFn>,
}

#[derive(Default)]
struct ScriptedInner {
    active: Option<ScriptedTween>,
    history: Vec<TweenSpec>,
}

/// A [`TweenDriver`] that never advances on its own. Tests inspect the
/// started specs and push the tween forward fraction by fraction.
#[derive(Clone, Default)]
pub struct ScriptedTweenDriver {
    inner: Rc<RefCell<ScriptedInner>>,
}

impl ScriptedTweenDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().active.is_some()
    }

    /// Every spec ever started, in order.
    pub fn started(&self) -> Vec<TweenSpec> {
        self.inner.borrow().history.clone()
    }

    pub fn current(&self) -> Option<TweenSpec> {
        self.inner.borrow().active.as_ref().map(|tween| tween.spec)
    }

    /// Push the running tween to `fraction` of its linear progress and fire
    /// one update with the eased value.
    pub fn drive(&self, fraction: f32) {
        let Some(mut tween) = self.inner.borrow_mut().active.take() else {
            return;
        };
        let progress = tween.spec.easing.transform(fraction);
        let span = (tween.spec.to - tween.spec.from) as f32;
        let value = tween.spec.from + (span * progress).round() as i32;
        (tween.on_update)(value);

        let mut inner = self.inner.borrow_mut();
        if inner.active.is_none() {
            inner.active = Some(tween);
        }
    }

    /// Finish the running tween: one final update at the end value, then
    /// the completion callback.
    pub fn finish(&self) {
        let Some(mut tween) = self.inner.borrow_mut().active.take() else {
            return;
        };
        (tween.on_update)(tween.spec.to);
        if let Some(complete) = tween.on_complete.take() {
            complete();
        }
    }
}

impl TweenDriver for ScriptedTweenDriver {
    fn start(&self, spec: TweenSpec, on_update: UpdateFn, on_complete: CompleteFn) {
        self.stop();
        let mut inner = self.inner.borrow_mut();
        inner.history.push(spec);
        inner.active = Some(ScriptedTween {
            spec,
            on_update,
            on_complete: Some(on_complete),
        });
    }

    fn stop(&self) {
        let active = self.inner.borrow_mut().active.take();
        if let Some(mut tween) = active {
            if let Some(complete) = tween.on_complete.take() {
                complete();
            }
        }
    }
}
