//! Tween driver boundary and the frame-driven reference implementation.

use std::cell::RefCell;
use std::rc::Rc;

use crate::easing::Easing;

/// One interpolation between two integer offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenSpec {
    pub from: i32,
    pub to: i32,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl TweenSpec {
    pub fn new(from: i32, to: i32, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            duration_ms,
            easing,
        }
    }
}

pub type UpdateFn = Box<dyn FnMut(i32)>;
pub type CompleteFn = Box<dyn FnOnce()>;

/// Time-driven interpolation service injected by the host.
///
/// Contract: at most one tween runs per driver; starting a new one
/// supersedes the old. Every started tween fires its completion exactly
/// once — on natural completion or on [`stop`](TweenDriver::stop), which is
/// idempotent and safe to call while nothing runs.
pub trait TweenDriver {
    fn start(&self, spec: TweenSpec, on_update: UpdateFn, on_complete: CompleteFn);
    fn stop(&self);
}

struct ActiveTween {
    spec: TweenSpec,
    on_update: UpdateFn,
    on_complete: Option<CompleteFn>,
    start_time_ms: Option<u64>,
}

impl ActiveTween {
    /// Advance to `now_ms`. Returns true when finished.
    fn frame(&mut self, now_ms: u64) -> bool {
        let start = *self.start_time_ms.get_or_insert(now_ms);
        let elapsed = now_ms.saturating_sub(start);

        let linear = if self.spec.duration_ms == 0 {
            1.0
        } else {
            (elapsed as f32 / self.spec.duration_ms as f32).clamp(0.0, 1.0)
        };
        let progress = self.spec.easing.transform(linear);

        let span = (self.spec.to - self.spec.from) as f32;
        let value = self.spec.from + (span * progress).round() as i32;
        (self.on_update)(value);

        linear >= 1.0
    }
}

/// Reference [`TweenDriver`] for hosts that pump frame timestamps.
///
/// The host calls [`frame`](FrameTweenDriver::frame) with a monotonic
/// millisecond clock (a vsync callback, a timer, a test loop); the driver
/// interpolates and fires the completion on the first frame at or past the
/// duration. Zero-duration tweens jump to the end value on their first
/// frame.
#[derive(Clone, Default)]
pub struct FrameTweenDriver {
    inner: Rc<RefCell<Option<ActiveTween>>>,
}

impl FrameTweenDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().is_some()
    }

    /// Advance the running tween, if any, to `now_ms`.
    pub fn frame(&self, now_ms: u64) {
        // Take the tween out before running callbacks: an update/complete
        // callback may re-enter the driver (start a follow-up tween, stop).
        let Some(mut active) = self.inner.borrow_mut().take() else {
            return;
        };

        let finished = active.frame(now_ms);
        if finished {
            if let Some(complete) = active.on_complete.take() {
                complete();
            }
            return;
        }

        // Only put the tween back if a callback didn't install a new one.
        let mut slot = self.inner.borrow_mut();
        if slot.is_none() {
            *slot = Some(active);
        } else {
            log::warn!("tween superseded from inside its own update callback");
        }
    }
}

impl TweenDriver for FrameTweenDriver {
    fn start(&self, spec: TweenSpec, on_update: UpdateFn, on_complete: CompleteFn) {
        self.stop();
        *self.inner.borrow_mut() = Some(ActiveTween {
            spec,
            on_update,
            on_complete: Some(on_complete),
            start_time_ms: None,
        });
    }

    fn stop(&self) {
        let active = self.inner.borrow_mut().take();
        if let Some(mut active) = active {
            if let Some(complete) = active.on_complete.take() {
                complete();
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/tween_tests.rs"]
mod tests;
