//! Animation support for Sidle
//!
//! The drawer does not own a clock. It describes a transition as a
//! [`TweenSpec`] and hands it to whatever [`TweenDriver`] the host injected;
//! the driver calls back with interpolated values and exactly one completion
//! per started tween. [`FrameTweenDriver`] is the reference driver for hosts
//! that pump frame timestamps themselves.

mod easing;
mod tween;

pub use easing::Easing;
pub use tween::{CompleteFn, FrameTweenDriver, TweenDriver, TweenSpec, UpdateFn};
