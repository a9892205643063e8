//! Testing utilities for Sidle
//!
//! Recording fakes for the host-surface boundary plus a scripted tween
//! driver, so drawer behavior can be asserted deterministically: every
//! attribute write lands in a [`FakeSurface`], every started tween in the
//! [`ScriptedTweenDriver`]'s history, and tests advance time by hand.

mod pointer;
mod surface;
mod tween;

pub use pointer::{cancel_at, move_to, press, release};
pub use surface::{FakeHost, FakeSurface};
pub use tween::ScriptedTweenDriver;
