//! Bezel-swipe gesture recognition.
//!
//! A three-state machine over raw pointer events. While idle it only
//! watches; a pointer-down inside the bezel band arms it; enough rightward
//! travel without vertical wander starts a drag, after which events are
//! intercepted and fed to the [`Drawer`]. The caller wires
//! [`classify`](EdgeSwipe::classify) into its input dispatch and honors the
//! returned [`Classification`].

use sidle_core::{Point, PointerEvent, PointerEventKind, SurfaceError};

use crate::drawer::Drawer;

/// What the input pipeline should do with the event it just offered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Classification {
    /// Deliver the event through the normal pipeline.
    PassThrough,
    /// The recognizer consumed the event; do not deliver it further.
    Intercept,
    /// The recognizer consumed a pointer-up that ended a drag. Deliver a
    /// fabricated cancel to the normal pipeline so the sequence it saw
    /// does not end in what looks like a tap.
    SyntheticCancel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Armed,
    Dragging,
}

const SENTINEL: Point = Point { x: -1, y: -1 };

pub struct EdgeSwipe {
    drawer: Drawer,
    bezel_width: i32,
    ignored_top_band: i32,
    phase: Phase,
    start: Point,
}

impl EdgeSwipe {
    /// Create a recognizer driving `drawer`, using the bezel width and
    /// ignored top band from the drawer's configuration.
    pub fn new(drawer: Drawer) -> Self {
        let config = drawer.config();
        Self {
            bezel_width: config.bezel_width,
            ignored_top_band: config.ignored_top_band,
            drawer,
            phase: Phase::Idle,
            start: SENTINEL,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    fn disarm(&mut self) {
        self.phase = Phase::Idle;
        self.start = SENTINEL;
    }

    /// Classify one raw pointer event, driving the drawer during a drag.
    ///
    /// Errors surface only from drag-initiated opening when the host fails
    /// to supply a surface.
    pub fn classify(&mut self, event: &PointerEvent) -> Result<Classification, SurfaceError> {
        let x = event.position.x;
        let y = event.position.y;

        // System chrome owns the top band; checked first on every event so
        // its gestures are never intercepted, even mid-sequence.
        if self.phase != Phase::Dragging && y < self.ignored_top_band {
            return Ok(Classification::PassThrough);
        }

        match (event.kind, self.phase) {
            (PointerEventKind::Down, _) => {
                if x < self.bezel_width {
                    self.phase = Phase::Armed;
                    self.start = Point::new(x, y);
                } else {
                    self.disarm();
                }
                Ok(Classification::PassThrough)
            }
            (PointerEventKind::Move, Phase::Armed) => {
                // The arming width doubles as the vertical wander budget.
                if (y - self.start.y).abs() > self.bezel_width {
                    self.disarm();
                    return Ok(Classification::PassThrough);
                }
                if x - self.start.x >= self.bezel_width {
                    self.phase = Phase::Dragging;
                }
                // Arming never intercepts, including the move that crossed
                // the threshold.
                Ok(Classification::PassThrough)
            }
            (PointerEventKind::Move, Phase::Dragging) => {
                // A release mid-drag must snap open, never close.
                self.drawer.set_allow_close_on_touch(false);
                if !self.drawer.is_visible() {
                    self.drawer.show_with_touch(event.global_position.x)?;
                }
                self.drawer.on_touch(event);
                Ok(Classification::Intercept)
            }
            (PointerEventKind::Up | PointerEventKind::Cancel, Phase::Dragging) => {
                self.drawer.on_touch(event);
                self.drawer.set_allow_close_on_touch(true);
                self.disarm();
                Ok(Classification::SyntheticCancel)
            }
            _ => Ok(Classification::PassThrough),
        }
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
