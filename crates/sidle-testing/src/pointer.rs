//! Pointer-event constructors for gesture scripts.

use sidle_core::{Point, PointerEvent, PointerEventKind};

pub fn press(x: i32, y: i32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Down, Point::new(x, y))
}

pub fn move_to(x: i32, y: i32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Move, Point::new(x, y))
}

pub fn release(x: i32, y: i32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Up, Point::new(x, y))
}

pub fn cancel_at(x: i32, y: i32) -> PointerEvent {
    PointerEvent::new(PointerEventKind::Cancel, Point::new(x, y))
}
