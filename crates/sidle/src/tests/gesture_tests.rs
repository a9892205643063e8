use super::*;

use std::rc::Rc;

use sidle_core::{Dp, Surface};
use sidle_testing::{cancel_at, move_to, press, release, FakeHost, ScriptedTweenDriver};

use crate::drawer::DrawerBuilder;

// container 400px, margin 100dp @ density 1 -> panel width 300; bezel 20
fn build_swipe(ignored_top_band: i32) -> (EdgeSwipe, Drawer, Rc<FakeHost>, ScriptedTweenDriver) {
    let host = FakeHost::new(400, 1.0);
    let driver = ScriptedTweenDriver::new();
    let drawer = DrawerBuilder::new()
        .margin(Dp(100.0))
        .bezel_width(20)
        .ignored_top_band(ignored_top_band)
        .build(host.clone(), Rc::new(driver.clone()))
        .expect("fake host supplies all surfaces");
    (EdgeSwipe::new(drawer.clone()), drawer, host, driver)
}

fn classify(swipe: &mut EdgeSwipe, event: &sidle_core::PointerEvent) -> Classification {
    swipe.classify(event).expect("no surface failures scripted")
}

#[test]
fn bezel_drag_reaches_dragging() {
    let (mut swipe, drawer, _host, _driver) = build_swipe(0);

    assert_eq!(classify(&mut swipe, &press(10, 100)), Classification::PassThrough);
    // The move that crosses the threshold still passes through.
    assert_eq!(classify(&mut swipe, &move_to(35, 100)), Classification::PassThrough);
    assert!(swipe.is_dragging());

    assert_eq!(classify(&mut swipe, &move_to(60, 100)), Classification::Intercept);
    assert!(drawer.is_visible());
}

#[test]
fn down_outside_bezel_never_arms() {
    let (mut swipe, drawer, _host, _driver) = build_swipe(0);

    assert_eq!(classify(&mut swipe, &press(25, 100)), Classification::PassThrough);
    assert_eq!(classify(&mut swipe, &move_to(500, 100)), Classification::PassThrough);
    assert_eq!(classify(&mut swipe, &move_to(900, 100)), Classification::PassThrough);

    assert!(!swipe.is_dragging());
    assert!(!drawer.is_visible());
}

#[test]
fn zero_bezel_width_disables_arming() {
    let host = FakeHost::new(400, 1.0);
    let driver = ScriptedTweenDriver::new();
    let drawer = DrawerBuilder::new()
        .margin(Dp(100.0))
        .bezel_width(0)
        .build(host.clone(), Rc::new(driver))
        .unwrap();
    let mut swipe = EdgeSwipe::new(drawer.clone());

    classify(&mut swipe, &press(0, 100));
    classify(&mut swipe, &move_to(300, 100));

    assert!(!swipe.is_dragging());
    assert!(!drawer.is_visible());
}

#[test]
fn top_band_passes_everything_through_while_not_dragging() {
    let (mut swipe, _drawer, _host, _driver) = build_swipe(50);

    for event in [press(10, 10), move_to(200, 10), release(200, 10), cancel_at(5, 10)] {
        assert_eq!(classify(&mut swipe, &event), Classification::PassThrough);
    }
    assert!(!swipe.is_dragging());
}

#[test]
fn top_band_is_ignored_mid_drag() {
    let (mut swipe, drawer, _host, _driver) = build_swipe(50);

    classify(&mut swipe, &press(10, 100));
    classify(&mut swipe, &move_to(35, 100));
    assert!(swipe.is_dragging());

    // Once dragging, even events inside the band stay intercepted.
    assert_eq!(classify(&mut swipe, &move_to(120, 10)), Classification::Intercept);
    assert!(drawer.is_visible());
}

#[test]
fn vertical_wander_cancels_arming() {
    let (mut swipe, drawer, _host, _driver) = build_swipe(0);

    classify(&mut swipe, &press(10, 100));
    // 30px of vertical travel exceeds the 20px budget.
    assert_eq!(classify(&mut swipe, &move_to(15, 130)), Classification::PassThrough);
    assert_eq!(classify(&mut swipe, &move_to(200, 130)), Classification::PassThrough);

    assert!(!swipe.is_dragging());
    assert!(!drawer.is_visible());
}

#[test]
fn wander_within_budget_keeps_the_arm() {
    let (mut swipe, _drawer, _host, _driver) = build_swipe(0);

    classify(&mut swipe, &press(10, 100));
    classify(&mut swipe, &move_to(15, 115));
    classify(&mut swipe, &move_to(40, 115));

    assert!(swipe.is_dragging());
}

#[test]
fn drag_tracks_finger_relative_to_its_start() {
    let (mut swipe, _drawer, host, _driver) = build_swipe(0);

    classify(&mut swipe, &press(10, 100));
    classify(&mut swipe, &move_to(35, 100));
    classify(&mut swipe, &move_to(120, 100)); // drag starts here: offset 0
    assert_eq!(host.panel_surface().unwrap().width(), 0);

    classify(&mut swipe, &move_to(180, 100));
    assert_eq!(host.panel_surface().unwrap().width(), 60);
}

#[test]
fn release_mid_drag_synthesizes_a_cancel_and_snaps_open() {
    let (mut swipe, drawer, _host, driver) = build_swipe(0);

    classify(&mut swipe, &press(10, 100));
    classify(&mut swipe, &move_to(35, 100));
    classify(&mut swipe, &move_to(160, 100));
    assert!(!drawer.effects().allow_close_on_touch);

    assert_eq!(
        classify(&mut swipe, &release(160, 100)),
        Classification::SyntheticCancel
    );

    // Close-on-touch is restored and the panel snaps open instead of
    // closing, however short the drag.
    assert!(drawer.effects().allow_close_on_touch);
    assert!(drawer.is_visible());
    assert!(!swipe.is_dragging());
    let spec = driver.current().unwrap();
    assert_eq!(spec.to, 300);

    // The recognizer is back to idle: the next move passes through.
    assert_eq!(classify(&mut swipe, &move_to(200, 100)), Classification::PassThrough);
}

#[test]
fn cancel_mid_drag_ends_the_drag() {
    let (mut swipe, drawer, _host, _driver) = build_swipe(0);

    classify(&mut swipe, &press(10, 100));
    classify(&mut swipe, &move_to(35, 100));
    classify(&mut swipe, &move_to(160, 100));

    assert_eq!(
        classify(&mut swipe, &cancel_at(160, 100)),
        Classification::SyntheticCancel
    );
    assert!(drawer.effects().allow_close_on_touch);
    assert!(!swipe.is_dragging());
}

#[test]
fn down_mid_drag_rearms_from_scratch() {
    let (mut swipe, _drawer, _host, _driver) = build_swipe(0);

    classify(&mut swipe, &press(10, 100));
    classify(&mut swipe, &move_to(35, 100));
    assert!(swipe.is_dragging());

    // A fresh pointer-down resets the state machine.
    assert_eq!(classify(&mut swipe, &press(300, 100)), Classification::PassThrough);
    assert!(!swipe.is_dragging());
}

#[test]
fn drag_initiated_reinflation_failure_propagates() {
    let (mut swipe, drawer, host, _driver) = build_swipe(0);
    drawer.set_animation_enabled(false);
    drawer.show().unwrap();
    drawer.cancel(); // tears surfaces down
    host.set_fail_panel_inflation(true);

    classify(&mut swipe, &press(10, 100));
    classify(&mut swipe, &move_to(35, 100));
    let result = swipe.classify(&move_to(120, 100));

    assert!(matches!(result, Err(SurfaceError::Inflation { .. })));
}
