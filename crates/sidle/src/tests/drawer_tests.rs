use super::*;

use std::cell::Cell;
use std::rc::Rc;

use sidle_animation::TweenSpec;
use sidle_core::{Dp, Orientation, Surface};
use sidle_testing::{move_to, release, FakeHost, ScriptedTweenDriver};

// container 400px, margin 100dp @ density 1 -> panel width 300
fn build_drawer() -> (Drawer, Rc<FakeHost>, ScriptedTweenDriver) {
    build_drawer_with(DrawerBuilder::new().margin(Dp(100.0)))
}

fn build_drawer_with(builder: DrawerBuilder) -> (Drawer, Rc<FakeHost>, ScriptedTweenDriver) {
    let host = FakeHost::new(400, 1.0);
    let driver = ScriptedTweenDriver::new();
    let drawer = builder
        .build(host.clone(), Rc::new(driver.clone()))
        .expect("fake host supplies all surfaces");
    (drawer, host, driver)
}

#[test]
fn show_without_animation_opens_immediately() {
    let (drawer, host, driver) = build_drawer();
    drawer.set_animation_enabled(false);

    drawer.show().unwrap();

    assert!(drawer.is_visible());
    assert!(driver.started().is_empty());
    let panel = host.panel_surface().unwrap();
    assert_eq!(panel.width(), 300);
    assert_eq!(host.content_surface().padding().left, 300);
    let catcher = host.catcher_surface().unwrap();
    assert!(catcher.is_visible());
    assert_eq!(catcher.width(), 100);
    assert!(catcher.has_click_handler());
    assert!(catcher.has_touch_handler());
    assert!(host.shadow_surface().unwrap().is_visible());
    assert_eq!(host.decor_surface().background(), Some(Color::BLACK));
}

#[test]
fn show_runs_opening_tween_and_reveals_on_completion() {
    let (drawer, host, driver) = build_drawer();

    drawer.show().unwrap();

    assert_eq!(
        driver.current(),
        Some(TweenSpec::new(0, 300, 350, Easing::Accelerate))
    );
    let catcher = host.catcher_surface().unwrap();
    assert!(!catcher.is_visible());

    driver.drive(0.5); // accelerate(0.5) = 0.25
    assert_eq!(host.panel_surface().unwrap().width(), 75);

    driver.finish();
    assert_eq!(host.panel_surface().unwrap().width(), 300);
    assert!(catcher.is_visible());
    assert!(catcher.has_click_handler());
    assert!(host.shadow_surface().unwrap().is_visible());
}

#[test]
fn show_on_visible_drawer_is_a_noop() {
    let (drawer, _host, driver) = build_drawer();

    drawer.show().unwrap();
    drawer.show().unwrap();

    assert_eq!(driver.started().len(), 1);
}

#[test]
fn cancel_on_hidden_drawer_is_a_noop() {
    let (drawer, host, driver) = build_drawer();
    let calls = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&calls);
    drawer.set_on_before_cancel(move || seen.set(seen.get() + 1));

    drawer.cancel();

    assert_eq!(calls.get(), 0);
    assert!(driver.started().is_empty());
    assert!(host.is_attached(&host.panel_surface().unwrap()));
    assert_eq!(host.decor_surface().background(), None);
}

#[test]
fn cancel_fires_listener_then_closes_and_tears_down() {
    let calls = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&calls);
    let (drawer, host, driver) = build_drawer_with(
        DrawerBuilder::new()
            .margin(Dp(100.0))
            .on_before_cancel(move || seen.set(seen.get() + 1)),
    );
    host.decor_surface().set_background(Some(Color(0xFF12_3456)));

    drawer.show().unwrap();
    driver.finish();
    let catcher = host.catcher_surface().unwrap();
    assert!(catcher.has_touch_handler());

    drawer.cancel();

    assert_eq!(calls.get(), 1);
    assert!(!drawer.is_visible());
    // Input handlers drop before the closing animation, not after it.
    assert!(!catcher.has_click_handler());
    assert!(!catcher.has_touch_handler());
    assert_eq!(
        driver.current(),
        Some(TweenSpec::new(300, 0, 350, Easing::Decelerate))
    );

    driver.finish();
    let content = host.content_surface();
    assert_eq!(content.width(), MATCH_PARENT);
    assert_eq!(content.padding().left, 0);
    assert!(!catcher.is_visible());
    assert!(!host.shadow_surface().unwrap().is_visible());
    assert_eq!(host.decor_surface().background(), Some(Color(0xFF12_3456)));
    assert!(!host.is_attached(&host.panel_surface().unwrap()));

    // Next show re-inflates from scratch.
    drawer.show().unwrap();
    assert_eq!(host.inflated_panel_count(), 2);
}

#[test]
fn reuse_keeps_surfaces_attached_at_zero_width() {
    let (drawer, host, _driver) = build_drawer();
    drawer.set_animation_enabled(false);
    drawer.set_reuse(true);

    drawer.show().unwrap();
    drawer.cancel();

    let panel = host.panel_surface().unwrap();
    assert!(host.is_attached(&panel));
    assert_eq!(panel.width(), 0);

    drawer.show().unwrap();
    assert_eq!(host.inflated_panel_count(), 1);
}

#[test]
fn drag_release_duration_is_proportional() {
    let (drawer, _host, driver) =
        build_drawer_with(DrawerBuilder::new().margin(Dp(100.0)).duration_ms(250));

    drawer.show_with_touch(0).unwrap();
    drawer.on_touch(&move_to(150, 0));
    assert_eq!(drawer.drag_position(), 150);

    drawer.set_allow_close_on_touch(false);
    drawer.on_touch(&release(150, 0));

    // Half open: the remaining half takes half the default duration.
    assert_eq!(
        driver.current(),
        Some(TweenSpec::new(150, 300, 125, Easing::Accelerate))
    );
}

#[test]
fn cancel_mid_drag_duration_is_proportional() {
    let (drawer, _host, driver) =
        build_drawer_with(DrawerBuilder::new().margin(Dp(100.0)).duration_ms(250));

    drawer.show_with_touch(0).unwrap();
    drawer.on_touch(&move_to(150, 0));

    drawer.cancel();

    assert_eq!(
        driver.current(),
        Some(TweenSpec::new(150, 0, 125, Easing::Decelerate))
    );
}

#[test]
fn release_below_a_third_closes() {
    let (drawer, _host, _driver) = build_drawer();

    drawer.show_with_touch(0).unwrap();
    drawer.on_touch(&move_to(90, 0));

    let consumed = drawer.on_touch(&release(90, 0));

    assert!(consumed);
    assert!(!drawer.is_visible());
}

#[test]
fn release_below_a_third_snaps_open_when_close_disabled() {
    let (drawer, _host, driver) = build_drawer();

    drawer.show_with_touch(0).unwrap();
    drawer.on_touch(&move_to(90, 0));
    drawer.set_allow_close_on_touch(false);

    drawer.on_touch(&release(90, 0));

    assert!(drawer.is_visible());
    let spec = driver.current().unwrap();
    assert_eq!((spec.from, spec.to), (90, 300));
}

#[test]
fn release_on_fully_open_strip_closes() {
    let (drawer, _host, _driver) = build_drawer();
    drawer.set_animation_enabled(false);
    drawer.show().unwrap();

    // The raw position never dipped below the open width: treat as a tap
    // on the strip.
    drawer.on_touch(&move_to(350, 0));
    drawer.on_touch(&release(350, 0));

    assert!(!drawer.is_visible());
}

#[test]
fn release_on_strip_after_real_drag_snaps_open() {
    let (drawer, _host, _driver) = build_drawer();
    drawer.set_animation_enabled(false);
    drawer.show().unwrap();

    drawer.on_touch(&move_to(350, 0));
    drawer.on_touch(&move_to(200, 0)); // dips below full-open
    drawer.on_touch(&move_to(350, 0));
    drawer.on_touch(&release(350, 0));

    assert!(drawer.is_visible());
}

#[test]
fn move_positions_are_clamped() {
    let (drawer, host, _driver) = build_drawer();

    drawer.show_with_touch(0).unwrap();

    drawer.on_touch(&move_to(-50, 0));
    assert_eq!(drawer.drag_position(), 0);
    assert_eq!(host.panel_surface().unwrap().width(), 0);

    drawer.on_touch(&move_to(5000, 0));
    assert_eq!(drawer.drag_position(), 300);
    assert_eq!(host.panel_surface().unwrap().width(), 300);
}

#[test]
fn immovable_drawer_ignores_touch() {
    let (drawer, host, _driver) = build_drawer();
    drawer.show_with_touch(0).unwrap();
    drawer.set_movable(false);

    assert!(!drawer.on_touch(&move_to(150, 0)));
    assert_eq!(drawer.drag_position(), 0);
    assert_eq!(host.panel_surface().unwrap().width(), 0);
}

#[test]
fn show_with_touch_tracks_relative_movement() {
    let (drawer, host, driver) = build_drawer();

    drawer.show_with_touch(40).unwrap();

    assert!(drawer.is_visible());
    assert!(drawer.is_mid_drag());
    assert!(driver.started().is_empty());
    assert_eq!(host.panel_surface().unwrap().width(), 0);

    drawer.on_touch(&move_to(190, 0));
    assert_eq!(drawer.drag_position(), 150);
    assert_eq!(host.panel_surface().unwrap().width(), 150);
}

#[test]
fn show_with_touch_on_visible_drawer_is_a_noop() {
    let (drawer, _host, _driver) = build_drawer();

    drawer.show_with_touch(40).unwrap();
    drawer.on_touch(&move_to(190, 0));
    drawer.show_with_touch(90).unwrap();

    // The original deviation survives.
    drawer.on_touch(&move_to(240, 0));
    assert_eq!(drawer.drag_position(), 200);
}

#[test]
fn cancel_mid_open_supersedes_the_opening_tween() {
    let (drawer, host, driver) = build_drawer();

    drawer.show().unwrap();
    driver.drive(0.5);

    drawer.cancel();

    // The stopped opening tween's completion must not reveal the chrome.
    let catcher = host.catcher_surface().unwrap();
    assert!(!catcher.is_visible());
    assert_eq!(
        driver.current(),
        Some(TweenSpec::new(300, 0, 350, Easing::Decelerate))
    );

    driver.finish();
    assert!(!drawer.is_visible());
    assert!(!host.is_attached(&host.panel_surface().unwrap()));
}

#[test]
fn reopen_mid_close_keeps_surfaces() {
    let (drawer, host, driver) = build_drawer();

    drawer.show().unwrap();
    driver.finish();
    drawer.cancel();
    driver.drive(0.5);

    drawer.show().unwrap();

    // The superseded closing tween's completion must not tear down what
    // the new opening transition owns.
    assert!(drawer.is_visible());
    assert!(host.is_attached(&host.panel_surface().unwrap()));
    assert_eq!(host.inflated_panel_count(), 1);
    let spec = driver.current().unwrap();
    assert_eq!((spec.from, spec.to), (0, 300));
}

#[test]
fn failed_reinflation_surfaces_the_error() {
    let (drawer, host, _driver) = build_drawer();
    drawer.set_animation_enabled(false);
    drawer.show().unwrap();
    drawer.cancel();

    host.set_fail_panel_inflation(true);
    let result = drawer.show();

    assert!(matches!(result, Err(SurfaceError::Inflation { .. })));
    assert!(!drawer.is_visible());
}

#[test]
fn landscape_override_applies_on_reinit() {
    let host = FakeHost::new(1000, 2.0);
    let driver = ScriptedTweenDriver::new();
    let drawer = DrawerBuilder::new()
        .margin(Dp(50.0))
        .landscape_width(LandscapeWidth::Fixed(Dp(400.0)))
        .build(host.clone(), Rc::new(driver.clone()))
        .unwrap();
    drawer.set_animation_enabled(false);
    assert_eq!(drawer.panel_width(), 900);

    drawer.show().unwrap();
    drawer.cancel();
    host.set_orientation(Orientation::Landscape);

    drawer.show().unwrap();
    assert_eq!(drawer.panel_width(), 800);
    assert_eq!(host.panel_surface().unwrap().width(), 800);
}

#[test]
fn panel_background_clears_padding() {
    let (drawer, host, _driver) = build_drawer();

    drawer.set_panel_background(Color(0xFF0A_0B0C));

    let panel = host.panel_surface().unwrap();
    assert_eq!(panel.background(), Some(Color(0xFF0A_0B0C)));
    assert_eq!(panel.padding(), EdgeInsets::ZERO);
}

#[test]
fn panel_inherits_vertical_padding_from_content() {
    let host = FakeHost::new(400, 1.0);
    host.content_surface()
        .set_padding(EdgeInsets::from_components(0, 24, 0, 12));
    let driver = ScriptedTweenDriver::new();
    let drawer = DrawerBuilder::new()
        .margin(Dp(100.0))
        .build(host.clone(), Rc::new(driver))
        .unwrap();

    let padding = host.panel_surface().unwrap().padding();
    assert_eq!((padding.top, padding.bottom), (24, 12));
    drop(drawer);
}
