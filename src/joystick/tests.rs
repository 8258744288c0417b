//! Tests for the joystick control

use super::*;
use crate::canvas::Rgb;
use egui::pos2;
use proptest::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Point `distance` away from `center` at `degrees` (counter-clockwise, screen y down)
fn point_at(center: Pos2, degrees: f32, distance: f32) -> Pos2 {
    let rad = degrees.to_radians();
    pos2(center.x + distance * rad.cos(), center.y - distance * rad.sin())
}

fn record_events(joystick: &mut Joystick) -> Rc<RefCell<Vec<(Direction, f32)>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    joystick.subscribe(move |dir, magnitude| sink.borrow_mut().push((dir, magnitude)));
    events
}

fn grabbed_joystick(pivot: u32, stick: u32) -> Joystick {
    let mut joystick = Joystick::new(pivot, stick).unwrap();
    let center = joystick.center();
    joystick.on_pointer_down(center);
    assert!(joystick.is_grabbed());
    joystick
}

#[derive(Debug, PartialEq)]
enum DrawCall {
    Stroke(Pos2, f32, f32, Rgb),
    Fill(Pos2, f32, Rgb),
}

#[derive(Default)]
struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl Canvas for RecordingCanvas {
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Rgb) {
        self.calls.push(DrawCall::Stroke(center, radius, width, color));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Rgb) {
        self.calls.push(DrawCall::Fill(center, radius, color));
    }
}

#[test]
fn test_defaults() {
    let joystick = Joystick::default();
    assert_eq!(joystick.pivot_radius(), 100);
    assert_eq!(joystick.stick_radius(), 40);
    assert_eq!(joystick.min_size(), 280);
    assert_eq!(joystick.bounds(), Bounds::new(0, 0, 280, 280));
    assert_eq!(joystick.stick_offset(), Vec2::ZERO);
    assert!(!joystick.is_grabbed());
}

#[test]
fn test_new_rejects_zero_radius() {
    assert_eq!(
        Joystick::new(0, 40).unwrap_err(),
        JoystickError::ZeroRadius(RadiusKind::Pivot)
    );
    assert_eq!(
        Joystick::new(100, 0).unwrap_err(),
        JoystickError::ZeroRadius(RadiusKind::Stick)
    );
}

#[test]
fn test_new_rejects_oversized_radius() {
    assert_eq!(
        Joystick::new(3_000_000_000, 40).unwrap_err(),
        JoystickError::RadiusTooLarge {
            kind: RadiusKind::Pivot,
            value: 3_000_000_000,
            max: MAX_RADIUS,
        }
    );
    assert!(matches!(
        Joystick::new(100, u32::MAX),
        Err(JoystickError::RadiusTooLarge {
            kind: RadiusKind::Stick,
            ..
        })
    ));
    assert!(Joystick::new(MAX_RADIUS, MAX_RADIUS).is_ok());
}

#[test]
fn test_oversized_setters_are_capped() {
    let mut joystick = Joystick::default();

    let geometry = joystick.set_pivot_radius(u32::MAX / 2 + 1).unwrap();
    assert_eq!(geometry.pivot_radius, MAX_RADIUS);
    assert_eq!(geometry.min_size, 2 * (MAX_RADIUS + 40));
    assert_eq!(geometry.bounds.center(), (140, 140));

    let geometry = joystick.set_stick_radius(u32::MAX).unwrap();
    assert_eq!(geometry.stick_radius, MAX_RADIUS);
    assert_eq!(geometry.min_size, 4 * MAX_RADIUS);
    assert_eq!(geometry.bounds.center(), (140, 140));
}

#[test]
fn test_press_on_stick_grabs() {
    let mut joystick = Joystick::default();
    joystick.on_pointer_down(pos2(150.0, 130.0));
    assert!(joystick.is_grabbed());
}

#[test]
fn test_press_outside_stick_does_not_grab() {
    let mut joystick = Joystick::default();
    // 60px right of center, stick radius is 40
    joystick.on_pointer_down(pos2(200.0, 140.0));
    assert!(!joystick.is_grabbed());
}

#[test]
fn test_drag_north_clamps_to_pivot() {
    let mut joystick = grabbed_joystick(100, 40);
    let events = record_events(&mut joystick);

    // 200px above center
    let event = joystick.on_pointer_drag(pos2(140.0, -60.0));

    let offset = joystick.stick_offset();
    assert!((offset.length() - 100.0).abs() < 1e-3);
    assert!(offset.x.abs() < 1e-4);
    assert!(offset.y < 0.0);

    assert_eq!(event.direction, Direction::Up);
    assert!((event.magnitude - 1.0).abs() < 1e-5);
    assert_eq!(events.borrow().len(), 1);
    assert_eq!(events.borrow()[0].0, Direction::Up);
}

#[test]
fn test_drag_half_distance_left() {
    let mut joystick = grabbed_joystick(50, 20);
    let target = point_at(joystick.center(), 200.0, 25.0);

    joystick.on_pointer_drag(target);
    let (direction, magnitude) = joystick.compute_direction();

    assert_eq!(direction, Direction::Left);
    assert!((magnitude - 0.5).abs() < 1e-4, "magnitude was {}", magnitude);
}

#[test]
fn test_drag_each_quadrant() {
    let cases = [
        (10.0, Direction::Right),
        (90.0, Direction::Up),
        (180.0, Direction::Left),
        (270.0, Direction::Down),
        (330.0, Direction::Right),
    ];

    for (degrees, expected) in cases {
        let mut joystick = grabbed_joystick(100, 40);
        let target = point_at(joystick.center(), degrees, 60.0);
        let event = joystick.on_pointer_drag(target);
        assert_eq!(event.direction, expected, "angle {}", degrees);
        assert!((event.magnitude - 0.6).abs() < 1e-4);
    }
}

#[test]
fn test_drag_without_grab_still_notifies() {
    let mut joystick = Joystick::default();
    let events = record_events(&mut joystick);

    joystick.on_pointer_down(pos2(5.0, 5.0));
    let event = joystick.on_pointer_drag(pos2(10.0, 10.0));

    assert_eq!(joystick.stick_offset(), Vec2::ZERO);
    assert_eq!(event, StickEvent::RELEASED);
    assert_eq!(*events.borrow(), vec![(Direction::Center, 0.0)]);
}

#[test]
fn test_drag_back_to_center_reports_center() {
    let mut joystick = grabbed_joystick(100, 40);
    let center = joystick.center();
    joystick.on_pointer_drag(pos2(center.x + 30.0, center.y));
    let event = joystick.on_pointer_drag(center);
    assert_eq!(event.direction, Direction::Center);
    assert_eq!(event.magnitude, 0.0);
}

#[test]
fn test_release_resets_and_notifies() {
    let mut joystick = grabbed_joystick(100, 40);
    let events = record_events(&mut joystick);
    joystick.on_pointer_drag(pos2(240.0, 140.0));
    joystick.take_repaint_request();

    let event = joystick.on_pointer_up();

    assert_eq!(event, StickEvent::RELEASED);
    assert!(!joystick.is_grabbed());
    assert_eq!(joystick.stick_offset(), Vec2::ZERO);
    assert!(joystick.take_repaint_request());

    let events = events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, Direction::Right);
    assert_eq!(events[1], (Direction::Center, 0.0));
}

#[test]
fn test_release_without_grab_still_notifies() {
    let mut joystick = Joystick::default();
    let events = record_events(&mut joystick);
    joystick.on_pointer_up();
    assert_eq!(*events.borrow(), vec![(Direction::Center, 0.0)]);
}

#[test]
fn test_resize_scales_radii() {
    let mut joystick = Joystick::default();

    let geometry = joystick.resize(Bounds::new(0, 0, 140, 140));

    assert_eq!(geometry.pivot_radius, 50);
    assert_eq!(geometry.stick_radius, 20);
    assert_eq!(geometry.min_size, 140);
    assert_eq!(geometry.bounds, Bounds::new(0, 0, 140, 140));
    assert_eq!(joystick.center(), pos2(70.0, 70.0));
}

#[test]
fn test_resize_to_tiny_bounds_floors_radii() {
    let mut joystick = Joystick::default();

    let geometry = joystick.resize(Bounds::new(0, 0, 2, 2));

    assert_eq!(geometry.pivot_radius, 5);
    assert_eq!(geometry.stick_radius, 2);
    assert_eq!(geometry.min_size, 14);
}

#[test]
fn test_resize_reclamps_grabbed_offset() {
    let mut joystick = grabbed_joystick(100, 40);
    joystick.on_pointer_drag(pos2(240.0, 140.0));

    joystick.resize(Bounds::new(0, 0, 140, 140));

    assert!(joystick.stick_offset().length() <= 50.0 + 1e-3);
}

#[test]
fn test_set_pivot_radius_recenters_bounds() {
    let mut joystick = Joystick::default();
    joystick.take_repaint_request();

    let geometry = joystick.set_pivot_radius(50).unwrap();

    assert_eq!(geometry.pivot_radius, 50);
    assert_eq!(geometry.stick_radius, 40);
    assert_eq!(geometry.min_size, 180);
    assert_eq!(geometry.bounds, Bounds::new(50, 50, 180, 180));
    assert_eq!(geometry.bounds.center(), (140, 140));
    assert!(joystick.take_repaint_request());
}

#[test]
fn test_set_stick_radius_recenters_bounds() {
    let mut joystick = Joystick::default();

    let geometry = joystick.set_stick_radius(60).unwrap();

    assert_eq!(geometry.stick_radius, 60);
    assert_eq!(geometry.min_size, 320);
    assert_eq!(geometry.bounds, Bounds::new(-20, -20, 320, 320));
}

#[test]
fn test_zero_radius_setters_are_ignored() {
    let mut joystick = Joystick::default();
    joystick.take_repaint_request();
    let before = joystick.geometry();

    assert_eq!(joystick.set_pivot_radius(0), None);
    assert_eq!(joystick.set_stick_radius(0), None);

    assert_eq!(joystick.geometry(), before);
    assert!(!joystick.take_repaint_request());
}

#[test]
fn test_render_at_rest() {
    let joystick = Joystick::default();
    let mut canvas = RecordingCanvas::default();

    joystick.render(&mut canvas);

    assert_eq!(
        canvas.calls,
        vec![
            DrawCall::Stroke(pos2(140.0, 140.0), 100.0, 1.0, Rgb::BLACK),
            DrawCall::Fill(pos2(140.0, 140.0), 40.0, Rgb::BLACK),
        ]
    );
}

#[test]
fn test_render_follows_grabbed_stick() {
    let style = JoystickStyle {
        outline: Rgb(10, 10, 10),
        outline_width: 2.0,
        stick: Rgb(200, 0, 0),
    };
    let mut joystick = Joystick::default().with_style(style);
    joystick.on_pointer_down(pos2(140.0, 140.0));
    joystick.on_pointer_drag(pos2(190.0, 140.0));
    let mut canvas = RecordingCanvas::default();

    joystick.render(&mut canvas);

    assert_eq!(
        canvas.calls,
        vec![
            DrawCall::Stroke(pos2(140.0, 140.0), 100.0, 2.0, Rgb(10, 10, 10)),
            DrawCall::Fill(pos2(190.0, 140.0), 40.0, Rgb(200, 0, 0)),
        ]
    );
}

#[test]
fn test_unsubscribed_handler_not_called() {
    let mut joystick = Joystick::default();
    let count = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&count);
    let id = joystick.subscribe(move |_, _| *counter.borrow_mut() += 1);

    joystick.on_pointer_up();
    assert!(joystick.unsubscribe(id));
    joystick.on_pointer_up();

    assert_eq!(*count.borrow(), 1);
}

proptest! {
    #[test]
    fn prop_drag_never_leaves_pivot(
        pivot in 5u32..300,
        stick in 2u32..100,
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
    ) {
        let mut joystick = grabbed_joystick(pivot, stick);
        joystick.on_pointer_drag(pos2(x, y));
        let length = joystick.stick_offset().length();
        prop_assert!(length <= pivot as f32 + 1e-3, "offset {} > pivot {}", length, pivot);
    }

    #[test]
    fn prop_magnitude_in_unit_range(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
    ) {
        let mut joystick = grabbed_joystick(100, 40);
        let event = joystick.on_pointer_drag(pos2(x, y));
        prop_assert!((0.0..=1.0).contains(&event.magnitude));
    }

    #[test]
    fn prop_direction_is_pure(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
    ) {
        let mut joystick = grabbed_joystick(100, 40);
        joystick.on_pointer_drag(pos2(x, y));
        prop_assert_eq!(joystick.compute_direction(), joystick.compute_direction());
    }

    #[test]
    fn prop_release_always_neutral(
        x in -2000.0f32..2000.0,
        y in -2000.0f32..2000.0,
    ) {
        let mut joystick = grabbed_joystick(100, 40);
        joystick.on_pointer_drag(pos2(x, y));
        let event = joystick.on_pointer_up();
        prop_assert_eq!(event, StickEvent::RELEASED);
        prop_assert_eq!(joystick.stick_offset(), Vec2::ZERO);
        prop_assert!(!joystick.is_grabbed());
    }
}
