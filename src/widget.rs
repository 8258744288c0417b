//! egui adapter for [`Joystick`]
//!
//! Allocates a square, forwards layout changes to [`Joystick::resize`],
//! turns egui drag/click responses into pointer calls and paints through
//! egui's [`Painter`].

use egui::{Painter, Pos2, Response, Sense, Stroke, Ui, Vec2};

use crate::canvas::{Canvas, Rgb};
use crate::geometry::Bounds;
use crate::joystick::Joystick;

/// [`Canvas`] over an egui painter, offsetting widget-local coordinates by
/// the allocated rect's origin
pub struct EguiCanvas<'a> {
    painter: &'a Painter,
    origin: Pos2,
}

impl<'a> EguiCanvas<'a> {
    pub fn new(painter: &'a Painter, origin: Pos2) -> Self {
        Self { painter, origin }
    }
}

impl Canvas for EguiCanvas<'_> {
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Rgb) {
        self.painter.circle_stroke(
            self.origin + center.to_vec2(),
            radius,
            Stroke::new(width, color),
        );
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Rgb) {
        self.painter
            .circle_filled(self.origin + center.to_vec2(), radius, color);
    }
}

/// Square egui widget drawing and driving a [`Joystick`]
///
/// ```no_run
/// # fn show(ui: &mut egui::Ui, joystick: &mut joystick_widget::Joystick) {
/// ui.add(joystick_widget::JoystickView::new(joystick).side(300.0));
/// # }
/// ```
pub struct JoystickView<'a> {
    joystick: &'a mut Joystick,
    side: Option<f32>,
}

impl<'a> JoystickView<'a> {
    pub fn new(joystick: &'a mut Joystick) -> Self {
        Self {
            joystick,
            side: None,
        }
    }

    /// Requested side length. Never smaller than the joystick's minimum
    /// footprint.
    pub fn side(mut self, side: f32) -> Self {
        self.side = Some(side);
        self
    }
}

impl egui::Widget for JoystickView<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let joystick = self.joystick;

        let min_side = joystick.min_size() as f32;
        let side = self.side.unwrap_or(min_side).max(min_side).round();
        let (rect, mut response) =
            ui.allocate_exact_size(Vec2::splat(side), Sense::click_and_drag());

        let bounds = bounds_from_rect(rect);
        if bounds != joystick.bounds() {
            joystick.resize(bounds);
        }

        let to_local = |pos: Pos2| Pos2::ZERO + (pos - rect.min);

        if response.drag_started() {
            if let Some(origin) = ui.input(|i| i.pointer.press_origin()) {
                joystick.on_pointer_down(to_local(origin));
            }
        }

        if response.dragged() && (response.drag_started() || response.drag_delta() != Vec2::ZERO) {
            if let Some(pos) = response.interact_pointer_pos() {
                joystick.on_pointer_drag(to_local(pos));
                response.mark_changed();
            }
        }

        if response.drag_stopped() {
            joystick.on_pointer_up();
            response.mark_changed();
        } else if response.clicked() {
            // Press and release without movement
            if let Some(pos) = response.interact_pointer_pos() {
                joystick.on_pointer_down(to_local(pos));
            }
            joystick.on_pointer_up();
            response.mark_changed();
        }

        if ui.is_rect_visible(rect) {
            let painter = ui.painter_at(rect);
            joystick.render(&mut EguiCanvas::new(&painter, rect.min));
        }

        if joystick.take_repaint_request() {
            ui.ctx().request_repaint();
        }

        response
    }
}

fn bounds_from_rect(rect: egui::Rect) -> Bounds {
    Bounds::new(
        rect.min.x.round() as i32,
        rect.min.y.round() as i32,
        rect.width().round().max(0.0) as u32,
        rect.height().round().max(0.0) as u32,
    )
}
