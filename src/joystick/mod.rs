//! Joystick control state machine
//!
//! Owns the pivot/stick radii, the stick offset and the grab flag, and turns
//! pointer input into `(direction, magnitude)` notifications.
//!
//! Hosts drive it through a small capability set:
//!
//! - [`Joystick::resize`] when the widget is laid out
//! - [`Joystick::render`] on paint
//! - [`Joystick::on_pointer_down`] / [`Joystick::on_pointer_drag`] /
//!   [`Joystick::on_pointer_up`] for pointer input
//!
//! All pointer positions are widget-local (origin at the top-left corner of
//! the widget's bounds, y pointing down).

use egui::{Pos2, Vec2};
use tracing::{debug, trace};

use crate::canvas::{Canvas, JoystickStyle};
use crate::direction::{Direction, StickEvent};
use crate::error::{JoystickError, RadiusKind};
use crate::geometry::{
    bound_to_radius, footprint, line_angle, proportional_radii, Bounds, Geometry, MAX_RADIUS,
};
use crate::observer::{StickObservers, SubscriptionId};

/// Pivot radius used by [`Joystick::default`]
pub const DEFAULT_PIVOT_RADIUS: u32 = 100;

/// Stick radius used by [`Joystick::default`]
pub const DEFAULT_STICK_RADIUS: u32 = 40;

/// Virtual joystick: a pivot circle with a draggable stick
#[derive(Debug)]
pub struct Joystick {
    pivot_radius: u32,
    stick_radius: u32,
    /// Stick center relative to the widget center
    stick_offset: Vec2,
    grabbed: bool,
    bounds: Bounds,
    min_size: u32,
    style: JoystickStyle,
    repaint_requested: bool,
    observers: StickObservers,
}

impl Joystick {
    /// Create a joystick with the given radii.
    ///
    /// The widget starts as a square of its minimum footprint at the origin.
    ///
    /// # Errors
    ///
    /// Returns [`JoystickError::ZeroRadius`] if either radius is zero and
    /// [`JoystickError::RadiusTooLarge`] if either exceeds [`MAX_RADIUS`].
    pub fn new(pivot_radius: u32, stick_radius: u32) -> Result<Self, JoystickError> {
        check_radius(pivot_radius, RadiusKind::Pivot)?;
        check_radius(stick_radius, RadiusKind::Stick)?;

        Ok(Self::with_radii(pivot_radius, stick_radius))
    }

    fn with_radii(pivot_radius: u32, stick_radius: u32) -> Self {
        let side = footprint(pivot_radius, stick_radius);
        Self {
            pivot_radius,
            stick_radius,
            stick_offset: Vec2::ZERO,
            grabbed: false,
            bounds: Bounds::new(0, 0, side, side),
            min_size: side,
            style: JoystickStyle::default(),
            repaint_requested: true,
            observers: StickObservers::new(),
        }
    }

    /// Replace the rendering style
    pub fn with_style(mut self, style: JoystickStyle) -> Self {
        self.style = style;
        self
    }

    pub fn pivot_radius(&self) -> u32 {
        self.pivot_radius
    }

    pub fn stick_radius(&self) -> u32 {
        self.stick_radius
    }

    pub fn stick_offset(&self) -> Vec2 {
        self.stick_offset
    }

    pub fn is_grabbed(&self) -> bool {
        self.grabbed
    }

    /// Widget bounds in the parent's coordinate space
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Side of the minimum square footprint
    pub fn min_size(&self) -> u32 {
        self.min_size
    }

    pub fn style(&self) -> &JoystickStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: JoystickStyle) {
        self.style = style;
        self.repaint_requested = true;
    }

    /// Current derived layout
    pub fn geometry(&self) -> Geometry {
        Geometry {
            bounds: self.bounds,
            pivot_radius: self.pivot_radius,
            stick_radius: self.stick_radius,
            min_size: self.min_size,
        }
    }

    /// Widget center in widget-local coordinates
    pub fn center(&self) -> Pos2 {
        Pos2::new(
            self.bounds.width as f32 / 2.0,
            self.bounds.height as f32 / 2.0,
        )
    }

    /// Where the stick is drawn: follows the offset only while grabbed
    pub fn stick_center(&self) -> Pos2 {
        if self.grabbed {
            self.center() + self.stick_offset
        } else {
            self.center()
        }
    }

    /// Register a `(direction, magnitude)` handler
    pub fn subscribe<F>(&mut self, handler: F) -> SubscriptionId
    where
        F: FnMut(Direction, f32) + 'static,
    {
        self.observers.subscribe(handler)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Returns whether a repaint was requested since the last call, and
    /// clears the request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.repaint_requested)
    }

    /// Lay the widget out in `bounds`, rescaling both radii proportionally so
    /// they fit within half the shorter side.
    pub fn resize(&mut self, bounds: Bounds) -> Geometry {
        let (pivot_radius, stick_radius) =
            proportional_radii(self.pivot_radius, self.stick_radius, bounds);

        debug!(
            "joystick resized to {}x{}: pivot {} -> {}, stick {} -> {}",
            bounds.width,
            bounds.height,
            self.pivot_radius,
            pivot_radius,
            self.stick_radius,
            stick_radius
        );

        self.pivot_radius = pivot_radius;
        self.stick_radius = stick_radius;
        self.bounds = bounds;
        self.min_size = footprint(pivot_radius, stick_radius);
        self.stick_offset = bound_to_radius(self.stick_offset, pivot_radius as f32);
        self.repaint_requested = true;

        self.geometry()
    }

    /// Change the pivot radius. Zero is ignored and returns `None`; values
    /// above [`MAX_RADIUS`] are capped.
    ///
    /// The bounds shrink or grow to the new footprint around their previous
    /// center.
    pub fn set_pivot_radius(&mut self, radius: u32) -> Option<Geometry> {
        if radius == 0 {
            debug!("ignoring zero pivot radius");
            return None;
        }
        self.pivot_radius = cap_radius(radius, RadiusKind::Pivot);
        Some(self.recenter_footprint())
    }

    /// Change the stick radius. Zero is ignored and returns `None`; values
    /// above [`MAX_RADIUS`] are capped.
    pub fn set_stick_radius(&mut self, radius: u32) -> Option<Geometry> {
        if radius == 0 {
            debug!("ignoring zero stick radius");
            return None;
        }
        self.stick_radius = cap_radius(radius, RadiusKind::Stick);
        Some(self.recenter_footprint())
    }

    fn recenter_footprint(&mut self) -> Geometry {
        let side = footprint(self.pivot_radius, self.stick_radius);
        self.bounds = Bounds::centered_square(self.bounds.center(), side);
        self.min_size = side;
        self.stick_offset = bound_to_radius(self.stick_offset, self.pivot_radius as f32);
        self.repaint_requested = true;

        debug!(
            "joystick radii set to pivot {}, stick {} (footprint {})",
            self.pivot_radius, self.stick_radius, side
        );

        self.geometry()
    }

    /// Draw the pivot outline and the filled stick
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        canvas.stroke_circle(
            self.center(),
            self.pivot_radius as f32,
            self.style.outline_width,
            self.style.outline,
        );
        canvas.fill_circle(
            self.stick_center(),
            self.stick_radius as f32,
            self.style.stick,
        );
    }

    /// Grab the stick if `pos` falls within its circle
    pub fn on_pointer_down(&mut self, pos: Pos2) {
        self.grabbed = pos.distance(self.stick_center()) <= self.stick_radius as f32;
        debug!(
            "pointer down at ({:.1}, {:.1}), grabbed: {}",
            pos.x, pos.y, self.grabbed
        );
    }

    /// Move the stick towards `pos` (clamped to the pivot) while grabbed.
    ///
    /// Observers are notified on every call, grabbed or not.
    pub fn on_pointer_drag(&mut self, pos: Pos2) -> StickEvent {
        if self.grabbed {
            self.stick_offset = bound_to_radius(pos - self.center(), self.pivot_radius as f32);
            self.repaint_requested = true;
            trace!(
                "stick offset ({:.1}, {:.1})",
                self.stick_offset.x,
                self.stick_offset.y
            );
        }

        let event = StickEvent::from(self.compute_direction());
        self.observers.notify(event);
        event
    }

    /// Release the stick, recenter it and emit the neutral event
    pub fn on_pointer_up(&mut self) -> StickEvent {
        if self.grabbed {
            debug!("stick released");
        }
        self.grabbed = false;
        self.stick_offset = Vec2::ZERO;
        self.repaint_requested = true;

        self.observers.notify(StickEvent::RELEASED);
        StickEvent::RELEASED
    }

    /// Quantized direction and normalized magnitude of the current offset.
    ///
    /// `(Center, 0.0)` while not grabbed or when the stick sits exactly at
    /// the center.
    pub fn compute_direction(&self) -> (Direction, f32) {
        if !self.grabbed {
            return (Direction::Center, 0.0);
        }

        let distance = self.stick_offset.length();
        if distance == 0.0 {
            return (Direction::Center, 0.0);
        }

        let center = self.center();
        let angle = line_angle(center, center + self.stick_offset);
        let magnitude = (distance / self.pivot_radius as f32).min(1.0);

        (Direction::from_angle(angle), magnitude)
    }
}

fn check_radius(value: u32, kind: RadiusKind) -> Result<(), JoystickError> {
    if value == 0 {
        return Err(JoystickError::ZeroRadius(kind));
    }
    if value > MAX_RADIUS {
        return Err(JoystickError::RadiusTooLarge {
            kind,
            value,
            max: MAX_RADIUS,
        });
    }
    Ok(())
}

fn cap_radius(value: u32, kind: RadiusKind) -> u32 {
    if value > MAX_RADIUS {
        debug!("capping {} radius {} to {}", kind, value, MAX_RADIUS);
        MAX_RADIUS
    } else {
        value
    }
}

impl Default for Joystick {
    fn default() -> Self {
        Self::with_radii(DEFAULT_PIVOT_RADIUS, DEFAULT_STICK_RADIUS)
    }
}

#[cfg(test)]
mod tests;
