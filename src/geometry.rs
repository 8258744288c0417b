//! 2D geometry helpers for the joystick control.
//!
//! Pointer math runs in widget-local screen coordinates: the origin is the
//! top-left corner and y grows downwards. Layout math (bounds, radii) uses
//! integers, matching the pixel grid the host lays widgets out on.
//!
//! # Key Functions
//!
//! - [`line_angle`]: counter-clockwise angle of a line, in degrees
//! - [`bound_to_radius`]: clamp an offset into the pivot circle
//! - [`proportional_radii`]: rescale both radii to fit new bounds

use egui::{Pos2, Vec2};

/// Smallest pivot radius a resize may produce
pub const MIN_PIVOT_RADIUS: u32 = 5;

/// Smallest stick radius a resize may produce
pub const MIN_STICK_RADIUS: u32 = 2;

/// Largest radius a joystick accepts. Keeps the footprint and every bounds
/// coordinate well inside `i32`.
pub const MAX_RADIUS: u32 = 1 << 20;

/// Integer rectangle in the parent's coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl Bounds {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square of `side` pixels centered on `center`
    pub fn centered_square(center: (i32, i32), side: u32) -> Self {
        let half = i32::try_from(side / 2).unwrap_or(i32::MAX);
        Self::new(
            center.0.saturating_sub(half),
            center.1.saturating_sub(half),
            side,
            side,
        )
    }

    /// Integer center point
    pub fn center(&self) -> (i32, i32) {
        let half = |extent: u32| i32::try_from(extent / 2).unwrap_or(i32::MAX);
        (
            self.x.saturating_add(half(self.width)),
            self.y.saturating_add(half(self.height)),
        )
    }

    /// Half of the shorter side
    pub fn half_extent(&self) -> u32 {
        self.width.min(self.height) / 2
    }
}

/// Derived layout after a resize or radius change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub bounds: Bounds,
    pub pivot_radius: u32,
    pub stick_radius: u32,
    /// Side of the minimum square footprint, `2 * (pivot + stick)`
    pub min_size: u32,
}

/// Side of the smallest square that fits the pivot plus an overhanging stick
pub fn footprint(pivot_radius: u32, stick_radius: u32) -> u32 {
    pivot_radius.saturating_add(stick_radius).saturating_mul(2)
}

/// Angle of the line `from -> to` in degrees.
///
/// Measured counter-clockwise from the positive x-axis, with screen y
/// pointing down: a point straight above `from` is at 90°, straight below at
/// 270°. The result is always in `[0, 360)`.
///
/// # Example
/// ```
/// use egui::pos2;
/// use joystick_widget::geometry::line_angle;
///
/// let center = pos2(50.0, 50.0);
/// assert_eq!(line_angle(center, pos2(60.0, 50.0)), 0.0);
/// assert!((line_angle(center, pos2(50.0, 40.0)) - 90.0).abs() < 1e-4);
/// ```
pub fn line_angle(from: Pos2, to: Pos2) -> f32 {
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let theta = (-dy).atan2(dx).to_degrees();
    let normalized = if theta < 0.0 { theta + 360.0 } else { theta };

    // -0.0000001 wraps to 360.0 in f32
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Clamp an offset so its length does not exceed `radius`.
///
/// Offsets already inside the circle are returned unchanged; longer ones are
/// rescaled to exactly `radius` along the same direction.
pub fn bound_to_radius(offset: Vec2, radius: f32) -> Vec2 {
    let length = offset.length();
    if length > radius {
        offset * (radius / length)
    } else {
        offset
    }
}

/// Rescale both radii so their sum fits within half the shorter side of
/// `bounds`.
///
/// Integer arithmetic with floor division. A zero radius sum is treated as 1,
/// results are floored at [`MIN_PIVOT_RADIUS`] / [`MIN_STICK_RADIUS`] and
/// capped at [`MAX_RADIUS`].
///
/// # Example
/// ```
/// use joystick_widget::geometry::{proportional_radii, Bounds};
///
/// let radii = proportional_radii(100, 40, Bounds::new(0, 0, 140, 140));
/// assert_eq!(radii, (50, 20));
/// ```
pub fn proportional_radii(pivot_radius: u32, stick_radius: u32, bounds: Bounds) -> (u32, u32) {
    let bound = u64::from(bounds.half_extent());
    let max_distance = match u64::from(pivot_radius) + u64::from(stick_radius) {
        0 => 1,
        sum => sum,
    };

    let scale = |radius: u32, floor: u32| -> u32 {
        match u64::from(radius) * bound / max_distance {
            0 => floor,
            // radius * bound / sum <= bound, and bound fits in u32
            scaled => (scaled as u32).min(MAX_RADIUS),
        }
    };

    (
        scale(pivot_radius, MIN_PIVOT_RADIUS),
        scale(stick_radius, MIN_STICK_RADIUS),
    )
}
