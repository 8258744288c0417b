//! Direction quantization for stick positions
//!
//! Maps an angle in degrees to one of four 90°-wide quadrants. Ranges are
//! half-open so every angle lands in exactly one quadrant:
//!
//! | Angle (deg)            | Direction |
//! |------------------------|-----------|
//! | `[45, 135)`            | Up        |
//! | `[135, 225)`           | Left      |
//! | `[225, 315)`           | Down      |
//! | `[315, 360) ∪ [0, 45)` | Right     |

use std::fmt;

/// Quantized stick direction.
///
/// Integer codes match the values emitted to observers of the original
/// widget (`CENTER=-1, LEFT=0, RIGHT=1, UP=2, DOWN=3`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Center,
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Integer code for this direction
    pub fn code(self) -> i32 {
        match self {
            Direction::Center => -1,
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }

    /// Parse an integer code back into a direction
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            -1 => Some(Direction::Center),
            0 => Some(Direction::Left),
            1 => Some(Direction::Right),
            2 => Some(Direction::Up),
            3 => Some(Direction::Down),
            _ => None,
        }
    }

    /// Quantize an angle in degrees into a quadrant.
    ///
    /// Expects values in `[0, 360)` as produced by
    /// [`line_angle`](crate::geometry::line_angle). Anything outside the
    /// Up/Left/Down ranges falls through to `Right`.
    ///
    /// # Example
    /// ```
    /// use joystick_widget::Direction;
    ///
    /// assert_eq!(Direction::from_angle(45.0), Direction::Up);
    /// assert_eq!(Direction::from_angle(135.0), Direction::Left);
    /// assert_eq!(Direction::from_angle(359.999), Direction::Right);
    /// ```
    pub fn from_angle(degrees: f32) -> Self {
        if (45.0..135.0).contains(&degrees) {
            Direction::Up
        } else if (135.0..225.0).contains(&degrees) {
            Direction::Left
        } else if (225.0..315.0).contains(&degrees) {
            Direction::Down
        } else {
            Direction::Right
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Center => "CENTER",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
            Direction::Up => "UP",
            Direction::Down => "DOWN",
        };
        f.write_str(name)
    }
}

/// A single `(direction, magnitude)` notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StickEvent {
    pub direction: Direction,
    /// Normalized distance from center in `[0.0, 1.0]`
    pub magnitude: f32,
}

impl StickEvent {
    /// Emitted when the pointer lets go of the stick
    pub const RELEASED: StickEvent = StickEvent {
        direction: Direction::Center,
        magnitude: 0.0,
    };

    pub fn new(direction: Direction, magnitude: f32) -> Self {
        Self {
            direction,
            magnitude,
        }
    }
}

impl From<(Direction, f32)> for StickEvent {
    fn from((direction, magnitude): (Direction, f32)) -> Self {
        Self::new(direction, magnitude)
    }
}

impl fmt::Display for StickEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:.3}", self.direction, self.magnitude)
    }
}
