//! Error types for the joystick control

use thiserror::Error;

/// Which of the two radii a value refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RadiusKind {
    Pivot,
    Stick,
}

impl std::fmt::Display for RadiusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RadiusKind::Pivot => f.write_str("pivot"),
            RadiusKind::Stick => f.write_str("stick"),
        }
    }
}

/// Invalid construction parameters for a [`Joystick`](crate::Joystick)
#[derive(Debug, Error, PartialEq, Eq)]
pub enum JoystickError {
    #[error("{0} radius must be greater than zero")]
    ZeroRadius(RadiusKind),
    #[error("{kind} radius {value} exceeds the maximum of {max}")]
    RadiusTooLarge {
        kind: RadiusKind,
        value: u32,
        max: u32,
    },
}
