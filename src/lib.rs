//! Virtual joystick control
//!
//! A circular pivot with a draggable stick that reports a quantized
//! [`Direction`] and a normalized magnitude while the user drags it.
//!
//! The core ([`Joystick`]) knows nothing about any GUI toolkit: hosts feed it
//! widget-local pointer positions and a [`Canvas`] to draw on. The
//! [`widget`] module wires it into egui.

pub mod canvas;
pub mod config;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod joystick;
pub mod observer;
pub mod widget;

pub use canvas::{Canvas, JoystickStyle, Rgb};
pub use direction::{Direction, StickEvent};
pub use error::JoystickError;
pub use geometry::{Bounds, Geometry};
pub use joystick::{Joystick, DEFAULT_PIVOT_RADIUS, DEFAULT_STICK_RADIUS};
pub use observer::{StickObservers, SubscriptionId};
pub use widget::JoystickView;
