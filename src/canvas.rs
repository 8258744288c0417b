//! Drawing surface abstraction and joystick colors
//!
//! The joystick only ever draws two circles, so a host needs to provide just
//! these two primitives. Coordinates are widget-local.

use egui::Pos2;
use serde::{Deserialize, Serialize};

/// 8-bit RGB color, serialized as `[r, g, b]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
}

impl From<Rgb> for egui::Color32 {
    fn from(Rgb(r, g, b): Rgb) -> Self {
        egui::Color32::from_rgb(r, g, b)
    }
}

/// Minimal set of drawing primitives the joystick renders with
pub trait Canvas {
    /// Outline circle
    fn stroke_circle(&mut self, center: Pos2, radius: f32, width: f32, color: Rgb);

    /// Solid circle
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Rgb);
}

/// Colors and stroke used when rendering
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct JoystickStyle {
    #[serde(default = "default_color")]
    pub outline: Rgb,
    #[serde(default = "default_outline_width")]
    pub outline_width: f32,
    #[serde(default = "default_color")]
    pub stick: Rgb,
}

impl Default for JoystickStyle {
    fn default() -> Self {
        Self {
            outline: default_color(),
            outline_width: default_outline_width(),
            stick: default_color(),
        }
    }
}

fn default_color() -> Rgb {
    Rgb::BLACK
}

fn default_outline_width() -> f32 {
    1.0
}
