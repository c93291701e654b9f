//! Colors: RGB/HSV types, device-unit conversions, parsing and presets.

mod convert;
mod parse;

use serde::{Deserialize, Serialize};

pub use convert::{hsv_to_rgb, rgb_to_hsv, wheel_to_rgb};
pub use parse::{Preset, format_color, parse_color};

/// An RGB color, one byte per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Build a color from unchecked integers, clamping each channel to 0-255.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        let ch = |v: i32| v.clamp(0, 255) as u8;
        Rgb::new(ch(r), ch(g), ch(b))
    }

    /// All three channels at full scale.
    pub fn is_white(&self) -> bool {
        *self == Rgb::WHITE
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RGB({},{},{})", self.r, self.g, self.b)
    }
}

/// HSV in device units: hue in degrees (0-360), saturation and value in
/// thousandths (0-1000).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct HsvColor {
    pub hue: u16,
    pub sat: u16,
    pub val: u16,
}

impl HsvColor {
    pub const fn new(hue: u16, sat: u16, val: u16) -> Self {
        HsvColor { hue, sat, val }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamped_limits_each_channel() {
        assert_eq!(Rgb::clamped(-5, 128, 300), Rgb::new(0, 128, 255));
        assert_eq!(Rgb::clamped(i32::MIN, i32::MAX, 0), Rgb::new(0, 255, 0));
    }

    #[test]
    fn white_detection() {
        assert!(Rgb::new(255, 255, 255).is_white());
        assert!(Rgb::clamped(999, 256, 255).is_white());
        assert!(!Rgb::new(255, 255, 254).is_white());
    }

    #[test]
    fn display_rgb() {
        assert_eq!(Rgb::new(1, 2, 3).to_string(), "RGB(1,2,3)");
    }

    #[test]
    fn colors_serialize_as_plain_objects() {
        let json = serde_json::to_value(Rgb::new(255, 165, 0)).unwrap();
        assert_eq!(json, serde_json::json!({ "r": 255, "g": 165, "b": 0 }));

        let hsv: HsvColor = serde_json::from_str(r#"{"hue":300,"sat":1000,"val":501}"#).unwrap();
        assert_eq!(hsv, HsvColor::new(300, 1000, 501));
    }
}
