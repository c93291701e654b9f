//! Lighting commands understood by the controller.
//!
//! Each variant carries only what its frame needs; [`crate::frame::encode`]
//! maps every variant to exactly one frame shape.

use std::fmt;

use crate::color::Rgb;

/// Power flag as named by the vendor app.
///
/// The naming is inverted on the wire: [`PowerFlag::Off`] sends `0x00`,
/// which lights the strip, and [`PowerFlag::On`] sends `0x01`, which
/// blanks it. The names follow the app so captured traffic lines up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerFlag {
    Off,
    On,
}

/// Animation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    Forward,
    Reverse,
}

impl Direction {
    pub fn is_reverse(self) -> bool {
        self == Direction::Reverse
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Power(PowerFlag),
    /// Direct RGB; hue is derived from the color.
    Color(Rgb),
    /// Hue 0-360 and saturation 0-997 at full value.
    ColorWheel { hue: u16, sat: u16 },
    /// 0-1000, clamped.
    Brightness(i32),
    /// 0 (warm) to 360 (cool), clamped.
    Temperature(i32),
    /// Animation index as shown in the app (1-117), not validated.
    Mode(u16),
    /// Low byte only.
    Speed(i32),
    Direction(Direction),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Power(PowerFlag::Off) => write!(f, "power off"),
            Command::Power(PowerFlag::On) => write!(f, "power on"),
            Command::Color(rgb) => write!(f, "color {rgb}"),
            Command::ColorWheel { hue, sat } => write!(f, "wheel H={hue} S={sat}/997"),
            Command::Brightness(b) => write!(f, "brightness {b}"),
            Command::Temperature(t) => write!(f, "temperature {t}"),
            Command::Mode(m) => write!(f, "mode {m}"),
            Command::Speed(s) => write!(f, "speed {s}"),
            Command::Direction(Direction::Forward) => write!(f, "direction normal"),
            Command::Direction(Direction::Reverse) => write!(f, "direction reverse"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_commands() {
        assert_eq!(Command::Power(PowerFlag::On).to_string(), "power on");
        assert_eq!(
            Command::Color(Rgb::new(255, 0, 0)).to_string(),
            "color RGB(255,0,0)"
        );
        assert_eq!(
            Command::ColorWheel { hue: 180, sat: 997 }.to_string(),
            "wheel H=180 S=997/997"
        );
        assert_eq!(
            Command::Direction(Direction::Reverse).to_string(),
            "direction reverse"
        );
    }

    #[test]
    fn direction_default_is_forward() {
        assert_eq!(Direction::default(), Direction::Forward);
        assert!(!Direction::Forward.is_reverse());
        assert!(Direction::Reverse.is_reverse());
    }
}
