//! Frame encoder and decoder.
//!
//! Every encoder is a total, pure function: out-of-range input is clamped
//! or wrapped per field, never rejected. Field splits deliberately use
//! different divisors (255 for hue, saturation and mode; 256 for brightness
//! and temperature) because that is what the firmware decodes.

use std::fmt;

use crate::color::{Rgb, rgb_to_hsv, wheel_to_rgb};
use crate::command::{Command, Direction, PowerFlag};
use crate::protocol::*;

// ── Error type ──

/// Errors from decoding raw bytes back into a [`Frame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Fewer bytes than header + opcode + length class + footer.
    TooShort(usize),
    BadHeader(u8),
    BadFooter(u8),
    UnknownOpcode(u8),
    /// Text that is not a sequence of hex byte pairs.
    InvalidHex(String),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::TooShort(n) => {
                write!(f, "Frame too short: {n} bytes (minimum {FRAME_OVERHEAD})")
            }
            FrameError::BadHeader(b) => {
                write!(f, "Bad frame header: 0x{b:02X} (expected 0x{HEADER:02X})")
            }
            FrameError::BadFooter(b) => {
                write!(f, "Bad frame footer: 0x{b:02X} (expected 0x{FOOTER:02X})")
            }
            FrameError::UnknownOpcode(b) => write!(f, "Unknown opcode: 0x{b:02X}"),
            FrameError::InvalidHex(e) => write!(f, "Invalid hex: {e}"),
        }
    }
}

impl std::error::Error for FrameError {}

// ── Opcode ──

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Power,
    Color,
    Brightness,
    Mode,
    Direction,
    Speed,
    Temperature,
}

impl Opcode {
    pub fn byte(self) -> u8 {
        match self {
            Opcode::Power => OP_POWER,
            Opcode::Color => OP_COLOR,
            Opcode::Brightness => OP_BRIGHTNESS,
            Opcode::Mode => OP_MODE,
            Opcode::Direction => OP_DIRECTION,
            Opcode::Speed => OP_SPEED,
            Opcode::Temperature => OP_TEMPERATURE,
        }
    }

    pub fn from_byte(b: u8) -> Option<Opcode> {
        match b {
            OP_POWER => Some(Opcode::Power),
            OP_COLOR => Some(Opcode::Color),
            OP_BRIGHTNESS => Some(Opcode::Brightness),
            OP_MODE => Some(Opcode::Mode),
            OP_DIRECTION => Some(Opcode::Direction),
            OP_SPEED => Some(Opcode::Speed),
            OP_TEMPERATURE => Some(Opcode::Temperature),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Opcode::Power => "power",
            Opcode::Color => "color",
            Opcode::Brightness => "brightness",
            Opcode::Mode => "mode",
            Opcode::Direction => "direction",
            Opcode::Speed => "speed",
            Opcode::Temperature => "temperature",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── Frame ──

/// A complete protocol message. Header and footer are implicit: they are
/// fixed for every frame and added by [`Frame::to_bytes`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Frame {
    opcode: Opcode,
    length_class: u8,
    payload: Vec<u8>,
}

impl Frame {
    fn new(opcode: Opcode, length_class: u8, payload: Vec<u8>) -> Self {
        Frame {
            opcode,
            length_class,
            payload,
        }
    }

    pub fn opcode(&self) -> Opcode {
        self.opcode
    }

    /// Length byte as sent by the vendor app; not necessarily the payload length.
    pub fn length_class(&self) -> u8 {
        self.length_class
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    /// Number of bytes on the wire.
    pub fn wire_len(&self) -> usize {
        FRAME_OVERHEAD + self.payload.len()
    }

    /// Wire representation: `HEADER | opcode | length class | payload | FOOTER`.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.wire_len());
        out.push(HEADER);
        out.push(self.opcode.byte());
        out.push(self.length_class);
        out.extend_from_slice(&self.payload);
        out.push(FOOTER);
        out
    }

    /// Space-separated upper-case hex of the wire bytes, e.g. `BC 01 01 00 55`.
    pub fn to_hex(&self) -> String {
        format_hex(&self.to_bytes())
    }

    /// Parse wire bytes back into a frame.
    ///
    /// The payload is everything between the length class and the footer;
    /// the length class is kept as-is and not checked against it.
    pub fn decode(bytes: &[u8]) -> Result<Frame, FrameError> {
        if bytes.len() < FRAME_OVERHEAD {
            return Err(FrameError::TooShort(bytes.len()));
        }
        if bytes[0] != HEADER {
            return Err(FrameError::BadHeader(bytes[0]));
        }
        let last = bytes[bytes.len() - 1];
        if last != FOOTER {
            return Err(FrameError::BadFooter(last));
        }
        let opcode = Opcode::from_byte(bytes[1]).ok_or(FrameError::UnknownOpcode(bytes[1]))?;
        Ok(Frame::new(opcode, bytes[2], bytes[3..bytes.len() - 1].to_vec()))
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Format bytes as space-separated upper-case hex.
pub fn format_hex(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse hex text into bytes.
///
/// Tokens may be separated by whitespace or commas and may carry a `0x`
/// prefix; a token may hold several bytes (`"BC0101"`).
pub fn parse_hex(s: &str) -> Result<Vec<u8>, FrameError> {
    let mut out = Vec::new();
    for token in s.split(|c: char| c.is_whitespace() || c == ',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let digits = token
            .strip_prefix("0x")
            .or_else(|| token.strip_prefix("0X"))
            .unwrap_or(token);
        if digits.is_empty() || digits.len() % 2 != 0 {
            return Err(FrameError::InvalidHex(format!(
                "'{token}' is not a whole number of bytes"
            )));
        }
        for i in (0..digits.len()).step_by(2) {
            let pair = digits.get(i..i + 2).ok_or_else(|| {
                FrameError::InvalidHex(format!("'{token}' contains non-ASCII characters"))
            })?;
            let byte = u8::from_str_radix(pair, 16)
                .map_err(|_| FrameError::InvalidHex(format!("'{pair}' in '{token}'")))?;
            out.push(byte);
        }
    }
    if out.is_empty() {
        return Err(FrameError::InvalidHex("no bytes".into()));
    }
    Ok(out)
}

// ── Field helpers ──

/// Split into `(value / divisor, value % divisor)`, each truncated to a byte
/// like the app's `(byte)` casts.
fn split(value: u32, divisor: u32) -> [u8; 2] {
    [(value / divisor) as u8, (value % divisor) as u8]
}

/// Apply the firmware's animation-table gap: 112 becomes 113 and every
/// index from 113 upward moves up by two.
pub fn remap_mode(index: u16) -> u32 {
    let index = u32::from(index);
    if index == u32::from(MODE_GAP) {
        u32::from(MODE_SHIFT_FROM)
    } else if index >= u32::from(MODE_SHIFT_FROM) {
        index + u32::from(MODE_SHIFT)
    } else {
        index
    }
}

// ── Encoders ──

pub fn encode_power(flag: PowerFlag) -> Frame {
    let byte = match flag {
        PowerFlag::Off => POWER_FLAG_OFF,
        PowerFlag::On => POWER_FLAG_ON,
    };
    Frame::new(Opcode::Power, LEN_POWER, vec![byte])
}

/// Direct RGB color. Hue comes from the RGB→HSV conversion; pure white
/// zeroes the saturation field, every other color sends 1000.
pub fn encode_color(rgb: Rgb) -> Frame {
    let hsv = rgb_to_hsv(rgb);
    let [hue_hi, hue_lo] = split(u32::from(hsv.hue), SPLIT_DIVISOR_255);
    let [sat_hi, sat_lo] = if rgb.is_white() {
        [0x00, 0x00]
    } else {
        COLOR_FULL_FIELD
    };
    Frame::new(
        Opcode::Color,
        LEN_COLOR,
        vec![hue_hi, hue_lo, sat_hi, sat_lo, 0x00, 0x00, rgb.r, rgb.g, rgb.b],
    )
}

/// Color-wheel selection. Hue passes through; saturation is clamped to 997.
/// The RGB tail is derived from hue/saturation for firmware that reads it.
pub fn encode_color_wheel(hue: u16, sat: u16) -> Frame {
    let sat = sat.min(WHEEL_SAT_MAX);
    let rgb = wheel_to_rgb(hue, sat);
    let [hue_hi, hue_lo] = split(u32::from(hue), SPLIT_DIVISOR_255);
    let [sat_hi, sat_lo] = split(u32::from(sat), SPLIT_DIVISOR_255);
    Frame::new(
        Opcode::Color,
        LEN_COLOR,
        vec![hue_hi, hue_lo, sat_hi, sat_lo, 0x00, 0x00, rgb.r, rgb.g, rgb.b],
    )
}

/// Brightness, clamped to 0-1000.
pub fn encode_brightness(brightness: i32) -> Frame {
    let b = brightness.clamp(0, BRIGHTNESS_MAX) as u32;
    let [hi, lo] = split(b, SPLIT_DIVISOR_256);
    Frame::new(
        Opcode::Brightness,
        LEN_BRIGHTNESS,
        vec![hi, lo, 0x00, 0x00, 0x00, 0x00],
    )
}

/// White color temperature, clamped to 0 (warm) - 360 (cool).
pub fn encode_temperature(temperature: i32) -> Frame {
    let t = temperature.clamp(0, TEMPERATURE_MAX) as u32;
    Frame::new(
        Opcode::Temperature,
        LEN_TEMPERATURE,
        split(t, SPLIT_DIVISOR_256).to_vec(),
    )
}

/// Built-in animation by index. Not range-checked; see [`remap_mode`].
pub fn encode_mode(index: u16) -> Frame {
    Frame::new(
        Opcode::Mode,
        LEN_MODE,
        split(remap_mode(index), SPLIT_DIVISOR_255).to_vec(),
    )
}

/// Animation speed. Only the low byte is sent, so 256 wraps to 0.
pub fn encode_speed(speed: i32) -> Frame {
    Frame::new(Opcode::Speed, LEN_SPEED, vec![(speed & 0xFF) as u8])
}

pub fn encode_direction(direction: Direction) -> Frame {
    let byte = if direction.is_reverse() { 0x01 } else { 0x00 };
    Frame::new(Opcode::Direction, LEN_DIRECTION, vec![byte])
}

/// Encode any [`Command`].
pub fn encode(command: &Command) -> Frame {
    match *command {
        Command::Power(flag) => encode_power(flag),
        Command::Color(rgb) => encode_color(rgb),
        Command::ColorWheel { hue, sat } => encode_color_wheel(hue, sat),
        Command::Brightness(b) => encode_brightness(b),
        Command::Temperature(t) => encode_temperature(t),
        Command::Mode(m) => encode_mode(m),
        Command::Speed(s) => encode_speed(s),
        Command::Direction(d) => encode_direction(d),
    }
}
