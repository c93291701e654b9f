//! Protocol constants for STARLIGHT ARGB LED strip controllers.
//!
//! All values were recovered from the vendor's Android app. Frames are
//! written to a single characteristic with write-without-response; the
//! device never answers.
//!
//! ## Frame layout
//!
//! ```text
//! HEADER(1) | OPCODE(1) | LEN_CLASS(1) | PAYLOAD(n) | FOOTER(1)
//! ```
//!
//! The length class is the value the vendor app hard-codes per command. It
//! matches the payload length for some commands and not for others (the
//! color command declares 6 but carries 9 bytes), so it must be sent
//! verbatim and never used to bound the payload.

// ── Framing ──

/// First byte of every frame (`-68` as a Java byte).
pub const HEADER: u8 = 0xBC;

/// Last byte of every frame.
pub const FOOTER: u8 = 0x55;

/// Header + opcode + length class + footer.
pub const FRAME_OVERHEAD: usize = 4;

// ── Opcodes ──

pub const OP_POWER: u8 = 0x01;
pub const OP_COLOR: u8 = 0x04;
pub const OP_BRIGHTNESS: u8 = 0x05;
pub const OP_MODE: u8 = 0x06;
pub const OP_DIRECTION: u8 = 0x07;
pub const OP_SPEED: u8 = 0x08;
pub const OP_TEMPERATURE: u8 = 0x13;

// ── Length classes ──

pub const LEN_POWER: u8 = 0x01;
pub const LEN_COLOR: u8 = 0x06;
pub const LEN_BRIGHTNESS: u8 = 0x06;
pub const LEN_MODE: u8 = 0x02;
pub const LEN_DIRECTION: u8 = 0x01;
pub const LEN_SPEED: u8 = 0x01;
pub const LEN_TEMPERATURE: u8 = 0x02;

// ── Power flags ──

/// Payload of the app's "power off" action. Lights the strip.
pub const POWER_FLAG_OFF: u8 = 0x00;

/// Payload of the app's "power on" action. Blanks the strip.
pub const POWER_FLAG_ON: u8 = 0x01;

// ── Field ranges and divisors ──

/// Hue and mode index are split as `(v / 255, v % 255)`.
pub const SPLIT_DIVISOR_255: u32 = 255;

/// Brightness and temperature are split as `(v / 256, v % 256)`.
pub const SPLIT_DIVISOR_256: u32 = 256;

/// Saturation/brightness field sent with non-white RGB colors (1000).
pub const COLOR_FULL_FIELD: [u8; 2] = [0x03, 0xE8];

/// Saturation ceiling in wheel mode. Not 1000: the firmware rounds
/// differently from the generic HSV scale.
pub const WHEEL_SAT_MAX: u16 = 997;

/// Generic HSV scale for saturation and value.
pub const HSV_SCALE: u16 = 1000;

/// Hue range in degrees.
pub const HUE_MAX: u16 = 360;

pub const BRIGHTNESS_MAX: i32 = 1000;

/// Color temperature range: 0 is the warmest white, 360 the coolest.
pub const TEMPERATURE_MAX: i32 = 360;

/// Highest animation index offered by the vendor app.
pub const MODE_MAX: u16 = 117;

/// Index the firmware does not implement; the app substitutes the next one.
pub const MODE_GAP: u16 = 112;

/// Indices at or above this are shifted by [`MODE_SHIFT`].
pub const MODE_SHIFT_FROM: u16 = 113;

pub const MODE_SHIFT: u16 = 2;

// ── GATT ──

/// Write characteristic on the controller's vendor service.
pub const WRITE_CHARACTERISTIC_UUID: &str = "0000fff3-0000-1000-8000-00805f9b34fb";

/// Substring of the advertised name used to pick the controller during a scan.
pub const DEVICE_NAME: &str = "STARLIGHT";
