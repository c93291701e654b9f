//! `decode` subcommand: parse hex back into a frame and explain its fields.

use super::{Frame, FrameOutput, Result, frame, kv, kv_width, print_json};
use starlight_lib::frame::Opcode;

fn hi_lo(payload: &[u8], divisor: u32) -> Option<u32> {
    match payload {
        [hi, lo, ..] => Some(u32::from(*hi) * divisor + u32::from(*lo)),
        _ => None,
    }
}

/// Human-readable reading of the payload, if it has the expected shape.
pub(super) fn describe(frame: &Frame) -> Option<String> {
    let p = frame.payload();
    match frame.opcode() {
        Opcode::Power => p.first().map(|b| match b {
            0x00 => "power flag 0x00 (lights the strip)".to_string(),
            0x01 => "power flag 0x01 (blanks the strip)".to_string(),
            other => format!("power flag 0x{other:02X} (unknown)"),
        }),
        Opcode::Color => match p {
            [hh, hl, sh, sl, _, _, r, g, b, ..] => Some(format!(
                "hue {} sat {} rgb({r},{g},{b})",
                u32::from(*hh) * 255 + u32::from(*hl),
                u32::from(*sh) * 255 + u32::from(*sl),
            )),
            _ => None,
        },
        Opcode::Brightness => hi_lo(p, 256).map(|v| format!("brightness {v}")),
        Opcode::Temperature => hi_lo(p, 256).map(|v| format!("temperature {v}")),
        Opcode::Mode => hi_lo(p, 255).map(|v| format!("firmware mode {v}")),
        Opcode::Speed => p.first().map(|v| format!("speed {v}")),
        Opcode::Direction => p.first().map(|v| {
            if *v == 0 {
                "direction normal".to_string()
            } else {
                "direction reverse".to_string()
            }
        }),
    }
}

pub(super) fn cmd_decode(hex: &str, json: bool) -> Result<()> {
    let bytes = frame::parse_hex(hex)?;
    let decoded = Frame::decode(&bytes)?;
    let meaning = describe(&decoded);

    if json {
        let label = meaning.unwrap_or_else(|| decoded.opcode().name().to_string());
        return print_json(&FrameOutput::new(label, &decoded));
    }

    let w = kv_width(
        &["Opcode:", "Length class:", "Payload:", "Wire length:", "Meaning:"],
        &[],
    );
    kv(
        "Opcode:",
        format_args!("{} (0x{:02X})", decoded.opcode(), decoded.opcode().byte()),
        w,
    );
    kv("Length class:", decoded.length_class(), w);
    let payload = if decoded.payload().is_empty() {
        "(empty)".to_string()
    } else {
        frame::format_hex(decoded.payload())
    };
    kv("Payload:", payload, w);
    kv("Wire length:", decoded.wire_len(), w);
    if let Some(m) = meaning {
        kv("Meaning:", m, w);
    }
    Ok(())
}
