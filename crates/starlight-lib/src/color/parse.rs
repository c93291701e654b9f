//! Color parsing, formatting and the preset palette.

use super::Rgb;

/// Named colors offered by the vendor tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Red,
    Green,
    Blue,
    White,
    Yellow,
    Cyan,
    Magenta,
    Orange,
    Purple,
}

impl Preset {
    pub const ALL: [Preset; 9] = [
        Preset::Red,
        Preset::Green,
        Preset::Blue,
        Preset::White,
        Preset::Yellow,
        Preset::Cyan,
        Preset::Magenta,
        Preset::Orange,
        Preset::Purple,
    ];

    /// Order used by the color test sequence.
    pub const TEST_SEQUENCE: [Preset; 7] = [
        Preset::Red,
        Preset::Green,
        Preset::Blue,
        Preset::Yellow,
        Preset::Cyan,
        Preset::Magenta,
        Preset::White,
    ];

    pub fn rgb(self) -> Rgb {
        match self {
            Preset::Red => Rgb::new(255, 0, 0),
            Preset::Green => Rgb::new(0, 255, 0),
            Preset::Blue => Rgb::new(0, 0, 255),
            Preset::White => Rgb::new(255, 255, 255),
            Preset::Yellow => Rgb::new(255, 255, 0),
            Preset::Cyan => Rgb::new(0, 255, 255),
            Preset::Magenta => Rgb::new(255, 0, 255),
            Preset::Orange => Rgb::new(255, 165, 0),
            Preset::Purple => Rgb::new(128, 0, 128),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::Red => "red",
            Preset::Green => "green",
            Preset::Blue => "blue",
            Preset::White => "white",
            Preset::Yellow => "yellow",
            Preset::Cyan => "cyan",
            Preset::Magenta => "magenta",
            Preset::Orange => "orange",
            Preset::Purple => "purple",
        }
    }

    /// Single-letter shortcut used by the interactive shell.
    pub fn shortcut(self) -> char {
        match self {
            Preset::Red => 'r',
            Preset::Green => 'g',
            Preset::Blue => 'b',
            Preset::White => 'w',
            Preset::Yellow => 'y',
            Preset::Cyan => 'c',
            Preset::Magenta => 'm',
            Preset::Orange => 'o',
            Preset::Purple => 'p',
        }
    }

    /// Look up a preset by full name or shortcut, case-insensitively.
    pub fn from_name(s: &str) -> Option<Preset> {
        let s = s.trim().to_lowercase();
        Preset::ALL.into_iter().find(|p| {
            s == p.name() || (s.len() == 1 && s.starts_with(p.shortcut()))
        })
    }
}

/// Parse a color string into an [`Rgb`].
///
/// Accepts:
/// - Hex: `"#FF0000"`, `"FF0000"`, `"#ff0000"`
/// - Preset names: `"red"`, `"orange"`, ... (see [`Preset`]), plus `"off"`/`"black"`
pub fn parse_color(s: &str) -> crate::error::Result<Rgb> {
    let s = s.trim();

    match s.to_lowercase().as_str() {
        "off" | "black" => return Ok(Rgb::BLACK),
        name => {
            if name.len() > 1
                && let Some(preset) = Preset::from_name(name)
            {
                return Ok(preset.rgb());
            }
        }
    }

    let hex = s.strip_prefix('#').unwrap_or(s);
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(crate::StarlightError::Color(format!(
            "Invalid color: {s} (use #RRGGBB or a color name)"
        )));
    }
    let val = u32::from_str_radix(hex, 16)
        .map_err(|_| crate::StarlightError::Color(format!("Invalid hex color: {s}")))?;
    let [_, r, g, b] = val.to_be_bytes();
    Ok(Rgb::new(r, g, b))
}

/// Format a color as `#RRGGBB`.
pub fn format_color(rgb: Rgb) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.r, rgb.g, rgb.b)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Preset ──

    #[test]
    fn preset_lookup_by_name_and_shortcut() {
        assert_eq!(Preset::from_name("red"), Some(Preset::Red));
        assert_eq!(Preset::from_name("r"), Some(Preset::Red));
        assert_eq!(Preset::from_name("  Purple "), Some(Preset::Purple));
        assert_eq!(Preset::from_name("P"), Some(Preset::Purple));
        assert_eq!(Preset::from_name("x"), None);
        assert_eq!(Preset::from_name("chartreuse"), None);
    }

    #[test]
    fn preset_shortcuts_distinct() {
        for i in 0..Preset::ALL.len() {
            for j in (i + 1)..Preset::ALL.len() {
                assert_ne!(Preset::ALL[i].shortcut(), Preset::ALL[j].shortcut());
            }
        }
    }

    #[test]
    fn preset_orange_and_purple_values() {
        assert_eq!(Preset::Orange.rgb(), Rgb::new(255, 165, 0));
        assert_eq!(Preset::Purple.rgb(), Rgb::new(128, 0, 128));
    }

    #[test]
    fn test_sequence_ends_on_white() {
        assert_eq!(Preset::TEST_SEQUENCE.last(), Some(&Preset::White));
        assert_eq!(Preset::TEST_SEQUENCE.len(), 7);
    }

    // ── parse_color ──

    #[test]
    fn parse_named() {
        assert_eq!(parse_color("red").unwrap(), Rgb::new(255, 0, 0));
        assert_eq!(parse_color("WHITE").unwrap(), Rgb::WHITE);
        assert_eq!(parse_color("  cyan  ").unwrap(), Rgb::new(0, 255, 255));
    }

    #[test]
    fn parse_off_and_black() {
        assert_eq!(parse_color("off").unwrap(), Rgb::BLACK);
        assert_eq!(parse_color("black").unwrap(), Rgb::BLACK);
    }

    #[test]
    fn parse_shortcut_is_not_a_color_name() {
        // Single letters are shell shortcuts, not color names; "b" is not hex either.
        assert!(parse_color("b").is_err());
    }

    #[test]
    fn parse_hex_forms() {
        assert_eq!(parse_color("#FF8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(parse_color("ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(parse_color("#123456").unwrap(), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn parse_hex_six_letter_name_collision() {
        // "abcdef" is valid hex and not a preset name.
        assert_eq!(parse_color("abcdef").unwrap(), Rgb::new(0xAB, 0xCD, 0xEF));
    }

    #[test]
    fn parse_invalid() {
        assert!(parse_color("#FFF").is_err());
        assert!(parse_color("#FF000000").is_err());
        assert!(parse_color("#GGHHII").is_err());
        assert!(parse_color("chartreuse").is_err());
    }

    #[test]
    fn parse_rejects_sign_prefixed_hex() {
        // from_str_radix alone would read "+FFFFF" as 0x0FFFFF
        assert!(parse_color("+FFFFF").is_err());
        assert!(parse_color("#+FFFFF").is_err());
        assert!(parse_color("-FFFFF").is_err());
    }

    #[test]
    fn parse_error_message() {
        let err = parse_color("nope").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Color error: Invalid color: nope (use #RRGGBB or a color name)"
        );
    }

    // ── format_color ──

    #[test]
    fn format_basic() {
        assert_eq!(format_color(Rgb::new(255, 0, 0)), "#FF0000");
        assert_eq!(format_color(Rgb::BLACK), "#000000");
    }

    #[test]
    fn parse_format_roundtrip() {
        for preset in Preset::ALL {
            let hex = format_color(preset.rgb());
            assert_eq!(parse_color(&hex).unwrap(), preset.rgb(), "{}", preset.name());
        }
    }
}
