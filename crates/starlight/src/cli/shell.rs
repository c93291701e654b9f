//! `shell` subcommand: line-oriented interactive control.
//!
//! Each line is one command; malformed arguments print a usage hint and the
//! shell keeps reading. EOF or `q` end the session, Ctrl+C kills it at once.

use std::io::{BufRead, Write};

use super::send::{CliController, controller, run_color_test};
use super::{Config, Direction, LightCommand, PowerFlag, Preset, Result, Rgb};

const HELP: &str = "\
Commands:
  on              power flag 0x01
  off             power flag 0x00
  r g b w y c m o p
                  red green blue white yellow cyan magenta orange purple
  rgb R G B       set RGB color (e.g. rgb 255 100 50)
  bright N        brightness 0-1000 (e.g. bright 500)
  hsv H S         color wheel, H 0-360, S 0-997 (e.g. hsv 180 997)
  temp N          color temperature, 0 warm to 360 cool
  mode N          animation mode 1-117
  speed N         animation speed 0-255
  reverse         reverse animation direction
  normal          normal animation direction
  test            color test
  help            show this list
  q               quit (Ctrl+C also exits, even mid test)";

#[derive(Debug, PartialEq)]
pub(super) enum Line {
    Empty,
    Quit,
    Help,
    ColorTest,
    Send(LightCommand),
    /// Known command with bad arguments.
    Usage(&'static str),
    Unknown(String),
}

fn one_arg<T: std::str::FromStr>(args: &[&str]) -> Option<T> {
    match args {
        [a] => a.parse().ok(),
        _ => None,
    }
}

/// Parse one shell line. Matching is case-insensitive.
pub(super) fn parse_line(line: &str) -> Line {
    let lower = line.trim().to_lowercase();
    let words: Vec<&str> = lower.split_whitespace().collect();
    let Some((&head, args)) = words.split_first() else {
        return Line::Empty;
    };

    match (head, args) {
        ("q" | "quit" | "exit", []) => Line::Quit,
        ("help" | "?", []) => Line::Help,
        ("test", []) => Line::ColorTest,
        ("on", []) => Line::Send(LightCommand::Power(PowerFlag::On)),
        ("off", []) => Line::Send(LightCommand::Power(PowerFlag::Off)),
        ("reverse", []) => Line::Send(LightCommand::Direction(Direction::Reverse)),
        ("normal", []) => Line::Send(LightCommand::Direction(Direction::Forward)),
        ("rgb", _) => match args {
            [r, g, b] => match (r.parse(), g.parse(), b.parse()) {
                (Ok(r), Ok(g), Ok(b)) => Line::Send(LightCommand::Color(Rgb::clamped(r, g, b))),
                _ => Line::Usage("Usage: rgb R G B"),
            },
            _ => Line::Usage("Usage: rgb R G B"),
        },
        ("bright", _) => one_arg(args)
            .map(|v| Line::Send(LightCommand::Brightness(v)))
            .unwrap_or(Line::Usage("Usage: bright N (0-1000)")),
        ("hsv", _) => match args {
            [h, s] => match (h.parse(), s.parse()) {
                (Ok(hue), Ok(sat)) => Line::Send(LightCommand::ColorWheel { hue, sat }),
                _ => Line::Usage("Usage: hsv H S (H 0-360, S 0-997, e.g. hsv 0 997 for full red)"),
            },
            _ => Line::Usage("Usage: hsv H S (H 0-360, S 0-997, e.g. hsv 0 997 for full red)"),
        },
        ("temp", _) => one_arg(args)
            .map(|v| Line::Send(LightCommand::Temperature(v)))
            .unwrap_or(Line::Usage("Usage: temp N (0 warm to 360 cool)")),
        ("mode", _) => one_arg(args)
            .map(|v| Line::Send(LightCommand::Mode(v)))
            .unwrap_or(Line::Usage("Usage: mode N (1-117)")),
        ("speed", _) => one_arg(args)
            .map(|v| Line::Send(LightCommand::Speed(v)))
            .unwrap_or(Line::Usage("Usage: speed N (0-255)")),
        (name, []) if name.len() == 1 => match Preset::from_name(name) {
            Some(p) => Line::Send(LightCommand::Color(p.rgb())),
            None => Line::Unknown(line.trim().to_string()),
        },
        _ => Line::Unknown(line.trim().to_string()),
    }
}

/// Drive the shell over arbitrary input/output.
pub(super) fn run_shell<R: BufRead, W: Write>(
    input: R,
    out: &mut W,
    ctl: &CliController,
    config: &Config,
) -> Result<()> {
    writeln!(
        out,
        "{} shell (characteristic {}). Type `help` for commands, `q` to quit.",
        config.device_name,
        config.write_characteristic
    )?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Line::Empty => {}
            Line::Quit => break,
            Line::Help => writeln!(out, "{HELP}")?,
            Line::Usage(msg) => writeln!(out, "{msg}")?,
            Line::Unknown(cmd) => writeln!(out, "Unknown command: {cmd} (type `help`)")?,
            Line::Send(cmd) => match ctl.send(&cmd) {
                Ok(frame) => writeln!(out, "{cmd} -> {}", frame.to_hex())?,
                Err(e) => writeln!(out, "Error: {e}")?,
            },
            Line::ColorTest => {
                writeln!(out, "Color test...")?;
                match run_color_test(ctl, config.test_step_ms) {
                    Ok(frames) => {
                        for (preset, frame) in Preset::TEST_SEQUENCE.iter().zip(&frames) {
                            writeln!(out, "  {} -> {}", preset.name(), frame.to_hex())?;
                        }
                        writeln!(out, "Color test done.")?;
                    }
                    Err(e) => writeln!(out, "Error: {e}")?,
                }
            }
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

pub(super) fn cmd_shell(config: &Config) -> Result<()> {
    // Frames are echoed by the shell itself, so the transport writes to a sink.
    let ctl = controller(true);
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    run_shell(stdin.lock(), &mut stdout, &ctl, config)
}
