//! CLI subcommands: frame output, decoding, config display, interactive shell.

mod config_cmd;
mod decode;
mod send;
mod shell;

use std::path::{Path, PathBuf};

use clap::Subcommand;
use serde::Serialize;

pub(super) use crate::RUNNING;
pub(super) use starlight_lib::color::{self, Preset, Rgb};
pub(super) use starlight_lib::command::{Command as LightCommand, Direction, PowerFlag};
pub(super) use starlight_lib::config::Config;
pub(super) use starlight_lib::error::Result;
pub(super) use starlight_lib::frame::{self, Frame};

const PADDING: usize = 2;

/// Compute alignment width for a command's key-value output.
/// Ensures at least PADDING spaces after the longest key in either level,
/// with top-level and indent values aligned to the same column.
pub(super) fn kv_width(top: &[&str], indent: &[&str]) -> usize {
    let top_max = top.iter().map(|k| k.len()).max().unwrap_or(0);
    let indent_max = indent.iter().map(|k| k.len()).max().unwrap_or(0);
    let top_need = if top.is_empty() { 0 } else { top_max + PADDING };
    // Indent keys lose 2 chars of inner width to the "  " prefix
    let indent_need = if indent.is_empty() {
        0
    } else {
        indent_max + PADDING + 2
    };
    top_need.max(indent_need)
}

pub(super) fn format_kv(key: &str, value: impl std::fmt::Display, w: usize) -> String {
    format!("{key:<width$}{value}", width = w)
}

pub(super) fn kv(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("{}", format_kv(key, value, w));
}

pub(super) fn kv_indent(key: &str, value: impl std::fmt::Display, w: usize) {
    println!("  {key:<width$}{value}", width = w - 2);
}

/// Pretty-print a value as JSON on stdout.
pub(super) fn print_json(value: &impl Serialize) -> Result<()> {
    let s = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
    println!("{s}");
    Ok(())
}

// ── JSON output structs ──

#[derive(Debug, Serialize)]
pub(super) struct FrameOutput {
    pub command: String,
    pub opcode: String,
    pub length_class: u8,
    pub payload: Vec<u8>,
    pub hex: String,
}

impl FrameOutput {
    pub fn new(command: impl Into<String>, frame: &Frame) -> Self {
        FrameOutput {
            command: command.into(),
            opcode: frame.opcode().name().into(),
            length_class: frame.length_class(),
            payload: frame.payload().to_vec(),
            hex: frame.to_hex(),
        }
    }
}

#[derive(Serialize)]
pub(super) struct ConfigOutput {
    pub config_file: Option<String>,
    pub config_file_exists: bool,
    pub settings: Config,
    pub problems: Vec<String>,
}

// ── Global options ──

/// Flags shared by every subcommand.
pub struct Options {
    pub json: bool,
    pub config_path: Option<PathBuf>,
}

/// Load config from `--config` or the default location, logging any warnings.
pub(super) fn load_config(custom_path: Option<&Path>) -> Config {
    let config = match custom_path {
        Some(p) => {
            let (config, warnings) = Config::load_from(p);
            for w in &warnings {
                log::warn!("{w}");
            }
            config
        }
        None => Config::load(),
    };
    if let Err(errors) = config.validate() {
        for e in &errors {
            log::warn!("config: {e}");
        }
    }
    config
}

#[derive(Subcommand)]
pub enum Command {
    /// Send power flag 0x01 ("on" in the vendor app; the firmware blanks the strip)
    On,

    /// Send power flag 0x00 ("off" in the vendor app; the firmware lights the strip)
    Off,

    /// Set a color from RGB channels (each clamped to 0-255)
    #[command(allow_negative_numbers = true)]
    Rgb {
        r: i32,
        g: i32,
        b: i32,
        /// Brightness to send after the color (0-1000)
        #[arg(long)]
        brightness: Option<i32>,
    },

    /// Set a color by name or hex (e.g. "orange", "#FF8000")
    Color {
        color: String,
        /// Brightness to send after the color (0-1000)
        #[arg(long)]
        brightness: Option<i32>,
    },

    /// Set brightness (0-1000, clamped)
    #[command(allow_negative_numbers = true)]
    Bright { value: i32 },

    /// Select a color-wheel position: hue 0-360, saturation 0-997
    Hsv { hue: u16, sat: u16 },

    /// Set white color temperature: 0 (warm) to 360 (cool)
    #[command(allow_negative_numbers = true)]
    Temp { value: i32 },

    /// Select a built-in animation (1-117)
    Mode { index: u16 },

    /// Set animation speed (low byte only)
    #[command(allow_negative_numbers = true)]
    Speed { value: i32 },

    /// Run animations in reverse
    Reverse,

    /// Run animations forward
    Normal,

    /// Cycle red, green, blue, yellow, cyan, magenta, white
    Test {
        /// Delay between colors in milliseconds (default: test_step_ms from config)
        #[arg(long)]
        step_ms: Option<u64>,
    },

    /// Decode a frame from hex (e.g. "BC 01 01 00 55")
    Decode {
        #[arg(required = true, num_args = 1..)]
        hex: Vec<String>,
    },

    /// Show current configuration and file path
    Config {
        /// Write a default config file instead of showing the current one
        #[arg(long)]
        init: bool,
        /// With --init, replace an existing file
        #[arg(long, requires = "init")]
        force: bool,
    },

    /// Interactive command shell reading from stdin
    Shell,
}

impl Command {
    /// Commands that poll [`RUNNING`] and stop cleanly on Ctrl+C. Everything
    /// else keeps the default signal behaviour, so Ctrl+C at the shell prompt
    /// exits at once.
    pub fn traps_interrupt(&self) -> bool {
        matches!(self, Command::Test { .. })
    }
}

/// Warn if `--json` was passed to a command that doesn't support it.
fn warn_json_unsupported(cmd_name: &str) {
    log::warn!("--json is not supported for `{cmd_name}` (ignored)");
}

/// Apply the configured default brightness when none was given.
fn color_commands(rgb: Rgb, brightness: Option<i32>, config: &Config) -> Vec<LightCommand> {
    let mut cmds = vec![LightCommand::Color(rgb)];
    if let Some(b) = brightness.or(config.default_brightness) {
        cmds.push(LightCommand::Brightness(b));
    }
    cmds
}

pub fn run(cmd: Command, opts: &Options) -> Result<()> {
    let custom = opts.config_path.as_deref();
    let json = opts.json;
    let send_one = |cmd: LightCommand| send::cmd_send(&[cmd], &load_config(custom), json);
    match cmd {
        Command::On => send_one(LightCommand::Power(PowerFlag::On)),
        Command::Off => send_one(LightCommand::Power(PowerFlag::Off)),
        Command::Rgb { r, g, b, brightness } => {
            let config = load_config(custom);
            let cmds = color_commands(Rgb::clamped(r, g, b), brightness, &config);
            send::cmd_send(&cmds, &config, json)
        }
        Command::Color { color, brightness } => {
            let rgb = color::parse_color(&color)?;
            let config = load_config(custom);
            send::cmd_send(&color_commands(rgb, brightness, &config), &config, json)
        }
        Command::Bright { value } => send_one(LightCommand::Brightness(value)),
        Command::Hsv { hue, sat } => send_one(LightCommand::ColorWheel { hue, sat }),
        Command::Temp { value } => send_one(LightCommand::Temperature(value)),
        Command::Mode { index } => send_one(LightCommand::Mode(index)),
        Command::Speed { value } => send_one(LightCommand::Speed(value)),
        Command::Reverse => send_one(LightCommand::Direction(Direction::Reverse)),
        Command::Normal => send_one(LightCommand::Direction(Direction::Forward)),
        Command::Test { step_ms } => {
            let config = load_config(custom);
            send::cmd_color_test(step_ms.unwrap_or(config.test_step_ms), &config, json)
        }
        Command::Decode { hex } => decode::cmd_decode(&hex.join(" "), json),
        Command::Config { init: true, force } => {
            if json {
                warn_json_unsupported("config --init");
            }
            config_cmd::cmd_config_init(custom, force)
        }
        Command::Config { init: false, .. } => config_cmd::cmd_config(json, custom),
        Command::Shell => {
            if json {
                warn_json_unsupported("shell");
            }
            let config = load_config(custom);
            shell::cmd_shell(&config)
        }
    }
}
