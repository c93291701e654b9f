//! Frame-producing subcommands: encode, send, report.

use std::io::Write;
use std::sync::atomic::Ordering;
use std::time::Duration;

use starlight_lib::controller::Controller;
use starlight_lib::transport::HexDumpTransport;

use super::{Config, Frame, FrameOutput, LightCommand, Preset, RUNNING, Result, print_json};

pub(super) type CliController = Controller<HexDumpTransport<Box<dyn Write>>>;

/// Human mode streams each frame to stdout as it is sent; JSON mode sends
/// into a sink and reports the collected frames at the end.
pub(super) fn controller(json: bool) -> CliController {
    let sink: Box<dyn Write> = if json {
        Box::new(std::io::sink())
    } else {
        Box::new(std::io::stdout())
    };
    Controller::new(HexDumpTransport::new(sink))
}

/// Name the controller the frames are meant for, as the BLE writer sees it.
fn log_target(config: &Config) {
    log::info!(
        "target: device \"{}\", characteristic {}",
        config.device_name,
        config.write_characteristic
    );
}

fn report(frames: &[(String, Frame)], json: bool) -> Result<()> {
    if json {
        let out: Vec<FrameOutput> = frames
            .iter()
            .map(|(label, frame)| FrameOutput::new(label.as_str(), frame))
            .collect();
        print_json(&out)?;
    }
    Ok(())
}

pub(super) fn cmd_send(commands: &[LightCommand], config: &Config, json: bool) -> Result<()> {
    log_target(config);
    let ctl = controller(json);
    let mut frames = Vec::with_capacity(commands.len());
    for cmd in commands {
        log::info!("{cmd}");
        frames.push((cmd.to_string(), ctl.send(cmd)?));
    }
    report(&frames, json)
}

pub(super) fn cmd_color_test(step_ms: u64, config: &Config, json: bool) -> Result<()> {
    log_target(config);
    let ctl = controller(json);
    let frames = run_color_test(&ctl, step_ms)?;
    let labelled: Vec<(String, Frame)> = Preset::TEST_SEQUENCE
        .iter()
        .zip(frames)
        .map(|(preset, frame)| (LightCommand::Color(preset.rgb()).to_string(), frame))
        .collect();
    report(&labelled, json)
}

/// Run the color test until done or until Ctrl+C clears [`RUNNING`].
pub(super) fn run_color_test(ctl: &CliController, step_ms: u64) -> Result<Vec<Frame>> {
    RUNNING.store(true, Ordering::SeqCst);
    let frames = ctl.run_color_test(Duration::from_millis(step_ms), || {
        RUNNING.load(Ordering::SeqCst)
    })?;
    if frames.len() < Preset::TEST_SEQUENCE.len() {
        eprintln!("Color test stopped.");
        RUNNING.store(true, Ordering::SeqCst);
    }
    Ok(frames)
}
