//! Integration tests for the `starlight-cli` binary.
//!
//! These tests run the binary via `assert_cmd` against a throwaway config
//! file and check the frames it prints.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cli() -> assert_cmd::Command {
    cargo_bin_cmd!("starlight-cli")
}

/// CLI bound to a config file inside `dir` (which may not exist yet).
fn cli_with_config(dir: &tempfile::TempDir) -> assert_cmd::Command {
    let mut cmd = cli();
    cmd.arg("--config").arg(dir.path().join("config.toml"));
    cmd
}

#[test]
fn cli_help_succeeds() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("starlight-cli"));
}

#[test]
fn cli_version_prints_version() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ── Frame output ──

#[test]
fn cli_on_and_off_flags() {
    cli().arg("on").assert().success().stdout("BC 01 01 01 55\n");
    cli().arg("off").assert().success().stdout("BC 01 01 00 55\n");
}

#[test]
fn cli_rgb_red() {
    let dir = tempfile::tempdir().unwrap();
    cli_with_config(&dir)
        .args(["rgb", "255", "0", "0"])
        .assert()
        .success()
        .stdout("BC 04 06 00 00 03 E8 00 00 FF 00 00 55\n");
}

#[test]
fn cli_rgb_clamps_negative_channels() {
    let dir = tempfile::tempdir().unwrap();
    cli_with_config(&dir)
        .args(["rgb", "-20", "300", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00 FF 00 55"));
}

#[test]
fn cli_color_with_brightness_prints_two_frames() {
    let dir = tempfile::tempdir().unwrap();
    cli_with_config(&dir)
        .args(["color", "white", "--brightness", "1000"])
        .assert()
        .success()
        .stdout(
            "BC 04 06 00 00 00 00 00 00 FF FF FF 55\n\
             BC 05 06 03 E8 00 00 00 00 55\n",
        );
}

#[test]
fn cli_color_uses_config_default_brightness() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "default_brightness = 256\n").unwrap();
    cli_with_config(&dir)
        .args(["color", "#0000FF"])
        .assert()
        .success()
        .stdout(predicate::str::contains("BC 05 06 01 00 00 00 00 00 55"));
}

#[test]
fn cli_color_invalid_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli_with_config(&dir)
        .args(["color", "chartreuse"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid color"));
}

#[test]
fn cli_color_dash_argument_is_a_flag() {
    cli()
        .args(["color", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument '-1'"));
}

#[test]
fn cli_mode_gap() {
    cli()
        .args(["mode", "112"])
        .assert()
        .success()
        .stdout("BC 06 02 00 71 55\n");
}

#[test]
fn cli_mode_negative_is_usage_error() {
    cli().args(["mode", "-1"]).assert().failure();
}

#[test]
fn cli_speed_wraps() {
    cli()
        .args(["speed", "256"])
        .assert()
        .success()
        .stdout("BC 08 01 00 55\n");
}

#[test]
fn cli_temp_clamps() {
    cli()
        .args(["temp", "-10"])
        .assert()
        .success()
        .stdout("BC 13 02 00 00 55\n");
}

#[test]
fn cli_bright_and_hsv() {
    cli()
        .args(["bright", "0"])
        .assert()
        .success()
        .stdout("BC 05 06 00 00 00 00 00 00 55\n");
    cli()
        .args(["hsv", "240", "997"])
        .assert()
        .success()
        .stdout("BC 04 06 00 F0 03 E8 00 00 00 00 FF 55\n");
}

#[test]
fn cli_direction() {
    cli().arg("reverse").assert().success().stdout("BC 07 01 01 55\n");
    cli().arg("normal").assert().success().stdout("BC 07 01 00 55\n");
}

#[test]
fn cli_color_test_prints_seven_frames() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli_with_config(&dir)
        .args(["test", "--step-ms", "0"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 7);
    assert!(text.lines().all(|l| l.starts_with("BC 04 06")));
}

// ── JSON output ──

#[test]
fn cli_json_frames() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli_with_config(&dir)
        .args(["--json", "rgb", "0", "255", "0", "--brightness", "500"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("--json should produce valid JSON");
    let frames = json.as_array().unwrap();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0]["opcode"], "color");
    assert_eq!(frames[0]["command"], "color RGB(0,255,0)");
    assert_eq!(frames[1]["opcode"], "brightness");
    assert_eq!(frames[1]["length_class"], 6);
    assert_eq!(frames[1]["hex"], "BC 05 06 01 F4 00 00 00 00 55");
}

// ── decode ──

#[test]
fn cli_decode_human() {
    cli()
        .args(["decode", "BC 06 02 00 71 55"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode (0x06)"))
        .stdout(predicate::str::contains("firmware mode 113"));
}

#[test]
fn cli_decode_json() {
    let output = cli()
        .args(["--json", "decode", "BC", "05", "06", "03", "E8", "00", "00", "00", "00", "55"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json["opcode"], "brightness");
    assert_eq!(json["command"], "brightness 1000");
}

#[test]
fn cli_decode_bad_footer_fails() {
    cli()
        .args(["decode", "BC 01 01 00 56"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Bad frame footer"));
}

// ── config ──

#[test]
fn cli_config_json_produces_valid_json() {
    let dir = tempfile::tempdir().unwrap();
    let output = cli_with_config(&dir)
        .args(["--json", "config"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value =
        serde_json::from_slice(&output).expect("config --json should produce valid JSON");
    assert!(json["settings"].is_object());
    assert_eq!(json["config_file_exists"], false);
    assert_eq!(json["settings"]["test_step_ms"], 1000);
}

#[test]
fn cli_config_reports_problems() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.toml"), "default_brightness = 5000\n").unwrap();
    cli_with_config(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(loaded)"))
        .stdout(predicate::str::contains("Default brightness 5000 is out of range (0-1000)"));
}

#[test]
fn cli_config_init_writes_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    cli_with_config(&dir)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("# starlight configuration"));
    assert!(contents.contains("device_name = \"STARLIGHT\""));

    cli_with_config(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(loaded)"));
}

#[test]
fn cli_config_init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "test_step_ms = 250\n").unwrap();

    cli_with_config(&dir)
        .args(["config", "--init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "test_step_ms = 250\n");

    cli_with_config(&dir)
        .args(["config", "--init", "--force"])
        .assert()
        .success();
    assert!(!std::fs::read_to_string(&path).unwrap().contains("250"));
}

#[test]
fn cli_config_force_requires_init() {
    let dir = tempfile::tempdir().unwrap();
    cli_with_config(&dir)
        .args(["config", "--force"])
        .assert()
        .failure();
}

// ── --verbose flag ──

#[test]
fn cli_verbose_flag_accepted() {
    cli().args(["-v", "off"]).assert().success();
}

#[test]
fn cli_verbose_logs_frames_to_stderr() {
    cli()
        .args(["--verbose", "speed", "5"])
        .assert()
        .success()
        .stdout("BC 08 01 05 55\n")
        .stderr(predicate::str::contains("speed 5: BC 08 01 05 55"));
}

#[test]
fn cli_verbose_names_configured_target() {
    let dir = tempfile::tempdir().unwrap();
    let toml = "device_name = \"LEDSTRIP\"\n\
                write_characteristic = \"0000ffe1-0000-1000-8000-00805f9b34fb\"\n";
    std::fs::write(dir.path().join("config.toml"), toml).unwrap();
    cli_with_config(&dir)
        .args(["-v", "on"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "target: device \"LEDSTRIP\", characteristic 0000ffe1-0000-1000-8000-00805f9b34fb",
        ));
}

// ── shell ──

#[test]
fn cli_shell_reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    cli_with_config(&dir)
        .arg("shell")
        .write_stdin("r\nrgb 1 2\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("STARLIGHT shell (characteristic 0000fff3"))
        .stdout(predicate::str::contains("color RGB(255,0,0) -> BC 04 06"))
        .stdout(predicate::str::contains("Usage: rgb R G B"));
}

#[test]
fn cli_unknown_subcommand_fails() {
    cli().arg("explode").assert().failure();
}
