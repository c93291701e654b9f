//! `config` subcommand: show current configuration and file path, or write
//! a starter file with `--init`.

use std::path::Path;

use starlight_lib::StarlightError;

use super::{Config, ConfigOutput, Result, kv, kv_indent, kv_width, load_config, print_json};

/// Write the default config to `--config` or the platform location.
pub(super) fn cmd_config_init(custom_path: Option<&Path>, force: bool) -> Result<()> {
    let path = custom_path
        .map(Path::to_path_buf)
        .or_else(Config::path)
        .ok_or_else(|| StarlightError::Config("no config directory on this platform".into()))?;
    if path.exists() && !force {
        return Err(StarlightError::Config(format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        )));
    }
    let config = Config::default();
    match custom_path {
        Some(p) => config.save_to(p)?,
        None => config.save()?,
    }
    println!("Wrote {}", path.display());
    Ok(())
}

pub(super) fn cmd_config(json: bool, custom_path: Option<&Path>) -> Result<()> {
    let config = load_config(custom_path);
    let config_path = custom_path.map(|p| p.to_path_buf()).or_else(Config::path);
    let config_exists = config_path.as_ref().is_some_and(|p| p.exists());
    let problems: Vec<String> = match config.validate() {
        Ok(()) => vec![],
        Err(errors) => errors.iter().map(|e| e.to_string()).collect(),
    };

    if json {
        return print_json(&ConfigOutput {
            config_file: config_path.as_ref().map(|p| p.display().to_string()),
            config_file_exists: config_exists,
            settings: config,
            problems,
        });
    }

    let w = kv_width(
        &["Config file:"],
        &[
            "device_name:",
            "write_characteristic:",
            "default_brightness:",
            "test_step_ms:",
        ],
    );

    match &config_path {
        Some(p) if config_exists => kv("Config file:", format_args!("{} (loaded)", p.display()), w),
        Some(p) => kv(
            "Config file:",
            format_args!("{} (not found, using defaults)", p.display()),
            w,
        ),
        None => kv("Config file:", "(no config directory)", w),
    }
    println!();

    println!("Settings:");
    kv_indent("device_name:", &config.device_name, w);
    kv_indent("write_characteristic:", &config.write_characteristic, w);
    match config.default_brightness {
        Some(b) => kv_indent("default_brightness:", b, w),
        None => kv_indent("default_brightness:", "(not set)", w),
    }
    kv_indent("test_step_ms:", format_args!("{}ms", config.test_step_ms), w);

    if !problems.is_empty() {
        println!();
        println!("Problems:");
        for p in &problems {
            println!("  {p}");
        }
    }
    Ok(())
}
