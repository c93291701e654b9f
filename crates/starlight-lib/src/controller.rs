//! High-level controller: encodes commands and pushes them through a
//! [`Transport`] in call order.

use std::time::Duration;

use crate::color::{Preset, Rgb};
use crate::command::{Command, Direction, PowerFlag};
use crate::error::Result;
use crate::frame::{Frame, encode};
use crate::transport::Transport;

pub struct Controller<T: Transport> {
    transport: T,
}

impl<T: Transport> Controller<T> {
    pub fn new(transport: T) -> Self {
        Controller { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Encode and send a single command, returning the frame that went out.
    pub fn send(&self, command: &Command) -> Result<Frame> {
        let frame = encode(command);
        log::debug!("{command}: {}", frame.to_hex());
        self.transport.send(&frame.to_bytes())?;
        Ok(frame)
    }

    /// Sends [`PowerFlag::On`] (`0x01`), which the firmware treats as "blank".
    pub fn power_on(&self) -> Result<Frame> {
        self.send(&Command::Power(PowerFlag::On))
    }

    /// Sends [`PowerFlag::Off`] (`0x00`), which the firmware treats as "lit".
    pub fn power_off(&self) -> Result<Frame> {
        self.send(&Command::Power(PowerFlag::Off))
    }

    /// Send a color frame, then a brightness frame if one is given.
    pub fn set_color(&self, rgb: Rgb, brightness: Option<i32>) -> Result<Vec<Frame>> {
        let mut frames = vec![self.send(&Command::Color(rgb))?];
        if let Some(b) = brightness {
            frames.push(self.set_brightness(b)?);
        }
        Ok(frames)
    }

    pub fn set_brightness(&self, brightness: i32) -> Result<Frame> {
        self.send(&Command::Brightness(brightness))
    }

    pub fn set_color_wheel(&self, hue: u16, sat: u16) -> Result<Frame> {
        self.send(&Command::ColorWheel { hue, sat })
    }

    pub fn set_temperature(&self, temperature: i32) -> Result<Frame> {
        self.send(&Command::Temperature(temperature))
    }

    pub fn set_mode(&self, index: u16) -> Result<Frame> {
        self.send(&Command::Mode(index))
    }

    pub fn set_speed(&self, speed: i32) -> Result<Frame> {
        self.send(&Command::Speed(speed))
    }

    pub fn set_direction(&self, direction: Direction) -> Result<Frame> {
        self.send(&Command::Direction(direction))
    }

    pub fn apply_preset(&self, preset: Preset) -> Result<Frame> {
        self.send(&Command::Color(preset.rgb()))
    }

    /// Cycle through [`Preset::TEST_SEQUENCE`], waiting `step` after each color.
    ///
    /// `keep_going` is checked before every color; once it returns false the
    /// sequence stops and the frames sent so far are returned. A transport
    /// error aborts the sequence.
    pub fn run_color_test(
        &self,
        step: Duration,
        keep_going: impl Fn() -> bool,
    ) -> Result<Vec<Frame>> {
        let mut frames = Vec::with_capacity(Preset::TEST_SEQUENCE.len());
        for preset in Preset::TEST_SEQUENCE {
            if !keep_going() {
                log::info!("Color test interrupted after {} step(s)", frames.len());
                break;
            }
            log::info!("Color test: {}", preset.name());
            frames.push(self.apply_preset(preset)?);
            if !step.is_zero() {
                std::thread::sleep(step);
            }
        }
        Ok(frames)
    }
}
