//! # es8388
//!
//! A `no_std` driver for the Everest ES8388 stereo audio codec as fitted to
//! the ESP32-A1S audio board. It brings the chip from an unknown power
//! state into I2S slave operation over the I2C control bus, then exposes
//! the runtime controls a player needs.
//!
//! ## Architecture
//!
//! | Layer | Module | Purpose |
//! |-------|--------|---------|
//! | Registers | [`codec::registers`] | Register map and bring-up sequence |
//! | Driver | [`codec`] | [`Es8388`] state machine and controls |
//! | Trait | [`control`] | Chip-independent [`AudioControl`] |
//! | Errors | [`error`] | [`Error`] returned by every operation |
//! | Config | [`constants`] / [`board`] | Timings, scales, ESP32-A1S pins |
//!
//! ## Quick start
//!
//! ```ignore
//! use es8388::Es8388;
//!
//! // Host HAL: I2C on BoardPins::ESP32_A1S.sda/.scl at I2C_CLOCK_HZ,
//! // amplifier enable on GPIO 21 as a push-pull output.
//! let mut codec = Es8388::with_amplifier(i2c, delay, pa_en);
//! codec.initialize()?;
//! codec.set_volume(80)?;
//! codec.set_mic_gain(4)?;
//!
//! // Later
//! codec.mute(true)?;
//! codec.power_down()?;
//! ```
//!
//! ## Features
//!
//! | Feature | Default | Enables |
//! |---------|---------|---------|
//! | `defmt` | no | `defmt::Format` on public enums and pin tables |
//!
//! ## Logging
//!
//! Emits through the [`log`] facade: bring-up progress at `info`, a missing
//! chip at `warn`, state changes at `debug`, register writes at `trace`.

#![no_std]

pub mod board;
pub mod codec;
pub mod constants;
pub mod control;
pub mod error;

pub use codec::{Es8388, NoAmplifier, Register, State};
pub use control::AudioControl;
pub use error::Error;
