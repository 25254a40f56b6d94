//! ES8388 audio codec driver module.
//!
//! Provides the bring-up and control driver for the Everest ES8388 codec
//! found on the ESP32-A1S audio board, and its register map.

pub mod registers;
mod es8388;

pub use es8388::{attenuation, mic_gain_field, CodecError, Es8388, NoAmplifier, State};
pub use registers::Register;
