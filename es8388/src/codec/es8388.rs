//! ES8388 audio codec driver.
//!
//! Brings the Everest ES8388 on the ESP32-A1S audio board from an unknown
//! power state into I2S slave playback and capture, then exposes volume,
//! mute, microphone gain, amplifier and shutdown controls.
//!
//! The driver is generic over any [`embedded_hal::i2c::I2c`] bus,
//! [`embedded_hal::delay::DelayNs`] provider and an optional
//! [`embedded_hal::digital::OutputPin`] wired to the power amplifier enable.
//!
//! # Example
//!
//! ```ignore
//! let mut codec = Es8388::with_amplifier(i2c, delay, pa_en);
//! codec.initialize()?;       // address check, soft reset, register setup
//! codec.set_volume(70)?;
//! codec.mute(true)?;
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::i2c::{self, Error as _, ErrorKind, I2c};
use log::{debug, info, trace, warn};

use super::registers::{self as reg, Register};
use crate::constants::{
    AMP_SETTLE_MS, DEFAULT_VOLUME, MIC_GAIN_MAX, RESET_SETTLE_MS, VOLUME_MAX, VOLUME_MAX_STEP,
};
use crate::control::AudioControl;
use crate::error::Error;

/// Driver error for a given bus and amplifier pin.
pub type CodecError<I2C, PA> =
    Error<<I2C as i2c::ErrorType>::Error, <PA as digital::ErrorType>::Error>;

// ── Public types ───────────────────────────────────────────────────────────

/// Power and mute state of the codec as last driven by this controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum State {
    /// Not yet brought up, or the last bring-up failed.
    Uninitialized,
    /// Amplifier asserted, waiting for the address acknowledge.
    Probing,
    /// Address acknowledged, configuration sequence in progress.
    Configuring,
    /// Configured and playing.
    Running,
    /// Configured with the DAC mute bit set.
    Muted,
    /// Every power block switched off. Only `initialize` leaves this state.
    PoweredDown,
}

/// Placeholder for boards without an amplifier enable line.
///
/// The driver never drives it; it only fills the pin type parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAmplifier;

impl digital::ErrorType for NoAmplifier {
    type Error = Infallible;
}

impl OutputPin for NoAmplifier {
    fn set_low(&mut self) -> Result<(), Infallible> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Output attenuation step for a logical volume.
///
/// Percent is clamped to 100. `0` % maps to the quietest step (33) and
/// `100` % to `0`.
pub const fn attenuation(percent: u8) -> u8 {
    let percent = if percent > VOLUME_MAX { VOLUME_MAX } else { percent };
    let scaled = (percent as u16 * VOLUME_MAX_STEP as u16) / VOLUME_MAX as u16;
    VOLUME_MAX_STEP - scaled as u8
}

/// Microphone gain register value for a PGA level (clamped to 8).
///
/// The level lands in the upper nibble only; MicAmpR is written as zero.
pub const fn mic_gain_field(level: u8) -> u8 {
    let level = if level > MIC_GAIN_MAX { MIC_GAIN_MAX } else { level };
    level << 4
}

// ── Driver struct ──────────────────────────────────────────────────────────

/// ES8388 audio codec driver.
///
/// Holds a write-only cache of the logical volume and the power/mute
/// state. Registers are never read back during normal operation, so the
/// cache reflects what was last written, not what the chip reports.
pub struct Es8388<I2C, D, PA = NoAmplifier> {
    i2c: I2C,
    delay: D,
    amplifier: Option<PA>,
    state: State,
    /// Last logical volume written, in percent.
    volume: u8,
}

impl<I2C, D> Es8388<I2C, D, NoAmplifier>
where
    I2C: I2c,
    D: DelayNs,
{
    /// Create a driver for a board with no amplifier enable line.
    pub fn new(i2c: I2C, delay: D) -> Self {
        Self::build(i2c, delay, None)
    }
}

impl<I2C, D, PA> Es8388<I2C, D, PA>
where
    I2C: I2c,
    D: DelayNs,
    PA: OutputPin,
{
    /// Fixed 7-bit I2C address.
    pub const ADDRESS: u8 = reg::I2C_ADDR;

    /// Create a driver that also owns the amplifier enable line.
    pub fn with_amplifier(i2c: I2C, delay: D, amplifier: PA) -> Self {
        Self::build(i2c, delay, Some(amplifier))
    }

    fn build(i2c: I2C, delay: D, amplifier: Option<PA>) -> Self {
        Self {
            i2c,
            delay,
            amplifier,
            state: State::Uninitialized,
            volume: DEFAULT_VOLUME,
        }
    }

    // ── Low-level I2C helpers ──────────────────────────────────────────

    /// Write one register.
    pub fn write_register(
        &mut self,
        register: Register,
        value: u8,
    ) -> Result<(), CodecError<I2C, PA>> {
        trace!("ES8388 write {:?} = {:#04x}", register, value);
        self.i2c
            .write(Self::ADDRESS, &[register.addr(), value])
            .map_err(Error::I2c)
    }

    /// Read one register (register address, repeated start, one byte).
    pub fn read_register(&mut self, register: Register) -> Result<u8, CodecError<I2C, PA>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(Self::ADDRESS, &[register.addr()], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    /// Address-only transaction.
    fn ping(&mut self) -> Result<(), I2C::Error> {
        self.i2c.write(Self::ADDRESS, &[])
    }

    fn transition(&mut self, next: State) {
        if self.state != next {
            debug!("ES8388 {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    fn require_active(&self) -> Result<(), CodecError<I2C, PA>> {
        match self.state {
            State::Running | State::Muted => Ok(()),
            other => Err(Error::InvalidState(other)),
        }
    }

    /// Runtime controls are only closed off once the chip is shut down.
    fn require_powered(&self) -> Result<(), CodecError<I2C, PA>> {
        match self.state {
            State::PoweredDown => Err(Error::InvalidState(State::PoweredDown)),
            _ => Ok(()),
        }
    }

    fn drive_amplifier(&mut self, enable: bool) -> Result<(), CodecError<I2C, PA>> {
        let Some(pin) = self.amplifier.as_mut() else {
            return Ok(());
        };
        let result = if enable { pin.set_high() } else { pin.set_low() };
        result.map_err(Error::Pin)
    }

    // ── Power-on sequence ──────────────────────────────────────────────

    /// Bring the codec up from any state.
    ///
    /// Drives the amplifier high (if present), waits 50 ms, checks the address,
    /// pulses soft reset, waits 100 ms, writes the fixed configuration and
    /// sets the volume to 50 %. On any failure the state returns to
    /// [`State::Uninitialized`]; a missing chip yields
    /// [`Error::DeviceNotFound`] before any register is written.
    pub fn initialize(&mut self) -> Result<(), CodecError<I2C, PA>> {
        self.transition(State::Probing);
        match self.bring_up() {
            Ok(()) => {
                self.transition(State::Running);
                info!("ES8388 initialized, volume {}%", self.volume);
                Ok(())
            }
            Err(e) => {
                self.transition(State::Uninitialized);
                Err(e)
            }
        }
    }

    fn bring_up(&mut self) -> Result<(), CodecError<I2C, PA>> {
        self.drive_amplifier(true)?;
        self.delay.delay_ms(AMP_SETTLE_MS);

        if let Err(e) = self.ping() {
            if let ErrorKind::NoAcknowledge(_) = e.kind() {
                warn!("ES8388 not found at {:#04x}", Self::ADDRESS);
                return Err(Error::DeviceNotFound);
            }
            return Err(Error::I2c(e));
        }
        info!("ES8388 found, configuring");
        self.transition(State::Configuring);

        self.write_register(Register::Control1, reg::CONTROL1_RESET)?;
        self.write_register(Register::Control1, reg::CONTROL1_RUN)?;
        self.delay.delay_ms(RESET_SETTLE_MS);

        for (register, value) in reg::INIT_SEQUENCE {
            self.write_register(register, value)?;
        }

        self.apply_volume(DEFAULT_VOLUME)
    }

    /// Check that the chip acknowledges its address. State is untouched.
    pub fn is_present(&mut self) -> bool {
        self.ping().is_ok()
    }

    /// Current controller state.
    pub fn state(&self) -> State {
        self.state
    }

    // ── Output volume ──────────────────────────────────────────────────

    /// Set the output volume (0–100 %, higher values are clamped).
    ///
    /// Both channels get the same attenuation step. The cache is only
    /// updated once both writes succeed. Accepted before [`initialize`]
    /// too; bring-up then overwrites it with 50 %.
    ///
    /// [`initialize`]: Es8388::initialize
    pub fn set_volume(&mut self, percent: u8) -> Result<(), CodecError<I2C, PA>> {
        self.require_powered()?;
        self.apply_volume(percent)
    }

    fn apply_volume(&mut self, percent: u8) -> Result<(), CodecError<I2C, PA>> {
        let percent = percent.min(VOLUME_MAX);
        let step = attenuation(percent);
        self.write_register(reg::VOLUME_LEFT, step)?;
        self.write_register(reg::VOLUME_RIGHT, step)?;
        self.volume = percent;
        Ok(())
    }

    /// Last volume written, in percent. No bus traffic.
    pub fn volume(&self) -> u8 {
        self.volume
    }

    // ── Mute ───────────────────────────────────────────────────────────

    /// Set or clear the DAC mute bit. Volume registers are left alone.
    ///
    /// The state only moves between [`State::Running`] and [`State::Muted`];
    /// before bring-up the bit is written and the state is kept.
    pub fn mute(&mut self, enable: bool) -> Result<(), CodecError<I2C, PA>> {
        self.require_powered()?;
        let value = if enable { reg::DAC_MUTE } else { reg::DAC_UNMUTE };
        self.write_register(Register::DacControl3, value)?;
        if matches!(self.state, State::Running | State::Muted) {
            self.transition(if enable { State::Muted } else { State::Running });
        }
        Ok(())
    }

    // ── Input gain ─────────────────────────────────────────────────────

    /// Set the microphone PGA level (0–8, 3 dB per step, clamped).
    pub fn set_mic_gain(&mut self, level: u8) -> Result<(), CodecError<I2C, PA>> {
        self.require_powered()?;
        self.write_register(reg::MIC_GAIN, mic_gain_field(level))
    }

    // ── Amplifier / shutdown ───────────────────────────────────────────

    /// Drive the amplifier enable line. No-op without one; any state.
    pub fn power_amplifier(&mut self, enable: bool) -> Result<(), CodecError<I2C, PA>> {
        self.drive_amplifier(enable)
    }

    /// Switch off the DAC, ADC and chip power blocks, then the amplifier.
    ///
    /// Only valid while running or muted. The state becomes
    /// [`State::PoweredDown`] as soon as the first power register is
    /// written, so a later bus or pin error still leaves the driver
    /// requiring a fresh [`initialize`](Es8388::initialize).
    pub fn power_down(&mut self) -> Result<(), CodecError<I2C, PA>> {
        self.require_active()?;
        for register in reg::POWER_DOWN_SEQUENCE {
            self.write_register(register, reg::POWER_ALL_OFF)?;
            self.transition(State::PoweredDown);
        }
        self.drive_amplifier(false)?;
        info!("ES8388 powered down");
        Ok(())
    }

    // ── Release ────────────────────────────────────────────────────────

    /// Consume the driver and return the bus, delay and amplifier pin.
    pub fn release(self) -> (I2C, D, Option<PA>) {
        (self.i2c, self.delay, self.amplifier)
    }
}

// ── AudioControl trait implementation ──────────────────────────────────────

impl<I2C, D, PA> AudioControl for Es8388<I2C, D, PA>
where
    I2C: I2c,
    D: DelayNs,
    PA: OutputPin,
{
    type Error = CodecError<I2C, PA>;

    fn enable(&mut self) -> Result<(), Self::Error> {
        self.initialize()
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        self.power_down()
    }

    fn volume(&mut self, level: f32) -> Result<(), Self::Error> {
        // NaN saturates to 0 in the cast
        let percent = libm::roundf(level.clamp(0.0, 1.0) * f32::from(VOLUME_MAX)) as u8;
        self.set_volume(percent)
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────
