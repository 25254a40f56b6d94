/// I2C clock the control bus is run at, in Hz.
pub const I2C_CLOCK_HZ: u32 = 100_000;

/// Settle time after the amplifier enable line goes high, in milliseconds.
pub const AMP_SETTLE_MS: u32 = 50;

/// Wait after the soft reset pulse before configuring, in milliseconds.
pub const RESET_SETTLE_MS: u32 = 100;

/// Number of attenuation steps on the output level registers.
pub const VOLUME_MAX_STEP: u8 = 33;

/// Highest logical volume, in percent.
pub const VOLUME_MAX: u8 = 100;

/// Logical volume set at the end of bring-up, in percent.
pub const DEFAULT_VOLUME: u8 = 50;

/// Highest microphone PGA level (8 × 3 dB = +24 dB).
pub const MIC_GAIN_MAX: u8 = 8;
