//! ESP32-A1S audio board pin assignments for the codec.
//!
//! Plain data: the driver never touches pin numbers. Host code reads these
//! when it builds its HAL I2C bus, I2S peripheral and amplifier pin, then
//! hands the finished objects to [`Es8388`](crate::codec::Es8388).

/// Codec control pins on the ESP32-A1S.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardPins {
    /// I2C data line.
    pub sda: u8,
    /// I2C clock line.
    pub scl: u8,
    /// Power amplifier enable, if the board wires one.
    pub amplifier: Option<u8>,
}

impl BoardPins {
    /// ESP32-A1S: SDA 33, SCL 32, PA_EN 21.
    pub const ESP32_A1S: Self = Self {
        sda: 33,
        scl: 32,
        amplifier: Some(21),
    };
}

impl Default for BoardPins {
    fn default() -> Self {
        Self::ESP32_A1S
    }
}

/// Audio data pins between the host I2S peripheral and the codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2sPins {
    /// Master clock to the codec (256×Fs).
    pub mclk: u8,
    /// Bit clock (SCLK).
    pub bck: u8,
    /// Word select (LRCK).
    pub ws: u8,
    /// Host to codec.
    pub dout: u8,
    /// Codec to host.
    pub din: u8,
}

impl I2sPins {
    /// ESP32-A1S: MCLK 0, BCK 27, WS 25, DOUT 26, DIN 35.
    pub const ESP32_A1S: Self = Self {
        mclk: 0,
        bck: 27,
        ws: 25,
        dout: 26,
        din: 35,
    };
}

impl Default for I2sPins {
    fn default() -> Self {
        Self::ESP32_A1S
    }
}
