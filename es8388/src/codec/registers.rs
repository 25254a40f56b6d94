//! ES8388 register map and the values the driver writes into it.
//!
//! Register addresses are 8-bit and every register holds one byte. The map
//! follows the Everest ES8388 datasheet numbering, `0x00` through `0x34`.

// ── I2C address ────────────────────────────────────────────────────────────

/// Fixed 7-bit I2C address of the ES8388 (CE pin low).
pub const I2C_ADDR: u8 = 0x10;

// ── Register map ───────────────────────────────────────────────────────────

/// ES8388 control registers.
///
/// The discriminant of each variant is its bus address; [`Register::addr`]
/// is the only place the numeric map is read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// Chip control 1.
    /// - Bit 7: SCPReset (soft reset, write 1 then 0)
    Control1 = 0x00,
    /// Chip control 2 (analog references, low-power modes).
    Control2 = 0x01,
    /// Chip power management. `0x00` = all blocks up, `0xFF` = all down.
    ChipPower = 0x02,
    /// ADC power management. `0x00` = ADC path up, `0xFF` = down.
    AdcPower = 0x03,
    /// DAC power management. `0x00` = DAC path up, `0xFF` = down.
    DacPower = 0x04,
    /// Chip low-power 1.
    ChipLowPower1 = 0x05,
    /// Chip low-power 2.
    ChipLowPower2 = 0x06,
    /// Analog voltage management.
    AnalogVoltage = 0x07,
    /// Master/slave mode.
    /// - Bit 7: MSC (0 = slave, 1 = master)
    MasterMode = 0x08,
    /// Microphone PGA gain.
    /// - Bits 7:4: MicAmpL (3 dB steps, 0–8)
    /// - Bits 3:0: MicAmpR (3 dB steps, 0–8)
    AdcControl1 = 0x09,
    /// ADC input selection.
    AdcControl2 = 0x0A,
    /// ADC input mixing / tri-state.
    AdcControl3 = 0x0B,
    /// ADC serial data format and word length.
    AdcControl4 = 0x0C,
    /// ADC MCLK/LRCK ratio and speed mode.
    AdcControl5 = 0x0D,
    AdcControl6 = 0x0E,
    AdcControl7 = 0x0F,
    /// Left ADC digital volume (`0x00` = 0 dB).
    AdcControl8 = 0x10,
    /// Right ADC digital volume (`0x00` = 0 dB).
    AdcControl9 = 0x11,
    AdcControl10 = 0x12,
    AdcControl11 = 0x13,
    AdcControl12 = 0x14,
    AdcControl13 = 0x15,
    AdcControl14 = 0x16,
    /// DAC serial data format and word length.
    DacControl1 = 0x17,
    /// DAC MCLK/LRCK ratio and speed mode.
    DacControl2 = 0x18,
    /// DAC ramp and mute.
    /// - Bit 2: DACMute
    DacControl3 = 0x19,
    /// Left DAC digital volume (`0x00` = 0 dB).
    DacControl4 = 0x1A,
    /// Right DAC digital volume (`0x00` = 0 dB).
    DacControl5 = 0x1B,
    DacControl6 = 0x1C,
    DacControl7 = 0x1D,
    DacControl8 = 0x1E,
    DacControl9 = 0x1F,
    DacControl10 = 0x20,
    DacControl11 = 0x21,
    DacControl12 = 0x22,
    DacControl13 = 0x23,
    DacControl14 = 0x24,
    DacControl15 = 0x25,
    /// Output mixer input selection.
    DacControl16 = 0x26,
    /// Left mixer: DAC-to-output switch and bypass level.
    DacControl17 = 0x27,
    DacControl18 = 0x28,
    DacControl19 = 0x29,
    /// Right mixer: DAC-to-output switch and bypass level.
    DacControl20 = 0x2A,
    /// DAC/ADC LRCK sharing and output enable.
    DacControl21 = 0x2B,
    /// DC offset.
    DacControl22 = 0x2C,
    /// Output reference.
    DacControl23 = 0x2D,
    /// LOUT1 level, written with the left attenuation step.
    DacControl24 = 0x2E,
    /// ROUT1 level, written with the right attenuation step.
    DacControl25 = 0x2F,
    DacControl26 = 0x30,
    DacControl27 = 0x31,
    DacControl28 = 0x32,
    DacControl29 = 0x33,
    DacControl30 = 0x34,
}

impl Register {
    /// Every register in address order.
    pub const ALL: [Register; 53] = {
        use Register::*;
        [
            Control1, Control2, ChipPower, AdcPower, DacPower, ChipLowPower1, ChipLowPower2,
            AnalogVoltage, MasterMode, AdcControl1, AdcControl2, AdcControl3, AdcControl4,
            AdcControl5, AdcControl6, AdcControl7, AdcControl8, AdcControl9, AdcControl10,
            AdcControl11, AdcControl12, AdcControl13, AdcControl14, DacControl1, DacControl2,
            DacControl3, DacControl4, DacControl5, DacControl6, DacControl7, DacControl8,
            DacControl9, DacControl10, DacControl11, DacControl12, DacControl13, DacControl14,
            DacControl15, DacControl16, DacControl17, DacControl18, DacControl19, DacControl20,
            DacControl21, DacControl22, DacControl23, DacControl24, DacControl25, DacControl26,
            DacControl27, DacControl28, DacControl29, DacControl30,
        ]
    };

    /// Bus address of this register.
    pub const fn addr(self) -> u8 {
        self as u8
    }

    /// Look up a register by bus address.
    pub fn from_addr(addr: u8) -> Option<Register> {
        Self::ALL.get(usize::from(addr)).copied()
    }
}

impl From<Register> for u8 {
    fn from(reg: Register) -> u8 {
        reg.addr()
    }
}

// ── Field values ───────────────────────────────────────────────────────────

/// `Control1`: assert soft reset.
pub const CONTROL1_RESET: u8 = 0x80;

/// `Control1`: release soft reset.
pub const CONTROL1_RUN: u8 = 0x00;

/// Power registers: every block powered up.
pub const POWER_ALL_ON: u8 = 0x00;

/// Power registers: every block powered down.
pub const POWER_ALL_OFF: u8 = 0xFF;

/// `DacControl3`: DAC mute enabled.
pub const DAC_MUTE: u8 = 0x04;

/// `DacControl3`: DAC mute disabled.
pub const DAC_UNMUTE: u8 = 0x00;

/// Left output attenuation step.
pub const VOLUME_LEFT: Register = Register::DacControl24;

/// Right output attenuation step.
pub const VOLUME_RIGHT: Register = Register::DacControl25;

/// Register holding the microphone PGA gain.
pub const MIC_GAIN: Register = Register::AdcControl1;

/// Configuration written after soft reset, in order.
///
/// I2S slave at 44.1 kHz, 256×Fs, 16-bit, analog input through the PGA at
/// +24 dB, DAC routed to the output mixers with auto-mute off. The order
/// matters to the chip and must not be changed.
pub const INIT_SEQUENCE: [(Register, u8); 24] = [
    // Chip power and bus-slave timing
    (Register::ChipPower, POWER_ALL_ON),
    (Register::MasterMode, 0x00),
    // ADC path
    (Register::AdcPower, POWER_ALL_ON),
    (Register::AdcControl1, 0x88), // mic PGA +24 dB
    (Register::AdcControl2, 0x50), // input select
    (Register::AdcControl3, 0x02),
    (Register::AdcControl4, 0x0C), // I2S, 16-bit
    (Register::AdcControl5, 0x02), // 256×Fs
    (Register::AdcControl8, 0x00), // left 0 dB
    (Register::AdcControl9, 0x00), // right 0 dB
    // DAC path
    (Register::DacPower, POWER_ALL_ON),
    (Register::DacControl1, 0x18), // I2S, 16-bit
    (Register::DacControl2, 0x02), // 256×Fs
    (Register::DacControl3, DAC_UNMUTE),
    (Register::DacControl4, 0x00), // left 0 dB
    (Register::DacControl5, 0x00), // right 0 dB
    (Register::DacControl16, 0x00),
    (Register::DacControl17, 0x90), // auto-mute off
    (Register::DacControl20, 0x90), // auto-mute off
    (Register::DacControl21, 0xA0), // output enable
    (Register::DacControl22, 0xA0),
    (Register::DacControl23, 0x00),
    (Register::DacControl24, 0x00),
    (Register::DacControl25, 0x00),
];

/// Power registers in the order `power_down` writes them.
pub const POWER_DOWN_SEQUENCE: [Register; 3] =
    [Register::DacPower, Register::AdcPower, Register::ChipPower];
