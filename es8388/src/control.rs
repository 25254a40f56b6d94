/// Board-level audio control, implemented by [`Es8388`](crate::Es8388).
///
/// Host code that only needs to switch audio on and off and set a level can
/// take an `impl AudioControl` instead of naming the full driver type with
/// its bus, delay and pin parameters.
pub trait AudioControl {
    /// Error type for control operations. For the ES8388 this is
    /// [`CodecError`](crate::codec::CodecError).
    type Error;

    /// Run the full bring-up: amplifier on, address check, soft reset,
    /// register table and 50 % volume. Same as
    /// [`Es8388::initialize`](crate::Es8388::initialize), so it may be
    /// called again from any state.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Switch off the DAC, ADC and chip power blocks, then the amplifier.
    /// Same as [`Es8388::power_down`](crate::Es8388::power_down).
    fn disable(&mut self) -> Result<(), Self::Error>;

    /// Set the output volume from a `0.0..=1.0` level.
    ///
    /// The level is clamped, scaled to a percentage and rounded to the
    /// nearest step, so `0.5` caches 50 %. NaN counts as silent.
    fn volume(&mut self, level: f32) -> Result<(), Self::Error>;
}
