use thiserror::Error;

use crate::codec::State;

/// Errors reported by the ES8388 driver.
///
/// Generic over the I2C bus error `I` and the amplifier pin error `P`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error<I, P> {
    /// The address-only presence check was not acknowledged.
    #[error("ES8388 did not acknowledge its I2C address")]
    DeviceNotFound,
    /// A bus transaction failed for any other reason.
    #[error("I2C bus error: {0:?}")]
    I2c(I),
    /// The amplifier enable line could not be driven.
    #[error("amplifier enable pin error: {0:?}")]
    Pin(P),
    /// The operation is not allowed in the current state: any control
    /// after power-down, or power-down before bring-up.
    #[error("operation not allowed while codec is {0:?}")]
    InvalidState(State),
}
