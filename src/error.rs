//! Error types for the OLED display driver.

use core::fmt;

/// Errors that can occur during OLED display operations.
///
/// Drawing into the frame buffer never fails; only bus traffic does. The
/// driver does not retry, so the first failing transaction is returned
/// as-is and the operation stops there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OledError<E> {
    /// Underlying I2C bus error.
    I2c(E),
    /// An operation was attempted before [`OledDriver::init()`](crate::OledDriver::init)
    /// was called.
    NotInitialized,
    /// A data frame payload does not fit in a single bus write.
    PayloadTooLong,
}

// Allow ergonomic `?` propagation from raw I2C errors.
impl<E> From<E> for OledError<E> {
    fn from(error: E) -> Self {
        OledError::I2c(error)
    }
}

impl<E: fmt::Debug> fmt::Display for OledError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::I2c(e) => write!(f, "I2C error: {:?}", e),
            OledError::NotInitialized => write!(f, "Display not initialized"),
            OledError::PayloadTooLong => write!(f, "Data frame payload too long"),
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: fmt::Debug> defmt::Format for OledError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::I2c(e) => defmt::write!(f, "I2C error: {}", defmt::Debug2Format(e)),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
            OledError::PayloadTooLong => defmt::write!(f, "Payload too long"),
        }
    }
}
