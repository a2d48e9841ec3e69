//! I2C framing for SSD1306 commands and display data.
//!
//! Every bus write to the controller starts with a control byte telling it
//! how to interpret the rest of the transaction:
//!
//! ```text
//! command frame: [0x00, command]
//! data frame:    [0x40, pixel bytes...]
//! ```
//!
//! [`I2cInterface`] produces exactly one bus write per call. It never
//! buffers across calls and never retries.

use embedded_hal::i2c::I2c;
use heapless::Vec;

use crate::error::OledError;

/// Control byte prefix for a command frame.
pub const COMMAND_PREFIX: u8 = 0x00;

/// Control byte prefix for a data frame.
pub const DATA_PREFIX: u8 = 0x40;

/// Largest data payload in one frame: a full 128-column page.
pub const MAX_DATA_LEN: usize = 128;

/// Command/data framer over a blocking I2C bus.
///
/// Owns the bus for exclusive access. Pass `&mut bus` instead to share a
/// bus between devices; `embedded-hal` implements [`I2c`] for `&mut T`.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a framer.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access)
    /// * `address` — 7-bit I2C device address (typically 0x3C)
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// 7-bit device address frames are sent to.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Send one command byte as a command frame.
    pub fn send_command(&mut self, command: u8) -> Result<(), OledError<I2C::Error>> {
        self.i2c.write(self.address, &[COMMAND_PREFIX, command])?;
        Ok(())
    }

    /// Send each byte of `commands` as its own command frame, in order.
    ///
    /// Stops at the first bus error.
    pub fn send_commands(&mut self, commands: &[u8]) -> Result<(), OledError<I2C::Error>> {
        for &command in commands {
            self.send_command(command)?;
        }
        Ok(())
    }

    /// Send `data` as a single data frame.
    ///
    /// # Errors
    /// * [`OledError::PayloadTooLong`] if `data` exceeds [`MAX_DATA_LEN`];
    ///   nothing is sent.
    /// * [`OledError::I2c`] on communication failure.
    pub fn send_data(&mut self, data: &[u8]) -> Result<(), OledError<I2C::Error>> {
        let mut frame: Vec<u8, { MAX_DATA_LEN + 1 }> = Vec::new();
        frame
            .push(DATA_PREFIX)
            .map_err(|_| OledError::PayloadTooLong)?;
        frame
            .extend_from_slice(data)
            .map_err(|_| OledError::PayloadTooLong)?;

        self.i2c.write(self.address, &frame)?;
        Ok(())
    }

    /// Give the bus back.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
