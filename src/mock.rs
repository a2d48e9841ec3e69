//! Test doubles: a recording I2C bus and a small display geometry.

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation};

use crate::framebuffer::DisplaySize;

/// 16×16 panel, two pages. Keeps wrap and overflow cases small.
pub struct DisplaySize16x16;

impl DisplaySize for DisplaySize16x16 {
    const WIDTH: u8 = 16;
    const HEIGHT: u8 = 16;
    type Buffer = [u8; 32];
    const BLANK: Self::Buffer = [0; 32];
}

/// I2C bus that records every transaction as `(address, written bytes)`.
///
/// Writes within one transaction are concatenated, matching how they
/// appear on the wire.
#[derive(Default)]
pub struct RecordingI2c {
    frames: Vec<(u8, Vec<u8>)>,
    fail_at: Option<usize>,
    attempts: usize,
}

impl RecordingI2c {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bus whose `index`-th transaction (0-based) fails with
    /// [`ErrorKind::Other`]. Failed transactions are not recorded.
    pub fn failing_at(index: usize) -> Self {
        Self {
            fail_at: Some(index),
            ..Self::default()
        }
    }

    pub fn frames(&self) -> &[(u8, Vec<u8>)] {
        &self.frames
    }

    /// Payload bytes of every command frame, in order.
    pub fn commands(&self) -> Vec<u8> {
        self.frames
            .iter()
            .filter(|(_, bytes)| bytes.len() == 2 && bytes[0] == 0x00)
            .map(|(_, bytes)| bytes[1])
            .collect()
    }
}

impl ErrorType for RecordingI2c {
    type Error = ErrorKind;
}

impl I2c for RecordingI2c {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_at == Some(attempt) {
            return Err(ErrorKind::Other);
        }

        let mut bytes = Vec::new();
        for op in operations.iter() {
            match op {
                Operation::Write(data) => bytes.extend_from_slice(data),
                Operation::Read(_) => return Err(ErrorKind::Other),
            }
        }
        self.frames.push((address, bytes));
        Ok(())
    }
}
