//! Driver configuration.

/// Default 7-bit I2C address of SSD1306 modules (`0x3D` with SA0 high).
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Bus address and the tunable bytes of the power-up sequence.
///
/// Display geometry is not configured here; it is the driver's
/// [`DisplaySize`](crate::DisplaySize) type parameter.
///
/// [`DisplayConfig::default()`] reproduces the standard power-up values
/// for a 128×64 module running from its internal charge pump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayConfig {
    /// 7-bit I2C device address. Default: `0x3C`.
    pub address: u8,
    /// Clock divide ratio / oscillator frequency byte. Default: `0x80`.
    pub clock_divide: u8,
    /// Power-up contrast. Default: `0x8F`.
    pub contrast: u8,
    /// Pre-charge period byte. Default: `0xF1`.
    pub precharge: u8,
    /// VCOMH deselect level byte. Default: `0x40`.
    pub vcom_deselect: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_ADDRESS,
            clock_divide: 0x80,
            contrast: 0x8F,
            precharge: 0xF1,
            vcom_deselect: 0x40,
        }
    }
}

impl DisplayConfig {
    /// Default configuration at a different bus address.
    pub fn with_address(address: u8) -> Self {
        Self {
            address,
            ..Self::default()
        }
    }
}
