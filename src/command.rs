//! SSD1306 command bytes and the power-up command sequence.
//!
//! Commands that take parameters are followed by their parameter bytes as
//! separate command frames. Page and column selects are base values OR'd
//! (or added) with the index.

use crate::config::DisplayConfig;
use crate::framebuffer::DisplaySize;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

/// Panel off (sleep).
pub const DISPLAY_OFF: u8 = 0xAE;

/// Panel on.
pub const DISPLAY_ON: u8 = 0xAF;

/// Contrast control; followed by the contrast value.
pub const SET_CONTRAST: u8 = 0x81;

/// Pixels follow display RAM.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Normal polarity (a set RAM bit lights the pixel).
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted polarity.
pub const INVERT_DISPLAY: u8 = 0xA7;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Memory addressing mode; followed by one of the `ADDRESSING_*` values.
pub const SET_MEMORY_MODE: u8 = 0x20;

/// Horizontal addressing mode parameter.
pub const ADDRESSING_HORIZONTAL: u8 = 0x00;

/// Page start address base, `0xB0 + page`.
pub const SET_PAGE_START: u8 = 0xB0;

/// Lower column start nibble base, `0x00 | (column & 0x0F)`.
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Higher column start nibble base, `0x10 | (column >> 4)`.
pub const SET_HIGH_COLUMN: u8 = 0x10;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

/// Display start line base, `0x40 | line`.
pub const SET_START_LINE: u8 = 0x40;

/// Column 127 mapped to SEG0.
pub const SET_SEGMENT_REMAP: u8 = 0xA1;

/// Multiplex ratio; followed by `height - 1`.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM output scan from COM[N-1] down to COM0.
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Vertical display offset; followed by the offset.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

// ---------------------------------------------------------------------------
// Timing and driving
// ---------------------------------------------------------------------------

/// Clock divide ratio / oscillator frequency; followed by the setting.
pub const SET_CLOCK_DIV: u8 = 0xD5;

/// Pre-charge period; followed by the setting.
pub const SET_PRECHARGE: u8 = 0xD9;

/// VCOMH deselect level; followed by the setting.
pub const SET_VCOM_DETECT: u8 = 0xDB;

/// Charge pump setting; followed by [`CHARGE_PUMP_ENABLE`].
pub const SET_CHARGE_PUMP: u8 = 0x8D;

/// Charge pump enable parameter.
pub const CHARGE_PUMP_ENABLE: u8 = 0x14;

// ---------------------------------------------------------------------------
// Sequences
// ---------------------------------------------------------------------------

/// Number of command bytes in [`init_sequence`].
pub const INIT_SEQUENCE_LEN: usize = 23;

/// The power-up sequence, one byte per command frame.
///
/// The order is fixed: clock, multiplex and charge pump must be configured
/// before the panel is switched on, and the controller expects exactly this
/// ordering. Only the tunable parameter bytes come from `config`; the
/// multiplex ratio comes from the display height.
pub fn init_sequence<SIZE: DisplaySize>(config: &DisplayConfig) -> [u8; INIT_SEQUENCE_LEN] {
    [
        DISPLAY_OFF,
        SET_CLOCK_DIV,
        config.clock_divide,
        SET_MULTIPLEX,
        SIZE::HEIGHT - 1,
        SET_DISPLAY_OFFSET,
        0x00,
        SET_START_LINE,
        SET_CHARGE_PUMP,
        CHARGE_PUMP_ENABLE,
        SET_MEMORY_MODE,
        ADDRESSING_HORIZONTAL,
        SET_SEGMENT_REMAP,
        COM_SCAN_DEC,
        SET_CONTRAST,
        config.contrast,
        SET_PRECHARGE,
        config.precharge,
        SET_VCOM_DETECT,
        config.vcom_deselect,
        DISPLAY_ALL_ON_RESUME,
        NORMAL_DISPLAY,
        DISPLAY_ON,
    ]
}

/// Page and column select commands that precede a page's data frame.
pub fn page_select(page: u8) -> [u8; 3] {
    [SET_PAGE_START + page, SET_LOW_COLUMN, SET_HIGH_COLUMN]
}
