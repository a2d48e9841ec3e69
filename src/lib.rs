//! Blocking SSD1306 OLED driver with a page-packed frame buffer and
//! fixed-width text rendering.
//!
//! This crate provides [`OledDriver`], which owns an `embedded-hal` I2C bus
//! and an in-memory copy of the display RAM. Text is laid out with a
//! column-bitmap [`Font`] (the 5×7 ASCII [`FONT_5X7`] by default) and
//! pushed to the panel one page per bus write.
//!
//! # Quick Start
//!
//! ```no_run
//! use ssd1306_text_rs::{DisplayConfig, OledDriver};
//!
//! # fn example(i2c: impl embedded_hal::i2c::I2c) {
//! let mut oled: OledDriver<_> = OledDriver::new(i2c, DisplayConfig::default());
//! oled.init().unwrap();
//! oled.draw_text("Hello, world", 10, 10).unwrap();
//! # }
//! ```
//!
//! # Architecture
//!
//! ```text
//! OledDriver ──► text::render ──► Framebuffer::set_pixel
//!     │                               ▲
//!     │                          Font::glyph
//!     └──► I2cInterface ──► [0x00, cmd] / [0x40, page bytes] ──► I2c bus
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via `defmt` and `defmt::Format`
//!   implementations on public types.

#![cfg_attr(not(test), no_std)]

pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod font;
pub mod framebuffer;
pub mod interface;
pub mod text;

#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use config::{DisplayConfig, DEFAULT_ADDRESS};
pub use driver::OledDriver;
pub use error::OledError;
pub use font::{Font, FONT_5X7};
pub use framebuffer::{DisplaySize, DisplaySize128x64, Framebuffer};
pub use interface::I2cInterface;
pub use text::TextCursor;
