//! Core OLED driver: power-up sequence, frame buffer ownership and flush.
//!
//! [`OledDriver`] manages the SSD1306 display lifecycle: construction without
//! I2C traffic, explicit initialisation, drawing into the in-memory frame
//! buffer, and full-screen flush.

use core::fmt::{self, Write};

use embedded_hal::i2c::I2c;
use heapless::String;

use crate::command;
use crate::config::DisplayConfig;
use crate::error::OledError;
use crate::font::{Font, FONT_5X7};
use crate::framebuffer::{DisplaySize, DisplaySize128x64, Framebuffer};
use crate::interface::I2cInterface;
use crate::text::{self, TextCursor};

/// Formatting buffer size for [`OledDriver::draw_fmt`], in bytes. A 128×64
/// screen holds 21 × 8 = 168 cells of the default font, so ASCII output
/// always fits; multi-byte characters take one cell but 2–4 bytes.
pub const FMT_CAPACITY: usize = 192;

/// Blocking driver for an SSD1306 OLED display over I2C.
///
/// Owns the bus, a frame buffer sized by `SIZE` and the font used by
/// [`draw_text()`](Self::draw_text). Every bus transaction blocks until the
/// transfer completes. The driver has no internal locking; wrap the whole
/// instance in a mutex to share it.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] — sends the SSD1306 power-up sequence.
/// 3. Draw into the frame buffer with [`set_pixel()`](Self::set_pixel),
///    [`framebuffer_mut()`](Self::framebuffer_mut), or
///    [`draw_text()`](Self::draw_text) (which also flushes).
/// 4. [`OledDriver::flush()`] — transfers the frame buffer to hardware.
///
/// # Example
///
/// ```no_run
/// use ssd1306_text_rs::{DisplayConfig, OledDriver};
///
/// # fn example(i2c: impl embedded_hal::i2c::I2c) {
/// let mut oled: OledDriver<_> = OledDriver::new(i2c, DisplayConfig::default());
/// oled.init().unwrap();
/// oled.draw_text("Hello", 10, 10).unwrap();
/// # }
/// ```
pub struct OledDriver<'a, I2C, SIZE: DisplaySize = DisplaySize128x64> {
    interface: I2cInterface<I2C>,
    framebuffer: Framebuffer<SIZE>,
    font: Font<'a>,
    config: DisplayConfig,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
}

impl<I2C, SIZE> OledDriver<'static, I2C, SIZE>
where
    I2C: I2c,
    SIZE: DisplaySize,
{
    /// Construct an uninitialised driver using [`FONT_5X7`].
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before flushing or drawing text.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `config` — Bus address and power-up parameters.
    pub fn new(i2c: I2C, config: DisplayConfig) -> Self {
        OledDriver::with_font(i2c, config, FONT_5X7)
    }
}

impl<'a, I2C, SIZE> OledDriver<'a, I2C, SIZE>
where
    I2C: I2c,
    SIZE: DisplaySize,
{
    /// Construct an uninitialised driver with a caller-supplied font.
    pub fn with_font(i2c: I2C, config: DisplayConfig, font: Font<'a>) -> Self {
        Self {
            interface: I2cInterface::new(i2c, config.address),
            framebuffer: Framebuffer::new(),
            font,
            config,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// Sends the power-up sequence from [`command::init_sequence`], one
    /// command frame per byte, in order. Must be called once before any
    /// flush. Sets `initialized = true` on success.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::I2c`] on the first bus failure; the rest of the
    /// sequence is not sent and the driver stays uninitialised.
    pub fn init(&mut self) -> Result<(), OledError<I2C::Error>> {
        let sequence = command::init_sequence::<SIZE>(&self.config);
        self.interface.send_commands(&sequence)?;
        self.initialized = true;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "SSD1306 {}x{} initialised at {=u8:#x}",
            SIZE::WIDTH,
            SIZE::HEIGHT,
            self.config.address
        );

        Ok(())
    }

    /// Transfer the whole frame buffer to the display.
    ///
    /// For each page: page select, column low = 0, column high = 0, then
    /// one data frame with the page's `WIDTH` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not been called, or [`OledError::I2c`] on a bus-level failure. The
    /// first failed write aborts the flush; the remaining pages are not sent.
    pub fn flush(&mut self) -> Result<(), OledError<I2C::Error>> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }

        for page in 0..SIZE::PAGES {
            let result = self
                .interface
                .send_commands(&command::page_select(page))
                .and_then(|()| self.interface.send_data(self.framebuffer.page(page)));

            if let Err(e) = result {
                #[cfg(feature = "defmt")]
                defmt::warn!("flush aborted at page {}", page);
                return Err(e);
            }
        }

        Ok(())
    }

    /// Set or clear one pixel in the frame buffer.
    ///
    /// Out-of-range coordinates are ignored. No I2C traffic.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.framebuffer.set_pixel(x, y, on);
    }

    /// Read one pixel from the frame buffer. Off-screen pixels read as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        self.framebuffer.pixel(x, y)
    }

    /// Clear the in-memory frame buffer.
    ///
    /// Does **not** send any I2C traffic — the display is unchanged until
    /// [`flush()`](Self::flush) is called.
    pub fn clear_buffer(&mut self) {
        self.framebuffer.clear();
    }

    /// Render `text` at `(x, y)` and flush.
    ///
    /// See [`text::render`] for the layout rules. Characters the font does
    /// not cover are skipped but keep their cell; characters past the
    /// bottom of the display are dropped. The frame buffer is not cleared
    /// first, so text overlays what is already there.
    ///
    /// # Errors
    ///
    /// Only the flush can fail; see [`flush()`](Self::flush). The frame
    /// buffer keeps the rendered text either way.
    pub fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
    ) -> Result<TextCursor, OledError<I2C::Error>> {
        let cursor = text::render(&mut self.framebuffer, &self.font, text, x, y);

        if cursor.truncated {
            #[cfg(feature = "defmt")]
            defmt::debug!(
                "draw_text: dropped text after {} chars at bottom edge",
                cursor.consumed
            );
        }

        self.flush()?;
        Ok(cursor)
    }

    /// Format `args` and draw the result like [`draw_text()`](Self::draw_text).
    ///
    /// Output beyond [`FMT_CAPACITY`] UTF-8 bytes is dropped, even if the
    /// dropped characters would still have had a cell on screen.
    ///
    /// ```no_run
    /// # use ssd1306_text_rs::{DisplayConfig, OledDriver};
    /// # fn example(i2c: impl embedded_hal::i2c::I2c) {
    /// # let mut oled: OledDriver<_> = OledDriver::new(i2c, DisplayConfig::default());
    /// let temp = 21;
    /// oled.draw_fmt(0, 0, format_args!("Temp: {} C", temp)).ok();
    /// # }
    /// ```
    pub fn draw_fmt(
        &mut self,
        x: i32,
        y: i32,
        args: fmt::Arguments<'_>,
    ) -> Result<TextCursor, OledError<I2C::Error>> {
        let mut buf: String<FMT_CAPACITY> = String::new();
        // heapless::String rejects a whole write that does not fit, so write
        // char by char to keep the prefix.
        let _ = TruncatingWriter(&mut buf).write_fmt(args);
        self.draw_text(&buf, x, y)
    }

    /// Set the panel contrast (0–255).
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), OledError<I2C::Error>> {
        self.interface
            .send_commands(&[command::SET_CONTRAST, contrast])
    }

    /// Turn the panel on or off. Display RAM is retained while off.
    pub fn set_display_on(&mut self, on: bool) -> Result<(), OledError<I2C::Error>> {
        let cmd = if on {
            command::DISPLAY_ON
        } else {
            command::DISPLAY_OFF
        };
        self.interface.send_command(cmd)
    }

    /// Invert display polarity.
    pub fn set_inverted(&mut self, inverted: bool) -> Result<(), OledError<I2C::Error>> {
        let cmd = if inverted {
            command::INVERT_DISPLAY
        } else {
            command::NORMAL_DISPLAY
        };
        self.interface.send_command(cmd)
    }

    /// The frame buffer.
    pub fn framebuffer(&self) -> &Framebuffer<SIZE> {
        &self.framebuffer
    }

    /// Mutable frame buffer, e.g. as an `embedded-graphics` draw target.
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<SIZE> {
        &mut self.framebuffer
    }

    /// The font used by [`draw_text()`](Self::draw_text).
    pub fn font(&self) -> &Font<'a> {
        &self.font
    }

    /// Check whether the display has been successfully initialised.
    ///
    /// No I2C traffic is generated.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Consume the driver and give the bus back.
    pub fn release(self) -> I2C {
        self.interface.release()
    }
}

/// `fmt::Write` adapter that keeps as much as fits and fails after that.
struct TruncatingWriter<'b, const N: usize>(&'b mut String<N>);

impl<const N: usize> Write for TruncatingWriter<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for ch in s.chars() {
            self.0.push(ch).map_err(|_| fmt::Error)?;
        }
        Ok(())
    }
}
