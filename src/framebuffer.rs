//! Page-packed monochrome frame buffer.
//!
//! The buffer mirrors the controller's display RAM: `HEIGHT / 8` pages, each
//! a row of `WIDTH` bytes, each byte a vertical strip of 8 pixels with bit 0
//! at the top.
//!
//! ```text
//!            x = 0    x = 1          x = WIDTH-1
//! page 0   [ byte 0 ][ byte 1 ] ... [ byte WIDTH-1   ]   y = 0..7
//! page 1   [ WIDTH  ][ ...    ] ... [ 2*WIDTH-1      ]   y = 8..15
//! ...
//! ```
//!
//! Pixel `(x, y)` is bit `y % 8` of byte `x + (y / 8) * WIDTH`. The flush
//! path sends one page per data frame, so this layout is what goes on the
//! wire.

use core::convert::Infallible;

use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::BinaryColor,
    Pixel,
};

/// Display geometry.
///
/// `Buffer` is the fixed-size backing array, `WIDTH * HEIGHT / 8` bytes,
/// so the frame buffer lives inline without allocation. `WIDTH` must not
/// exceed 128 (the controller's column count) and `HEIGHT` must be a
/// multiple of 8.
pub trait DisplaySize {
    /// Width in pixels.
    const WIDTH: u8;
    /// Height in pixels.
    const HEIGHT: u8;
    /// Backing storage for the frame buffer.
    type Buffer: AsRef<[u8]> + AsMut<[u8]>;
    /// An all-off buffer.
    const BLANK: Self::Buffer;

    /// Number of 8-pixel pages.
    const PAGES: u8 = Self::HEIGHT / 8;
}

/// 128×64 panel, the common SSD1306 module.
#[derive(Debug, Clone, Copy)]
pub struct DisplaySize128x64;

impl DisplaySize for DisplaySize128x64 {
    const WIDTH: u8 = 128;
    const HEIGHT: u8 = 64;
    type Buffer = [u8; 128 * 64 / 8];
    const BLANK: Self::Buffer = [0; 128 * 64 / 8];
}

/// In-memory copy of the display RAM.
pub struct Framebuffer<SIZE: DisplaySize> {
    buffer: SIZE::Buffer,
}

impl<SIZE: DisplaySize> Default for Framebuffer<SIZE> {
    fn default() -> Self {
        Self::new()
    }
}

impl<SIZE: DisplaySize> Framebuffer<SIZE> {
    /// Create an all-off frame buffer.
    pub fn new() -> Self {
        Self {
            buffer: SIZE::BLANK,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u8 {
        SIZE::WIDTH
    }

    /// Height in pixels.
    pub fn height(&self) -> u8 {
        SIZE::HEIGHT
    }

    /// Number of 8-pixel pages.
    pub fn pages(&self) -> u8 {
        SIZE::PAGES
    }

    /// Byte offset and bit mask for `(x, y)`, or `None` if off-screen.
    fn locate(x: i32, y: i32) -> Option<(usize, u8)> {
        if x < 0 || y < 0 || x >= i32::from(SIZE::WIDTH) || y >= i32::from(SIZE::HEIGHT) {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        let index = x + (y / 8) * SIZE::WIDTH as usize;
        Some((index, 1 << (y % 8)))
    }

    /// Turn the pixel at `(x, y)` on or off.
    ///
    /// Coordinates outside the display are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        let Some((index, mask)) = Self::locate(x, y) else {
            return;
        };
        let byte = &mut self.buffer.as_mut()[index];
        if on {
            *byte |= mask;
        } else {
            *byte &= !mask;
        }
    }

    /// Read the pixel at `(x, y)`. Off-screen pixels read as off.
    pub fn pixel(&self, x: i32, y: i32) -> bool {
        Self::locate(x, y)
            .map(|(index, mask)| self.buffer.as_ref()[index] & mask != 0)
            .unwrap_or(false)
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.buffer.as_mut().fill(0);
    }

    /// The `WIDTH` bytes of page `page`. Empty if `page` is out of range.
    pub fn page(&self, page: u8) -> &[u8] {
        if page >= SIZE::PAGES {
            return &[];
        }
        let width = SIZE::WIDTH as usize;
        let start = page as usize * width;
        &self.buffer.as_ref()[start..start + width]
    }

    /// The whole buffer in display RAM order.
    pub fn as_bytes(&self) -> &[u8] {
        self.buffer.as_ref()
    }
}

impl<SIZE: DisplaySize> OriginDimensions for Framebuffer<SIZE> {
    fn size(&self) -> Size {
        Size::new(u32::from(SIZE::WIDTH), u32::from(SIZE::HEIGHT))
    }
}

impl<SIZE: DisplaySize> DrawTarget for Framebuffer<SIZE> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────────
