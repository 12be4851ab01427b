//! Raw pixel buffer
//!
//! Stores the strand as tightly packed channel bytes in wire order, the
//! same bytes that go out to the LEDs. Pixel `i` occupies
//! `bytes[i * stride..(i + 1) * stride]`.

use heapless::Vec;

use crate::color::{BLACK, Color, pack, unpack};
use crate::format::{ChannelLayout, PixelFormat};

/// Number of buffer bytes needed for `pixels` LEDs with a four-byte stride
///
/// Handy for sizing a buffer that accepts either layout.
pub const fn bytes_for(pixels: usize) -> usize {
    pixels * ChannelLayout::Rgbw.stride()
}

/// Fixed-capacity pixel buffer
///
/// `BYTES` is the storage capacity; the strand itself uses
/// `pixel_count * stride` of it.
#[derive(Debug, Clone)]
pub struct PixelBuffer<const BYTES: usize> {
    format: PixelFormat,
    pixel_count: u16,
    bytes: Vec<u8, BYTES>,
}

impl<const BYTES: usize> PixelBuffer<BYTES> {
    /// Create a buffer with every pixel off
    ///
    /// Returns `None` if the strand does not fit into `BYTES`.
    pub fn new(pixel_count: u16, format: PixelFormat) -> Option<Self> {
        let len = usize::from(pixel_count) * format.stride();
        let mut bytes = Vec::new();
        bytes.resize(len, 0).ok()?;

        Some(Self {
            format,
            pixel_count,
            bytes,
        })
    }

    /// Channel order the bytes are stored in
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// RGB or RGBW, fixed at construction
    pub const fn layout(&self) -> ChannelLayout {
        self.format.layout()
    }

    /// Bytes per pixel
    pub const fn stride(&self) -> usize {
        self.format.stride()
    }

    /// Number of LEDs on the strand
    pub const fn pixel_count(&self) -> u16 {
        self.pixel_count
    }

    /// True for a strand without LEDs
    pub const fn is_empty(&self) -> bool {
        self.pixel_count == 0
    }

    /// Raw channel bytes in wire order
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Borrow the buffer as a frame for an output driver
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            format: self.format,
            bytes: &self.bytes,
        }
    }

    /// Write a packed color into one pixel
    ///
    /// The white channel is dropped on RGB strands.
    ///
    /// # Panics
    ///
    /// `index` must be below [`Self::pixel_count`]. Keeping it in range is
    /// up to the caller; the buffer does not clamp or wrap it.
    #[inline]
    pub fn set_pixel(&mut self, index: u16, color: Color) {
        let stride = self.stride();
        let start = usize::from(index) * stride;
        write_pixel(self.format, &mut self.bytes[start..start + stride], color);
    }

    /// Read one pixel back as a packed color
    ///
    /// White reads as 0 on RGB strands.
    ///
    /// # Panics
    ///
    /// `index` must be below [`Self::pixel_count`].
    #[inline]
    pub fn pixel(&self, index: u16) -> Color {
        let stride = self.stride();
        let start = usize::from(index) * stride;
        read_pixel(self.format, &self.bytes[start..start + stride])
    }

    /// Set every pixel to one color
    pub fn fill(&mut self, color: Color) {
        self.fill_range(0, self.pixel_count, color);
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    /// Shift pixels away from index 0
    ///
    /// Content pushed past the last pixel is lost; the `amount` pixels
    /// nearest index 0 are set to `fill`. `amount` wraps around the strand
    /// length, so shifting by a multiple of it does nothing.
    pub fn scroll_forward(&mut self, amount: u16, fill: Color) {
        let Some(amount) = self.effective_shift(amount) else {
            return;
        };
        let stride = self.stride();
        let kept = usize::from(self.pixel_count - amount) * stride;

        self.bytes.copy_within(0..kept, usize::from(amount) * stride);
        self.fill_range(0, amount, fill);
    }

    /// Shift pixels toward index 0
    ///
    /// Mirror of [`Self::scroll_forward`]: content pushed before index 0 is
    /// lost and the `amount` pixels nearest the end are set to `fill`.
    pub fn scroll_backward(&mut self, amount: u16, fill: Color) {
        let Some(amount) = self.effective_shift(amount) else {
            return;
        };
        let stride = self.stride();
        let shifted = usize::from(amount) * stride;

        self.bytes.copy_within(shifted.., 0);
        self.fill_range(self.pixel_count - amount, self.pixel_count, fill);
    }

    /// Scroll forward by one pixel, feeding black
    pub fn step_forward(&mut self) {
        self.scroll_forward(1, BLACK);
    }

    /// Scroll backward by one pixel, feeding black
    pub fn step_backward(&mut self) {
        self.scroll_backward(1, BLACK);
    }

    /// Shift amount reduced to the strand length, `None` when nothing moves
    fn effective_shift(&self, amount: u16) -> Option<u16> {
        if self.pixel_count == 0 {
            return None;
        }
        let amount = amount % self.pixel_count;
        (amount != 0).then_some(amount)
    }

    fn fill_range(&mut self, start: u16, end: u16, color: Color) {
        let stride = self.stride();
        let range = usize::from(start) * stride..usize::from(end) * stride;
        for pixel in self.bytes[range].chunks_exact_mut(stride) {
            write_pixel(self.format, pixel, color);
        }
    }
}

/// Borrowed view of a pixel buffer, handed to output drivers
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    format: PixelFormat,
    bytes: &'a [u8],
}

impl<'a> Frame<'a> {
    /// Channel order of the frame bytes
    pub const fn format(&self) -> PixelFormat {
        self.format
    }

    /// Raw channel bytes in wire order
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Number of pixels in the frame
    pub fn len(&self) -> usize {
        self.bytes.len() / self.format.stride()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Iterate over the pixels as packed colors
    pub fn colors(self) -> impl Iterator<Item = Color> + 'a {
        let format = self.format;
        self.bytes
            .chunks_exact(format.stride())
            .map(move |pixel| read_pixel(format, pixel))
    }
}

#[inline]
fn write_pixel(format: PixelFormat, pixel: &mut [u8], color: Color) {
    let (w, r, g, b) = unpack(color);
    let (w_off, r_off, g_off, b_off) = format.offsets();
    if format.layout() == ChannelLayout::Rgbw {
        pixel[w_off] = w;
    }
    pixel[r_off] = r;
    pixel[g_off] = g;
    pixel[b_off] = b;
}

#[inline]
fn read_pixel(format: PixelFormat, pixel: &[u8]) -> Color {
    let (w_off, r_off, g_off, b_off) = format.offsets();
    let w = match format.layout() {
        ChannelLayout::Rgb => 0,
        ChannelLayout::Rgbw => pixel[w_off],
    };
    pack(w, pixel[r_off], pixel[g_off], pixel[b_off])
}
