use embassy_time::Duration;
#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::buffer::PixelBuffer;
use crate::color::{Color, hue_wheel};
use crate::format::PixelFormat;
use crate::math8::spread8;
use crate::output::{Delay, OutputDriver};

/// Configuration for a strand
#[derive(Debug, Clone, Copy)]
pub struct StrandConfig {
    /// Number of LEDs on the strand
    pub pixel_count: u16,
    /// Channel order and layout of every pixel
    pub format: PixelFormat,
}

/// LED strand - pixel buffer wired to an output driver
///
/// The strand owns its buffer. Wipes display on their own; scrolls and
/// direct pixel writes only change the buffer until [`Strand::show`].
pub struct Strand<O: OutputDriver, D: Delay, const BYTES: usize> {
    buffer: PixelBuffer<BYTES>,
    output: O,
    delay: D,
}

impl<O: OutputDriver, D: Delay, const BYTES: usize> Strand<O, D, BYTES> {
    /// Create a new strand with every pixel off
    ///
    /// Returns `None` if the strand does not fit into `BYTES`.
    pub fn new(config: &StrandConfig, output: O, delay: D) -> Option<Self> {
        let buffer = PixelBuffer::new(config.pixel_count, config.format)?;
        #[cfg(feature = "esp32-log")]
        println!(
            "[Strand.new] {} pixels, {:?} layout, stride {}",
            config.pixel_count,
            config.format.layout(),
            config.format.stride()
        );
        Some(Self::from_parts(buffer, output, delay))
    }

    /// Wrap an existing buffer
    pub const fn from_parts(buffer: PixelBuffer<BYTES>, output: O, delay: D) -> Self {
        Self {
            buffer,
            output,
            delay,
        }
    }

    /// Take the strand apart again
    pub fn into_parts(self) -> (PixelBuffer<BYTES>, O, D) {
        (self.buffer, self.output, self.delay)
    }

    /// Pixel buffer, as last written
    pub const fn buffer(&self) -> &PixelBuffer<BYTES> {
        &self.buffer
    }

    /// Direct buffer access; changes show on the next [`Strand::show`]
    pub fn buffer_mut(&mut self) -> &mut PixelBuffer<BYTES> {
        &mut self.buffer
    }

    pub const fn output(&self) -> &O {
        &self.output
    }

    /// Number of LEDs on the strand
    pub const fn pixel_count(&self) -> u16 {
        self.buffer.pixel_count()
    }

    /// Push the buffer to the LEDs
    pub fn show(&mut self) {
        self.output.write(self.buffer.frame());
    }

    /// Write one pixel without displaying it
    ///
    /// See [`PixelBuffer::set_pixel`] for the index contract.
    pub fn set_pixel(&mut self, index: u16, color: Color) {
        self.buffer.set_pixel(index, color);
    }

    /// Wipe a single color from the first to the last pixel
    ///
    /// With a zero `delay` every pixel is written first and shown once.
    /// Otherwise the strand is shown and `delay` waited after every pixel.
    pub fn wipe_solid(&mut self, color: Color, delay: Duration) {
        self.wipe(delay, |_| color);
    }

    /// Wipe one full hue cycle from the first to the last pixel
    ///
    /// Pixel `i` gets `hue_wheel(hue_shift + i * 256 / pixel_count)`, so the
    /// rainbow spans the strand exactly once whatever its length. Display
    /// timing is the same as [`Strand::wipe_solid`].
    pub fn wipe_rainbow(&mut self, hue_shift: u8, delay: Duration) {
        let count = self.buffer.pixel_count();
        self.wipe(delay, |index| {
            hue_wheel(hue_shift.wrapping_add(spread8(index, count)))
        });
    }

    /// Shift pixels away from index 0, see [`PixelBuffer::scroll_forward`]
    pub fn scroll_forward(&mut self, amount: u16, fill: Color) {
        self.buffer.scroll_forward(amount, fill);
    }

    /// Shift pixels toward index 0, see [`PixelBuffer::scroll_backward`]
    pub fn scroll_backward(&mut self, amount: u16, fill: Color) {
        self.buffer.scroll_backward(amount, fill);
    }

    fn wipe(&mut self, delay: Duration, mut color_at: impl FnMut(u16) -> Color) {
        let animated = delay.as_ticks() > 0;
        let count = self.buffer.pixel_count();
        if count == 0 {
            return;
        }

        for index in 0..count {
            self.buffer.set_pixel(index, color_at(index));
            if animated {
                self.show();
                self.delay.wait(delay);
            }
        }

        if !animated {
            self.show();
        }
    }
}
