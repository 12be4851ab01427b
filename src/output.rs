//! Hardware boundary
//!
//! The strand only ever talks to the outside world through two calls:
//! pushing a frame to the LEDs and waiting between animation frames.

use embassy_time::Duration;
#[cfg(feature = "esp32-log")]
use esp_println::println;
use smart_leds::SmartLedsWrite;

use crate::buffer::Frame;
use crate::color::FromPacked;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Writing is blocking and has no failure mode visible to the strand.
pub trait OutputDriver {
    /// Write a frame to the LED strip
    fn write(&mut self, frame: Frame<'_>);
}

/// Blocking wait between animation frames
pub trait Delay {
    fn wait(&mut self, duration: Duration);
}

/// Busy-waits using the `embassy-time` driver
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockingDelay;

impl Delay for BlockingDelay {
    fn wait(&mut self, duration: Duration) {
        embassy_time::block_for(duration);
    }
}

/// Output driver backed by any [`SmartLedsWrite`] implementation
///
/// Pixels are converted from the buffer to the driver's color type on the
/// fly. Write errors are dropped.
#[derive(Debug)]
pub struct SmartLedsOutput<W> {
    writer: W,
}

impl<W> SmartLedsOutput<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W> OutputDriver for SmartLedsOutput<W>
where
    W: SmartLedsWrite,
    W::Color: FromPacked,
{
    fn write(&mut self, frame: Frame<'_>) {
        let colors = frame.colors().map(W::Color::from_packed);
        if self.writer.write(colors).is_err() {
            #[cfg(feature = "esp32-log")]
            println!("[SmartLedsOutput.write] failed to write {} pixels", frame.len());
        }
    }
}
