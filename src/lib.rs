#![no_std]

pub mod buffer;
pub mod color;
pub mod format;
pub mod math8;
pub mod output;
pub mod strand;

pub use buffer::{Frame, PixelBuffer, bytes_for};
pub use format::{ChannelLayout, PixelFormat};
pub use output::{BlockingDelay, Delay, OutputDriver, SmartLedsOutput};
pub use strand::{Strand, StrandConfig};

pub use color::{BLACK, Color, Rgb, Rgbw, hue_wheel, pack, pack_rgb, scale_brightness};
pub use embassy_time::Duration;
