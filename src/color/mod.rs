mod packed;
mod wheel;

use smart_leds::{RGB8, RGBW};

pub use packed::{
    BLACK, Color, FromPacked, blue, from_rgb, from_rgbw, green, pack, pack_rgb, red,
    scale_brightness, to_rgb, to_rgbw, unpack, white,
};
pub use wheel::hue_wheel;

pub type Rgb = RGB8;
pub type Rgbw = RGBW<u8>;
