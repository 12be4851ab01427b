//! Packed 32-bit colors
//!
//! A color is a `u32` made of four 8-bit channels:
//! white in bits 24-31, red in 16-23, green in 8-15 and blue in 0-7.

use smart_leds::White;

use crate::color::{Rgb, Rgbw};
use crate::math8::scale8;

/// Packed `0xWWRRGGBB` color
pub type Color = u32;

/// All channels off
pub const BLACK: Color = 0;

/// Pack four channels into one color
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn pack(white: u8, red: u8, green: u8, blue: u8) -> Color {
    ((white as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Pack a color without a white component
#[inline]
pub const fn pack_rgb(red: u8, green: u8, blue: u8) -> Color {
    pack(0, red, green, blue)
}

/// White channel (bits 24-31)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn white(color: Color) -> u8 {
    (color >> 24) as u8
}

/// Red channel (bits 16-23)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn red(color: Color) -> u8 {
    (color >> 16) as u8
}

/// Green channel (bits 8-15)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn green(color: Color) -> u8 {
    (color >> 8) as u8
}

/// Blue channel (bits 0-7)
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn blue(color: Color) -> u8 {
    color as u8
}

/// Split a color into `(white, red, green, blue)`
#[inline]
pub const fn unpack(color: Color) -> (u8, u8, u8, u8) {
    (white(color), red(color), green(color), blue(color))
}

/// Scale the brightness of every channel of a color
///
/// Each channel becomes `channel * (factor + 1) / 256`, so 255 keeps the
/// color as is and 0 turns it off. This is a cheap linear dimmer, not a
/// perceptual one.
#[inline]
pub const fn scale_brightness(color: Color, factor: u8) -> Color {
    pack(
        scale8(white(color), factor),
        scale8(red(color), factor),
        scale8(green(color), factor),
        scale8(blue(color), factor),
    )
}

/// Convert to an RGB value, dropping the white channel
pub const fn to_rgb(color: Color) -> Rgb {
    Rgb {
        r: red(color),
        g: green(color),
        b: blue(color),
    }
}

/// Pack an RGB value with white off
pub const fn from_rgb(rgb: Rgb) -> Color {
    pack_rgb(rgb.r, rgb.g, rgb.b)
}

/// Convert to an RGBW value, white carried in the alpha slot
pub const fn to_rgbw(color: Color) -> Rgbw {
    Rgbw {
        r: red(color),
        g: green(color),
        b: blue(color),
        a: White(white(color)),
    }
}

/// Pack an RGBW value
pub const fn from_rgbw(rgbw: Rgbw) -> Color {
    pack(rgbw.a.0, rgbw.r, rgbw.g, rgbw.b)
}

/// Color types that can be built from a packed color
///
/// Used by output drivers to turn buffer contents into the color type
/// their hardware expects.
pub trait FromPacked {
    fn from_packed(color: Color) -> Self;
}

impl FromPacked for Rgb {
    fn from_packed(color: Color) -> Self {
        to_rgb(color)
    }
}

impl FromPacked for Rgbw {
    fn from_packed(color: Color) -> Self {
        to_rgbw(color)
    }
}

impl FromPacked for Color {
    fn from_packed(color: Color) -> Self {
        color
    }
}
