use crate::color::{Color, pack_rgb};
use crate::math8::triple8;

/// Width of one band of the hue wheel
const BAND: u8 = 85;

/// Fully saturated color for a hue wheel position (0-255)
///
/// The position is inverted and split into three 85-wide bands. Inside
/// each band two primaries cross-fade with a step of 3 per unit while the
/// third stays off:
///
/// - inverted `0..85`: red fades to blue
/// - inverted `85..170`: blue fades to green
/// - inverted `170..256`: green fades to red
///
/// Band edges do not sum to exactly 255 on every step; that quantization is
/// kept as is. White is always 0.
pub const fn hue_wheel(position: u8) -> Color {
    let mut pos = 255 - position;
    if pos < BAND {
        return pack_rgb(255 - triple8(pos), 0, triple8(pos));
    }
    if pos < BAND * 2 {
        pos -= BAND;
        return pack_rgb(0, triple8(pos), 255 - triple8(pos));
    }
    pos -= BAND * 2;
    pack_rgb(triple8(pos), 255 - triple8(pos), 0)
}
