/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Computes `value * (scale + 1) / 256` with integer math. A scale of 255
/// keeps the value unchanged and a scale of 0 always yields 0.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Triple an offset inside one 85-wide hue band
///
/// Band offsets are below 86, so the product always fits in a byte.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub(crate) const fn triple8(offset: u8) -> u8 {
    (offset as u16 * 3) as u8
}

/// Spread `index` of `count` evenly over the 0-255 circle
///
/// Returns `index * 256 / count`, truncated to the low byte.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub const fn spread8(index: u16, count: u16) -> u8 {
    if count == 0 {
        return 0;
    }
    ((index as u32 * 256) / count as u32) as u8
}
