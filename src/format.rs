//! Pixel formats
//!
//! A format tells where each color channel lives inside one pixel of the
//! raw buffer. It is described by an 8-bit descriptor holding the byte
//! offset of every channel:
//!
//! ```text
//! bits 6-7: white offset
//! bits 4-5: red offset
//! bits 2-3: green offset
//! bits 0-1: blue offset
//! ```
//!
//! A strand without a white LED stores the same offset for white and red.

/// Channel layout of a single pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelLayout {
    /// Three bytes per pixel
    Rgb,
    /// Four bytes per pixel, with a dedicated white channel
    Rgbw,
}

impl ChannelLayout {
    /// Number of bytes occupied by one pixel
    pub const fn stride(self) -> usize {
        match self {
            Self::Rgb => 3,
            Self::Rgbw => 4,
        }
    }
}

/// Decoded pixel format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelFormat {
    layout: ChannelLayout,
    red: u8,
    green: u8,
    blue: u8,
    white: u8,
}

const fn descriptor(white: u8, red: u8, green: u8, blue: u8) -> u8 {
    (white << 6) | (red << 4) | (green << 2) | blue
}

/// Builds a named format at compile time.
macro_rules! named_format {
    ($name:ident, $w:expr, $r:expr, $g:expr, $b:expr) => {
        pub const $name: Self = match Self::from_descriptor(descriptor($w, $r, $g, $b)) {
            Some(format) => format,
            None => panic!("invalid pixel format"),
        };
    };
}

impl PixelFormat {
    named_format!(RGB, 0, 0, 1, 2);
    named_format!(RBG, 0, 0, 2, 1);
    named_format!(GRB, 1, 1, 0, 2);
    named_format!(GBR, 2, 2, 0, 1);
    named_format!(BRG, 1, 1, 2, 0);
    named_format!(BGR, 2, 2, 1, 0);
    named_format!(RGBW, 3, 0, 1, 2);
    named_format!(GRBW, 3, 1, 0, 2);
    named_format!(WRGB, 0, 1, 2, 3);

    /// Decode a format descriptor
    ///
    /// Returns `None` if two color channels share a byte, or if a
    /// three-byte format points outside its stride.
    pub const fn from_descriptor(raw: u8) -> Option<Self> {
        let white = (raw >> 6) & 0b11;
        let red = (raw >> 4) & 0b11;
        let green = (raw >> 2) & 0b11;
        let blue = raw & 0b11;

        if red == green || red == blue || green == blue {
            return None;
        }

        let layout = if white == red {
            ChannelLayout::Rgb
        } else {
            ChannelLayout::Rgbw
        };

        match layout {
            ChannelLayout::Rgb => {
                if red > 2 || green > 2 || blue > 2 {
                    return None;
                }
            }
            ChannelLayout::Rgbw => {
                if white == green || white == blue {
                    return None;
                }
            }
        }

        Some(Self {
            layout,
            red,
            green,
            blue,
            white,
        })
    }

    /// Encode back into a descriptor
    pub const fn descriptor(self) -> u8 {
        descriptor(self.white, self.red, self.green, self.blue)
    }

    pub const fn layout(self) -> ChannelLayout {
        self.layout
    }

    /// Bytes per pixel
    pub const fn stride(self) -> usize {
        self.layout.stride()
    }

    /// Byte offsets of `(white, red, green, blue)` within a pixel
    ///
    /// For [`ChannelLayout::Rgb`] the white offset equals the red one and
    /// must not be written.
    pub const fn offsets(self) -> (usize, usize, usize, usize) {
        (
            self.white as usize,
            self.red as usize,
            self.green as usize,
            self.blue as usize,
        )
    }
}

impl Default for PixelFormat {
    fn default() -> Self {
        Self::GRB
    }
}
