//! Brightness keying: derive alpha from the brightest color channel

use image::{Rgba, RgbaImage};

/// Keyed alpha below this is near-black noise and becomes fully transparent.
pub const NOISE_FLOOR: u8 = 10;

/// Brightness of a pixel: the maximum of its red, green and blue channels.
/// The incoming alpha is ignored.
#[inline]
pub fn brightness(pixel: Rgba<u8>) -> u8 {
    let [r, g, b, _] = pixel.0;
    r.max(g).max(b)
}

/// Key a single pixel.
///
/// Pure black becomes `(0, 0, 0, 0)`. Anything else keeps its color channels
/// and takes its brightness as alpha, unless that is below [`NOISE_FLOOR`],
/// in which case alpha is 0.
#[inline]
pub fn key_pixel(pixel: Rgba<u8>) -> Rgba<u8> {
    let [r, g, b, _] = pixel.0;
    match brightness(pixel) {
        0 => Rgba([0, 0, 0, 0]),
        v if v < NOISE_FLOOR => Rgba([r, g, b, 0]),
        v => Rgba([r, g, b, v]),
    }
}

/// Counters collected while keying an image
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyStats {
    /// Pure black pixels, zeroed
    pub cleared: u64,
    /// Non-black pixels under the noise floor
    pub noise: u64,
    /// Pixels that stayed (partially) visible
    pub visible: u64,
}

impl KeyStats {
    pub fn total(&self) -> u64 {
        self.cleared + self.noise + self.visible
    }

    /// Pixels that ended up fully transparent
    pub fn transparent(&self) -> u64 {
        self.cleared + self.noise
    }
}

/// Key every pixel of `img` in place. Dimensions never change.
pub fn key_image(img: &mut RgbaImage) -> KeyStats {
    let mut stats = KeyStats::default();

    for pixel in img.pixels_mut() {
        match brightness(*pixel) {
            0 => stats.cleared += 1,
            v if v < NOISE_FLOOR => stats.noise += 1,
            _ => stats.visible += 1,
        }
        *pixel = key_pixel(*pixel);
    }

    stats
}
