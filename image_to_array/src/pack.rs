/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::Path;

use image::{DynamicImage, ImageReader};
use log::{debug, warn};

use crate::error::DecodeError;

/// Pixels of one image, each packed as `0xAABBGGRR`, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u32>,
}

impl PackedImage {
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

pub const fn pack_rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
}

/// Inverse of [`pack_rgba`], returns `[r, g, b, a]`.
pub const fn unpack_rgba(packed: u32) -> [u8; 4] {
    let [r, g, b, a] = packed.to_le_bytes();
    [r, g, b, a]
}

/// Normalizes `img` to RGBA8 and packs every pixel.
///
/// Sources without alpha come out opaque. Sources wider than 8 bits per
/// channel are reduced to 8 bits by `image`'s conversion.
pub fn pack_image(img: &DynamicImage) -> PackedImage {
    let color = img.color();
    let bytes_per_channel = color.bytes_per_pixel() / color.channel_count();
    if bytes_per_channel > 1 {
        warn!(
            "{color:?} source has {} bits per channel, truncating to 8",
            bytes_per_channel as u32 * 8
        );
    }
    if !color.has_alpha() {
        debug!("{color:?} source has no alpha channel, treating as opaque");
    }

    let img = img.to_rgba8();
    let (width, height) = img.dimensions();

    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for y in 0..height {
        for x in 0..width {
            let [r, g, b, a] = img.get_pixel(x, y).0;
            pixels.push(pack_rgba(r, g, b, a));
        }
    }

    PackedImage {
        width,
        height,
        pixels,
    }
}

/// Decodes the image at `path` and packs it. The format is sniffed from the
/// file contents, so the extension doesn't have to match.
pub fn decode_file(path: impl AsRef<Path>) -> Result<PackedImage, DecodeError> {
    let path = path.as_ref();

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|source| DecodeError::Io {
            path: path.to_path_buf(),
            source,
        })?
        .decode()
        .map_err(|source| DecodeError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(
        "decoded {} ({}x{}, {:?})",
        path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    let packed = pack_image(&img);
    if packed.is_empty() {
        return Err(DecodeError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(packed)
}
