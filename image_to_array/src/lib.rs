/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

//! Turns an image into a `std::array<uint32_t, N>` of `0xAABBGGRR` pixels
//! for embedding into a C++ binary.

pub mod error;
pub mod format;
pub mod logger;
pub mod pack;

use std::path::Path;

pub use error::{ConvertError, DecodeError};
pub use format::{format_declaration, parse_hex_literals, write_declaration};
pub use pack::{PackedImage, decode_file, pack_image, pack_rgba, unpack_rgba};

pub fn validate_identifier(identifier: &str) -> Result<(), ConvertError> {
    if format::is_valid_identifier(identifier) {
        Ok(())
    } else {
        Err(ConvertError::InvalidIdentifier(identifier.to_string()))
    }
}

/// Decodes the image at `path` and renders it as an array named `identifier`.
pub fn convert(path: impl AsRef<Path>, identifier: &str) -> Result<String, ConvertError> {
    validate_identifier(identifier)?;
    let packed = decode_file(path)?;
    Ok(format_declaration(identifier, &packed.pixels))
}
