/*
    Copyright (C) 2025 bugo07
    Released under EUPL 1.2 License
*/

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("{path} has no pixels")]
    Empty { path: PathBuf },
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("invalid identifier '{0}', expected [A-Za-z_][A-Za-z0-9_]*")]
    InvalidIdentifier(String),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}
