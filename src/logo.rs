//! Logo upload validation.
//!
//! A logo only reaches [`StyleOptions`](crate::models::StyleOptions) after it
//! has passed the checks here, so a rejected upload never leaves partial state.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("Please upload an image file (got {0})")]
    NotAnImage(String),
    #[error("File size must be under {max} bytes (got {size} bytes)")]
    TooLarge { size: u64, max: u64 },
    #[error("Failed to read logo file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Read an image file into a `data:` URI
///
/// The MIME type is guessed from the file name and must be `image/*`; the file
/// must not exceed `max_bytes`.
pub fn load_logo(path: &Path, max_bytes: u64) -> Result<String, LogoError> {
    let mime = mime_guess::from_path(path).first_raw().unwrap_or("application/octet-stream");
    check_mime(mime)?;

    let io_error = |source| LogoError::Io { path: path.to_path_buf(), source };
    let mut file = File::open(path).map_err(io_error)?;
    // Check the open handle so the size cannot change between check and read
    let size = file.metadata().map_err(io_error)?.len();
    check_size(size, max_bytes)?;

    let mut bytes = Vec::with_capacity(size as usize);
    file.read_to_end(&mut bytes).map_err(io_error)?;
    encode_logo(&bytes, mime, max_bytes)
}

/// Encode in-memory image bytes (e.g. a dropped file) into a `data:` URI
pub fn encode_logo(bytes: &[u8], mime: &str, max_bytes: u64) -> Result<String, LogoError> {
    check_mime(mime)?;
    check_size(bytes.len() as u64, max_bytes)?;
    Ok(format!("data:{};base64,{}", mime, STANDARD.encode(bytes)))
}

fn check_mime(mime: &str) -> Result<(), LogoError> {
    if mime.starts_with("image/") { Ok(()) } else { Err(LogoError::NotAnImage(mime.to_string())) }
}

fn check_size(size: u64, max: u64) -> Result<(), LogoError> {
    if size > max { Err(LogoError::TooLarge { size, max }) } else { Ok(()) }
}
