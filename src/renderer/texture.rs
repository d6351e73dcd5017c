//! Texture files and handles
//!
//! Image decoding and upload belong to the graphics backend. This module
//! only identifies the file format, reads the image dimensions from the
//! header and hands out opaque handles. A texture that fails to load gets
//! `TextureHandle::INVALID`; the game keeps running and the shape simply
//! draws untextured.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::settings::TextureSettings;

const BMP_MAGIC: &[u8; 2] = b"BM";
/// File header plus BITMAPINFOHEADER
const BMP_HEADER_LEN: usize = 54;
const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
/// Signature plus the IHDR width/height fields
const PNG_HEADER_LEN: usize = 24;

/// Opaque backend texture id; 0 is never a real texture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    pub const INVALID: TextureHandle = TextureHandle(0);

    pub fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

#[derive(Debug, Error)]
pub enum TextureError {
    #[error("failed to read texture {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path} is not a BMP or PNG image")]
    UnrecognizedFormat { path: PathBuf },
    #[error("{path} is truncated ({len} bytes)")]
    Truncated { path: PathBuf, len: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextureFormat {
    Bmp,
    Png,
}

/// Header facts about a loaded texture file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureInfo {
    pub path: PathBuf,
    pub format: TextureFormat,
    pub width: u32,
    pub height: u32,
}

impl TextureInfo {
    /// Identify an image from its leading bytes
    pub fn probe(path: &Path, bytes: &[u8]) -> Result<Self, TextureError> {
        let truncated = || TextureError::Truncated {
            path: path.to_path_buf(),
            len: bytes.len(),
        };

        let (format, width, height) = if bytes.starts_with(BMP_MAGIC) {
            if bytes.len() < BMP_HEADER_LEN {
                return Err(truncated());
            }
            let width = i32::from_le_bytes(read4(bytes, 0x12));
            // Negative height marks a top-down bitmap
            let height = i32::from_le_bytes(read4(bytes, 0x16));
            (TextureFormat::Bmp, width.unsigned_abs(), height.unsigned_abs())
        } else if bytes.starts_with(&PNG_SIGNATURE) {
            if bytes.len() < PNG_HEADER_LEN {
                return Err(truncated());
            }
            let width = u32::from_be_bytes(read4(bytes, 16));
            let height = u32::from_be_bytes(read4(bytes, 20));
            (TextureFormat::Png, width, height)
        } else {
            return Err(TextureError::UnrecognizedFormat {
                path: path.to_path_buf(),
            });
        };

        Ok(Self {
            path: path.to_path_buf(),
            format,
            width,
            height,
        })
    }
}

fn read4(bytes: &[u8], at: usize) -> [u8; 4] {
    [bytes[at], bytes[at + 1], bytes[at + 2], bytes[at + 3]]
}

/// Turns an image path into a backend texture
pub trait TextureLoader {
    /// Load `path`, returning `TextureHandle::INVALID` on failure
    fn load(&mut self, path: &Path) -> TextureHandle;
}

/// Loader that validates files on disk and assigns sequential handles
#[derive(Debug, Default)]
pub struct FsTextureLoader {
    textures: Vec<TextureInfo>,
}

impl FsTextureLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_load(&mut self, path: &Path) -> Result<TextureHandle, TextureError> {
        let bytes = fs::read(path).map_err(|source| TextureError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let info = TextureInfo::probe(path, &bytes)?;
        log::debug!(
            "Loaded {:?} texture {} ({}x{})",
            info.format,
            path.display(),
            info.width,
            info.height
        );
        self.textures.push(info);
        Ok(TextureHandle(self.textures.len() as u32))
    }

    pub fn info(&self, handle: TextureHandle) -> Option<&TextureInfo> {
        let index = (handle.0 as usize).checked_sub(1)?;
        self.textures.get(index)
    }
}

impl TextureLoader for FsTextureLoader {
    fn load(&mut self, path: &Path) -> TextureHandle {
        match self.try_load(path) {
            Ok(handle) => handle,
            Err(e) => {
                log::warn!("{e}");
                TextureHandle::INVALID
            }
        }
    }
}

/// Textures used by a frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextureSet {
    pub paddle: TextureHandle,
    pub ball: TextureHandle,
    pub digits: TextureHandle,
}

impl TextureSet {
    pub fn load(loader: &mut impl TextureLoader, settings: &TextureSettings) -> Self {
        Self {
            paddle: loader.load(&settings.paddle),
            ball: loader.load(&settings.ball),
            digits: loader.load(&settings.digits),
        }
    }

    /// Number of slots holding a real texture
    pub fn loaded(&self) -> usize {
        [self.paddle, self.ball, self.digits]
            .iter()
            .filter(|t| t.is_valid())
            .count()
    }
}
