//! Frame sources: where actors get the frames for each of their sheets.
//!
//! Sheets are addressed by an asset key (the actor's directory, e.g.
//! `archer`) and a sheet key (the action tag's file stem, e.g. `shot_1`).

mod directory;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

use crate::anim::{Frame, FrameError};
use crate::asset_keys::AssetKeyError;

pub use directory::DirectoryFrameSource;
pub use memory::MemoryFrameSource;

pub trait FrameSource {
    /// Loads the sheet `asset/sheet` and slices it into `cell_width` x
    /// `cell_height` frames.
    fn load_frames(
        &mut self,
        asset: &str,
        sheet: &str,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Vec<Frame>, AssetError>;
}

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("invalid asset key '{key}': {source}")]
    InvalidKey {
        key: String,
        #[source]
        source: AssetKeyError,
    },
    #[error("sheet '{asset}/{sheet}' does not exist")]
    Missing { asset: String, sheet: String },
    #[error("failed to open sheet at {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode sheet at {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to slice sheet '{asset}/{sheet}': {source}")]
    Slice {
        asset: String,
        sheet: String,
        #[source]
        source: FrameError,
    },
}

fn validated_key(key: &str) -> Result<&str, AssetError> {
    crate::asset_keys::validate_asset_key(key)
        .map(|()| key)
        .map_err(|source| AssetError::InvalidKey {
            key: key.to_string(),
            source,
        })
}
