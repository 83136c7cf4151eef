use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use image::{ImageReader, RgbaImage};
use tracing::debug;

use super::{validated_key, AssetError, FrameSource};
use crate::anim::{slice_sheet, Frame};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SheetKey {
    asset: String,
    sheet: String,
    cell_width: u32,
    cell_height: u32,
}

/// Reads `<root>/<asset>/<sheet>.png`. Sliced frames are cached per cell
/// size, so every actor spawned after the first reuses the same pixels.
#[derive(Debug)]
pub struct DirectoryFrameSource {
    root: PathBuf,
    cache: HashMap<SheetKey, Vec<Frame>>,
}

impl DirectoryFrameSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: HashMap::new(),
        }
    }

    pub fn cached_sheet_count(&self) -> usize {
        self.cache.len()
    }

    /// Decodes a whole sheet without slicing (backgrounds, splash art).
    pub fn load_image(&self, asset: &str, sheet: &str) -> Result<RgbaImage, AssetError> {
        let path = self.sheet_path(asset, sheet)?;
        decode_rgba(&path, asset, sheet)
    }

    fn sheet_path(&self, asset: &str, sheet: &str) -> Result<PathBuf, AssetError> {
        let asset = validated_key(asset)?;
        let sheet = validated_key(sheet)?;
        Ok(self.root.join(asset).join(format!("{sheet}.png")))
    }
}

impl FrameSource for DirectoryFrameSource {
    fn load_frames(
        &mut self,
        asset: &str,
        sheet: &str,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Vec<Frame>, AssetError> {
        let key = SheetKey {
            asset: asset.to_string(),
            sheet: sheet.to_string(),
            cell_width,
            cell_height,
        };
        if let Some(frames) = self.cache.get(&key) {
            return Ok(frames.clone());
        }

        let path = self.sheet_path(asset, sheet)?;
        let image = decode_rgba(&path, asset, sheet)?;
        let frames =
            slice_sheet(&image, cell_width, cell_height).map_err(|source| AssetError::Slice {
                asset: asset.to_string(),
                sheet: sheet.to_string(),
                source,
            })?;
        debug!(
            asset,
            sheet,
            path = %path.display(),
            sheet_width = image.width(),
            sheet_height = image.height(),
            frame_count = frames.len(),
            "sheet_loaded"
        );
        self.cache.insert(key, frames.clone());
        Ok(frames)
    }
}

fn decode_rgba(path: &Path, asset: &str, sheet: &str) -> Result<RgbaImage, AssetError> {
    let reader = ImageReader::open(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            AssetError::Missing {
                asset: asset.to_string(),
                sheet: sheet.to_string(),
            }
        } else {
            AssetError::Open {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let decoded = reader.decode().map_err(|source| AssetError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.to_rgba8())
}
