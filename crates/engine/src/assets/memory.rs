use std::collections::HashMap;

use image::RgbaImage;

use super::{validated_key, AssetError, FrameSource};
use crate::actor::ActorProfile;
use crate::anim::{placeholder_strip, slice_sheet, Frame};

/// Sheets held in memory, keyed by `(asset, sheet)`. Used by tests and by
/// tools that generate art instead of reading it from disk.
#[derive(Debug, Default, Clone)]
pub struct MemoryFrameSource {
    sheets: HashMap<(String, String), RgbaImage>,
}

impl MemoryFrameSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, asset: &str, sheet: &str, image: RgbaImage) {
        self.sheets
            .insert((asset.to_string(), sheet.to_string()), image);
    }

    pub fn with_sheet(mut self, asset: &str, sheet: &str, image: RgbaImage) -> Self {
        self.insert(asset, sheet, image);
        self
    }

    pub fn remove(&mut self, asset: &str, sheet: &str) -> Option<RgbaImage> {
        self.sheets.remove(&(asset.to_string(), sheet.to_string()))
    }

    /// Placeholder strips of `frames_per_tag` cells for every tag the profile
    /// declares, plus its projectile sheet when it has one.
    pub fn placeholder_for(profile: &ActorProfile, frames_per_tag: u32) -> Self {
        let mut source = Self::new();
        source.add_placeholders(profile, frames_per_tag);
        source
    }

    pub fn add_placeholders(&mut self, profile: &ActorProfile, frames_per_tag: u32) {
        for (tint, tag) in profile.tags.iter().enumerate() {
            self.insert(
                profile.asset,
                tag.as_key(),
                placeholder_strip(
                    profile.cell_width,
                    profile.cell_height,
                    frames_per_tag,
                    tint as u8,
                ),
            );
        }
        if let Some(projectile) = profile.projectile {
            self.insert(
                projectile.asset,
                projectile.sheet,
                placeholder_strip(projectile.width, projectile.height, 1, 200),
            );
        }
    }
}

impl FrameSource for MemoryFrameSource {
    fn load_frames(
        &mut self,
        asset: &str,
        sheet: &str,
        cell_width: u32,
        cell_height: u32,
    ) -> Result<Vec<Frame>, AssetError> {
        validated_key(asset)?;
        validated_key(sheet)?;
        let image = self
            .sheets
            .get(&(asset.to_string(), sheet.to_string()))
            .ok_or_else(|| AssetError::Missing {
                asset: asset.to_string(),
                sheet: sheet.to_string(),
            })?;
        slice_sheet(image, cell_width, cell_height).map_err(|source| AssetError::Slice {
            asset: asset.to_string(),
            sheet: sheet.to_string(),
            source,
        })
    }
}
