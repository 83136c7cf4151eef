use std::fmt;
use std::sync::Arc;

use image::{imageops, Rgba, RgbaImage};
use thiserror::Error;

/// Immutable RGBA image cut from a sheet. Clones share pixel storage.
#[derive(Clone)]
pub struct Frame {
    image: Arc<RgbaImage>,
}

impl Frame {
    pub fn new(image: RgbaImage) -> Self {
        Self {
            image: Arc::new(image),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn rgba(&self) -> &[u8] {
        self.image.as_raw()
    }

    pub fn mirrored(&self) -> Frame {
        Frame::new(imageops::flip_horizontal(self.image.as_ref()))
    }

    pub fn shares_storage_with(&self, other: &Frame) -> bool {
        Arc::ptr_eq(&self.image, &other.image)
    }
}

impl PartialEq for Frame {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage_with(other)
            || (self.size() == other.size() && self.rgba() == other.rgba())
    }
}

impl Eq for Frame {}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameError {
    #[error("frame cell must be at least 1x1, got {width}x{height}")]
    ZeroCell { width: u32, height: u32 },
    #[error("sheet has no pixels ({width}x{height})")]
    EmptySheet { width: u32, height: u32 },
}

/// Tiles `sheet` into `cell_width` x `cell_height` frames, left-to-right then
/// top-to-bottom. A sheet smaller than one cell comes back whole as a single
/// frame; partial trailing cells are dropped.
pub fn slice_sheet(
    sheet: &RgbaImage,
    cell_width: u32,
    cell_height: u32,
) -> Result<Vec<Frame>, FrameError> {
    if cell_width == 0 || cell_height == 0 {
        return Err(FrameError::ZeroCell {
            width: cell_width,
            height: cell_height,
        });
    }
    let (sheet_width, sheet_height) = sheet.dimensions();
    if sheet_width == 0 || sheet_height == 0 {
        return Err(FrameError::EmptySheet {
            width: sheet_width,
            height: sheet_height,
        });
    }
    if sheet_width < cell_width || sheet_height < cell_height {
        return Ok(vec![Frame::new(sheet.clone())]);
    }

    let columns = sheet_width / cell_width;
    let rows = sheet_height / cell_height;
    let mut frames = Vec::with_capacity((columns * rows) as usize);
    for row in 0..rows {
        for column in 0..columns {
            let cell = imageops::crop_imm(
                sheet,
                column * cell_width,
                row * cell_height,
                cell_width,
                cell_height,
            )
            .to_image();
            frames.push(Frame::new(cell));
        }
    }
    Ok(frames)
}

pub fn mirror_frames(frames: &[Frame]) -> Vec<Frame> {
    frames.iter().map(Frame::mirrored).collect()
}

const PLACEHOLDER_MARKER: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Builds a single-row strip of `count` distinguishable cells. Column 0 of
/// every cell carries a white marker so mirrored frames are detectable.
pub(crate) fn placeholder_strip(cell_width: u32, cell_height: u32, count: u32, tint: u8) -> RgbaImage {
    let width = cell_width.max(1) * count.max(1);
    let height = cell_height.max(1);
    RgbaImage::from_fn(width, height, |x, _y| {
        let cell = x / cell_width.max(1);
        if x % cell_width.max(1) == 0 {
            return PLACEHOLDER_MARKER;
        }
        let shade = (cell as u8).wrapping_mul(16);
        Rgba([shade, tint, 255u8.wrapping_sub(shade), 255])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_sheet(columns: u32, rows: u32, cell: u32) -> RgbaImage {
        RgbaImage::from_fn(columns * cell, rows * cell, |x, y| {
            let index = (y / cell) * columns + (x / cell);
            Rgba([index as u8, 0, 0, 255])
        })
    }

    fn cell_index(frame: &Frame) -> u8 {
        frame.image().get_pixel(0, 0).0[0]
    }

    #[test]
    fn slices_row_major() {
        let sheet = grid_sheet(3, 2, 8);
        let frames = slice_sheet(&sheet, 8, 8).expect("slice");
        let order: Vec<u8> = frames.iter().map(cell_index).collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5]);
        assert!(frames.iter().all(|frame| frame.size() == (8, 8)));
    }

    #[test]
    fn partial_trailing_cells_are_dropped() {
        let sheet = RgbaImage::new(8 * 2 + 5, 8 + 3);
        let frames = slice_sheet(&sheet, 8, 8).expect("slice");
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn sheet_smaller_than_cell_is_one_whole_frame() {
        let sheet = RgbaImage::new(20, 6);
        let frames = slice_sheet(&sheet, 128, 128).expect("slice");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].size(), (20, 6));
    }

    #[test]
    fn zero_cell_and_empty_sheet_are_rejected() {
        let sheet = RgbaImage::new(8, 8);
        assert_eq!(
            slice_sheet(&sheet, 0, 8),
            Err(FrameError::ZeroCell {
                width: 0,
                height: 8
            })
        );
        assert_eq!(
            slice_sheet(&RgbaImage::new(0, 0), 8, 8),
            Err(FrameError::EmptySheet {
                width: 0,
                height: 0
            })
        );
    }

    #[test]
    fn mirroring_flips_each_frame_and_keeps_order() {
        let strip = placeholder_strip(6, 4, 3, 7);
        let frames = slice_sheet(&strip, 6, 4).expect("slice");
        let mirrored = mirror_frames(&frames);
        assert_eq!(mirrored.len(), frames.len());
        for (original, flipped) in frames.iter().zip(&mirrored) {
            assert_eq!(flipped.size(), original.size());
            for y in 0..original.height() {
                for x in 0..original.width() {
                    assert_eq!(
                        flipped.image().get_pixel(original.width() - 1 - x, y),
                        original.image().get_pixel(x, y)
                    );
                }
            }
            assert_ne!(flipped, original);
        }
    }

    #[test]
    fn clones_share_storage() {
        let frame = Frame::new(RgbaImage::new(2, 2));
        let copy = frame.clone();
        assert!(frame.shares_storage_with(&copy));
        assert_eq!(frame, copy);
    }
}
