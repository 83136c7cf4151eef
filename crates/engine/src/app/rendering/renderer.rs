use std::sync::Arc;

use pixels::{Error, Pixels, SurfaceTexture};
use winit::window::Window;

use crate::anim::Frame;
use crate::app::SpriteDraw;
use crate::geometry::FieldBounds;

use super::CLEAR_COLOR;

/// Paints sprite draws into a pixel buffer the size of the play field;
/// `pixels` scales that buffer to whatever the window surface is.
pub struct Renderer {
    window: Arc<Window>,
    pixels: Pixels<'static>,
    field: FieldBounds,
    background: Option<Frame>,
}

impl Renderer {
    pub fn new(window: Arc<Window>, field: FieldBounds) -> Result<Self, Error> {
        let size = window.inner_size();
        let pixels = Self::build_pixels(Arc::clone(&window), field, size.width, size.height)?;
        Ok(Self {
            window,
            pixels,
            field,
            background: None,
        })
    }

    /// Painted under every frame instead of the flat clear colour.
    pub fn set_background(&mut self, background: Option<Frame>) {
        self.background = background;
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), Error> {
        if width == 0 || height == 0 {
            return Ok(());
        }
        self.pixels = Self::build_pixels(Arc::clone(&self.window), self.field, width, height)?;
        Ok(())
    }

    fn build_pixels(
        window: Arc<Window>,
        field: FieldBounds,
        surface_width: u32,
        surface_height: u32,
    ) -> Result<Pixels<'static>, Error> {
        let surface = SurfaceTexture::new(surface_width, surface_height, window);
        Pixels::new(field.width, field.height, surface)
    }

    pub(crate) fn render(&mut self, draws: &[SpriteDraw]) -> Result<(), Error> {
        let width = self.field.width;
        let height = self.field.height;
        let frame = self.pixels.frame_mut();
        paint_background(frame, width, height, self.background.as_ref());
        for draw in draws {
            let (left, top) = draw.origin();
            blit_frame(frame, width, height, left, top, &draw.frame);
        }
        self.pixels.render()
    }
}

fn paint_background(frame: &mut [u8], width: u32, height: u32, background: Option<&Frame>) {
    for pixel in frame.chunks_exact_mut(4) {
        pixel.copy_from_slice(&CLEAR_COLOR);
    }
    if let Some(background) = background {
        blit_frame(frame, width, height, 0, 0, background);
    }
}

/// Copies `sprite` with its top-left corner at (`left`, `top`), clipped to the
/// buffer. Fully transparent texels are skipped.
fn blit_frame(frame: &mut [u8], width: u32, height: u32, left: i32, top: i32, sprite: &Frame) {
    let (sprite_width, sprite_height) = sprite.size();
    if sprite_width == 0 || sprite_height == 0 || width == 0 || height == 0 {
        return;
    }
    let rgba = sprite.rgba();
    if rgba.len() < sprite_width as usize * sprite_height as usize * 4 {
        return;
    }
    if frame.len() < width as usize * height as usize * 4 {
        return;
    }

    let right = left.saturating_add(sprite_width as i32);
    let bottom = top.saturating_add(sprite_height as i32);
    let draw_left = left.max(0);
    let draw_top = top.max(0);
    let draw_right = right.min(width as i32);
    let draw_bottom = bottom.min(height as i32);
    if draw_left >= draw_right || draw_top >= draw_bottom {
        return;
    }

    let frame_width = width as usize;
    let sprite_width = sprite_width as usize;

    for out_y in draw_top..draw_bottom {
        let src_row_offset = (out_y - top) as usize * sprite_width * 4;
        let dst_row_offset = out_y as usize * frame_width * 4;

        for out_x in draw_left..draw_right {
            let src_offset = src_row_offset + (out_x - left) as usize * 4;
            let alpha = rgba[src_offset + 3];
            if alpha == 0 {
                continue;
            }
            let dst_offset = dst_row_offset + out_x as usize * 4;
            frame[dst_offset..dst_offset + 3].copy_from_slice(&rgba[src_offset..src_offset + 3]);
            frame[dst_offset + 3] = alpha;
        }
    }
}
