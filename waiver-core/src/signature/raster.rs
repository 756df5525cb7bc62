use crate::foundation::Result;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Stroke width in surface pixels, rendered with round caps.
pub const STROKE_WIDTH: f32 = 2.0;

/// A fixed-resolution RGBA drawing surface.
pub struct Raster {
    image: RgbaImage,
}

impl Raster {
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        let mut raster = Raster { image: RgbaImage::new(width, height) };
        raster.fill(background);
        raster
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn fill(&mut self, color: Rgba<u8>) {
        for pixel in self.image.pixels_mut() {
            *pixel = color;
        }
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Draws a round-capped segment by stamping discs along the line.
    /// Sub-pixel endpoints are fine; out-of-bounds parts are clipped.
    pub fn stroke_line(&mut self, from: (f32, f32), to: (f32, f32), color: Rgba<u8>) {
        let dx = to.0 - from.0;
        let dy = to.1 - from.1;
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            self.stamp_disc(from.0 + dx * t, from.1 + dy * t, STROKE_WIDTH / 2.0, color);
        }
    }

    fn stamp_disc(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
        let min_x = (cx - radius).floor().max(0.0) as u32;
        let max_x = (cx + radius).ceil().min(self.image.width() as f32 - 1.0) as u32;
        let min_y = (cy - radius).floor().max(0.0) as u32;
        let max_y = (cy + radius).ceil().min(self.image.height() as f32 - 1.0) as u32;
        if min_x > max_x || min_y > max_y {
            return;
        }
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.image.put_pixel(x, y, color);
                }
            }
        }
    }

    pub fn to_png_data_url(&self) -> Result<String> {
        encode_png_data_url(&self.image)
    }
}

/// Encodes a raster to an embeddable `data:image/png;base64,...` URL.
pub fn encode_png_data_url(image: &RgbaImage) -> Result<String> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image.clone()).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(&bytes)))
}
