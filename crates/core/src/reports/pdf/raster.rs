use async_trait::async_trait;
use thiserror::Error;

use super::layout::RasterSize;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Parse `#rrggbb`
    pub fn from_hex(hex: &str) -> Option<Rgb> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |at: usize| u8::from_str_radix(&digits[at..at + 2], 16).ok();
        Some(Rgb(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Why a region could not be captured
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("region has no visible area")]
    EmptyRegion,

    #[error("raster is {width}x{height} but carries {len} bytes")]
    InvalidRaster { width: u32, height: u32, len: usize },

    #[error("{0}")]
    Failed(String),
}

/// A captured bitmap, rows top to bottom, 3 bytes per pixel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Raster {
    /// Raster filled with one color
    pub fn filled(width: u32, height: u32, color: Rgb) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * 3);
        for _ in 0..count {
            pixels.extend_from_slice(&[color.0, color.1, color.2]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Check dimensions against the pixel buffer
    pub fn validate(&self) -> Result<(), CaptureError> {
        if self.width == 0 || self.height == 0 {
            return Err(CaptureError::EmptyRegion);
        }
        let expected = self.width as usize * self.height as usize * 3;
        if self.pixels.len() != expected {
            return Err(CaptureError::InvalidRaster {
                width: self.width,
                height: self.height,
                len: self.pixels.len(),
            });
        }
        Ok(())
    }

    pub fn size(&self) -> RasterSize {
        RasterSize::new(self.width, self.height)
    }

    /// Fill an axis-aligned rectangle, clipped to the raster
    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgb) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for row in y.min(self.height)..y_end {
            for col in x.min(self.width)..x_end {
                let at = (row as usize * self.width as usize + col as usize) * 3;
                self.pixels[at] = color.0;
                self.pixels[at + 1] = color.1;
                self.pixels[at + 2] = color.2;
            }
        }
    }
}

/// Something on screen that can be captured into the PDF report
#[async_trait]
pub trait RenderRegion: Send + Sync {
    /// Name used in logs and errors
    fn name(&self) -> &str;

    /// Capture the region upscaled by `scale` over a solid `background`
    async fn capture_as_raster(&self, scale: f32, background: Rgb)
        -> Result<Raster, CaptureError>;
}
