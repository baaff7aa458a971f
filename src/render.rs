use image::{DynamicImage, ImageBuffer, RgbImage};

use super::{error::HarmonyError, palette::Palette};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwatchConfig {
    pub width: u32,
    pub height: u32,
}

impl Default for SwatchConfig {
    fn default() -> SwatchConfig {
        SwatchConfig { width: 120, height: 120 }
    }
}

impl Palette {
    /// Lays the palette out left to right, one `width` x `height` swatch per
    /// entry. Fails when the strip's dimensions or pixel buffer do not fit
    /// in memory addressing.
    pub fn render(&self, cfg: SwatchConfig) -> Result<RgbImage, HarmonyError> {
        let colors = self.to_colors();
        let too_large = || HarmonyError::SwatchTooLarge {
            width: cfg.width,
            height: cfg.height,
            count: colors.len(),
        };

        let width = u32::try_from(colors.len())
            .ok()
            .and_then(|n| cfg.width.checked_mul(n))
            .ok_or_else(too_large)?;

        // 3 bytes per pixel
        usize::try_from(width)
            .ok()
            .zip(usize::try_from(cfg.height).ok())
            .and_then(|(w, h)| w.checked_mul(h))
            .and_then(|px| px.checked_mul(3))
            .ok_or_else(too_large)?;

        Ok(ImageBuffer::from_fn(width, cfg.height, |x, _| {
            let c = colors[(x / cfg.width) as usize];
            image::Rgb([c.red, c.green, c.blue])
        }))
    }

    pub fn render_image(&self, cfg: SwatchConfig) -> Result<DynamicImage, HarmonyError> {
        Ok(DynamicImage::ImageRgb8(self.render(cfg)?))
    }
}
