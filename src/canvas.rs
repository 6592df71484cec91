//! The icon raster and the few primitives the icon is drawn with.
use crate::fonts::IconFont;
use crate::models::{IconRect, TRANSPARENT};
use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::Rgb888,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle, RoundedRectangle},
    text::{Baseline, Text},
    Drawable,
};
use image::{ImageBuffer, ImageFormat, Pixel as _, Rgba, RgbaImage};
use std::path::Path;

pub struct Canvas {
    image: RgbaImage,
}

fn to_rgb888(color: Rgba<u8>) -> Rgb888 {
    Rgb888::new(color[0], color[1], color[2])
}

impl Canvas {
    /// A fully transparent canvas. Its size is fixed from here on.
    pub fn new(width: u32, height: u32) -> Self {
        Self { image: ImageBuffer::from_pixel(width, height, TRANSPARENT) }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    fn bounds(&self) -> IconRect {
        IconRect::new(0, 0, self.width(), self.height())
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Composites `color` over the pixel at (x, y). Points off the canvas are dropped.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if !self.bounds().contains(x, y) {
            return;
        }
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        match color[3] {
            0 => {}
            255 => *pixel = color,
            _ => pixel.blend(&color),
        }
    }

    /// Fills `rect` with opaque `color`, rounding each corner with `radius`.
    pub fn fill_rounded_rect(&mut self, rect: IconRect, radius: u32, color: Rgba<u8>) {
        let area = Rectangle::new(Point::new(rect.x, rect.y), Size::new(rect.width, rect.height));
        RoundedRectangle::with_equal_corners(area, Size::new(radius, radius))
            .into_styled(PrimitiveStyle::with_fill(to_rgb888(color)))
            .draw(self)
            .ok();
    }

    /// Draws `text` with its origin at (x, y), the same origin `IconFont::measure` reports against.
    pub fn draw_text(&mut self, text: &str, font: &IconFont, x: i32, y: i32, color: Rgba<u8>) {
        match font {
            IconFont::TrueType { font: face, size, .. } => {
                for glyph in font.layout(text) {
                    let (metrics, coverage) = face.rasterize(glyph.ch, *size);
                    if metrics.width == 0 {
                        continue;
                    }
                    for (i, &alpha) in coverage.iter().enumerate() {
                        if alpha == 0 {
                            continue;
                        }
                        let gx = x + glyph.bounds.left + (i % metrics.width) as i32;
                        let gy = y + glyph.bounds.top + (i / metrics.width) as i32;
                        let a = (alpha as u16 * color[3] as u16 / 255) as u8;
                        self.blend_pixel(gx, gy, Rgba([color[0], color[1], color[2], a]));
                    }
                }
            }
            IconFont::Builtin(mono) => {
                let style = MonoTextStyle::new(*mono, to_rgb888(color));
                Text::with_baseline(text, Point::new(x, y), style, Baseline::Top)
                    .draw(self)
                    .ok();
            }
        }
    }

    /// Encodes the canvas as PNG, replacing any existing file at `path`.
    pub fn save_png(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        self.image.save_with_format(path, ImageFormat::Png)?;
        Ok(())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            self.blend_pixel(x, y, Rgba([color.r(), color.g(), color.b(), 255]));
        }
        Ok(())
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}
