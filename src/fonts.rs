use crate::models::{FontSource, TextBounds};
use crate::utils::{find_font_file, log_line};
use embedded_graphics::mono_font::ascii::FONT_10X20;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::{Baseline, Text};
use fontdue::{Font, FontSettings};
use std::fs;
use std::path::Path;

/// The font the label is drawn with.
pub enum IconFont {
    TrueType { font: Font, size: f32, name: String },
    Builtin(&'static MonoFont<'static>),
}

/// Where one glyph's bitmap lands, relative to the text origin.
pub struct PlacedGlyph {
    pub ch: char,
    pub bounds: TextBounds,
}

impl IconFont {
    /// The bitmap font compiled into the binary.
    pub fn builtin() -> Self {
        IconFont::Builtin(&FONT_10X20)
    }

    /// Human-readable description for log lines.
    pub fn name(&self) -> String {
        match self {
            IconFont::TrueType { name, size, .. } => format!("{} at {}px", name, size),
            IconFont::Builtin(_) => FontSource::Builtin.to_string(),
        }
    }

    /// Lays glyphs out along a baseline one ascent below the origin. No kerning.
    pub fn layout(&self, text: &str) -> Vec<PlacedGlyph> {
        match self {
            IconFont::TrueType { font, size, .. } => {
                let ascent = font
                    .horizontal_line_metrics(*size)
                    .map(|m| m.ascent)
                    .unwrap_or(*size)
                    .round() as i32;
                let mut pen = 0.0f32;
                let mut glyphs = Vec::with_capacity(text.len());
                for ch in text.chars() {
                    let metrics = font.metrics(ch, *size);
                    let left = pen.round() as i32 + metrics.xmin;
                    let bottom = ascent - metrics.ymin;
                    glyphs.push(PlacedGlyph {
                        ch,
                        bounds: TextBounds {
                            left,
                            top: bottom - metrics.height as i32,
                            right: left + metrics.width as i32,
                            bottom,
                        },
                    });
                    pen += metrics.advance_width;
                }
                glyphs
            }
            IconFont::Builtin(font) => {
                let cell = font.character_size;
                let step = (cell.width + font.character_spacing) as i32;
                text.chars()
                    .enumerate()
                    .map(|(i, ch)| PlacedGlyph {
                        ch,
                        bounds: TextBounds {
                            left: i as i32 * step,
                            top: 0,
                            right: i as i32 * step + cell.width as i32,
                            bottom: cell.height as i32,
                        },
                    })
                    .collect()
            }
        }
    }

    /// Bounding box of `text` drawn at the origin.
    pub fn measure(&self, text: &str) -> TextBounds {
        match self {
            IconFont::TrueType { .. } => self
                .layout(text)
                .into_iter()
                .filter(|g| g.bounds.width() > 0 && g.bounds.height() > 0)
                .fold(TextBounds::default(), |acc, g| acc.union(g.bounds)),
            IconFont::Builtin(font) => {
                let style = MonoTextStyle::new(*font, Rgb888::BLACK);
                let bbox = Text::with_baseline(text, Point::zero(), style, Baseline::Top).bounding_box();
                TextBounds {
                    left: bbox.top_left.x,
                    top: bbox.top_left.y,
                    right: bbox.top_left.x + bbox.size.width as i32,
                    bottom: bbox.top_left.y + bbox.size.height as i32,
                }
            }
        }
    }
}

/// The fallback chain: Arial by name, Arial at its macOS path, then the built-in font.
pub fn default_sources() -> Vec<FontSource> {
    vec![
        FontSource::Named("arial.ttf".to_string()),
        FontSource::Path("/System/Library/Fonts/Arial.ttf".into()),
        FontSource::Builtin,
    ]
}

fn load_truetype(path: &Path, size: f32) -> Result<IconFont, Box<dyn std::error::Error>> {
    let data = fs::read(path)?;
    let font = Font::from_bytes(data, FontSettings { scale: size, ..FontSettings::default() })?;
    Ok(IconFont::TrueType { font, size, name: path.display().to_string() })
}

/// Loads a single candidate, reporting why it is unusable.
pub fn load_source(source: &FontSource, size: f32) -> Result<IconFont, Box<dyn std::error::Error>> {
    match source {
        FontSource::Named(name) => {
            let path = find_font_file(name).ok_or_else(|| format!("{} not found", name))?;
            load_truetype(&path, size)
        }
        FontSource::Path(path) => load_truetype(path, size),
        FontSource::Builtin => Ok(IconFont::builtin()),
    }
}

/// Tries each source in order and returns the first that loads. A source that
/// fails for any reason is reported on stderr and skipped; when the list runs
/// out the built-in font is used.
pub fn load_first_available(sources: &[FontSource], size: f32) -> IconFont {
    for source in sources {
        match load_source(source, size) {
            Ok(font) => return font,
            Err(e) => eprintln!("{}", log_line(&format!("Font {} unavailable: {}", source, e))),
        }
    }
    IconFont::builtin()
}
