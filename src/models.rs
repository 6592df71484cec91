use image::Rgba;
use std::path::PathBuf;

/// Width and height of the generated icon.
pub const ICON_SIZE: u32 = 128;
/// File written to the working directory.
pub const OUTPUT_FILE: &str = "icon.png";

pub const PANEL_MARGIN: u32 = 8;
pub const PANEL_RADIUS: u32 = 12;
pub const TILE_SIZE: u32 = 80;
pub const TILE_RADIUS: u32 = 8;

pub const LABEL: &str = "2048";
pub const FONT_SIZE: f32 = 24.0;
/// Pulls the label up to balance ascender and descender space.
pub const LABEL_LIFT: i32 = 2;

pub const PANEL_COLOR: Rgba<u8> = Rgba([238, 228, 218, 255]); // Light beige
pub const TILE_COLOR: Rgba<u8> = Rgba([237, 194, 46, 255]); // Gold, the 2048 tile
pub const TEXT_COLOR: Rgba<u8> = Rgba([119, 110, 101, 255]); // Dark brown
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// A half-open pixel rectangle: `[x, x + width) x [y, y + height)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IconRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl IconRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// The square of side `canvas - 2 * margin`, inset by `margin` on every side.
    pub fn inset(canvas: u32, margin: u32) -> Self {
        let side = canvas.saturating_sub(2 * margin);
        Self::new(margin as i32, margin as i32, side, side)
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x
            && y >= self.y
            && x < self.x + self.width as i32
            && y < self.y + self.height as i32
    }
}

/// Ink box of a piece of text, relative to the point the text is drawn at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Grows the box to also cover `other`. An empty box is replaced outright.
    pub fn union(self, other: TextBounds) -> TextBounds {
        if self.width() <= 0 || self.height() <= 0 {
            return other;
        }
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// One entry of the font fallback chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FontSource {
    /// A bare file name, looked up in the working directory and the system font folders.
    Named(String),
    /// A file at a fixed location.
    Path(PathBuf),
    /// The bitmap font compiled into the binary. Always available.
    Builtin,
}

impl std::fmt::Display for FontSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FontSource::Named(name) => write!(f, "{}", name),
            FontSource::Path(path) => write!(f, "{}", path.display()),
            FontSource::Builtin => write!(f, "built-in font"),
        }
    }
}
