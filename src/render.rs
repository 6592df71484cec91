use crate::canvas::Canvas;
use crate::fonts::{default_sources, load_first_available};
use crate::models::{
    FontSource, IconRect, FONT_SIZE, ICON_SIZE, LABEL, LABEL_LIFT, PANEL_COLOR, PANEL_MARGIN,
    PANEL_RADIUS, TEXT_COLOR, TILE_COLOR, TILE_RADIUS, TILE_SIZE,
};
use crate::utils::{centered_offset, log_line};
use std::path::Path;

/// Beige panel inset by the margin, then the gold tile centered on top of it.
fn draw_background(canvas: &mut Canvas) {
    canvas.fill_rounded_rect(IconRect::inset(ICON_SIZE, PANEL_MARGIN), PANEL_RADIUS, PANEL_COLOR);

    let offset = centered_offset(ICON_SIZE as i32, TILE_SIZE as i32);
    canvas.fill_rounded_rect(IconRect::new(offset, offset, TILE_SIZE, TILE_SIZE), TILE_RADIUS, TILE_COLOR);
}

/// Draws the full icon with the default font chain.
pub fn render_icon() -> Canvas {
    render_icon_with(&default_sources())
}

/// Draws the full icon, taking the label font from the first usable entry of `fonts`.
pub fn render_icon_with(fonts: &[FontSource]) -> Canvas {
    let mut canvas = Canvas::new(ICON_SIZE, ICON_SIZE);
    draw_background(&mut canvas);

    let font = load_first_available(fonts, FONT_SIZE);
    let bounds = font.measure(LABEL);
    let x = centered_offset(ICON_SIZE as i32, bounds.width());
    let y = centered_offset(ICON_SIZE as i32, bounds.height()) - LABEL_LIFT;
    eprintln!("{}", log_line(&format!("Drawing \"{}\" with {} at ({}, {})", LABEL, font.name(), x, y)));
    canvas.draw_text(LABEL, &font, x, y, TEXT_COLOR);

    canvas
}

/// Renders the icon and writes it to `path` as PNG.
pub fn render(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    render_icon().save_png(path)
}
