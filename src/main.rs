//! Draws the 128x128 "2048" extension icon and writes it to `icon.png`.

mod canvas;
mod fonts;
mod models;
mod render;
mod utils;

use models::OUTPUT_FILE;
use std::path::Path;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    render::render(Path::new(OUTPUT_FILE))?;
    println!("Icon created: {}", OUTPUT_FILE);
    Ok(())
}
