//! Sample image with known text, for checking the OCR round trip by hand.
//!
//! Text is drawn with `imageproc` using an embedded DejaVu Sans font, so no
//! system fonts are needed.

use crate::{Error, Result};
use ab_glyph::{FontRef, PxScale};
use image::{ImageFormat, Rgb, RgbImage};
use imageproc::drawing::{draw_text_mut, text_size};
use std::path::{Path, PathBuf};

pub const DEFAULT_PATH: &str = "test_image.png";
pub const WIDTH: u32 = 800;
pub const HEIGHT: u32 = 400;

pub const LINES: [&str; 6] = [
    "This is a test image for OCR.",
    "It contains multiple lines of text",
    "to test the OCR capabilities",
    "of the Google Gemini 2.5 Flash model.",
    "1234567890",
    "!@#$%^&*()",
];

const FONT_BYTES: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
const FONT_SIZE: f32 = 24.0;

const LEFT_MARGIN: u32 = 50;
const TOP_MARGIN: u32 = 50;
const LINE_SPACING: u32 = 50;

const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

fn load_font() -> Result<FontRef<'static>> {
    FontRef::try_from_slice(FONT_BYTES)
        .map_err(|e| Error::Invariant(format!("Embedded font failed to load: {}", e)))
}

/// Renders the sample: black text lines on an 800x400 white canvas.
pub fn render() -> Result<RgbImage> {
    let font = load_font()?;
    let scale = PxScale::from(FONT_SIZE);

    let mut image = RgbImage::from_pixel(WIDTH, HEIGHT, WHITE);
    for (i, line) in LINES.iter().enumerate() {
        draw_text_mut(
            &mut image,
            BLACK,
            LEFT_MARGIN as i32,
            (TOP_MARGIN + i as u32 * LINE_SPACING) as i32,
            scale,
            &font,
            line,
        );
    }
    Ok(image)
}

fn write_png_sync(path: PathBuf) -> Result<()> {
    render()?.save_with_format(&path, ImageFormat::Png)?;
    Ok(())
}

/// Renders the sample and saves it as a PNG at `path`.
pub async fn write_png(path: &Path) -> Result<()> {
    tokio::task::spawn_blocking({
        let path = path.to_path_buf();
        move || write_png_sync(path)
    })
    .await
    .map_err(|e| Error::Invariant(format!("Sample image task join error: {}", e)))??;

    tracing::info!("Test image created: {}", path.display());
    Ok(())
}
