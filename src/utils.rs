use anyhow::{Context, Result};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tiny_skia::Pixmap;

/// Map a 0-100 quality knob to PNG compression:
/// - 0-25: Fast (fastest encoding, larger files)
/// - 26-75: Default (balanced)
/// - 76-100: Best (slowest encoding, smallest files)
pub fn png_compression(quality: u8) -> png::Compression {
    if quality <= 25 {
        png::Compression::Fast
    } else if quality <= 75 {
        png::Compression::Default
    } else {
        png::Compression::Best
    }
}

/// Save a pixmap to PNG with compression quality control (0-100).
pub fn save_png_with_quality(pixmap: &Pixmap, output_path: &Path, quality: u8) -> Result<()> {
    let file = File::create(output_path)
        .with_context(|| format!("Failed to create PNG file: {}", output_path.display()))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, pixmap.width(), pixmap.height());
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_filter(png::FilterType::Paeth);
    encoder.set_compression(png_compression(quality));

    let mut writer = encoder.write_header().context("Failed to write PNG header")?;

    // Pixmap stores premultiplied RGBA; PNG wants straight alpha
    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let c = pixel.demultiply();
        data.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
    }
    writer.write_image_data(&data).context("Failed to write PNG data")?;

    Ok(())
}
