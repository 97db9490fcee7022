//! PNG encoding and decoding.
//!
//! Framebuffers are written as 8-bit RGBA. Decoding expands palette,
//! grayscale and RGB images to the same layout so sprites can be blitted
//! straight onto a surface.

use crate::error::{Error, Result};
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// PNG encoder for framebuffer snapshots.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let file = File::create(path)?;
        Self::encode(fb, BufWriter::new(file))
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }

    fn encode<W: Write>(fb: &Framebuffer, sink: W) -> Result<()> {
        let mut encoder = png::Encoder::new(sink, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Stride padding is stripped row by row
        writer.write_image_data(&fb.to_compact_pixels())?;
        Ok(())
    }
}

/// Decode a PNG file into a framebuffer.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a valid PNG, or uses a
/// layout that cannot be expanded to RGBA8.
pub fn read_png<P: AsRef<Path>>(path: P) -> Result<Framebuffer> {
    let file = File::open(path)?;
    decode_png(BufReader::new(file))
}

/// Decode PNG data from a reader into a framebuffer.
///
/// # Errors
///
/// See [`read_png`].
pub fn decode_png<R: Read>(source: R) -> Result<Framebuffer> {
    let mut decoder = png::Decoder::new(source);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);

    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    let bytes = &buf[..info.buffer_size()];

    let rgba: Vec<u8> = match info.color_type {
        png::ColorType::Rgba => bytes.to_vec(),
        png::ColorType::Rgb => bytes
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => bytes.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => bytes
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(Error::UnsupportedImage(format!(
                "unexpanded palette image ({}x{})",
                info.width, info.height
            )));
        }
    };

    Framebuffer::from_rgba(info.width, info.height, &rgba)
}
