use std::fmt;

use image::RgbImage;

/// Pixel layout of a decoded image before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
    Other,
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColorMode::Luma => "L",
            ColorMode::LumaAlpha => "LA",
            ColorMode::Rgb => "RGB",
            ColorMode::Rgba => "RGBA",
            ColorMode::Other => "other",
        };
        f.write_str(name)
    }
}

/// An image decoded and converted to 8-bit RGB.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub source_mode: ColorMode,
    pub pixels: RgbImage,
}

impl DecodedImage {
    pub fn new(source_mode: ColorMode, pixels: RgbImage) -> Self {
        Self {
            width: pixels.width(),
            height: pixels.height(),
            source_mode,
            pixels,
        }
    }

    /// Mode after normalization. Always three channels.
    pub fn mode(&self) -> ColorMode {
        ColorMode::Rgb
    }
}

/// Content type to serve a stored file with, guessed from its extension
pub fn content_type_for(filename: &str) -> &'static str {
    image::ImageFormat::from_path(filename)
        .map(|format| format.to_mime_type())
        .unwrap_or("application/octet-stream")
}
