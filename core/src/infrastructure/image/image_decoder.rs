use std::io::Cursor;

use image::{ColorType, ImageFormat};

use crate::domain::{
    common::entities::app_errors::CoreError,
    image::{ColorMode, DecodedImage, ports::ImageDecoder},
};

/// Decoder backed by the `image` crate. Format is sniffed from the bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCrateDecoder;

fn color_mode(color: ColorType) -> ColorMode {
    match color {
        ColorType::L8 | ColorType::L16 => ColorMode::Luma,
        ColorType::La8 | ColorType::La16 => ColorMode::LumaAlpha,
        ColorType::Rgb8 | ColorType::Rgb16 | ColorType::Rgb32F => ColorMode::Rgb,
        ColorType::Rgba8 | ColorType::Rgba16 | ColorType::Rgba32F => ColorMode::Rgba,
        _ => ColorMode::Other,
    }
}

impl ImageDecoder for ImageCrateDecoder {
    fn decode(&self, data: &[u8]) -> Result<DecodedImage, CoreError> {
        let image = image::load_from_memory(data).map_err(|e| {
            tracing::warn!(error = %e, size = data.len(), "Failed to decode image");
            CoreError::ImageDecodeError(e.to_string())
        })?;

        let source_mode = color_mode(image.color());
        if source_mode != ColorMode::Rgb {
            tracing::debug!(source_mode = %source_mode, "Converting image to RGB");
        }

        Ok(DecodedImage::new(source_mode, image.into_rgb8()))
    }

    fn encode_for_transport(&self, image: &DecodedImage) -> Result<(Vec<u8>, String), CoreError> {
        let mut buffer = Cursor::new(Vec::new());
        image
            .pixels
            .write_to(&mut buffer, ImageFormat::Jpeg)
            .map_err(|e| {
                tracing::error!(error = %e, "Failed to encode image as JPEG");
                CoreError::ImageDecodeError(format!("Failed to encode image: {}", e))
            })?;

        Ok((
            buffer.into_inner(),
            ImageFormat::Jpeg.to_mime_type().to_string(),
        ))
    }
}
