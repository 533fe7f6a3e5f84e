pub mod image_decoder;

pub use image_decoder::ImageCrateDecoder;
