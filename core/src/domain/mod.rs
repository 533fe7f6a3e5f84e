pub mod common;
pub mod food_analysis;
pub mod image;
pub mod storage;
