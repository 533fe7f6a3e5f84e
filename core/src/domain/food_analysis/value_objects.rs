use crate::domain::{food_analysis::entities::AnalysisResult, image::ColorMode};

/// Outcome of analysing one stored upload
#[derive(Debug, Clone, PartialEq)]
pub struct ImageAnalysis {
    pub width: u32,
    pub height: u32,
    pub source_mode: ColorMode,
    pub analysis: AnalysisResult,
}
