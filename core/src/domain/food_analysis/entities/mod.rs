pub mod analysis_result;
pub mod quality_label;

pub use analysis_result::*;
pub use quality_label::*;
