use std::future::Future;

use bytes::Bytes;

use crate::domain::{
    common::entities::app_errors::CoreError, food_analysis::value_objects::ImageAnalysis,
    storage::entities::StoredImage,
};

/// LLM Client trait for calling AI models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Send a prompt and one image, returning the model's reply text untouched.
    /// `response_schema` asks for schema-constrained JSON when the backend supports it.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data: Vec<u8>,
        mime_type: String,
        response_schema: Option<serde_json::Value>,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for food analysis business logic
pub trait FoodAnalysisService: Send + Sync {
    /// Decode a stored upload, ask the model about it and normalize the reply
    fn analyze_image(
        &self,
        stored: &StoredImage,
        image_data: Bytes,
    ) -> impl Future<Output = Result<ImageAnalysis, CoreError>> + Send;
}
