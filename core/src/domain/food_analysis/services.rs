use std::sync::Arc;

use bytes::Bytes;
use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    food_analysis::{
        normalizer::normalize_analysis,
        ports::{FoodAnalysisService, LLMClient},
        schema::{FOOD_ANALYSIS_PROMPT, get_food_analysis_schema},
        value_objects::ImageAnalysis,
    },
    image::ports::ImageDecoder,
    storage::{entities::StoredImage, ports::BlobStore},
};

impl<BS, ID, LLM> FoodAnalysisService for Service<BS, ID, LLM>
where
    BS: BlobStore,
    ID: ImageDecoder,
    LLM: LLMClient,
{
    #[instrument(
        skip(self, stored, image_data),
        fields(upload_id = %stored.id, filename = %stored.filename)
    )]
    async fn analyze_image(
        &self,
        stored: &StoredImage,
        image_data: Bytes,
    ) -> Result<ImageAnalysis, CoreError> {
        // 1. Decode and normalize to RGB off the async workers
        let decoder = Arc::clone(&self.image_decoder);
        let (decoded, payload, mime_type) = tokio::task::spawn_blocking(move || {
            let decoded = decoder.decode(&image_data)?;
            let (payload, mime_type) = decoder.encode_for_transport(&decoded)?;
            Ok::<_, CoreError>((decoded, payload, mime_type))
        })
        .await
        .map_err(|e| {
            tracing::error!("Image decoding task failed: {}", e);
            CoreError::InternalServerError
        })??;

        tracing::info!(
            source_mode = %decoded.source_mode,
            "Image dimensions: {}x{}, mode: {}",
            decoded.width,
            decoded.height,
            decoded.mode()
        );

        // 2. Ask the model
        let response_schema = self.structured_output.then(get_food_analysis_schema);
        let raw_response = self
            .llm_client
            .generate_with_image(
                FOOD_ANALYSIS_PROMPT.to_string(),
                payload,
                mime_type,
                response_schema,
            )
            .await?;

        tracing::debug!(raw_response = %raw_response, "Raw Gemini response");

        // 3. Normalize whatever came back
        let analysis = normalize_analysis(&raw_response);

        Ok(ImageAnalysis {
            width: decoded.width,
            height: decoded.height,
            source_mode: decoded.source_mode,
            analysis,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::{DynamicImage, ImageFormat, RgbaImage};
    use serde_json::json;

    use super::*;
    use crate::{
        domain::{
            food_analysis::{entities::AnalysisResult, ports::MockLLMClient},
            image::{ColorMode, ports::MockImageDecoder},
            storage::ports::MockBlobStore,
        },
        infrastructure::image::ImageCrateDecoder,
    };

    fn stored(filename: &str) -> StoredImage {
        StoredImage::new(
            filename.to_string(),
            format!("uploads/{filename}").into(),
            0,
            String::new(),
        )
    }

    fn rgba_png(width: u32, height: u32) -> Bytes {
        let image = DynamicImage::ImageRgba8(RgbaImage::new(width, height));
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).unwrap();
        Bytes::from(buffer.into_inner())
    }

    #[tokio::test]
    async fn test_analyze_image_normalizes_model_reply() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|prompt, data, mime, schema| {
                prompt == FOOD_ANALYSIS_PROMPT
                    && !data.is_empty()
                    && mime == "image/jpeg"
                    && schema.is_none()
            })
            .times(1)
            .returning(|_, _, _, _| {
                Box::pin(async {
                    Ok("```json\n{\"dish\": \"Omelette\", \"nutrition value\": 64}\n```".to_string())
                })
            });

        let service = Service::new(MockBlobStore::new(), ImageCrateDecoder, llm);
        let result = service
            .analyze_image(&stored("omelette.png"), rgba_png(12, 7))
            .await
            .unwrap();

        assert_eq!(result.width, 12);
        assert_eq!(result.height, 7);
        assert_eq!(result.source_mode, ColorMode::Rgba);
        assert_eq!(result.analysis.dish, json!("Omelette"));
        assert_eq!(result.analysis.nutrition_value, json!(64));
        assert_eq!(result.analysis.freshness, json!(75));
    }

    #[tokio::test]
    async fn test_structured_output_sends_schema() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image()
            .withf(|_, _, _, schema| schema.as_ref() == Some(&get_food_analysis_schema()))
            .times(1)
            .returning(|_, _, _, _| Box::pin(async { Ok("no json here".to_string()) }));

        let service = Service::new(MockBlobStore::new(), ImageCrateDecoder, llm)
            .with_structured_output(true);
        let result = service
            .analyze_image(&stored("meal.png"), rgba_png(2, 2))
            .await
            .unwrap();

        assert_eq!(result.analysis, AnalysisResult::fallback());
    }

    #[tokio::test]
    async fn test_decode_error_skips_model_call() {
        let mut decoder = MockImageDecoder::new();
        decoder
            .expect_decode()
            .returning(|_| Err(CoreError::ImageDecodeError("unsupported format".to_string())));
        decoder.expect_encode_for_transport().never();

        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().never();

        let service = Service::new(MockBlobStore::new(), decoder, llm);
        let err = service
            .analyze_image(&stored("notes.txt"), Bytes::from_static(b"plain text"))
            .await
            .unwrap_err();

        assert_eq!(
            err,
            CoreError::ImageDecodeError("unsupported format".to_string())
        );
    }

    #[tokio::test]
    async fn test_model_failure_is_propagated() {
        let mut llm = MockLLMClient::new();
        llm.expect_generate_with_image().returning(|_, _, _, _| {
            Box::pin(async {
                Err(CoreError::ExternalServiceError(
                    "LLM API returned error: 503".to_string(),
                ))
            })
        });

        let service = Service::new(MockBlobStore::new(), ImageCrateDecoder, llm);
        let err = service
            .analyze_image(&stored("meal.png"), rgba_png(3, 3))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }
}
