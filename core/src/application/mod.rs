use crate::{
    domain::common::{FreshlensConfig, entities::app_errors::CoreError, services::Service},
    infrastructure::{
        image::ImageCrateDecoder, llm::GeminiLLMClient, storage::FilesystemBlobStore,
    },
};

pub type FreshlensService = Service<FilesystemBlobStore, ImageCrateDecoder, GeminiLLMClient>;

/// Build the production service from startup configuration
pub async fn create_service(config: FreshlensConfig) -> Result<FreshlensService, CoreError> {
    let blob_store = FilesystemBlobStore::new(config.storage.upload_dir).await?;

    if config.llm.gemini_api_key.is_empty() {
        tracing::warn!("No Gemini API key configured, image analysis requests will fail");
    }

    let llm_client = GeminiLLMClient::with_base_url(
        config.llm.gemini_api_key,
        config.llm.gemini_model,
        config.llm.gemini_base_url,
    );

    Ok(Service::new(blob_store, ImageCrateDecoder, llm_client)
        .with_structured_output(config.llm.structured_output))
}
