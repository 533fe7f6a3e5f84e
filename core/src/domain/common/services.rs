use std::sync::Arc;

use crate::domain::{
    food_analysis::ports::LLMClient, image::ports::ImageDecoder, storage::ports::BlobStore,
};

/// Wires the ports together. Every domain service trait is implemented on this type.
#[derive(Clone)]
pub struct Service<BS, ID, LLM>
where
    BS: BlobStore,
    ID: ImageDecoder,
    LLM: LLMClient,
{
    pub(crate) blob_store: BS,
    pub(crate) image_decoder: Arc<ID>,
    pub(crate) llm_client: LLM,
    pub(crate) structured_output: bool,
}

impl<BS, ID, LLM> Service<BS, ID, LLM>
where
    BS: BlobStore,
    ID: ImageDecoder,
    LLM: LLMClient,
{
    pub fn new(blob_store: BS, image_decoder: ID, llm_client: LLM) -> Self {
        Self {
            blob_store,
            image_decoder: Arc::new(image_decoder),
            llm_client,
            structured_output: false,
        }
    }

    /// Ask the model for schema-constrained JSON instead of relying on the prompt alone.
    pub fn with_structured_output(mut self, enabled: bool) -> Self {
        self.structured_output = enabled;
        self
    }
}
