use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::{
    domain::{
        errors::{ServiceError, ServiceResult, ValidationError},
        models::{GenerateImageRequest, GeneratedImage},
    },
    ports::{repositories::ImageGenerationRepository, services::ImageService},
    services::prompt::{self, DEFAULT_PROMPT},
};

/// Implementation of ImageService composing the mockup prompt and
/// delegating to the image-generation provider
#[derive(Clone)]
pub struct ImageServiceImpl {
    repository: Arc<dyn ImageGenerationRepository>,
}

impl ImageServiceImpl {
    pub fn new(repository: Arc<dyn ImageGenerationRepository>) -> Self {
        Self { repository }
    }

    /// Resolve the prompt sent to the provider
    ///
    /// Product-aware requests use the per-product mockup template; bare
    /// requests fall back to the user prompt, defaulting to a fixed
    /// string when the prompt is empty but seed data is present.
    fn resolve_prompt(request: &GenerateImageRequest) -> String {
        let user_prompt = request
            .prompt
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty());

        match request.product_type {
            Some(product_type) => {
                prompt::mockup_prompt(product_type, request.color.as_deref(), user_prompt)
            }
            None => user_prompt.unwrap_or(DEFAULT_PROMPT).to_string(),
        }
    }
}

#[async_trait]
impl ImageService for ImageServiceImpl {
    async fn generate_image(&self, request: GenerateImageRequest) -> ServiceResult<GeneratedImage> {
        let has_prompt = request
            .prompt
            .as_deref()
            .is_some_and(|p| !p.trim().is_empty());
        let has_seed = request
            .seed_data
            .as_deref()
            .is_some_and(|s| !s.trim().is_empty());

        if !has_prompt && !has_seed {
            return Err(ValidationError::MissingPromptAndSeed.into());
        }

        let prompt = Self::resolve_prompt(&request);

        let image = self
            .repository
            .generate_image(&prompt, request.seed_data.as_deref())
            .await?;

        if !image.is_complete() {
            return Err(ServiceError::Generation {
                message: "provider returned no image URL".to_string(),
            });
        }

        info!(image_id = %image.id, "mockup generated");

        Ok(image)
    }
}
