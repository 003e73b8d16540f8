use crate::domain::{
    errors::ServiceResult,
    models::{GenerateImageRequest, GeneratedImage},
};
use async_trait::async_trait;

/// Port for the mockup generation use case
#[async_trait]
pub trait ImageService: Send + Sync + 'static {
    /// Generate a mockup image
    ///
    /// Fails with a validation error when neither a prompt nor seed data
    /// is provided, and with a generation error when the provider result
    /// carries no URL. Product type and color, when present, select the
    /// mockup prompt template.
    async fn generate_image(&self, request: GenerateImageRequest) -> ServiceResult<GeneratedImage>;
}
