use crate::domain::{errors::ServiceResult, models::GeneratedImage};
use async_trait::async_trait;

/// Repository for the external image-generation provider
#[async_trait]
pub trait ImageGenerationRepository: Send + Sync + 'static {
    /// Generate a mockup image from a prompt, optionally seeded with a
    /// captured frame (base64 payload or data URL)
    ///
    /// A generation attempt that yields no image maps to a `Failed`
    /// entity, not an error; transport failures map to errors.
    async fn generate_image(
        &self,
        prompt: &str,
        seed_data: Option<&str>,
    ) -> ServiceResult<GeneratedImage>;
}
