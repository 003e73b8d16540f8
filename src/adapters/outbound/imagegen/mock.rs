use async_trait::async_trait;

use crate::{
    domain::{errors::ServiceResult, models::GeneratedImage},
    ports::repositories::ImageGenerationRepository,
};

/// Placeholder image adapter for testing and local development
///
/// Answers every request with a deterministic placeholder URL, the same
/// behavior the product UI renders while no provider is configured.
#[derive(Default)]
pub struct MockImageRepository {
    return_url: bool,
}

impl MockImageRepository {
    pub fn new() -> Self {
        Self { return_url: true }
    }

    /// Produce failed generations with no URL
    pub fn without_url() -> Self {
        Self { return_url: false }
    }
}

#[async_trait]
impl ImageGenerationRepository for MockImageRepository {
    async fn generate_image(
        &self,
        prompt: &str,
        seed_data: Option<&str>,
    ) -> ServiceResult<GeneratedImage> {
        if !self.return_url {
            return Ok(GeneratedImage::failed(
                prompt.to_string(),
                seed_data.map(String::from),
            ));
        }

        Ok(GeneratedImage::completed(
            "https://placehold.co/1024x1024/png?text=mockup".to_string(),
            prompt.to_string(),
            seed_data.map(String::from),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_returns_placeholder() {
        let repo = MockImageRepository::new();
        let image = repo.generate_image("a shirt", None).await.unwrap();
        assert!(image.is_complete());
        assert!(image.url.unwrap().contains("placehold.co"));
    }

    #[tokio::test]
    async fn test_without_url_fails_generation() {
        let repo = MockImageRepository::without_url();
        let image = repo.generate_image("a shirt", None).await.unwrap();
        assert!(!image.is_complete());
        assert!(image.url.is_none());
    }
}
