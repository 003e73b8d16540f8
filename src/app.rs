use std::sync::Arc;

use crate::{
    adapters::outbound::{
        imagegen::{GeminiConfig, GeminiImageRepository, MockImageRepository},
        mux::{MockVideoRepository, MuxConfig, MuxVideoRepository},
        shopify::{MockShopifyRepository, ShopifyConfig, ShopifyStorefrontRepository},
    },
    ports::repositories::{ImageGenerationRepository, ShopifyRepository, VideoRepository},
    services::{CommerceServiceImpl, ImageServiceImpl, VideoServiceImpl},
};

/// Configuration for the application
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub video_backend: VideoBackend,
    pub image_backend: ImageBackend,
    pub commerce_backend: CommerceBackend,
}

/// Video provider configuration
#[derive(Debug, Clone, Default)]
pub enum VideoBackend {
    #[default]
    Mock,
    Mux {
        token_id: String,
        token_secret: String,
    },
}

/// Image-generation provider configuration
#[derive(Debug, Clone, Default)]
pub enum ImageBackend {
    #[default]
    Mock,
    Gemini {
        api_key: String,
    },
}

/// Commerce provider configuration
#[derive(Debug, Clone, Default)]
pub enum CommerceBackend {
    #[default]
    Mock,
    Shopify {
        store_domain: String,
        storefront_token: String,
    },
}

/// Application dependencies container
pub struct AppDependencies {
    pub video_repository: Arc<dyn VideoRepository>,
    pub image_repository: Arc<dyn ImageGenerationRepository>,
    pub shopify_repository: Arc<dyn ShopifyRepository>,
}

/// Application services container
pub struct AppServices {
    pub video_service: VideoServiceImpl,
    pub image_service: ImageServiceImpl,
    pub commerce_service: CommerceServiceImpl,
}

/// Application builder for dependency injection
///
/// Built once at process start; the resulting services are shared via
/// `Arc` for the lifetime of the process.
pub struct AppBuilder {
    config: AppConfig,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_video_backend(mut self, backend: VideoBackend) -> Self {
        self.config.video_backend = backend;
        self
    }

    pub fn with_image_backend(mut self, backend: ImageBackend) -> Self {
        self.config.image_backend = backend;
        self
    }

    pub fn with_commerce_backend(mut self, backend: CommerceBackend) -> Self {
        self.config.commerce_backend = backend;
        self
    }

    /// Build the repository adapters
    pub fn build_dependencies(self) -> Result<AppDependencies, AppError> {
        let video_repository: Arc<dyn VideoRepository> = match &self.config.video_backend {
            VideoBackend::Mock => Arc::new(MockVideoRepository::new()),
            VideoBackend::Mux {
                token_id,
                token_secret,
            } => {
                require_credential("MUX_TOKEN_ID", token_id)?;
                require_credential("MUX_TOKEN_SECRET", token_secret)?;
                Arc::new(MuxVideoRepository::new(MuxConfig {
                    token_id: token_id.clone(),
                    token_secret: token_secret.clone(),
                }))
            }
        };

        let image_repository: Arc<dyn ImageGenerationRepository> = match &self.config.image_backend
        {
            ImageBackend::Mock => Arc::new(MockImageRepository::new()),
            ImageBackend::Gemini { api_key } => {
                require_credential("GEMINI_API_KEY", api_key)?;
                Arc::new(GeminiImageRepository::new(&GeminiConfig::new(
                    api_key.clone(),
                )))
            }
        };

        let shopify_repository: Arc<dyn ShopifyRepository> = match &self.config.commerce_backend {
            CommerceBackend::Mock => Arc::new(MockShopifyRepository::new()),
            CommerceBackend::Shopify {
                store_domain,
                storefront_token,
            } => {
                require_credential("SHOPIFY_STORE_DOMAIN", store_domain)?;
                require_credential("SHOPIFY_STOREFRONT_TOKEN", storefront_token)?;
                Arc::new(ShopifyStorefrontRepository::new(&ShopifyConfig::new(
                    store_domain.clone(),
                    storefront_token.clone(),
                )))
            }
        };

        Ok(AppDependencies {
            video_repository,
            image_repository,
            shopify_repository,
        })
    }

    /// Build the complete application with services
    pub fn build(self) -> Result<AppServices, AppError> {
        let deps = self.build_dependencies()?;

        Ok(AppServices {
            video_service: VideoServiceImpl::new(deps.video_repository),
            image_service: ImageServiceImpl::new(deps.image_repository),
            commerce_service: CommerceServiceImpl::new(deps.shopify_repository),
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn require_credential(name: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Configuration {
            message: format!("{name} is required for this backend"),
        });
    }
    Ok(())
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Create a fully mocked application for testing and development
pub fn create_mock_app() -> Result<AppServices, AppError> {
    AppBuilder::new().build()
}

/// Create application from environment variables
///
/// Each provider switches independently: `VIDEO_BACKEND`,
/// `IMAGE_BACKEND`, and `COMMERCE_BACKEND` select `mock` (default) or
/// the live provider, with credentials read from the provider's usual
/// variables.
pub fn create_app_from_env() -> Result<AppServices, AppError> {
    let video_backend = match std::env::var("VIDEO_BACKEND").as_deref() {
        Ok("mux") => VideoBackend::Mux {
            token_id: env_or_config("MUX_TOKEN_ID")?,
            token_secret: env_or_config("MUX_TOKEN_SECRET")?,
        },
        Ok("mock") | Err(_) => VideoBackend::Mock,
        Ok(other) => {
            return Err(AppError::Configuration {
                message: format!("Unknown video backend: {other}"),
            })
        }
    };

    let image_backend = match std::env::var("IMAGE_BACKEND").as_deref() {
        Ok("gemini") => ImageBackend::Gemini {
            api_key: env_or_config("GEMINI_API_KEY")?,
        },
        Ok("mock") | Err(_) => ImageBackend::Mock,
        Ok(other) => {
            return Err(AppError::Configuration {
                message: format!("Unknown image backend: {other}"),
            })
        }
    };

    let commerce_backend = match std::env::var("COMMERCE_BACKEND").as_deref() {
        Ok("shopify") => CommerceBackend::Shopify {
            store_domain: env_or_config("SHOPIFY_STORE_DOMAIN")?,
            storefront_token: env_or_config("SHOPIFY_STOREFRONT_TOKEN")?,
        },
        Ok("mock") | Err(_) => CommerceBackend::Mock,
        Ok(other) => {
            return Err(AppError::Configuration {
                message: format!("Unknown commerce backend: {other}"),
            })
        }
    };

    AppBuilder::new()
        .with_video_backend(video_backend)
        .with_image_backend(image_backend)
        .with_commerce_backend(commerce_backend)
        .build()
}

fn env_or_config(name: &str) -> Result<String, AppError> {
    std::env::var(name).map_err(|_| AppError::Configuration {
        message: format!("{name} environment variable required"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_mock_app() {
        assert!(create_mock_app().is_ok());
    }

    #[test]
    fn test_builder_with_backends() {
        let services = AppBuilder::new()
            .with_video_backend(VideoBackend::Mock)
            .with_image_backend(ImageBackend::Mock)
            .with_commerce_backend(CommerceBackend::Mock)
            .build();
        assert!(services.is_ok());
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let result = AppBuilder::new()
            .with_commerce_backend(CommerceBackend::Shopify {
                store_domain: "merchify.myshopify.com".to_string(),
                storefront_token: "".to_string(),
            })
            .build();

        match result {
            Err(AppError::Configuration { message }) => {
                assert!(message.contains("SHOPIFY_STOREFRONT_TOKEN"));
            }
            _ => panic!("expected configuration error"),
        }
    }

    #[test]
    fn test_live_backends_construct_with_credentials() {
        let result = AppBuilder::new()
            .with_video_backend(VideoBackend::Mux {
                token_id: "id".to_string(),
                token_secret: "secret".to_string(),
            })
            .with_image_backend(ImageBackend::Gemini {
                api_key: "key".to_string(),
            })
            .with_commerce_backend(CommerceBackend::Shopify {
                store_domain: "merchify.myshopify.com".to_string(),
                storefront_token: "token".to_string(),
            })
            .build();
        assert!(result.is_ok());
    }
}
