pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - core business entities and value objects
pub use domain::{
    CapturedFrame,
    Checkout,
    CheckoutRequest,
    CreateOrderRequest,
    GenerateImageRequest,
    GeneratedImage,
    ImageStatus,
    LineItem,
    // Models
    Order,
    OrderStatus,
    Product,
    // Value objects
    ProductType,
    // Errors
    ServiceError,
    ServiceResult,
    ValidationError,
    VideoAsset,
    VideoStatus,
    VideoUpload,
};

// Port types - interfaces for external systems
pub use ports::{
    // Service ports
    CommerceService,
    // Repository ports
    ImageGenerationRepository,
    ImageService,
    ShopifyRepository,
    VideoRepository,
    VideoService,
};

// Service implementations - business logic
pub use services::{CommerceServiceImpl, ImageServiceImpl, VideoServiceImpl};

// Application factory and configuration
pub use app::{
    create_app_from_env, create_mock_app, AppBuilder, AppConfig, AppDependencies, AppError,
    AppServices, CommerceBackend, ImageBackend, VideoBackend,
};

// Adapter types - infrastructure implementations
pub use adapters::outbound::{
    imagegen::{GeminiImageRepository, MockImageRepository},
    mux::{MockVideoRepository, MuxVideoRepository},
    shopify::{MockShopifyRepository, ShopifyStorefrontRepository},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        create_mock_app, AppBuilder, AppServices, CommerceService, CommerceServiceImpl,
        CreateOrderRequest, GenerateImageRequest, ImageService, ImageServiceImpl, Order, Product,
        ProductType, VideoService, VideoServiceImpl, VideoUpload,
    };
}
