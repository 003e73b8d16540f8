pub mod repositories;
pub mod services;

// Re-export all port traits for convenience
pub use repositories::{ImageGenerationRepository, ShopifyRepository, VideoRepository};
pub use services::{CommerceService, ImageService, VideoService};
