mod image_generation_repository;
mod shopify_repository;
mod video_repository;

pub use image_generation_repository::ImageGenerationRepository;
pub use shopify_repository::ShopifyRepository;
pub use video_repository::VideoRepository;
