mod commerce_service;
mod image_service;
mod video_service;

pub use commerce_service::CommerceService;
pub use image_service::ImageService;
pub use video_service::VideoService;
