mod commerce_service_impl;
mod image_service_impl;
pub mod prompt;
mod video_service_impl;

pub use commerce_service_impl::CommerceServiceImpl;
pub use image_service_impl::ImageServiceImpl;
pub use video_service_impl::VideoServiceImpl;
