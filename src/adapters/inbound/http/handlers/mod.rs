mod catalog_handlers;
mod image_handlers;
mod order_handlers;
mod shopify_handlers;
mod video_handlers;

pub use catalog_handlers::{health, list_products};
pub use image_handlers::generate_image;
pub use order_handlers::create_order;
pub use shopify_handlers::shopify_query;
pub use video_handlers::{get_video, upload_video};
