mod captured_frame;
mod product_type;

pub use captured_frame::CapturedFrame;
pub use product_type::ProductType;
