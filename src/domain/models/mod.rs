mod checkout;
mod image;
mod order;
mod product;
mod video;

pub use checkout::*;
pub use image::*;
pub use order::*;
pub use product::*;
pub use video::*;
