mod direct_upload;
mod mock;

pub use direct_upload::{MuxConfig, MuxVideoRepository};
pub use mock::MockVideoRepository;
