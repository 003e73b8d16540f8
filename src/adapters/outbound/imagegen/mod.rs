mod gemini;
mod mock;

pub use gemini::{GeminiConfig, GeminiImageRepository};
pub use mock::MockImageRepository;
