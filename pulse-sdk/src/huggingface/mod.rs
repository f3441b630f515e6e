pub mod client;
pub mod types;

pub use client::HuggingFaceClient;
pub use types::*;

// Re-export sentiment model constants
pub use crate::models::sentiment::*;
