// Verman - Git tag driven version management
// Core library functionality

pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::*;
pub use services::*;
