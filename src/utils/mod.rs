// Utility module for shared infrastructure
pub mod config;
pub mod dates;
pub mod error;
pub mod logging;
