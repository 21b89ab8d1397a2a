mod config;
mod scene;

// Re-export test fixtures
pub use config::*;
pub use scene::*;
