pub mod config;
pub mod ranking;
pub mod request;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use ranking::rank_videos;
pub use store::{VideoRecord, VideoStore};
