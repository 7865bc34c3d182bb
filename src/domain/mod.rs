mod loader;
pub mod models;

pub use loader::{load_videos, parse_videos};
pub use models::*;
