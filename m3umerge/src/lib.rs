mod app_state;
mod config;
pub use app_state::*;
pub use config::*;
pub mod loader;
pub mod merge;
pub mod source;
