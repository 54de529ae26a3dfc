//! Utility helpers: recursive file discovery.
pub mod files;

pub use files::{find_by_extension, find_by_name, find_dir_contents, DiscoveryError};
