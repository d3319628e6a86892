pub mod app_config;
pub mod config;
pub mod products;
pub mod sort;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use products::Product;
pub use sort::{apply_sort, compare_titles, SortOption};

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown sort option: {0}")]
    UnknownSortOption(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
