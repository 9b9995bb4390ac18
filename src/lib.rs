pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalStorage, CliConfig, DEFAULT_COLLECTION_PATH};
pub use core::{
    engine::{RunSummary, UpdateEngine},
    pipeline::CollectionPipeline,
    seeded::SEEDED_FOLDER_NAME,
};
pub use utils::error::{Result, SeedError};
