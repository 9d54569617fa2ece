pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::{http::ApiNinjasSource, json_file::JsonFileSource, storage::LocalStorage};
pub use config::{Settings, SourceKind};
pub use crate::core::{
    engine::PageEngine,
    pipeline::{HtmlPipeline, SearchInput},
};
pub use domain::model::AnimalRecord;
pub use utils::error::{AnimalError, Result};
