#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::adapters::http::DEFAULT_API_ENDPOINT;
use crate::adapters::json_file::DEFAULT_DATA_FILE;
use crate::core::pipeline::SearchInput;
use crate::utils::error::{AnimalError, Result};
use crate::utils::validation::{validate_path, validate_required_secret, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_TEMPLATE: &str = "animals_template.html";
pub const DEFAULT_OUTPUT: &str = "animals.html";

/// Loads `.env` from the working directory or one of its parents into the
/// process environment, without overriding variables already set.
///
/// Returns the file that was read; a missing `.env` is not an error.
pub fn load_dotenv() -> Result<Option<PathBuf>> {
    match dotenvy::dotenv() {
        Ok(path) => Ok(Some(path)),
        Err(e) if e.not_found() => Ok(None),
        Err(e) => Err(dotenv_error(e)),
    }
}

pub fn load_dotenv_from(path: &Path) -> Result<()> {
    dotenvy::from_path(path).map_err(dotenv_error)
}

fn dotenv_error(e: dotenvy::Error) -> AnimalError {
    AnimalError::Config {
        message: format!("Could not load .env file: {}", e),
    }
}

/// Which data source a run reads from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// The animal lookup API.
    #[default]
    Remote,
    /// A local JSON dataset.
    File,
}

/// Fully resolved settings for one run: built-in defaults, then the TOML
/// file, then command-line flags and environment.
#[derive(Clone, PartialEq)]
pub struct Settings {
    pub source: SourceKind,
    pub name: Option<String>,
    pub api_endpoint: String,
    pub api_key: Option<String>,
    pub data_file: String,
    pub template_path: String,
    pub output_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: SourceKind::Remote,
            name: None,
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            api_key: None,
            data_file: DEFAULT_DATA_FILE.to_string(),
            template_path: DEFAULT_TEMPLATE.to_string(),
            output_path: DEFAULT_OUTPUT.to_string(),
        }
    }
}

// Keeps the API key out of debug logs.
impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("source", &self.source)
            .field("name", &self.name)
            .field("api_endpoint", &self.api_endpoint)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("data_file", &self.data_file)
            .field("template_path", &self.template_path)
            .field("output_path", &self.output_path)
            .finish()
    }
}

impl Settings {
    /// The remote variant asks interactively unless a name was given; the
    /// file variant never asks and falls back to the dataset's file stem.
    pub fn search_input(&self) -> SearchInput {
        match (self.source, &self.name) {
            (_, Some(name)) => SearchInput::Fixed(name.clone()),
            (SourceKind::Remote, None) => SearchInput::Prompt,
            (SourceKind::File, None) => {
                let stem = Path::new(&self.data_file)
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("animals");
                SearchInput::Fixed(stem.to_string())
            }
        }
    }

    /// The API key, required only for the remote variant.
    pub fn api_key(&self) -> Result<&str> {
        validate_required_secret("api_key", &self.api_key)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("template", &self.template_path)?;
        validate_path("output", &self.output_path)?;

        match self.source {
            SourceKind::Remote => {
                validate_url("api_endpoint", &self.api_endpoint)?;
                self.api_key()?;
            }
            SourceKind::File => validate_path("data_file", &self.data_file)?,
        }

        Ok(())
    }
}
