use crate::config::{Settings, SourceKind};
use crate::utils::error::{AnimalError, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional configuration file. Every key may be omitted.
///
/// ```toml
/// [source]
/// type = "remote"
/// endpoint = "https://api.api-ninjas.com/v1/animals"
/// api_key = "${API_KEY}"
///
/// [files]
/// template = "animals_template.html"
/// output = "animals.html"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub files: FilesConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub r#type: Option<SourceKind>,
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub data_file: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilesConfig {
    pub template: Option<String>,
    pub output: Option<String>,
}

impl TomlConfig {
    /// Reads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| AnimalError::from_io(&path.display().to_string(), e))?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| AnimalError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables are
    /// left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| AnimalError::Config {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// Overwrites the fields of `settings` this file sets.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(kind) = self.source.r#type {
            settings.source = kind;
        }
        if let Some(endpoint) = &self.source.endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        // An unresolved placeholder means the variable was not set.
        if let Some(key) = self.source.api_key.as_ref().filter(|k| !k.starts_with("${")) {
            settings.api_key = Some(key.clone());
        }
        if let Some(data_file) = &self.source.data_file {
            settings.data_file = data_file.clone();
        }
        if let Some(name) = &self.source.name {
            settings.name = Some(name.clone());
        }
        if let Some(template) = &self.files.template {
            settings.template_path = template.clone();
        }
        if let Some(output) = &self.files.output {
            settings.output_path = output.clone();
        }
    }
}
