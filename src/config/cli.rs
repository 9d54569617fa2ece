use crate::config::toml_config::TomlConfig;
use crate::config::{Settings, SourceKind};
use crate::utils::error::Result;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "animal-cards")]
#[command(about = "Render animal facts into a static HTML page")]
pub struct CliConfig {
    /// Where animal data comes from
    #[arg(long, value_enum)]
    pub source: Option<SourceKind>,

    /// Animal to look up; prompts on stdin when omitted
    #[arg(long)]
    pub name: Option<String>,

    /// Animal lookup endpoint
    #[arg(long)]
    pub api_endpoint: Option<String>,

    /// API key sent in the X-Api-Key header
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Local JSON dataset used by `--source file`
    #[arg(long)]
    pub data_file: Option<String>,

    /// HTML template containing the placeholder
    #[arg(long)]
    pub template: Option<String>,

    /// Output HTML file, overwritten on every run
    #[arg(long)]
    pub output: Option<String>,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Layers defaults, the TOML file (if any) and these flags.
    pub fn resolve(&self) -> Result<Settings> {
        let mut settings = Settings::default();

        if let Some(path) = &self.config {
            TomlConfig::from_file(path)?.apply_to(&mut settings);
        }

        if let Some(source) = self.source {
            settings.source = source;
        }
        if let Some(name) = &self.name {
            settings.name = Some(name.clone());
        }
        if let Some(endpoint) = &self.api_endpoint {
            settings.api_endpoint = endpoint.clone();
        }
        if let Some(key) = &self.api_key {
            settings.api_key = Some(key.clone());
        }
        if let Some(data_file) = &self.data_file {
            settings.data_file = data_file.clone();
        }
        if let Some(template) = &self.template {
            settings.template_path = template.clone();
        }
        if let Some(output) = &self.output {
            settings.output_path = output.clone();
        }

        Ok(settings)
    }
}
