use crate::app::prompt;
use crate::core::file_store::FileStore;
use crate::core::render::{self, PLACEHOLDER};
use crate::domain::model::AnimalRecord;
use crate::domain::ports::{AnimalSource, Pipeline, Storage};
use crate::utils::error::{AnimalError, Result};
use crate::utils::validation::validate_non_empty_string;

/// How the pipeline learns what to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchInput {
    /// Ask on stdin.
    Prompt,
    Fixed(String),
}

/// Fetches animals, renders them into the template and writes the page.
pub struct HtmlPipeline<S: Storage, A: AnimalSource> {
    files: FileStore<S>,
    source: A,
    input: SearchInput,
    template_path: String,
    output_path: String,
}

impl<S: Storage, A: AnimalSource> HtmlPipeline<S, A> {
    pub fn new(
        storage: S,
        source: A,
        input: SearchInput,
        template_path: impl Into<String>,
        output_path: impl Into<String>,
    ) -> Self {
        Self {
            files: FileStore::new(storage),
            source,
            input,
            template_path: template_path.into(),
            output_path: output_path.into(),
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, A: AnimalSource> Pipeline for HtmlPipeline<S, A> {
    async fn search_term(&self) -> Result<String> {
        let term = match &self.input {
            SearchInput::Fixed(term) => term.trim().to_string(),
            SearchInput::Prompt => tokio::task::spawn_blocking(|| {
                prompt::read_search_term(std::io::stdin().lock(), std::io::stdout())
            })
            .await
            .map_err(|e| AnimalError::Io(std::io::Error::other(e)))??,
        };

        validate_non_empty_string("name", &term)?;
        Ok(term)
    }

    async fn extract(&self, search_term: &str) -> Result<Option<Vec<AnimalRecord>>> {
        let animals = self.source.fetch(search_term).await?;

        match &animals {
            Some(list) => tracing::debug!("Extracted {} animal(s)", list.len()),
            None => tracing::warn!("No usable data for '{}'", search_term),
        }

        Ok(animals)
    }

    async fn transform(
        &self,
        records: Option<Vec<AnimalRecord>>,
        search_term: &str,
    ) -> Result<String> {
        let template = self.files.load_text(&self.template_path).await?;

        if !template.contains(PLACEHOLDER) {
            tracing::warn!(
                "Template '{}' has no {} marker; page will not list any animals",
                self.template_path,
                PLACEHOLDER
            );
        }

        let cards = render::render_many(records.as_deref(), search_term);
        Ok(render::substitute(&template, &cards))
    }

    async fn load(&self, document: String) -> Result<String> {
        tracing::debug!("Writing {} bytes to {}", document.len(), self.output_path);
        self.files.save_text(&self.output_path, &document).await?;
        Ok(self.output_path.clone())
    }
}
