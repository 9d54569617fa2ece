use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Drives a [`Pipeline`] from search term to written page.
///
/// Any step error aborts the run before the page is written.
pub struct PageEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PageEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        println!("🚀 Starting the program...");

        let search_term = self.pipeline.search_term().await?;
        tracing::info!("Looking up '{}'", search_term);

        // Extract
        let animals = self.pipeline.extract(&search_term).await?;
        tracing::info!(
            "Found {} animal(s)",
            animals.as_ref().map(Vec::len).unwrap_or(0)
        );

        // Transform
        let document = self.pipeline.transform(animals, &search_term).await?;

        // Load
        let output_path = self.pipeline.load(document).await?;

        println!("✅ Program finished successfully.");
        Ok(output_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::AnimalRecord;
    use crate::utils::error::AnimalError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingPipeline {
        steps: Mutex<Vec<&'static str>>,
        fail_transform: bool,
    }

    impl RecordingPipeline {
        fn step(&self, name: &'static str) {
            self.steps.lock().unwrap().push(name);
        }
    }

    #[async_trait]
    impl Pipeline for RecordingPipeline {
        async fn search_term(&self) -> Result<String> {
            self.step("search_term");
            Ok("Fox".to_string())
        }

        async fn extract(&self, _search_term: &str) -> Result<Option<Vec<AnimalRecord>>> {
            self.step("extract");
            Ok(Some(vec![]))
        }

        async fn transform(
            &self,
            _records: Option<Vec<AnimalRecord>>,
            _search_term: &str,
        ) -> Result<String> {
            self.step("transform");
            if self.fail_transform {
                return Err(AnimalError::NotFound {
                    path: "animals_template.html".to_string(),
                });
            }
            Ok("<html></html>".to_string())
        }

        async fn load(&self, _document: String) -> Result<String> {
            self.step("load");
            Ok("animals.html".to_string())
        }
    }

    #[tokio::test]
    async fn test_steps_run_in_order() {
        let engine = PageEngine::new(RecordingPipeline::default());

        assert_eq!(engine.run().await.unwrap(), "animals.html");
        assert_eq!(
            *engine.pipeline.steps.lock().unwrap(),
            vec!["search_term", "extract", "transform", "load"]
        );
    }

    #[tokio::test]
    async fn test_failure_stops_before_load() {
        let engine = PageEngine::new(RecordingPipeline {
            fail_transform: true,
            ..Default::default()
        });

        assert!(engine.run().await.is_err());
        assert_eq!(
            *engine.pipeline.steps.lock().unwrap(),
            vec!["search_term", "extract", "transform"]
        );
    }
}
