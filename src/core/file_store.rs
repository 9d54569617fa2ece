use crate::domain::ports::Storage;
use crate::utils::error::{AnimalError, Result};
use serde::de::DeserializeOwned;

/// Text and JSON access on top of a [`Storage`], with every read failure
/// classified into the file-load taxonomy and reported before it propagates.
#[derive(Debug, Clone)]
pub struct FileStore<S: Storage> {
    storage: S,
}

impl<S: Storage> FileStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads `path` as UTF-8. Empty or whitespace-only content is an error.
    pub async fn load_text(&self, path: &str) -> Result<String> {
        let content = self.read_utf8(path).await.inspect_err(report)?;
        announce(success_line("Document", path, "loaded"));
        Ok(content)
    }

    /// Reads `path` as UTF-8 and parses it as JSON into `T`.
    pub async fn load_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let content = self.read_utf8(path).await.inspect_err(report)?;

        let value = serde_json::from_str(&content)
            .map_err(|source| AnimalError::InvalidJson {
                path: path.to_string(),
                source,
            })
            .inspect_err(report)?;

        announce(success_line("JSON file", path, "loaded"));
        Ok(value)
    }

    /// Creates or overwrites `path` with `content`.
    pub async fn save_text(&self, path: &str, content: &str) -> Result<()> {
        self.storage.write_file(path, content.as_bytes()).await?;
        announce(success_line("Document", path, "saved"));
        Ok(())
    }

    async fn read_utf8(&self, path: &str) -> Result<String> {
        let bytes = self.storage.read_file(path).await.map_err(|e| match e {
            AnimalError::Io(io) => AnimalError::from_io(path, io),
            other => other,
        })?;

        let content = String::from_utf8(bytes).map_err(|_| AnimalError::DecodeError {
            path: path.to_string(),
        })?;

        if content.trim().is_empty() {
            return Err(AnimalError::EmptyFile {
                path: path.to_string(),
            });
        }

        Ok(content)
    }
}

fn success_line(kind: &str, path: &str, action: &str) -> String {
    format!("✅ {} '{}' {} successfully!", kind, path, action)
}

// Status lines go to stdout regardless of the log filter; failures reach
// the user through the error returned to the caller.
fn announce(line: String) {
    println!("{}", line);
    tracing::debug!("{}", line);
}

fn report(err: &AnimalError) {
    tracing::error!("❌ {}", err);
}
