use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnimalError {
    #[error("The file '{path}' was not found")]
    NotFound { path: String },

    #[error("Permission denied when accessing '{path}'")]
    AccessDenied { path: String },

    #[error("Failed to decode '{path}', check the file encoding")]
    DecodeError { path: String },

    #[error("The file '{path}' is empty")]
    EmptyFile { path: String },

    #[error("The file '{path}' is not valid JSON: {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unexpected error while accessing '{path}': {source}")]
    Unknown {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("API responded with status {status}: {body}")]
    HttpFailure { status: u16, body: String },

    #[error("API request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfig { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Reported but the run still produces a page.
    Low,
    /// Input or configuration problem the user can fix.
    High,
    /// Environment problem (network, filesystem internals).
    Critical,
}

impl AnimalError {
    /// Classifies an I/O failure on `path` into the file-load taxonomy.
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        use std::io::ErrorKind;

        let path = path.to_string();
        match err.kind() {
            ErrorKind::NotFound => Self::NotFound { path },
            ErrorKind::PermissionDenied => Self::AccessDenied { path },
            ErrorKind::InvalidData => Self::DecodeError { path },
            _ => Self::Unknown { path, source: err },
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::HttpFailure { .. } => ErrorSeverity::Low,
            Self::NotFound { .. }
            | Self::AccessDenied { .. }
            | Self::DecodeError { .. }
            | Self::EmptyFile { .. }
            | Self::InvalidJson { .. }
            | Self::Config { .. }
            | Self::InvalidConfigValue { .. }
            | Self::MissingConfig { .. } => ErrorSeverity::High,
            Self::Unknown { .. } | Self::Http(_) | Self::Io(_) | Self::Serialization(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Http(e) if e.is_connect() => {
                "Could not reach the animal API. Check your network connection.".to_string()
            }
            Self::Http(e) if e.is_timeout() => "The animal API did not answer in time.".to_string(),
            Self::Serialization(_) => "The animal API returned an unexpected payload.".to_string(),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "Check the path, or pass the right one with --template / --data-file",
            Self::AccessDenied { .. } => "Check the file permissions",
            Self::DecodeError { .. } => "Save the file as UTF-8",
            Self::EmptyFile { .. } => "Fill the file with content before running again",
            Self::InvalidJson { .. } => "Fix the JSON syntax; the file must hold a list of animals",
            Self::HttpFailure { status: 401 | 403, .. } | Self::MissingConfig { .. } => {
                "Set a valid API key through API_KEY or --api-key"
            }
            Self::HttpFailure { .. } | Self::Http(_) => "Retry later or switch to --source file",
            Self::Config { .. } | Self::InvalidConfigValue { .. } => "Review the command-line flags and config file",
            Self::Unknown { .. } | Self::Io(_) | Self::Serialization(_) => "Re-run with --verbose for details",
        }
    }
}

pub type Result<T> = std::result::Result<T, AnimalError>;
