//! Error types for wildwatch.

/// Result type alias for wildwatch operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for wildwatch.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration directory could not be determined.
    #[error("could not determine configuration directory for this platform")]
    ConfigDirNotFound,

    /// Failed to read configuration file.
    #[error("failed to read config file '{path}'")]
    ConfigRead {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse configuration file.
    #[error("failed to parse config file '{path}'")]
    ConfigParse {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: toml::de::Error,
    },

    /// Failed to write configuration file.
    #[error("failed to write config file '{path}'")]
    ConfigWrite {
        /// Path to the config file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize configuration.
    #[error("failed to serialize config")]
    ConfigSerialize {
        /// Underlying serialization error.
        #[source]
        source: toml::ser::Error,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ConfigValidation {
        /// Description of the validation failure.
        message: String,
    },

    /// Frame source could not be opened.
    #[error("failed to open frame source '{path}': {reason}")]
    SourceOpen {
        /// Path to the frame source.
        path: std::path::PathBuf,
        /// Description of the open failure.
        reason: String,
    },

    /// Frame source contains no usable frames.
    #[error("no image frames found in '{path}'")]
    NoFrames {
        /// Path to the frame source.
        path: std::path::PathBuf,
    },

    /// Failed to read prediction manifest file.
    #[error("failed to read prediction manifest '{path}'")]
    ManifestRead {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse prediction manifest file.
    #[error("failed to parse prediction manifest '{path}'")]
    ManifestParse {
        /// Path to the manifest file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to read species metadata file.
    #[error("failed to read species metadata file '{path}'")]
    SpeciesDbRead {
        /// Path to the species metadata file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse species metadata file.
    #[error("failed to parse species metadata file '{path}'")]
    SpeciesDbParse {
        /// Path to the species metadata file.
        path: std::path::PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write detection log file.
    #[error("failed to write detection log '{path}'")]
    LogWrite {
        /// Path to the log file.
        path: std::path::PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize detection log.
    #[error("failed to serialize detection log")]
    LogSerialize {
        /// Underlying serialization error.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to export CSV file.
    #[error("failed to export CSV file '{path}'")]
    CsvExport {
        /// Path to the CSV file.
        path: std::path::PathBuf,
        /// Underlying error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Classifier failed on a frame.
    #[error("classification failed: {reason}")]
    Classification {
        /// Description of the classification failure.
        reason: String,
    },

    /// Internal error (for unexpected failures).
    #[error("internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}
