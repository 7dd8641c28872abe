use thiserror::Error;

/// Unified error type for the entire fingestor-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
///
/// Nothing here is fatal to the process: the worst case for any core
/// operation is "no state change, message returned".
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Storage / Serialization ─────────────────────────────────────
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Import / Export ─────────────────────────────────────────────
    /// The whole file is rejected before any row is parsed.
    #[error("Wrong file kind: expected a {expected} export, file looks like a {detected} export")]
    WrongFileKind {
        expected: FileKind,
        detected: FileKind,
    },

    #[error("File contains no data rows")]
    EmptyFile,

    #[error("CSV error: {0}")]
    Csv(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({provider}): {message}")]
    Api {
        provider: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    // ── Business Logic ──────────────────────────────────────────────
    /// Malformed or missing user-entered fields, raised before any
    /// collection is mutated.
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// What kind of tabular export a file is, decided from its header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Transactions,
    Investments,
}

impl std::fmt::Display for FileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FileKind::Transactions => write!(f, "transaction"),
            FileKind::Investments => write!(f, "investment"),
        }
    }
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<csv::Error> for CoreError {
    fn from(e: csv::Error) -> Self {
        CoreError::Csv(e.to_string())
    }
}

impl From<calamine::XlsxError> for CoreError {
    fn from(e: calamine::XlsxError) -> Self {
        CoreError::Spreadsheet(e.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for CoreError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        CoreError::Spreadsheet(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Strip query parameters from URLs so API keys never end up in
        // error messages or logs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
