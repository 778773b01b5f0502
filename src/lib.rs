use std::path::PathBuf;

pub mod config;
pub mod driver;
pub mod migrate;
pub mod progress;
pub mod record;


/// Key after which the new field is inserted.
pub const ANCHOR_FIELD: &str = "question_text";
/// Key ensured on every record.
pub const TARGET_FIELD: &str = "question_image";

#[derive(Debug, thiserror::Error)]
#[error("{context}: {detail}")]
pub struct Error {
    pub context: Box<ErrorContext>,
    pub detail: Box<ErrorDetail>,
}

#[derive(Debug, Clone)]
pub struct ErrorContext {
    pub path: PathBuf,
    pub index: Option<usize>,
}

impl ErrorContext {
    fn new(path: PathBuf) -> Self {
        Self { path, index: None }
    }

    fn error(&self, detail: ErrorDetail) -> Error {
        let index = match &detail {
            ErrorDetail::RecordNotObject { index, .. } => Some(*index),
            _ => self.index,
        };
        Error {
            context: Box::new(Self {
                path: self.path.clone(),
                index,
            }),
            detail: Box::new(detail),
        }
    }
}

impl std::fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.index {
            Some(index) => write!(f, "{}[{index}]", self.path.display()),
            None => write!(f, "{}", self.path.display()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorDetail {
    #[error("Failed to read document: {0}")]
    ReadDocument(std::io::Error),
    #[error("Failed to parse JSON document: {0}")]
    ParseJson(serde_json::Error),
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    #[error("Record {index} is not an object: got {got}")]
    RecordNotObject { index: usize, got: &'static str },
    #[error("Failed to render JSON document: {0}")]
    Render(serde_json::Error),
    #[error("Failed to write document: {0}")]
    WriteDocument(std::io::Error),
}
