//! Record rendering contract.

use crate::record::Record;
use msglog_shared::{ErrorCode, ErrorEnvelope};

/// Rendering failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    /// The record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(String),
}

impl From<RenderError> for ErrorEnvelope {
    fn from(error: RenderError) -> Self {
        Self::unexpected(ErrorCode::new("render", "serialize_failed"), error.to_string())
    }
}

/// Turns a record into one output line.
pub trait RecordRenderer: Send + Sync {
    /// Render `record` without a trailing newline.
    fn render(&self, record: &Record) -> Result<String, RenderError>;
}
