//! Text Acquisition — turns an uploaded resume document into plain text.
//!
//! A parse failure is not an error for the caller: the upload endpoint answers
//! with `FALLBACK_GUIDANCE` and `parsed: false` instead.

pub mod handlers;
pub mod pdf;

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tracing::warn;

/// Returned in place of document text when extraction fails.
pub const FALLBACK_GUIDANCE: &str = "We couldn't parse this PDF file. Please use the 'Paste Text' option instead for best results.\n\nSimply copy your resume text and paste it in the text input area.";

#[derive(Debug, Error)]
pub enum DocumentParseError {
    #[error("could not parse document: {0}")]
    Malformed(String),

    #[error("document contains no extractable text")]
    NoText,

    #[error("document parser aborted: {0}")]
    Aborted(String),
}

/// Extracts plain text from a binary document.
pub trait TextExtractor: Send + Sync {
    fn extract_text(&self, document: &[u8]) -> Result<String, DocumentParseError>;
}

/// Outcome of reading an upload: real document text, or the fallback guidance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcquiredText {
    Parsed(String),
    Fallback,
}

impl AcquiredText {
    pub fn text(&self) -> &str {
        match self {
            AcquiredText::Parsed(text) => text,
            AcquiredText::Fallback => FALLBACK_GUIDANCE,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, AcquiredText::Parsed(_))
    }
}

/// Runs `extractor` off the async runtime and degrades any failure to
/// `AcquiredText::Fallback`.
pub async fn acquire_text(extractor: Arc<dyn TextExtractor>, document: Bytes) -> AcquiredText {
    let outcome = tokio::task::spawn_blocking(move || extractor.extract_text(&document))
        .await
        .unwrap_or_else(|e| Err(DocumentParseError::Aborted(e.to_string())));

    match outcome {
        Ok(text) if text.trim().is_empty() => {
            warn!("Document parse failed: {}", DocumentParseError::NoText);
            AcquiredText::Fallback
        }
        Ok(text) => AcquiredText::Parsed(text),
        Err(e) => {
            warn!("Document parse failed: {e}");
            AcquiredText::Fallback
        }
    }
}
