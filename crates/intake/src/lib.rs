//! Chartwell document intake.
//!
//! Uploaded clinical documents pass through this crate before anything is
//! persisted:
//!
//! - media-kind detection from file content with an extension fallback
//!   ([`MediaKind`]); accepted kinds are images, PDF, and word-processor
//!   documents; anything else is rejected at selection time
//! - a local, non-durable preview URL for images ([`UploadCandidate`])
//! - the [`OcrEngine`] seam for text recognition, with incremental
//!   progress reporting
//!
//! The OCR engine itself is an external collaborator. This crate ships the
//! trait and a deterministic [`ScriptedOcr`] implementation; wiring a real
//! engine is the embedding application's job.
//!
//! Media detection is best-effort and never authoritative: it gates which
//! intake steps run (only images are previewed and recognized), it does not
//! certify file contents.

mod media;
mod ocr;
mod upload;

pub use media::{detect, MediaKind};
pub use ocr::{OcrEngine, ProgressSink, ScriptedOcr};
pub use upload::{SelectedFile, UploadCandidate};

/// Errors that can occur during document intake.
#[derive(Debug, thiserror::Error)]
pub enum IntakeError {
    /// The selected file is not an image, PDF, or word-processor document
    #[error("unsupported media type for `{0}` (accepted: images, PDF, word-processor documents)")]
    UnsupportedMediaType(String),

    /// The selected file had no content
    #[error("selected file `{0}` is empty")]
    EmptyFile(String),

    /// The OCR engine failed to extract text
    #[error("text recognition failed: {0}")]
    Recognition(String),
}

/// Result type for intake operations.
pub type IntakeResult<T> = std::result::Result<T, IntakeError>;
