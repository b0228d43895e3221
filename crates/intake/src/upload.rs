//! Selected files and upload candidates.

use crate::media::{detect, image_mime, MediaKind};
use crate::{IntakeError, IntakeResult};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chartwell_types::NonEmptyText;

/// A file picked by the user, as the picker hands it over.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub name: NonEmptyText,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: NonEmptyText, bytes: Vec<u8>) -> Self {
        Self { name, bytes }
    }
}

/// A selected file that passed intake checks.
///
/// Construction is the acceptance gate: empty files and unsupported media
/// kinds never become candidates. The candidate carries everything the
/// document workflow needs; the detected kind gates the OCR sub-step, and
/// images carry a local preview URL.
#[derive(Clone, Debug)]
pub struct UploadCandidate {
    name: NonEmptyText,
    bytes: Vec<u8>,
    kind: MediaKind,
}

impl UploadCandidate {
    /// Runs intake checks on a selected file.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::EmptyFile` for zero-length content and
    /// `IntakeError::UnsupportedMediaType` when the file is not an image,
    /// PDF, or word-processor document.
    pub fn from_file(file: SelectedFile) -> IntakeResult<Self> {
        if file.bytes.is_empty() {
            return Err(IntakeError::EmptyFile(file.name.as_str().to_owned()));
        }

        let kind = detect(&file.bytes, file.name.as_str())
            .ok_or_else(|| IntakeError::UnsupportedMediaType(file.name.as_str().to_owned()))?;
        tracing::debug!(file = file.name.as_str(), ?kind, "upload candidate accepted");

        Ok(Self {
            name: file.name,
            bytes: file.bytes,
            kind,
        })
    }

    /// The filename as selected.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// The file content.
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The detected media kind.
    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Whether the OCR sub-step applies to this candidate.
    pub fn is_image(&self) -> bool {
        self.kind.is_image()
    }

    /// A local preview URL for images; `None` for other kinds.
    ///
    /// The URL is a `data:` URL built from the file content. It exists for
    /// display during the session only and is what gets persisted as
    /// `file_url`: a preview, not durable storage.
    pub fn preview_url(&self) -> Option<String> {
        if !self.is_image() {
            return None;
        }
        let mime = image_mime(&self.bytes, self.name.as_str());
        Some(format!("data:{};base64,{}", mime, BASE64.encode(&self.bytes)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn named(name: &str) -> NonEmptyText {
        NonEmptyText::new(name).expect("test name should be non-empty")
    }

    #[test]
    fn test_image_candidate_gets_preview_url() {
        let candidate =
            UploadCandidate::from_file(SelectedFile::new(named("scan.png"), PNG_MAGIC.to_vec()))
                .expect("png should be accepted");

        assert!(candidate.is_image());
        let url = candidate.preview_url().expect("image should have preview");
        assert!(url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_pdf_candidate_has_no_preview() {
        let candidate = UploadCandidate::from_file(SelectedFile::new(
            named("report.pdf"),
            b"%PDF-1.4 minimal".to_vec(),
        ))
        .expect("pdf should be accepted");

        assert!(!candidate.is_image());
        assert_eq!(candidate.preview_url(), None);
    }

    #[test]
    fn test_empty_file_is_rejected() {
        let err = UploadCandidate::from_file(SelectedFile::new(named("scan.png"), vec![]))
            .expect_err("empty file should be rejected");
        assert!(matches!(err, IntakeError::EmptyFile(_)));
    }

    #[test]
    fn test_unsupported_kind_is_rejected() {
        let err = UploadCandidate::from_file(SelectedFile::new(
            named("notes.txt"),
            b"plain text".to_vec(),
        ))
        .expect_err("txt should be rejected");
        assert!(matches!(err, IntakeError::UnsupportedMediaType(_)));
    }
}
