//! Document upload form.
//!
//! The only workflow with a sub-step between editing and submission.
//! After a file is selected, image-kind candidates run through the OCR
//! engine (progress reported 0–100) and the extracted text lands in an
//! editable field; non-image files skip recognition entirely. Recognition
//! failure is logged and never blocks submission; the document is saved
//! with an empty OCR field.
//!
//! The intended call sequence for the owning view:
//!
//! 1. [`DocumentForm::select_file`]
//! 2. [`DocumentForm::run_recognition`] (no-op for non-images)
//! 3. user edits, then [`DocumentForm::submit`]

use super::{coerce, FormPhase};
use crate::entities::{Document, DocumentType, NewDocument};
use crate::repository::RecordRepository;
use crate::{ChartError, ChartResult};
use chartwell_intake::{OcrEngine, SelectedFile, UploadCandidate};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DocumentDraft {
    pub document_name: String,
    pub document_type: DocumentType,
    /// Populated by recognition, editable afterwards.
    pub ocr_text: String,
}

#[derive(Clone, Debug)]
pub enum DocumentField {
    DocumentName(String),
    DocumentType(DocumentType),
    OcrText(String),
}

/// The document upload workflow.
pub struct DocumentForm {
    patient_id: Uuid,
    draft: DocumentDraft,
    candidate: Option<UploadCandidate>,
    ocr_progress: Arc<AtomicU8>,
    phase: FormPhase,
}

impl DocumentForm {
    pub fn new(patient_id: Uuid) -> Self {
        Self {
            patient_id,
            draft: DocumentDraft::default(),
            candidate: None,
            ocr_progress: Arc::new(AtomicU8::new(0)),
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &DocumentDraft {
        &self.draft
    }

    pub fn candidate(&self) -> Option<&UploadCandidate> {
        self.candidate.as_ref()
    }

    /// Last reported recognition progress, 0–100.
    pub fn ocr_progress(&self) -> u8 {
        self.ocr_progress.load(Ordering::Relaxed)
    }

    /// Accepts a picked file, replacing any previous selection.
    ///
    /// The document name defaults to the filename when the user has not
    /// typed one yet. Unsupported media kinds and empty files are rejected
    /// here, before the form can be submitted.
    pub fn select_file(&mut self, file: SelectedFile) -> ChartResult<()> {
        if !self.phase.accepts_edits() {
            return Ok(());
        }
        self.phase = FormPhase::Editing;

        let candidate = UploadCandidate::from_file(file)?;
        if self.draft.document_name.trim().is_empty() {
            self.draft.document_name = candidate.name().to_owned();
        }
        self.ocr_progress.store(0, Ordering::Relaxed);
        self.candidate = Some(candidate);
        Ok(())
    }

    pub fn apply(&mut self, field: DocumentField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            DocumentField::DocumentName(v) => self.draft.document_name = v,
            DocumentField::DocumentType(v) => self.draft.document_type = v,
            DocumentField::OcrText(v) => self.draft.ocr_text = v,
        }
    }

    /// Runs the recognition sub-step for image candidates.
    ///
    /// Skipped entirely for non-image files and when no file is selected.
    /// On success the extracted text replaces the draft's OCR field; on
    /// failure the field is left as it was and the failure is only logged.
    pub async fn run_recognition(&mut self, engine: &dyn OcrEngine, language: &str) {
        let Some(candidate) = self.candidate.clone() else {
            return;
        };
        if !candidate.is_image() {
            return;
        }

        let progress = Arc::clone(&self.ocr_progress);
        let sink = move |pct: u8| progress.store(pct, Ordering::Relaxed);

        match engine.recognize(candidate.bytes(), language, &sink).await {
            Ok(text) => self.draft.ocr_text = text,
            Err(e) => {
                tracing::warn!(file = candidate.name(), "text recognition failed: {e}");
            }
        }
    }

    fn validate(&self) -> ChartResult<NewDocument> {
        let candidate = self
            .candidate
            .as_ref()
            .ok_or_else(|| ChartError::validation("file", "no file selected"))?;

        Ok(NewDocument {
            patient_id: self.patient_id,
            document_name: coerce::required_text("document_name", &self.draft.document_name)?,
            document_type: self.draft.document_type,
            file_url: candidate.preview_url(),
            ocr_text: coerce::optional_text(&self.draft.ocr_text),
        })
    }

    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<Document> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        match repo.create(&new).await {
            Ok(document) => {
                self.phase = FormPhase::Saved;
                Ok(document)
            }
            Err(e) => {
                tracing::warn!(patient_id = %self.patient_id, "document submission failed: {e}");
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartwell_intake::ScriptedOcr;
    use chartwell_store::MemoryStore;
    use chartwell_types::NonEmptyText;
    use std::sync::Arc;

    const PNG_MAGIC: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn selected(name: &str, bytes: &[u8]) -> SelectedFile {
        SelectedFile::new(
            NonEmptyText::new(name).expect("name should be non-empty"),
            bytes.to_vec(),
        )
    }

    #[tokio::test]
    async fn test_image_upload_runs_recognition_and_saves_text() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let engine = ScriptedOcr::recognising("AMOXICILLIN 250MG");

        let mut form = DocumentForm::new(Uuid::new_v4());
        form.select_file(selected("rx-photo.png", PNG_MAGIC))
            .expect("png should be accepted");
        form.run_recognition(&engine, "eng").await;

        assert_eq!(form.ocr_progress(), 100);
        assert_eq!(form.draft().ocr_text, "AMOXICILLIN 250MG");

        let document = form.submit(&repo).await.expect("submit should succeed");
        assert_eq!(document.ocr_text.as_deref(), Some("AMOXICILLIN 250MG"));
        assert_eq!(document.document_name, "rx-photo.png");
        assert!(document
            .file_url
            .as_deref()
            .expect("image should carry a preview url")
            .starts_with("data:image/png"));
    }

    #[tokio::test]
    async fn test_non_image_upload_skips_recognition() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let engine = ScriptedOcr::recognising("SHOULD NOT APPEAR");

        let mut form = DocumentForm::new(Uuid::new_v4());
        form.select_file(selected("discharge.pdf", b"%PDF-1.4 content"))
            .expect("pdf should be accepted");
        form.run_recognition(&engine, "eng").await;

        assert_eq!(form.draft().ocr_text, "");
        let document = form.submit(&repo).await.expect("submit should succeed");
        assert_eq!(document.ocr_text, None);
        assert_eq!(document.file_url, None);
    }

    #[tokio::test]
    async fn test_recognition_failure_does_not_block_submission() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let engine = ScriptedOcr::failing();

        let mut form = DocumentForm::new(Uuid::new_v4());
        form.select_file(selected("scan.png", PNG_MAGIC))
            .expect("png should be accepted");
        form.run_recognition(&engine, "eng").await;

        let document = form.submit(&repo).await.expect("submit should still succeed");
        assert_eq!(document.ocr_text, None, "document saved with empty OCR field");
    }

    #[tokio::test]
    async fn test_submit_without_a_file_is_rejected() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let mut form = DocumentForm::new(Uuid::new_v4());
        form.apply(DocumentField::DocumentName("orphan entry".into()));

        let err = form.submit(&repo).await.expect_err("submit should be rejected");
        assert!(matches!(err, ChartError::Validation { field: "file", .. }));
    }

    #[tokio::test]
    async fn test_recognised_text_stays_editable_before_submit() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let engine = ScriptedOcr::recognising("AMOXICILLIN 250MG");

        let mut form = DocumentForm::new(Uuid::new_v4());
        form.select_file(selected("rx.png", PNG_MAGIC))
            .expect("png should be accepted");
        form.run_recognition(&engine, "eng").await;
        form.apply(DocumentField::OcrText("Amoxicillin 250 mg, corrected".into()));

        let document = form.submit(&repo).await.expect("submit should succeed");
        assert_eq!(
            document.ocr_text.as_deref(),
            Some("Amoxicillin 250 mg, corrected")
        );
    }
}
