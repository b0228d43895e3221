//! Visit record form.

use super::{coerce, FormPhase};
use crate::entities::{MedicalRecord, NewMedicalRecord};
use crate::repository::RecordRepository;
use crate::ChartResult;
use chrono::NaiveDate;
use uuid::Uuid;

/// Raw field state while the form is open.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MedicalRecordDraft {
    pub doctor_name: String,
    pub visit_date: String,
    pub diagnosis: String,
    pub symptoms: String,
    pub treatment: String,
    pub notes: String,
}

/// One field update, applied on every keystroke.
#[derive(Clone, Debug)]
pub enum MedicalRecordField {
    DoctorName(String),
    VisitDate(String),
    Diagnosis(String),
    Symptoms(String),
    Treatment(String),
    Notes(String),
}

/// The visit-record submission workflow.
pub struct MedicalRecordForm {
    patient_id: Uuid,
    draft: MedicalRecordDraft,
    phase: FormPhase,
}

impl MedicalRecordForm {
    /// Opens a form for one patient; the visit date defaults to today.
    pub fn new(patient_id: Uuid, today: NaiveDate) -> Self {
        Self {
            patient_id,
            draft: MedicalRecordDraft {
                visit_date: today.to_string(),
                ..MedicalRecordDraft::default()
            },
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &MedicalRecordDraft {
        &self.draft
    }

    /// Applies one field update; ignored unless the form is editable.
    pub fn apply(&mut self, field: MedicalRecordField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            MedicalRecordField::DoctorName(v) => self.draft.doctor_name = v,
            MedicalRecordField::VisitDate(v) => self.draft.visit_date = v,
            MedicalRecordField::Diagnosis(v) => self.draft.diagnosis = v,
            MedicalRecordField::Symptoms(v) => self.draft.symptoms = v,
            MedicalRecordField::Treatment(v) => self.draft.treatment = v,
            MedicalRecordField::Notes(v) => self.draft.notes = v,
        }
    }

    fn validate(&self) -> ChartResult<NewMedicalRecord> {
        Ok(NewMedicalRecord {
            patient_id: self.patient_id,
            doctor_name: coerce::required_text("doctor_name", &self.draft.doctor_name)?,
            visit_date: coerce::required_date("visit_date", &self.draft.visit_date)?,
            diagnosis: coerce::optional_text(&self.draft.diagnosis),
            symptoms: coerce::optional_text(&self.draft.symptoms),
            treatment: coerce::optional_text(&self.draft.treatment),
            notes: coerce::optional_text(&self.draft.notes),
        })
    }

    /// Validates, coerces, and performs the single create.
    ///
    /// Validation failures reject the submission before any network call
    /// and leave the form editable. A store failure moves the form to
    /// `Failed` with the draft intact; the error is logged and returned,
    /// never retried.
    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<MedicalRecord> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        match repo.create(&new).await {
            Ok(record) => {
                self.phase = FormPhase::Saved;
                Ok(record)
            }
            Err(e) => {
                tracing::warn!(patient_id = %self.patient_id, "visit record submission failed: {e}");
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChartError;
    use chartwell_store::MemoryStore;
    use std::sync::Arc;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).expect("date should be valid")
    }

    #[tokio::test]
    async fn test_successful_submit_reaches_saved() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let mut form = MedicalRecordForm::new(Uuid::new_v4(), today());

        form.apply(MedicalRecordField::DoctorName("Dr. Osei".into()));
        form.apply(MedicalRecordField::Diagnosis("Seasonal allergies".into()));

        let record = form.submit(&repo).await.expect("submit should succeed");
        assert_eq!(form.phase(), FormPhase::Saved);
        assert_eq!(record.doctor_name, "Dr. Osei");
        assert_eq!(record.visit_date, today());
        assert_eq!(record.symptoms, None, "blank optional should persist as null");
    }

    #[tokio::test]
    async fn test_missing_required_field_rejects_before_any_network_call() {
        let store = Arc::new(MemoryStore::new());
        let repo = RecordRepository::new(store.clone());
        let mut form = MedicalRecordForm::new(Uuid::new_v4(), today());

        let err = form.submit(&repo).await.expect_err("submit should be rejected");
        assert!(matches!(err, ChartError::Validation { field: "doctor_name", .. }));
        assert_eq!(form.phase(), FormPhase::Editing, "form should stay editable");
        assert_eq!(store.row_count("medical_records"), 0, "nothing should be inserted");
    }

    #[tokio::test]
    async fn test_rejected_create_keeps_draft_and_leaves_form_open() {
        let store = Arc::new(MemoryStore::new());
        store.fail_table("medical_records");
        let repo = RecordRepository::new(store.clone());

        let mut form = MedicalRecordForm::new(Uuid::new_v4(), today());
        form.apply(MedicalRecordField::DoctorName("Dr. Osei".into()));
        form.apply(MedicalRecordField::Notes("follow up in two weeks".into()));
        let draft_before = form.draft().clone();

        let err = form.submit(&repo).await.expect_err("submit should fail");
        assert!(matches!(err, ChartError::Persistence(_)));
        assert_eq!(form.phase(), FormPhase::Failed);
        assert_eq!(form.draft(), &draft_before, "entered values must never be cleared");

        // The user can correct and resubmit once the store recovers.
        store.restore_table("medical_records");
        form.apply(MedicalRecordField::Notes("follow up in three weeks".into()));
        form.submit(&repo).await.expect("resubmit should succeed");
        assert_eq!(form.phase(), FormPhase::Saved);
    }

    #[tokio::test]
    async fn test_edits_are_ignored_after_save() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let mut form = MedicalRecordForm::new(Uuid::new_v4(), today());
        form.apply(MedicalRecordField::DoctorName("Dr. Osei".into()));
        form.submit(&repo).await.expect("submit should succeed");

        form.apply(MedicalRecordField::DoctorName("Dr. Someone Else".into()));
        assert_eq!(form.draft().doctor_name, "Dr. Osei");
    }
}
