//! Prescription form.

use super::{coerce, FormPhase};
use crate::entities::{NewPrescription, Prescription};
use crate::repository::RecordRepository;
use crate::ChartResult;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PrescriptionDraft {
    pub medication_name: String,
    pub dosage: String,
    pub frequency: String,
    pub duration: String,
    pub prescribed_date: String,
}

#[derive(Clone, Debug)]
pub enum PrescriptionField {
    MedicationName(String),
    Dosage(String),
    Frequency(String),
    Duration(String),
    PrescribedDate(String),
}

/// The prescription submission workflow.
pub struct PrescriptionForm {
    patient_id: Uuid,
    draft: PrescriptionDraft,
    phase: FormPhase,
}

impl PrescriptionForm {
    pub fn new(patient_id: Uuid, today: NaiveDate) -> Self {
        Self {
            patient_id,
            draft: PrescriptionDraft {
                prescribed_date: today.to_string(),
                ..PrescriptionDraft::default()
            },
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &PrescriptionDraft {
        &self.draft
    }

    pub fn apply(&mut self, field: PrescriptionField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            PrescriptionField::MedicationName(v) => self.draft.medication_name = v,
            PrescriptionField::Dosage(v) => self.draft.dosage = v,
            PrescriptionField::Frequency(v) => self.draft.frequency = v,
            PrescriptionField::Duration(v) => self.draft.duration = v,
            PrescriptionField::PrescribedDate(v) => self.draft.prescribed_date = v,
        }
    }

    fn validate(&self) -> ChartResult<NewPrescription> {
        Ok(NewPrescription {
            patient_id: self.patient_id,
            // Reserved back-reference; no workflow populates it.
            medical_record_id: None,
            medication_name: coerce::required_text("medication_name", &self.draft.medication_name)?,
            dosage: coerce::required_text("dosage", &self.draft.dosage)?,
            frequency: coerce::required_text("frequency", &self.draft.frequency)?,
            duration: coerce::optional_text(&self.draft.duration),
            prescribed_date: coerce::required_date("prescribed_date", &self.draft.prescribed_date)?,
        })
    }

    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<Prescription> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        match repo.create(&new).await {
            Ok(prescription) => {
                self.phase = FormPhase::Saved;
                Ok(prescription)
            }
            Err(e) => {
                tracing::warn!(patient_id = %self.patient_id, "prescription submission failed: {e}");
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }
}
