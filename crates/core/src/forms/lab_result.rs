//! Lab-result form.

use super::{coerce, FormPhase};
use crate::entities::{LabResult, LabStatus, NewLabResult, TestCategory};
use crate::repository::RecordRepository;
use crate::ChartResult;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabResultDraft {
    pub test_name: String,
    pub test_category: TestCategory,
    pub test_date: String,
    pub ordered_by: String,
    pub result_value: String,
    pub result_unit: String,
    pub reference_range: String,
    pub status: LabStatus,
    pub lab_name: String,
    pub lab_reference_number: String,
    pub notes: String,
}

#[derive(Clone, Debug)]
pub enum LabResultField {
    TestName(String),
    TestCategory(TestCategory),
    TestDate(String),
    OrderedBy(String),
    ResultValue(String),
    ResultUnit(String),
    ReferenceRange(String),
    Status(LabStatus),
    LabName(String),
    LabReferenceNumber(String),
    Notes(String),
}

/// The lab-result submission workflow.
pub struct LabResultForm {
    patient_id: Uuid,
    draft: LabResultDraft,
    phase: FormPhase,
}

impl LabResultForm {
    pub fn new(patient_id: Uuid, today: NaiveDate) -> Self {
        Self {
            patient_id,
            draft: LabResultDraft {
                test_date: today.to_string(),
                ..LabResultDraft::default()
            },
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &LabResultDraft {
        &self.draft
    }

    pub fn apply(&mut self, field: LabResultField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            LabResultField::TestName(v) => self.draft.test_name = v,
            LabResultField::TestCategory(v) => self.draft.test_category = v,
            LabResultField::TestDate(v) => self.draft.test_date = v,
            LabResultField::OrderedBy(v) => self.draft.ordered_by = v,
            LabResultField::ResultValue(v) => self.draft.result_value = v,
            LabResultField::ResultUnit(v) => self.draft.result_unit = v,
            LabResultField::ReferenceRange(v) => self.draft.reference_range = v,
            LabResultField::Status(v) => self.draft.status = v,
            LabResultField::LabName(v) => self.draft.lab_name = v,
            LabResultField::LabReferenceNumber(v) => self.draft.lab_reference_number = v,
            LabResultField::Notes(v) => self.draft.notes = v,
        }
    }

    fn validate(&self) -> ChartResult<NewLabResult> {
        Ok(NewLabResult {
            patient_id: self.patient_id,
            test_name: coerce::required_text("test_name", &self.draft.test_name)?,
            test_category: self.draft.test_category,
            test_date: coerce::required_date("test_date", &self.draft.test_date)?,
            ordered_by: coerce::required_text("ordered_by", &self.draft.ordered_by)?,
            result_value: coerce::optional_text(&self.draft.result_value),
            result_unit: coerce::optional_text(&self.draft.result_unit),
            reference_range: coerce::optional_text(&self.draft.reference_range),
            status: self.draft.status,
            lab_name: coerce::optional_text(&self.draft.lab_name),
            lab_reference_number: coerce::optional_text(&self.draft.lab_reference_number),
            notes: coerce::optional_text(&self.draft.notes),
        })
    }

    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<LabResult> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        match repo.create(&new).await {
            Ok(result) => {
                self.phase = FormPhase::Saved;
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(patient_id = %self.patient_id, "lab result submission failed: {e}");
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }
}
