//! Chronic-condition form.

use super::{coerce, FormPhase};
use crate::entities::{ChronicCondition, ConditionStatus, NewChronicCondition, Severity};
use crate::repository::RecordRepository;
use crate::ChartResult;
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ChronicConditionDraft {
    pub condition_name: String,
    pub icd_10_code: String,
    pub diagnosed_date: String,
    pub diagnosed_by: String,
    pub severity: Severity,
    pub status: ConditionStatus,
    pub treatment_plan: String,
    pub notes: String,
}

#[derive(Clone, Debug)]
pub enum ChronicConditionField {
    ConditionName(String),
    Icd10Code(String),
    DiagnosedDate(String),
    DiagnosedBy(String),
    Severity(Severity),
    Status(ConditionStatus),
    TreatmentPlan(String),
    Notes(String),
}

/// The chronic-condition submission workflow.
pub struct ChronicConditionForm {
    patient_id: Uuid,
    draft: ChronicConditionDraft,
    phase: FormPhase,
}

impl ChronicConditionForm {
    pub fn new(patient_id: Uuid) -> Self {
        Self {
            patient_id,
            draft: ChronicConditionDraft::default(),
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &ChronicConditionDraft {
        &self.draft
    }

    pub fn apply(&mut self, field: ChronicConditionField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            ChronicConditionField::ConditionName(v) => self.draft.condition_name = v,
            ChronicConditionField::Icd10Code(v) => self.draft.icd_10_code = v,
            ChronicConditionField::DiagnosedDate(v) => self.draft.diagnosed_date = v,
            ChronicConditionField::DiagnosedBy(v) => self.draft.diagnosed_by = v,
            ChronicConditionField::Severity(v) => self.draft.severity = v,
            ChronicConditionField::Status(v) => self.draft.status = v,
            ChronicConditionField::TreatmentPlan(v) => self.draft.treatment_plan = v,
            ChronicConditionField::Notes(v) => self.draft.notes = v,
        }
    }

    fn validate(&self) -> ChartResult<NewChronicCondition> {
        Ok(NewChronicCondition {
            patient_id: self.patient_id,
            condition_name: coerce::required_text("condition_name", &self.draft.condition_name)?,
            icd_10_code: coerce::optional_text(&self.draft.icd_10_code),
            diagnosed_date: coerce::optional_date("diagnosed_date", &self.draft.diagnosed_date)?,
            diagnosed_by: coerce::optional_text(&self.draft.diagnosed_by),
            severity: self.draft.severity,
            status: self.draft.status,
            treatment_plan: coerce::optional_text(&self.draft.treatment_plan),
            notes: coerce::optional_text(&self.draft.notes),
        })
    }

    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<ChronicCondition> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        match repo.create(&new).await {
            Ok(condition) => {
                self.phase = FormPhase::Saved;
                Ok(condition)
            }
            Err(e) => {
                tracing::warn!(patient_id = %self.patient_id, "chronic condition submission failed: {e}");
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }
}
