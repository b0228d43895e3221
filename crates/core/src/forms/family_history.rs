//! Family-history form.

use super::{coerce, FormPhase};
use crate::entities::{FamilyHistory, FamilyHistoryStatus, NewFamilyHistory, Relationship};
use crate::repository::RecordRepository;
use crate::{ChartError, ChartResult};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FamilyHistoryDraft {
    /// No sensible default relative; the user must pick one.
    pub relationship: Option<Relationship>,
    pub condition_name: String,
    pub age_of_onset: String,
    pub status: FamilyHistoryStatus,
    pub notes: String,
}

#[derive(Clone, Debug)]
pub enum FamilyHistoryField {
    Relationship(Relationship),
    ConditionName(String),
    AgeOfOnset(String),
    Status(FamilyHistoryStatus),
    Notes(String),
}

/// The family-history submission workflow.
pub struct FamilyHistoryForm {
    patient_id: Uuid,
    draft: FamilyHistoryDraft,
    phase: FormPhase,
}

impl FamilyHistoryForm {
    pub fn new(patient_id: Uuid) -> Self {
        Self {
            patient_id,
            draft: FamilyHistoryDraft::default(),
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &FamilyHistoryDraft {
        &self.draft
    }

    pub fn apply(&mut self, field: FamilyHistoryField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            FamilyHistoryField::Relationship(v) => self.draft.relationship = Some(v),
            FamilyHistoryField::ConditionName(v) => self.draft.condition_name = v,
            FamilyHistoryField::AgeOfOnset(v) => self.draft.age_of_onset = v,
            FamilyHistoryField::Status(v) => self.draft.status = v,
            FamilyHistoryField::Notes(v) => self.draft.notes = v,
        }
    }

    fn validate(&self) -> ChartResult<NewFamilyHistory> {
        Ok(NewFamilyHistory {
            patient_id: self.patient_id,
            relationship: self
                .draft
                .relationship
                .ok_or_else(|| ChartError::validation("relationship", "required"))?,
            condition_name: coerce::required_text("condition_name", &self.draft.condition_name)?,
            age_of_onset: coerce::optional_int_in_range(
                "age_of_onset",
                &self.draft.age_of_onset,
                0..=120,
            )?,
            status: self.draft.status,
            notes: coerce::optional_text(&self.draft.notes),
        })
    }

    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<FamilyHistory> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        match repo.create(&new).await {
            Ok(history) => {
                self.phase = FormPhase::Saved;
                Ok(history)
            }
            Err(e) => {
                tracing::warn!(patient_id = %self.patient_id, "family history submission failed: {e}");
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartwell_store::MemoryStore;
    use std::sync::Arc;

    fn form() -> FamilyHistoryForm {
        let mut form = FamilyHistoryForm::new(Uuid::new_v4());
        form.apply(FamilyHistoryField::Relationship(Relationship::Mother));
        form.apply(FamilyHistoryField::ConditionName("Hypertension".into()));
        form
    }

    #[tokio::test]
    async fn test_blank_age_of_onset_persists_as_null_not_zero() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let mut form = form();

        let history = form.submit(&repo).await.expect("submit should succeed");
        assert_eq!(history.age_of_onset, None);
        assert_eq!(history.status, FamilyHistoryStatus::Unknown);
    }

    #[tokio::test]
    async fn test_age_of_onset_is_persisted_as_an_integer() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let mut form = form();
        form.apply(FamilyHistoryField::AgeOfOnset("52".into()));

        let history = form.submit(&repo).await.expect("submit should succeed");
        assert_eq!(history.age_of_onset, Some(52));
    }

    #[tokio::test]
    async fn test_out_of_range_age_of_onset_is_rejected() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let mut form = form();
        form.apply(FamilyHistoryField::AgeOfOnset("130".into()));

        let err = form.submit(&repo).await.expect_err("submit should be rejected");
        assert!(matches!(err, ChartError::Validation { field: "age_of_onset", .. }));
    }

    #[tokio::test]
    async fn test_missing_relationship_is_rejected() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let mut form = FamilyHistoryForm::new(Uuid::new_v4());
        form.apply(FamilyHistoryField::ConditionName("Hypertension".into()));

        let err = form.submit(&repo).await.expect_err("submit should be rejected");
        assert!(matches!(err, ChartError::Validation { field: "relationship", .. }));
    }
}
