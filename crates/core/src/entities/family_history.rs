//! Family medical history.

use super::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The relative the condition was observed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Relationship {
    Mother,
    Father,
    Sister,
    Brother,
    MaternalGrandmother,
    MaternalGrandfather,
    PaternalGrandmother,
    PaternalGrandfather,
    MaternalAunt,
    MaternalUncle,
    PaternalAunt,
    PaternalUncle,
    Daughter,
    Son,
    Cousin,
}

impl Relationship {
    pub fn as_str(self) -> &'static str {
        match self {
            Relationship::Mother => "mother",
            Relationship::Father => "father",
            Relationship::Sister => "sister",
            Relationship::Brother => "brother",
            Relationship::MaternalGrandmother => "maternal_grandmother",
            Relationship::MaternalGrandfather => "maternal_grandfather",
            Relationship::PaternalGrandmother => "paternal_grandmother",
            Relationship::PaternalGrandfather => "paternal_grandfather",
            Relationship::MaternalAunt => "maternal_aunt",
            Relationship::MaternalUncle => "maternal_uncle",
            Relationship::PaternalAunt => "paternal_aunt",
            Relationship::PaternalUncle => "paternal_uncle",
            Relationship::Daughter => "daughter",
            Relationship::Son => "son",
            Relationship::Cousin => "cousin",
        }
    }
}

/// Confidence in the reported family condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyHistoryStatus {
    #[default]
    Unknown,
    Confirmed,
    Suspected,
    Deceased,
    Resolved,
}

impl FamilyHistoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            FamilyHistoryStatus::Unknown => "unknown",
            FamilyHistoryStatus::Confirmed => "confirmed",
            FamilyHistoryStatus::Suspected => "suspected",
            FamilyHistoryStatus::Deceased => "deceased",
            FamilyHistoryStatus::Resolved => "resolved",
        }
    }
}

/// A condition reported in the patient's family.
///
/// `age_of_onset` is the relative's age when the condition appeared,
/// bounded to 0–120 at submission; it is persisted as an integer even
/// though it is entered as text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FamilyHistory {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub relationship: Relationship,
    pub condition_name: String,
    pub age_of_onset: Option<i32>,
    pub status: FamilyHistoryStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewFamilyHistory {
    pub patient_id: Uuid,
    pub relationship: Relationship,
    pub condition_name: String,
    pub age_of_onset: Option<i32>,
    pub status: FamilyHistoryStatus,
    pub notes: Option<String>,
}

impl Record for FamilyHistory {
    const TABLE: &'static str = "family_history";
    const ORDER_BY: &'static str = "created_at";
    type New = NewFamilyHistory;
}
