//! Chronic conditions.

use super::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Severity of a chronic condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    #[default]
    Mild,
    Moderate,
    Severe,
    Critical,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Mild => "mild",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
            Severity::Critical => "critical",
        }
    }
}

/// Management status of a chronic condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionStatus {
    #[default]
    Active,
    Managed,
    Resolved,
    Inactive,
}

impl ConditionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ConditionStatus::Active => "active",
            ConditionStatus::Managed => "managed",
            ConditionStatus::Resolved => "resolved",
            ConditionStatus::Inactive => "inactive",
        }
    }
}

/// An ongoing diagnosis being tracked for the patient.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChronicCondition {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub condition_name: String,
    pub icd_10_code: Option<String>,
    pub diagnosed_date: Option<NaiveDate>,
    pub diagnosed_by: Option<String>,
    pub severity: Severity,
    pub status: ConditionStatus,
    pub treatment_plan: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewChronicCondition {
    pub patient_id: Uuid,
    pub condition_name: String,
    pub icd_10_code: Option<String>,
    pub diagnosed_date: Option<NaiveDate>,
    pub diagnosed_by: Option<String>,
    pub severity: Severity,
    pub status: ConditionStatus,
    pub treatment_plan: Option<String>,
    pub notes: Option<String>,
}

impl Record for ChronicCondition {
    // diagnosed_date is optional, so the list orders by creation instead.
    const TABLE: &'static str = "chronic_conditions";
    const ORDER_BY: &'static str = "created_at";
    type New = NewChronicCondition;
}
