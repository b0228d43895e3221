//! Laboratory results.

use super::Record;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of laboratory test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestCategory {
    #[default]
    General,
    BloodChemistry,
    Hematology,
    LipidPanel,
    LiverFunction,
    KidneyFunction,
    ThyroidFunction,
    CardiacMarkers,
    DiabetesMarkers,
    InflammatoryMarkers,
    TumorMarkers,
    Hormones,
    Urine,
    Imaging,
    Other,
}

impl TestCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            TestCategory::General => "general",
            TestCategory::BloodChemistry => "blood_chemistry",
            TestCategory::Hematology => "hematology",
            TestCategory::LipidPanel => "lipid_panel",
            TestCategory::LiverFunction => "liver_function",
            TestCategory::KidneyFunction => "kidney_function",
            TestCategory::ThyroidFunction => "thyroid_function",
            TestCategory::CardiacMarkers => "cardiac_markers",
            TestCategory::DiabetesMarkers => "diabetes_markers",
            TestCategory::InflammatoryMarkers => "inflammatory_markers",
            TestCategory::TumorMarkers => "tumor_markers",
            TestCategory::Hormones => "hormones",
            TestCategory::Urine => "urine",
            TestCategory::Imaging => "imaging",
            TestCategory::Other => "other",
        }
    }
}

/// Interpretation status of a result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LabStatus {
    #[default]
    Normal,
    Abnormal,
    Critical,
    Pending,
}

impl LabStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            LabStatus::Normal => "normal",
            LabStatus::Abnormal => "abnormal",
            LabStatus::Critical => "critical",
            LabStatus::Pending => "pending",
        }
    }
}

/// One laboratory result.
///
/// `result_value` stays textual: labs report numbers, titres, ratios, and
/// qualitative findings through the same field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LabResult {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub test_name: String,
    pub test_category: TestCategory,
    pub test_date: NaiveDate,
    pub ordered_by: String,
    pub result_value: Option<String>,
    pub result_unit: Option<String>,
    pub reference_range: Option<String>,
    pub status: LabStatus,
    pub lab_name: Option<String>,
    pub lab_reference_number: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewLabResult {
    pub patient_id: Uuid,
    pub test_name: String,
    pub test_category: TestCategory,
    pub test_date: NaiveDate,
    pub ordered_by: String,
    pub result_value: Option<String>,
    pub result_unit: Option<String>,
    pub reference_range: Option<String>,
    pub status: LabStatus,
    pub lab_name: Option<String>,
    pub lab_reference_number: Option<String>,
    pub notes: Option<String>,
}

impl Record for LabResult {
    const TABLE: &'static str = "lab_results";
    const ORDER_BY: &'static str = "test_date";
    type New = NewLabResult;
}
