//! Uploaded documents.

use super::Record;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Category of an uploaded document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    #[default]
    General,
    LabReport,
    Prescription,
    MedicalReport,
    Xray,
    Insurance,
    Referral,
    DischargeSummary,
}

impl DocumentType {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentType::General => "general",
            DocumentType::LabReport => "lab_report",
            DocumentType::Prescription => "prescription",
            DocumentType::MedicalReport => "medical_report",
            DocumentType::Xray => "xray",
            DocumentType::Insurance => "insurance",
            DocumentType::Referral => "referral",
            DocumentType::DischargeSummary => "discharge_summary",
        }
    }
}

/// An uploaded document.
///
/// `file_url` is a local preview URL, not durable storage; it may be
/// unusable outside the session that created it. `ocr_text` holds whatever
/// the recognition sub-step extracted, possibly edited by the user before
/// submission, and is empty for non-image documents.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub document_name: String,
    pub document_type: DocumentType,
    pub file_url: Option<String>,
    pub ocr_text: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewDocument {
    pub patient_id: Uuid,
    pub document_name: String,
    pub document_type: DocumentType,
    pub file_url: Option<String>,
    pub ocr_text: Option<String>,
}

impl Record for Document {
    const TABLE: &'static str = "documents";
    const ORDER_BY: &'static str = "uploaded_at";
    type New = NewDocument;
}
