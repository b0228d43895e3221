//! Patient form.
//!
//! The only form with two targets: creating a new patient, or editing an
//! existing one (child records are append-only; Patient alone supports
//! edit). Contact fields are optional, but when present they must at
//! least look like what they claim to be.

use super::{coerce, FormPhase};
use crate::entities::{NewPatient, Patient, PatientUpdate};
use crate::repository::RecordRepository;
use crate::{ChartError, ChartResult};
use chartwell_types::{EmailAddress, PhoneNumber};
use uuid::Uuid;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PatientDraft {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub gender: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub emergency_contact_name: String,
    pub emergency_contact_phone: String,
    pub blood_type: String,
    pub allergies: String,
}

#[derive(Clone, Debug)]
pub enum PatientField {
    FirstName(String),
    LastName(String),
    DateOfBirth(String),
    Gender(String),
    Phone(String),
    Email(String),
    Address(String),
    EmergencyContactName(String),
    EmergencyContactPhone(String),
    BloodType(String),
    Allergies(String),
}

enum Target {
    Create,
    Edit(Uuid),
}

/// The patient create/edit workflow.
pub struct PatientForm {
    target: Target,
    draft: PatientDraft,
    phase: FormPhase,
}

impl PatientForm {
    /// Opens an empty form for a new patient.
    pub fn create() -> Self {
        Self {
            target: Target::Create,
            draft: PatientDraft::default(),
            phase: FormPhase::Editing,
        }
    }

    /// Opens the form pre-filled from an existing patient.
    pub fn edit(patient: &Patient) -> Self {
        Self {
            target: Target::Edit(patient.id),
            draft: PatientDraft {
                first_name: patient.first_name.clone(),
                last_name: patient.last_name.clone(),
                date_of_birth: patient.date_of_birth.to_string(),
                gender: patient.gender.clone(),
                phone: patient.phone.clone().unwrap_or_default(),
                email: patient.email.clone().unwrap_or_default(),
                address: patient.address.clone().unwrap_or_default(),
                emergency_contact_name: patient
                    .emergency_contact_name
                    .clone()
                    .unwrap_or_default(),
                emergency_contact_phone: patient
                    .emergency_contact_phone
                    .clone()
                    .unwrap_or_default(),
                blood_type: patient.blood_type.clone().unwrap_or_default(),
                allergies: patient.allergies.clone().unwrap_or_default(),
            },
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &PatientDraft {
        &self.draft
    }

    pub fn apply(&mut self, field: PatientField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            PatientField::FirstName(v) => self.draft.first_name = v,
            PatientField::LastName(v) => self.draft.last_name = v,
            PatientField::DateOfBirth(v) => self.draft.date_of_birth = v,
            PatientField::Gender(v) => self.draft.gender = v,
            PatientField::Phone(v) => self.draft.phone = v,
            PatientField::Email(v) => self.draft.email = v,
            PatientField::Address(v) => self.draft.address = v,
            PatientField::EmergencyContactName(v) => self.draft.emergency_contact_name = v,
            PatientField::EmergencyContactPhone(v) => self.draft.emergency_contact_phone = v,
            PatientField::BloodType(v) => self.draft.blood_type = v,
            PatientField::Allergies(v) => self.draft.allergies = v,
        }
    }

    fn optional_email(&self) -> ChartResult<Option<String>> {
        match coerce::optional_text(&self.draft.email) {
            None => Ok(None),
            Some(raw) => EmailAddress::parse(&raw)
                .map(|email| Some(email.as_str().to_owned()))
                .map_err(|e| ChartError::validation("email", e.to_string())),
        }
    }

    fn optional_phone(
        field: &'static str,
        value: &str,
    ) -> ChartResult<Option<String>> {
        match coerce::optional_text(value) {
            None => Ok(None),
            Some(raw) => PhoneNumber::parse(&raw)
                .map(|phone| Some(phone.as_str().to_owned()))
                .map_err(|e| ChartError::validation(field, e.to_string())),
        }
    }

    fn validate(&self) -> ChartResult<NewPatient> {
        Ok(NewPatient {
            first_name: coerce::required_text("first_name", &self.draft.first_name)?,
            last_name: coerce::required_text("last_name", &self.draft.last_name)?,
            date_of_birth: coerce::required_date("date_of_birth", &self.draft.date_of_birth)?,
            gender: coerce::required_text("gender", &self.draft.gender)?,
            phone: Self::optional_phone("phone", &self.draft.phone)?,
            email: self.optional_email()?,
            address: coerce::optional_text(&self.draft.address),
            emergency_contact_name: coerce::optional_text(&self.draft.emergency_contact_name),
            emergency_contact_phone: Self::optional_phone(
                "emergency_contact_phone",
                &self.draft.emergency_contact_phone,
            )?,
            blood_type: coerce::optional_text(&self.draft.blood_type),
            allergies: coerce::optional_text(&self.draft.allergies),
        })
    }

    /// Submits the create or edit.
    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<Patient> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        let result = match self.target {
            Target::Create => repo.create(&new).await,
            Target::Edit(id) => {
                let update = PatientUpdate {
                    first_name: new.first_name,
                    last_name: new.last_name,
                    date_of_birth: new.date_of_birth,
                    gender: new.gender,
                    phone: new.phone,
                    email: new.email,
                    address: new.address,
                    emergency_contact_name: new.emergency_contact_name,
                    emergency_contact_phone: new.emergency_contact_phone,
                    blood_type: new.blood_type,
                    allergies: new.allergies,
                };
                repo.update_patient(id, &update).await
            }
        };

        match result {
            Ok(patient) => {
                self.phase = FormPhase::Saved;
                Ok(patient)
            }
            Err(e) => {
                tracing::warn!("patient submission failed: {e}");
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

    fn filled_form() -> PatientForm {
        let mut form = PatientForm::create();
        form.apply(PatientField::FirstName("Ann".into()));
        form.apply(PatientField::LastName("Lee".into()));
        form.apply(PatientField::DateOfBirth("1990-06-15".into()));
        form.apply(PatientField::Gender("female".into()));
        form
    }

    #[tokio::test]
    async fn test_create_then_edit_keeps_identity() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));

        let mut form = filled_form();
        let created = form.submit(&repo).await.expect("create should succeed");

        let mut edit = PatientForm::edit(&created);
        assert_eq!(edit.draft().first_name, "Ann");
        edit.apply(PatientField::LastName("Nguyen".into()));
        let updated = edit.submit(&repo).await.expect("edit should succeed");

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.last_name, "Nguyen");
    }

    #[tokio::test]
    async fn test_malformed_email_is_rejected_client_side() {
        let store = Arc::new(MemoryStore::new());
        let repo = RecordRepository::new(store.clone());

        let mut form = filled_form();
        form.apply(PatientField::Email("not-an-address".into()));

        let err = form.submit(&repo).await.expect_err("submit should be rejected");
        assert!(matches!(err, ChartError::Validation { field: "email", .. }));
        assert_eq!(store.row_count("patients"), 0);
    }

    #[tokio::test]
    async fn test_blank_contact_fields_persist_as_null() {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        let mut form = filled_form();
        form.apply(PatientField::Phone("   ".into()));

        let created = form.submit(&repo).await.expect("create should succeed");
        assert_eq!(created.phone, None);
        assert_eq!(created.email, None);
    }
}
