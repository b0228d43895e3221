//! Immunization form.

use super::{coerce, FormPhase};
use crate::entities::{AdministrationSite, Immunization, NewImmunization};
use crate::repository::RecordRepository;
use crate::ChartResult;
use chrono::NaiveDate;
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub struct ImmunizationDraft {
    pub vaccine_name: String,
    pub vaccine_type: String,
    pub administration_date: String,
    pub administered_by: String,
    pub manufacturer: String,
    pub lot_number: String,
    pub expiration_date: String,
    pub dose_number: String,
    pub administration_site: AdministrationSite,
    pub adverse_reactions: String,
    pub next_dose_due: String,
    pub notes: String,
}

#[derive(Clone, Debug)]
pub enum ImmunizationField {
    VaccineName(String),
    VaccineType(String),
    AdministrationDate(String),
    AdministeredBy(String),
    Manufacturer(String),
    LotNumber(String),
    ExpirationDate(String),
    DoseNumber(String),
    AdministrationSite(AdministrationSite),
    AdverseReactions(String),
    NextDoseDue(String),
    Notes(String),
}

/// The immunization submission workflow.
pub struct ImmunizationForm {
    patient_id: Uuid,
    draft: ImmunizationDraft,
    phase: FormPhase,
}

impl ImmunizationForm {
    /// Opens a form; the administration date defaults to today and the
    /// dose number to the first of the series.
    pub fn new(patient_id: Uuid, today: NaiveDate) -> Self {
        Self {
            patient_id,
            draft: ImmunizationDraft {
                vaccine_name: String::new(),
                vaccine_type: String::new(),
                administration_date: today.to_string(),
                administered_by: String::new(),
                manufacturer: String::new(),
                lot_number: String::new(),
                expiration_date: String::new(),
                dose_number: "1".into(),
                administration_site: AdministrationSite::LeftArm,
                adverse_reactions: String::new(),
                next_dose_due: String::new(),
                notes: String::new(),
            },
            phase: FormPhase::Editing,
        }
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &ImmunizationDraft {
        &self.draft
    }

    pub fn apply(&mut self, field: ImmunizationField) {
        if !self.phase.accepts_edits() {
            return;
        }
        self.phase = FormPhase::Editing;

        match field {
            ImmunizationField::VaccineName(v) => self.draft.vaccine_name = v,
            ImmunizationField::VaccineType(v) => self.draft.vaccine_type = v,
            ImmunizationField::AdministrationDate(v) => self.draft.administration_date = v,
            ImmunizationField::AdministeredBy(v) => self.draft.administered_by = v,
            ImmunizationField::Manufacturer(v) => self.draft.manufacturer = v,
            ImmunizationField::LotNumber(v) => self.draft.lot_number = v,
            ImmunizationField::ExpirationDate(v) => self.draft.expiration_date = v,
            ImmunizationField::DoseNumber(v) => self.draft.dose_number = v,
            ImmunizationField::AdministrationSite(v) => self.draft.administration_site = v,
            ImmunizationField::AdverseReactions(v) => self.draft.adverse_reactions = v,
            ImmunizationField::NextDoseDue(v) => self.draft.next_dose_due = v,
            ImmunizationField::Notes(v) => self.draft.notes = v,
        }
    }

    fn validate(&self) -> ChartResult<NewImmunization> {
        Ok(NewImmunization {
            patient_id: self.patient_id,
            vaccine_name: coerce::required_text("vaccine_name", &self.draft.vaccine_name)?,
            vaccine_type: coerce::optional_text(&self.draft.vaccine_type),
            administration_date: coerce::required_date(
                "administration_date",
                &self.draft.administration_date,
            )?,
            administered_by: coerce::required_text(
                "administered_by",
                &self.draft.administered_by,
            )?,
            manufacturer: coerce::optional_text(&self.draft.manufacturer),
            lot_number: coerce::optional_text(&self.draft.lot_number),
            expiration_date: coerce::optional_date(
                "expiration_date",
                &self.draft.expiration_date,
            )?,
            dose_number: coerce::required_int_at_least("dose_number", &self.draft.dose_number, 1)?,
            administration_site: self.draft.administration_site,
            adverse_reactions: coerce::optional_text(&self.draft.adverse_reactions),
            next_dose_due: coerce::optional_date("next_dose_due", &self.draft.next_dose_due)?,
            notes: coerce::optional_text(&self.draft.notes),
        })
    }

    pub async fn submit(&mut self, repo: &RecordRepository) -> ChartResult<Immunization> {
        let new = self.validate()?;
        self.phase = FormPhase::Submitting;

        match repo.create(&new).await {
            Ok(immunization) => {
                self.phase = FormPhase::Saved;
                Ok(immunization)
            }
            Err(e) => {
                tracing::warn!(patient_id = %self.patient_id, "immunization submission failed: {e}");
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }
}
