//! The patient detail view.

use crate::aggregate::{ChartLoader, PatientChart};
use crate::calc;
use crate::entities::Patient;
use crate::forms::{
    ChronicConditionForm, DocumentForm, FamilyHistoryForm, ImmunizationForm, LabResultForm,
    MedicalRecordForm, PatientForm, PrescriptionForm, VitalSignsForm,
};
use chrono::NaiveDate;

/// The tabs of the detail view: an overview plus one tab per child
/// collection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChartTab {
    #[default]
    Overview,
    MedicalRecords,
    Prescriptions,
    Documents,
    VitalSigns,
    ChronicConditions,
    LabResults,
    Immunizations,
    FamilyHistory,
}

/// Per-collection record counts for the overview tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChartSummary {
    pub medical_records: usize,
    pub prescriptions: usize,
    pub documents: usize,
    pub vital_signs: usize,
    pub chronic_conditions: usize,
    pub lab_results: usize,
    pub immunizations: usize,
    pub family_history: usize,
}

/// The modal form currently overlaying the detail view, if any.
///
/// At most one form is open at a time.
pub enum OpenForm {
    Patient(PatientForm),
    MedicalRecord(MedicalRecordForm),
    Prescription(PrescriptionForm),
    Document(DocumentForm),
    VitalSigns(VitalSignsForm),
    ChronicCondition(ChronicConditionForm),
    LabResult(LabResultForm),
    Immunization(ImmunizationForm),
    FamilyHistory(FamilyHistoryForm),
}

/// View model for one patient's chart.
///
/// Owns the loaded aggregate, the active tab, and whichever form is open.
/// Any child save goes through [`child_saved`](Self::child_saved), which
/// closes the form and re-runs the full aggregate load; there is no
/// partial refresh.
pub struct PatientDetailView {
    loader: ChartLoader,
    chart: PatientChart,
    active_tab: ChartTab,
    open_form: Option<OpenForm>,
}

impl PatientDetailView {
    /// Opens the detail view, loading the full chart.
    pub async fn open(loader: ChartLoader, patient: Patient) -> Self {
        let chart = loader.load(patient).await;
        Self {
            loader,
            chart,
            active_tab: ChartTab::Overview,
            open_form: None,
        }
    }

    pub fn chart(&self) -> &PatientChart {
        &self.chart
    }

    pub fn active_tab(&self) -> ChartTab {
        self.active_tab
    }

    pub fn select_tab(&mut self, tab: ChartTab) {
        self.active_tab = tab;
    }

    /// The patient's age as of the given date, derived from the date of
    /// birth on display.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        calc::age_in_years(self.chart.patient.date_of_birth, today)
    }

    /// The most recently recorded BMI, if any vital-signs entry carries
    /// one. BMI is stored at submission time, never recomputed here.
    pub fn latest_bmi(&self) -> Option<f64> {
        // vital_signs is ordered newest-first by the loader.
        self.chart.vital_signs.iter().find_map(|v| v.bmi)
    }

    /// Record counts for the overview tab.
    pub fn summary(&self) -> ChartSummary {
        ChartSummary {
            medical_records: self.chart.medical_records.len(),
            prescriptions: self.chart.prescriptions.len(),
            documents: self.chart.documents.len(),
            vital_signs: self.chart.vital_signs.len(),
            chronic_conditions: self.chart.chronic_conditions.len(),
            lab_results: self.chart.lab_results.len(),
            immunizations: self.chart.immunizations.len(),
            family_history: self.chart.family_history.len(),
        }
    }

    /// Opens a form as the modal overlay, replacing any open one.
    pub fn open_form(&mut self, form: OpenForm) {
        self.open_form = Some(form);
    }

    /// Opens the edit form pre-filled with the current patient.
    pub fn open_edit_patient(&mut self) {
        self.open_form = Some(OpenForm::Patient(PatientForm::edit(&self.chart.patient)));
    }

    pub fn form(&self) -> Option<&OpenForm> {
        self.open_form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut OpenForm> {
        self.open_form.as_mut()
    }

    /// Closes the open form without saving; the draft is discarded.
    pub fn close_form(&mut self) {
        self.open_form = None;
    }

    /// Called after any child form saves: closes the form and re-runs all
    /// eight collection fetches.
    pub async fn child_saved(&mut self) {
        self.open_form = None;
        self.reload().await;
    }

    /// Called after the patient edit form saves: the demographics on
    /// display change, the collections are re-fetched.
    pub async fn patient_saved(&mut self, patient: Patient) {
        self.open_form = None;
        self.chart = self.loader.load(patient).await;
    }

    /// Re-runs the full aggregate load for the patient on display.
    pub async fn reload(&mut self) {
        self.chart = self.loader.load(self.chart.patient.clone()).await;
    }
}
