//! The patient directory.

use crate::entities::Patient;
use crate::repository::RecordRepository;
use crate::ChartResult;
use chartwell_types::PhoneNumber;

/// The searchable list of all patients.
///
/// Patients are fetched once (newest first) and filtered client-side on
/// every keystroke; no debounce, no re-fetch. The filter is a
/// case-insensitive substring match over first name, last name, and email,
/// plus a digit-sequence match over the phone number so "5551234" finds
/// "(555) 123-4567".
#[derive(Clone, Debug, Default)]
pub struct PatientDirectory {
    patients: Vec<Patient>,
    search_term: String,
}

impl PatientDirectory {
    /// Loads the directory from the repository.
    pub async fn load(repo: &RecordRepository) -> ChartResult<Self> {
        Ok(Self {
            patients: repo.list_patients().await?,
            search_term: String::new(),
        })
    }

    /// Re-fetches the patient collection, keeping the search term.
    pub async fn reload(&mut self, repo: &RecordRepository) -> ChartResult<()> {
        self.patients = repo.list_patients().await?;
        Ok(())
    }

    /// Every loaded patient, unfiltered.
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Updates the search term; takes effect immediately.
    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// The patients matching the current search term.
    pub fn visible(&self) -> Vec<&Patient> {
        if self.search_term.is_empty() {
            return self.patients.iter().collect();
        }

        let needle = self.search_term.to_lowercase();
        let needle_digits: String = needle.chars().filter(|c| c.is_ascii_digit()).collect();

        self.patients
            .iter()
            .filter(|p| matches_search(p, &needle, &needle_digits))
            .collect()
    }
}

fn matches_search(patient: &Patient, needle: &str, needle_digits: &str) -> bool {
    if patient.first_name.to_lowercase().contains(needle)
        || patient.last_name.to_lowercase().contains(needle)
    {
        return true;
    }

    if let Some(email) = &patient.email {
        if email.to_lowercase().contains(needle) {
            return true;
        }
    }

    if !needle_digits.is_empty() {
        if let Some(phone) = &patient.phone {
            let digits = PhoneNumber::parse(phone)
                .map(|p| p.digits())
                .unwrap_or_default();
            if digits.contains(needle_digits) {
                return true;
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::NewPatient;
    use chartwell_store::MemoryStore;
    use chrono::NaiveDate;
    use std::sync::Arc;

    fn new_patient(first: &str, last: &str, email: Option<&str>, phone: Option<&str>) -> NewPatient {
        NewPatient {
            first_name: first.into(),
            last_name: last.into(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 6, 15).expect("date should be valid"),
            gender: "female".into(),
            phone: phone.map(Into::into),
            email: email.map(Into::into),
            address: None,
            emergency_contact_name: None,
            emergency_contact_phone: None,
            blood_type: None,
            allergies: None,
        }
    }

    async fn seeded_directory() -> (RecordRepository, PatientDirectory) {
        let repo = RecordRepository::new(Arc::new(MemoryStore::new()));
        for (first, last, email, phone) in [
            ("Ann", "Lee", Some("ann.lee@example.com"), Some("(555) 123-4567")),
            ("Ben", "Lee", None, None),
            ("Cid", "Nguyen", Some("cid@example.com"), Some("555-987-6543")),
        ] {
            let _: Patient = repo
                .create(&new_patient(first, last, email, phone))
                .await
                .expect("create should succeed");
        }
        let directory = PatientDirectory::load(&repo).await.expect("load should succeed");
        (repo, directory)
    }

    fn names(visible: &[&Patient]) -> Vec<String> {
        let mut names: Vec<String> = visible.iter().map(|p| p.full_name()).collect();
        names.sort();
        names
    }

    #[tokio::test]
    async fn test_empty_search_shows_everyone() {
        let (_repo, directory) = seeded_directory().await;
        assert_eq!(directory.visible().len(), 3);
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_over_names() {
        let (_repo, mut directory) = seeded_directory().await;
        directory.set_search_term("lee");
        assert_eq!(names(&directory.visible()), ["Ann Lee", "Ben Lee"]);

        directory.set_search_term("LEE");
        assert_eq!(names(&directory.visible()), ["Ann Lee", "Ben Lee"]);
    }

    #[tokio::test]
    async fn test_search_matches_email_substring() {
        let (_repo, mut directory) = seeded_directory().await;
        directory.set_search_term("ann.lee@");
        assert_eq!(names(&directory.visible()), ["Ann Lee"]);
    }

    #[tokio::test]
    async fn test_search_matches_phone_digits_across_formatting() {
        let (_repo, mut directory) = seeded_directory().await;
        directory.set_search_term("5551234");
        assert_eq!(names(&directory.visible()), ["Ann Lee"]);

        directory.set_search_term("9876");
        assert_eq!(names(&directory.visible()), ["Cid Nguyen"]);
    }

    #[tokio::test]
    async fn test_no_match_yields_empty_not_error() {
        let (_repo, mut directory) = seeded_directory().await;
        directory.set_search_term("zzz");
        assert!(directory.visible().is_empty());
    }

    #[tokio::test]
    async fn test_reload_picks_up_new_patients_and_keeps_term() {
        let (repo, mut directory) = seeded_directory().await;
        directory.set_search_term("lee");

        let _: Patient = repo
            .create(&new_patient("Dee", "Lee", None, None))
            .await
            .expect("create should succeed");
        directory.reload(&repo).await.expect("reload should succeed");

        assert_eq!(directory.search_term(), "lee");
        assert_eq!(names(&directory.visible()), ["Ann Lee", "Ben Lee", "Dee Lee"]);
    }
}
