//! Patient search and paging over an already-materialized batch

use crate::patient::CanonicalPatientRecord;
use crate::scoring::ScoredPatient;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Anything that can be looked up by patient id and name
pub trait PatientIdentity {
    fn patient_id(&self) -> &str;
    fn name(&self) -> &str;
}

impl PatientIdentity for CanonicalPatientRecord {
    fn patient_id(&self) -> &str {
        &self.patient_id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl PatientIdentity for ScoredPatient {
    fn patient_id(&self) -> &str {
        &self.record().patient_id
    }

    fn name(&self) -> &str {
        &self.record().name
    }
}

/// Case-insensitive search on id or name, followed by a 1-based page slice
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PatientQuery {
    #[serde(default)]
    pub search: Option<String>,

    #[serde(default = "default_page")]
    pub page: usize,

    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

impl Default for PatientQuery {
    fn default() -> Self {
        Self {
            search: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// One page of matching patients
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PatientPage<T> {
    pub patients: Vec<T>,
    pub page: usize,
    pub page_size: usize,
    /// Matches across all pages
    pub total: usize,
    pub total_pages: usize,
}

impl PatientQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: usize, page_size: usize) -> Self {
        self.page = page;
        self.page_size = page_size;
        self
    }

    /// Does the patient match the search term? An empty term matches everyone.
    pub fn matches<T: PatientIdentity>(&self, patient: &T) -> bool {
        match self.search.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(term) => {
                let term = term.to_lowercase();
                patient.patient_id().to_lowercase().contains(&term)
                    || patient.name().to_lowercase().contains(&term)
            }
        }
    }

    /// Filter then page. Page 0 is read as page 1 and a zero page size as the default.
    pub fn apply<'a, T: PatientIdentity>(&self, patients: &'a [T]) -> PatientPage<&'a T> {
        let page = self.page.max(1);
        let page_size = if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        };

        let matching: Vec<&T> = patients.iter().filter(|p| self.matches(*p)).collect();
        let total = matching.len();
        let total_pages = total.div_ceil(page_size);

        let patients = matching
            .into_iter()
            .skip((page - 1).saturating_mul(page_size))
            .take(page_size)
            .collect();

        PatientPage {
            patients,
            page,
            page_size,
            total,
            total_pages,
        }
    }
}
