use serde::{Deserialize, Serialize};

use super::applicant::ApplicantDetail;
use super::job_detail::JobDetail;
use crate::dto::lenient::to_count;
use crate::dto::upstream_dto::RawJobListing;

/// Listings posted by this employer carry the internship remuneration fields.
pub const SCHOOL_COMPANY_NAME: &str = "SINGAPORE INSTITUTE OF TECHNOLOGY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ListingKind {
    #[serde(rename_all = "camelCase")]
    School {
        remuneration_type: Option<String>,
        skillset: Option<String>,
        rate: Option<f64>,
        supervisor: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Generic {
        allowance: f64,
        other_remunerations: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobListing {
    pub job_id: String,
    pub job_posting_id: String,
    pub job_name: String,
    pub job_type: String,
    pub company_name: String,
    pub company_image_url: Option<String>,
    pub resume_required: bool,
    pub num_of_vacancies: u32,
    pub application_deadline: Option<String>,
    pub created_date: Option<String>,
    pub actual_end_date: Option<String>,
    #[serde(default)]
    pub eligible_degrees: Vec<String>,
    #[serde(flatten)]
    pub kind: ListingKind,
    #[serde(default)]
    pub job_detail: Option<JobDetail>,
    #[serde(default)]
    pub applicants: Vec<ApplicantDetail>,
}

impl JobListing {
    pub fn is_school(&self) -> bool {
        matches!(self.kind, ListingKind::School { .. })
    }

    pub fn with_detail(self, job_detail: JobDetail) -> Self {
        Self {
            job_detail: Some(job_detail),
            ..self
        }
    }
}

impl From<RawJobListing> for JobListing {
    fn from(raw: RawJobListing) -> Self {
        let company_name = raw.account_name.unwrap_or_default();

        let kind = if company_name == SCHOOL_COMPANY_NAME {
            ListingKind::School {
                remuneration_type: raw.remuneration_type,
                skillset: raw.skillset,
                rate: raw.rate,
                supervisor: raw.supervisor,
            }
        } else {
            ListingKind::Generic {
                allowance: raw.allowance.unwrap_or(0.0),
                other_remunerations: raw.remuneration_others.unwrap_or_default(),
            }
        };

        let eligible_degrees = raw
            .degree_program_names
            .map(|names| names.split('|').map(str::to_string).collect())
            .unwrap_or_default();

        Self {
            job_id: raw.employment_listing_id,
            job_posting_id: raw.job_posting_id.unwrap_or_default(),
            job_name: raw.name.unwrap_or_default(),
            job_type: raw.employment_type.unwrap_or_default(),
            company_name,
            company_image_url: raw.account_image_url.filter(|url| !url.is_empty()),
            resume_required: raw.resume_required,
            num_of_vacancies: to_count(raw.number_of_vacancies),
            application_deadline: raw.application_deadline,
            created_date: raw.created_on,
            actual_end_date: raw.actual_end_date,
            eligible_degrees,
            kind,
            job_detail: None,
            applicants: Vec::new(),
        }
    }
}
