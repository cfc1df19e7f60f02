use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dto::lenient::to_count;
use crate::dto::upstream_dto::RawJobDetail;
use crate::utils::dates::parse_upstream_date;

/// Upstream code for hourly remuneration; every other code is monthly.
const HOURLY_REMUNERATION_CODE: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemunerationType {
    Hourly,
    Monthly,
}

impl RemunerationType {
    pub fn from_code(code: Option<f64>) -> Self {
        match code {
            Some(c) if c == HOURLY_REMUNERATION_CODE => RemunerationType::Hourly,
            _ => RemunerationType::Monthly,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub street: Option<String>,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobDetail {
    pub job_id: String,
    pub role_name: String,
    pub company_name: String,
    pub company_website: Option<String>,
    pub company_profile: Option<String>,
    pub company_address: Option<String>,

    pub job_description: String,
    pub job_requirements: Option<String>,
    pub skillset: Option<String>,

    pub employment_type: String,
    pub working_hours: String,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub application_deadline: Option<DateTime<Utc>>,
    pub number_of_vacancies: u32,
    pub number_of_applications: u32,

    pub location: Location,

    pub remuneration_type: RemunerationType,
    pub remuneration_rate: f64,
    pub allowance: f64,
    pub other_benefits: Option<String>,

    pub resume_required: bool,
    pub transcript_required: bool,
    pub cover_letter_required: bool,
    pub other_documents_required: bool,

    pub supervisor_name: Option<String>,
    pub contact_email: Option<String>,

    pub created_on: Option<DateTime<Utc>>,
    pub lodging_provided: bool,
    pub viewable_on_job_portal: bool,
}

impl From<RawJobDetail> for JobDetail {
    fn from(raw: RawJobDetail) -> Self {
        let company_name = raw
            .account_display_name
            .filter(|name| !name.is_empty())
            .or(raw.account_name)
            .unwrap_or_default();

        // street and country are glued together without a separator
        let company_address = match (&raw.street, &raw.country) {
            (None, None) => None,
            (street, country) => Some(format!(
                "{}{}",
                street.as_deref().unwrap_or_default(),
                country.as_deref().unwrap_or_default()
            )),
        };

        Self {
            job_id: raw.job_posting_id.unwrap_or_default(),
            role_name: raw.name.unwrap_or_default(),
            company_name,
            company_website: raw.account_website,
            company_profile: raw.account_profile,
            company_address,
            job_description: raw.job_description.unwrap_or_default(),
            job_requirements: raw.job_requirements,
            skillset: raw.skillset,
            employment_type: raw.employment_type.unwrap_or_default(),
            working_hours: raw.working_hours.unwrap_or_default(),
            start_date: parse_upstream_date(raw.actual_start_date.as_deref()),
            end_date: parse_upstream_date(raw.actual_end_date.as_deref()),
            application_deadline: parse_upstream_date(raw.application_deadline.as_deref()),
            number_of_vacancies: to_count(raw.number_of_vacancies),
            number_of_applications: to_count(raw.number_of_applications),
            location: Location {
                street: raw.street,
                country: raw.country.unwrap_or_default(),
            },
            remuneration_type: RemunerationType::from_code(raw.remuneration_type_code),
            remuneration_rate: raw.rate.unwrap_or(0.0),
            allowance: raw.allowance.unwrap_or(0.0),
            other_benefits: raw.other_benefits,
            resume_required: raw.resume_required || raw.session_resume_required,
            transcript_required: raw.session_transcripts_required,
            cover_letter_required: raw.session_cover_letter_required,
            other_documents_required: raw.session_other_documents_required,
            supervisor_name: raw.supervisor,
            contact_email: raw.email,
            created_on: parse_upstream_date(raw.created_on.as_deref()),
            lodging_provided: raw.lodging_provided,
            viewable_on_job_portal: raw.view_job_portal,
        }
    }
}
