use serde::Deserialize;

use super::lenient;

/// One item of either dashboard listing endpoint.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawJobListing {
    #[serde(
        rename = "sit_employmentlistingid",
        deserialize_with = "lenient::required_string"
    )]
    pub employment_listing_id: String,
    #[serde(rename = "sit_jobpostingid", default, deserialize_with = "lenient::string")]
    pub job_posting_id: Option<String>,
    #[serde(rename = "sit_name", default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(
        rename = "_sit_employmenttype_value@OData.Community.Display.V1.FormattedValue",
        default,
        deserialize_with = "lenient::string"
    )]
    pub employment_type: Option<String>,
    #[serde(rename = "acc.name", default, deserialize_with = "lenient::string")]
    pub account_name: Option<String>,
    #[serde(
        rename = "acc.entityimageid_entityimage_url",
        default,
        deserialize_with = "lenient::string"
    )]
    pub account_image_url: Option<String>,
    #[serde(rename = "sit_resumerequired", default, deserialize_with = "lenient::literal_true")]
    pub resume_required: bool,
    #[serde(rename = "sit_numberofvacancies", default, deserialize_with = "lenient::number")]
    pub number_of_vacancies: Option<f64>,
    #[serde(rename = "sit_applicationdeadline", default, deserialize_with = "lenient::string")]
    pub application_deadline: Option<String>,
    #[serde(rename = "createdon", default, deserialize_with = "lenient::string")]
    pub created_on: Option<String>,
    #[serde(rename = "sit_actualenddate", default, deserialize_with = "lenient::string")]
    pub actual_end_date: Option<String>,
    #[serde(rename = "ab.sit_degreeprogramname", default, deserialize_with = "lenient::string")]
    pub degree_program_names: Option<String>,
    #[serde(rename = "sit_remunerationtype", default, deserialize_with = "lenient::string")]
    pub remuneration_type: Option<String>,
    #[serde(rename = "sit_skillset", default, deserialize_with = "lenient::string")]
    pub skillset: Option<String>,
    #[serde(rename = "sit_rate", default, deserialize_with = "lenient::number")]
    pub rate: Option<f64>,
    #[serde(rename = "sit_supervisor", default, deserialize_with = "lenient::string")]
    pub supervisor: Option<String>,
    #[serde(rename = "sit_allowance", default, deserialize_with = "lenient::number")]
    pub allowance: Option<f64>,
    #[serde(rename = "sit_remunerationothers", default, deserialize_with = "lenient::string")]
    pub remuneration_others: Option<String>,
}

/// The single record returned by `LoadJobDetailsForStudent`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawJobDetail {
    #[serde(rename = "sit_jobpostingid", default, deserialize_with = "lenient::string")]
    pub job_posting_id: Option<String>,
    #[serde(rename = "sit_name", default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(
        rename = "_sit_account_value@OData.Community.Display.V1.FormattedValue",
        default,
        deserialize_with = "lenient::string"
    )]
    pub account_display_name: Option<String>,
    #[serde(rename = "acc.name", default, deserialize_with = "lenient::string")]
    pub account_name: Option<String>,
    #[serde(rename = "acc.websiteurl", default, deserialize_with = "lenient::string")]
    pub account_website: Option<String>,
    #[serde(rename = "acc.sit_companyprofile", default, deserialize_with = "lenient::string")]
    pub account_profile: Option<String>,
    #[serde(rename = "otheradd.sit_street1", default, deserialize_with = "lenient::string")]
    pub street: Option<String>,
    #[serde(
        rename = "otheradd.sit_country@OData.Community.Display.V1.FormattedValue",
        default,
        deserialize_with = "lenient::string"
    )]
    pub country: Option<String>,
    #[serde(rename = "sit_jobdescription", default, deserialize_with = "lenient::string")]
    pub job_description: Option<String>,
    #[serde(rename = "sit_jobrequirements", default, deserialize_with = "lenient::string")]
    pub job_requirements: Option<String>,
    #[serde(rename = "sit_skillset", default, deserialize_with = "lenient::string")]
    pub skillset: Option<String>,
    #[serde(
        rename = "_sit_employmenttype_value@OData.Community.Display.V1.FormattedValue",
        default,
        deserialize_with = "lenient::string"
    )]
    pub employment_type: Option<String>,
    #[serde(rename = "sit_workinghours", default, deserialize_with = "lenient::string")]
    pub working_hours: Option<String>,
    #[serde(rename = "sit_actualstartdate", default, deserialize_with = "lenient::string")]
    pub actual_start_date: Option<String>,
    #[serde(rename = "sit_actualenddate", default, deserialize_with = "lenient::string")]
    pub actual_end_date: Option<String>,
    #[serde(rename = "sit_applicationdeadline", default, deserialize_with = "lenient::string")]
    pub application_deadline: Option<String>,
    #[serde(rename = "sit_numberofvacancies", default, deserialize_with = "lenient::number")]
    pub number_of_vacancies: Option<f64>,
    #[serde(
        rename = "sit_noofstudentapplication",
        default,
        deserialize_with = "lenient::number"
    )]
    pub number_of_applications: Option<f64>,
    #[serde(rename = "sit_remunerationtype", default, deserialize_with = "lenient::numeric_code")]
    pub remuneration_type_code: Option<f64>,
    #[serde(rename = "sit_rate", default, deserialize_with = "lenient::number")]
    pub rate: Option<f64>,
    #[serde(rename = "sit_allowance", default, deserialize_with = "lenient::number")]
    pub allowance: Option<f64>,
    #[serde(rename = "sit_otherbenefits", default, deserialize_with = "lenient::string")]
    pub other_benefits: Option<String>,
    #[serde(rename = "sit_resumerequired", default, deserialize_with = "lenient::literal_true")]
    pub resume_required: bool,
    #[serde(rename = "ses.sit_resume", default, deserialize_with = "lenient::literal_true")]
    pub session_resume_required: bool,
    #[serde(rename = "ses.sit_transcripts", default, deserialize_with = "lenient::literal_true")]
    pub session_transcripts_required: bool,
    #[serde(rename = "ses.sit_coverletter", default, deserialize_with = "lenient::literal_true")]
    pub session_cover_letter_required: bool,
    #[serde(
        rename = "ses.sit_otherrelevantdocuments",
        default,
        deserialize_with = "lenient::literal_true"
    )]
    pub session_other_documents_required: bool,
    #[serde(rename = "sit_supervisor", default, deserialize_with = "lenient::string")]
    pub supervisor: Option<String>,
    #[serde(rename = "sit_email", default, deserialize_with = "lenient::string")]
    pub email: Option<String>,
    #[serde(rename = "createdon", default, deserialize_with = "lenient::string")]
    pub created_on: Option<String>,
    #[serde(rename = "sit_lodgingprovided", default, deserialize_with = "lenient::literal_true")]
    pub lodging_provided: bool,
    #[serde(rename = "sit_viewjobportal", default, deserialize_with = "lenient::literal_true")]
    pub view_job_portal: bool,
}

/// One item of `GetStudentApplicationDetails`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawApplicant {
    #[serde(rename = "sit_name", default, deserialize_with = "lenient::string")]
    pub name: Option<String>,
    #[serde(rename = "createdon", default, deserialize_with = "lenient::string")]
    pub created_on: Option<String>,
}
