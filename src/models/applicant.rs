use serde::{Deserialize, Serialize};

use crate::dto::upstream_dto::RawApplicant;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantDetail {
    pub applicant_name: String,
    /// Upstream timestamp, kept as sent.
    pub created_date: Option<String>,
}

impl From<RawApplicant> for ApplicantDetail {
    fn from(raw: RawApplicant) -> Self {
        Self {
            applicant_name: raw.name.unwrap_or_default(),
            created_date: raw.created_on,
        }
    }
}
