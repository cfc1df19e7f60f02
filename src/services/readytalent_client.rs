use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CONTENT_LENGTH, ORIGIN, REFERER,
};
use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::UpstreamConfig;
use crate::dto::upstream_dto::{RawApplicant, RawJobDetail, RawJobListing};
use crate::error::{Error, Result};
use crate::services::response_classifier::{
    classify, decode_records, is_token_expired, UpstreamReply,
};

const API_TOKEN_HEADER: &str = "apitoken";
const LOGIN_ACCESS_TYPE: &str = "Student";

/// The four logical calls the upstream exposes, told apart by `requestname`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpstreamRequest<'a> {
    PartTimeListings { student_id: &'a str },
    RegularListings { student_id: &'a str },
    JobDetail { job_id: &'a str, student_id: &'a str },
    Applicants { job_id: &'a str },
}

impl<'a> UpstreamRequest<'a> {
    pub fn request_name(&self) -> &'static str {
        match self {
            UpstreamRequest::PartTimeListings { .. } => "LoadPartTimeJobDetailsStudentDashboard",
            UpstreamRequest::RegularListings { .. } => "LoadJobDetailsStudentDashboard",
            UpstreamRequest::JobDetail { .. } => "LoadJobDetailsForStudent",
            UpstreamRequest::Applicants { .. } => "GetStudentApplicationDetails",
        }
    }

    pub fn query(&self) -> Vec<(&'static str, &'a str)> {
        let mut params = vec![("requestname", self.request_name())];
        match *self {
            UpstreamRequest::PartTimeListings { student_id }
            | UpstreamRequest::RegularListings { student_id } => {
                params.push(("studentId", student_id));
                params.push(("accessLevelCondition", ""));
                params.push(("loginaccessType", LOGIN_ACCESS_TYPE));
            }
            UpstreamRequest::JobDetail { job_id, student_id } => {
                params.push(("jobid", job_id));
                params.push(("studentId", student_id));
                params.push(("empSessionId", "null"));
                params.push(("includeApplicabledate", "true"));
            }
            UpstreamRequest::Applicants { job_id } => {
                params.push(("empListId", job_id));
            }
        }
        params
    }
}

#[derive(Clone)]
pub struct ReadyTalentClient {
    client: Client,
    config: UpstreamConfig,
}

impl ReadyTalentClient {
    pub fn new(config: UpstreamConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers(&config)?)
            .build()
            .map_err(|e| Error::Config(format!("Failed to build upstream HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    async fn send(&self, token: &str, request: UpstreamRequest<'_>, context: &str) -> Result<UpstreamReply> {
        debug!(requestname = request.request_name(), context, "calling upstream");

        let response = self
            .client
            .post(self.config.base_url.clone())
            .query(&request.query())
            .header(API_TOKEN_HEADER, token)
            .header(CONTENT_LENGTH, "0")
            .send()
            .await
            .map_err(|e| Error::transport(context, e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::transport(context, e.to_string()))?;
        let body = serde_json::from_str(&text).ok();

        Ok(UpstreamReply { status, body })
    }

    /// Fetches part-time and regular listings together and concatenates them,
    /// part-time first.
    #[instrument(skip(self, token))]
    pub async fn fetch_all_listings(&self, token: &str, student_id: &str) -> Result<Vec<RawJobListing>> {
        let context = "job listings";
        let (part_time, regular) = tokio::try_join!(
            self.send(token, UpstreamRequest::PartTimeListings { student_id }, context),
            self.send(token, UpstreamRequest::RegularListings { student_id }, context),
        )?;

        let expired = [&part_time, &regular]
            .iter()
            .any(|reply| reply.body.as_ref().is_some_and(is_token_expired));
        if expired {
            tracing::warn!(context, "upstream reports expired token");
            return Err(Error::TokenExpired);
        }
        if !part_time.status.is_success() || !regular.status.is_success() {
            let status = format!("{} {}", part_time.status_text(), regular.status_text());
            tracing::warn!(context, %status, "listing fetch failed");
            return Err(Error::transport(context, status));
        }

        let mut listings: Vec<RawJobListing> = decode_records(classify(part_time, context)?, context)?;
        listings.extend(decode_records::<RawJobListing>(classify(regular, context)?, context)?);
        debug!(count = listings.len(), "fetched raw listings");
        Ok(listings)
    }

    /// The upstream answers with a one-element array; only the first record is used.
    #[instrument(skip(self, token))]
    pub async fn fetch_job_detail(&self, token: &str, job_id: &str, student_id: &str) -> Result<RawJobDetail> {
        let context = format!("job detail for {}", job_id);
        let reply = self
            .send(token, UpstreamRequest::JobDetail { job_id, student_id }, &context)
            .await?;
        let records: Vec<RawJobDetail> = decode_records(classify(reply, &context)?, &context)?;
        records
            .into_iter()
            .next()
            .ok_or_else(|| Error::unexpected_payload(&context, "empty detail array"))
    }

    #[instrument(skip(self, token))]
    pub async fn fetch_applicants(&self, token: &str, job_id: &str) -> Result<Vec<RawApplicant>> {
        let context = format!("applicant details for {}", job_id);
        let reply = self
            .send(token, UpstreamRequest::Applicants { job_id }, &context)
            .await?;
        decode_records(classify(reply, &context)?, &context)
    }
}

fn default_headers(config: &UpstreamConfig) -> Result<HeaderMap> {
    let header = |name: &str, value: &str| {
        HeaderValue::from_str(value)
            .map_err(|e| Error::Config(format!("Invalid {} header value: {}", name, e)))
    };

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("*/*"));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(ORIGIN, header("origin", &config.origin)?);
    headers.insert(REFERER, header("referer", &config.referer)?);
    Ok(headers)
}
