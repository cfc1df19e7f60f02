use futures::future::try_join_all;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::listing_dto::Credentials;
use crate::error::Result;
use crate::models::applicant::ApplicantDetail;
use crate::models::job_detail::JobDetail;
use crate::models::job_listing::JobListing;
use crate::services::readytalent_client::ReadyTalentClient;

/// Composes upstream calls into what the dashboard consumes. Every entry point
/// rejects blank credentials before touching the network, and any failing
/// sub-fetch fails the whole call.
#[derive(Clone)]
pub struct ListingService {
    client: ReadyTalentClient,
}

impl ListingService {
    pub fn new(client: ReadyTalentClient) -> Self {
        Self { client }
    }

    /// All listings, each enriched with its detail record.
    #[instrument(skip(self, credentials), fields(student_id = %credentials.student_id))]
    pub async fn load_all_listings(&self, credentials: &Credentials) -> Result<Vec<JobListing>> {
        credentials.validate()?;

        let raw = self
            .client
            .fetch_all_listings(&credentials.api_token, &credentials.student_id)
            .await?;
        let listings: Vec<JobListing> = raw.into_iter().map(JobListing::from).collect();

        let details = try_join_all(
            listings
                .iter()
                .map(|listing| self.detail(credentials, &listing.job_id)),
        )
        .await?;

        info!(count = listings.len(), "loaded listings with details");
        Ok(listings
            .into_iter()
            .zip(details)
            .map(|(listing, detail)| listing.with_detail(detail))
            .collect())
    }

    /// A copy of `listing` with a fresh detail record and its applicants.
    #[instrument(skip(self, listing, credentials), fields(job_id = %listing.job_id))]
    pub async fn load_listing_with_applicants(
        &self,
        listing: &JobListing,
        credentials: &Credentials,
    ) -> Result<JobListing> {
        credentials.validate()?;

        let (job_detail, applicants) = tokio::try_join!(
            self.detail(credentials, &listing.job_id),
            self.applicants(credentials, &listing.job_id),
        )?;

        info!(applicants = applicants.len(), "loaded listing details");
        Ok(JobListing {
            job_detail: Some(job_detail),
            applicants,
            ..listing.clone()
        })
    }

    #[instrument(skip(self, credentials))]
    pub async fn fetch_job_detail(&self, credentials: &Credentials, job_id: &str) -> Result<JobDetail> {
        credentials.validate()?;
        self.detail(credentials, job_id).await
    }

    #[instrument(skip(self, credentials))]
    pub async fn fetch_applicants(
        &self,
        credentials: &Credentials,
        job_id: &str,
    ) -> Result<Vec<ApplicantDetail>> {
        credentials.validate()?;
        self.applicants(credentials, job_id).await
    }

    async fn detail(&self, credentials: &Credentials, job_id: &str) -> Result<JobDetail> {
        let raw = self
            .client
            .fetch_job_detail(&credentials.api_token, job_id, &credentials.student_id)
            .await?;
        Ok(JobDetail::from(raw))
    }

    async fn applicants(&self, credentials: &Credentials, job_id: &str) -> Result<Vec<ApplicantDetail>> {
        let raw = self.client.fetch_applicants(&credentials.api_token, job_id).await?;
        Ok(raw.into_iter().map(ApplicantDetail::from).collect())
    }
}
