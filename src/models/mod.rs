pub mod applicant;
pub mod job_detail;
pub mod job_listing;
