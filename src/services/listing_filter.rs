use std::cmp::Ordering;
use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::job_listing::JobListing;
use crate::utils::dates::parse_upstream_date;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    PostingId,
    JobType,
    CompanyName,
    NumOfVacancies,
    CreatedDate,
    ApplicationDeadline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Search box, faceted filters and column sort of the dashboard table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListingFilter {
    pub search: Option<String>,
    pub companies: Vec<String>,
    pub job_types: Vec<String>,
    pub sort_by: Option<SortField>,
    pub order: SortOrder,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingFacets {
    pub companies: Vec<String>,
    pub job_types: Vec<String>,
}

impl ListingFilter {
    pub fn is_empty(&self) -> bool {
        self == &ListingFilter::default()
    }

    pub fn matches(&self, listing: &JobListing) -> bool {
        if !self.companies.is_empty() && !self.companies.contains(&listing.company_name) {
            return false;
        }
        if !self.job_types.is_empty() && !self.job_types.contains(&listing.job_type) {
            return false;
        }
        match self.search.as_deref().map(str::trim) {
            Some(term) if !term.is_empty() => {
                let needle = term.to_lowercase();
                [
                    &listing.job_posting_id,
                    &listing.job_type,
                    &listing.company_name,
                    &listing.job_name,
                ]
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
            }
            _ => true,
        }
    }

    pub fn apply(&self, listings: Vec<JobListing>) -> Vec<JobListing> {
        let mut kept: Vec<JobListing> = listings.into_iter().filter(|l| self.matches(l)).collect();
        if let Some(field) = self.sort_by {
            kept.sort_by(|a, b| {
                let ordering = compare(field, a, b);
                match (self.order, field) {
                    // missing dates stay at the bottom in either direction
                    (SortOrder::Desc, SortField::CreatedDate | SortField::ApplicationDeadline) => {
                        match (sort_date(field, a), sort_date(field, b)) {
                            (Some(x), Some(y)) => y.cmp(&x),
                            _ => ordering,
                        }
                    }
                    (SortOrder::Desc, _) => ordering.reverse(),
                    (SortOrder::Asc, _) => ordering,
                }
            });
        }
        kept
    }
}

fn sort_date(field: SortField, listing: &JobListing) -> Option<DateTime<Utc>> {
    match field {
        SortField::CreatedDate => parse_upstream_date(listing.created_date.as_deref()),
        SortField::ApplicationDeadline => {
            parse_upstream_date(listing.application_deadline.as_deref())
        }
        _ => None,
    }
}

fn compare(field: SortField, a: &JobListing, b: &JobListing) -> Ordering {
    match field {
        SortField::PostingId => a.job_posting_id.cmp(&b.job_posting_id),
        SortField::JobType => a.job_type.cmp(&b.job_type),
        SortField::CompanyName => a.company_name.cmp(&b.company_name),
        SortField::NumOfVacancies => a.num_of_vacancies.cmp(&b.num_of_vacancies),
        SortField::CreatedDate | SortField::ApplicationDeadline => {
            match (sort_date(field, a), sort_date(field, b)) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }
    }
}

pub fn facets(listings: &[JobListing]) -> ListingFacets {
    let companies: BTreeSet<&str> = listings.iter().map(|l| l.company_name.as_str()).collect();
    let job_types: BTreeSet<&str> = listings.iter().map(|l| l.job_type.as_str()).collect();
    ListingFacets {
        companies: companies.into_iter().map(str::to_string).collect(),
        job_types: job_types.into_iter().map(str::to_string).collect(),
    }
}
