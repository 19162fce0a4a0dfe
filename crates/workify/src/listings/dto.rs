use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Write-side payload for creating or updating a listing.
///
/// Carries every listing field the caller controls; `id` and `posted_at` are
/// owned by storage and the service respectively. This is also the shape
/// returned by the filter operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListingDraft {
    pub employer_id: i32,
    pub title: String,
    pub description: String,
    pub skills: String,
    pub salary: f64,
    pub job_type: String,
    pub location: String,
}

/// Read-side view of a stored listing, id included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListingView {
    pub id: i32,
    pub employer_id: i32,
    pub title: String,
    pub description: String,
    pub skills: String,
    pub salary: f64,
    pub job_type: String,
    pub location: String,
    pub posted_at: DateTime<Utc>,
}

/// Optional-field search specification.
///
/// Every field is a constraint only when it carries a usable value: an empty
/// or missing `skills`/`job_type` string means unconstrained, and
/// `min_salary` participates only when greater than zero, so a minimum of
/// exactly zero cannot be expressed distinctly from "no minimum". `location`
/// is accepted on the wire but is not part of the active filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobSearchCriteria {
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub min_salary: f64,
    #[serde(default)]
    pub job_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
}
