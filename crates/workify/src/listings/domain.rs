use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted representation of a job listing.
///
/// `id` is assigned by storage when the listing is inserted; a freshly mapped
/// listing carries the placeholder `0` until then. `employer_id` references an
/// employer record whose existence is enforced upstream. `skills` is a
/// free-text, comma-delimited field that search treats as a token source
/// rather than a normalized collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobListing {
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
