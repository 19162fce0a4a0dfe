//! Field-by-field conversions between the listing entity and its transfer
//! shapes. Mapping is total: no conversion here can fail.

use chrono::{DateTime, Utc};

use super::domain::JobListing;
use super::dto::{JobListingDraft, JobListingView};

impl JobListingView {
    pub fn from_listing(listing: &JobListing) -> Self {
        Self {
            id: listing.id,
            employer_id: listing.employer_id,
            title: listing.title.clone(),
            description: listing.description.clone(),
            skills: listing.skills.clone(),
            salary: listing.salary,
            job_type: listing.job_type.clone(),
            location: listing.location.clone(),
            posted_at: listing.posted_at,
        }
    }
}

impl JobListingDraft {
    /// Projects a stored listing back onto the write shape, dropping the
    /// storage-owned fields.
    pub fn from_listing(listing: &JobListing) -> Self {
        Self {
            employer_id: listing.employer_id,
            title: listing.title.clone(),
            description: listing.description.clone(),
            skills: listing.skills.clone(),
            salary: listing.salary,
            job_type: listing.job_type.clone(),
            location: listing.location.clone(),
        }
    }
}

impl JobListing {
    /// Builds a new, not-yet-persisted listing from a draft. The id stays at
    /// the placeholder `0` until storage assigns one.
    pub fn from_draft(draft: JobListingDraft, posted_at: DateTime<Utc>) -> Self {
        Self {
            id: 0,
            employer_id: draft.employer_id,
            title: draft.title,
            description: draft.description,
            skills: draft.skills,
            salary: draft.salary,
            job_type: draft.job_type,
            location: draft.location,
            posted_at,
        }
    }

    /// Overwrites the draft-carried fields in place, keeping `id` and
    /// `posted_at` as they were.
    pub fn apply_draft(&mut self, draft: JobListingDraft) {
        self.employer_id = draft.employer_id;
        self.title = draft.title;
        self.description = draft.description;
        self.skills = draft.skills;
        self.salary = draft.salary;
        self.job_type = draft.job_type;
        self.location = draft.location;
    }
}
