use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use super::domain::JobListing;
use super::dto::{JobListingDraft, JobListingView, JobSearchCriteria};
use super::query::ListingQuery;
use super::repository::{JobListingRepository, RepositoryError};

/// Orchestrates repository calls and mapping for job listings. The service
/// keeps no state of its own, so one instance can serve concurrent callers.
pub struct JobListingService<R> {
    repository: Arc<R>,
}

impl<R> JobListingService<R>
where
    R: JobListingRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Search with the repository's own matching semantics, mapped to views.
    pub async fn search(
        &self,
        criteria: &JobSearchCriteria,
    ) -> Result<Vec<JobListingView>, ListingServiceError> {
        let listings = self.repository.search(criteria).await?;
        Ok(listings.iter().map(JobListingView::from_listing).collect())
    }

    /// Listings owned by the given employer; unknown employers simply yield
    /// an empty set.
    pub async fn list_by_employer(
        &self,
        employer_id: i32,
    ) -> Result<Vec<JobListingView>, ListingServiceError> {
        let listings = self.repository.list_by_employer(employer_id).await?;
        Ok(listings.iter().map(JobListingView::from_listing).collect())
    }

    /// Fetch one listing. Absence is a normal outcome, reported as `None`.
    pub async fn get(&self, id: i32) -> Result<Option<JobListingView>, ListingServiceError> {
        let listing = self.repository.get(id).await?;
        Ok(listing.as_ref().map(JobListingView::from_listing))
    }

    /// Persist a new listing stamped with the current time.
    pub async fn create(&self, draft: JobListingDraft) -> Result<(), ListingServiceError> {
        let listing = JobListing::from_draft(draft, Utc::now());
        let stored = self.repository.insert(listing).await?;
        debug!(id = stored.id, employer_id = stored.employer_id, "job listing created");
        Ok(())
    }

    /// Overwrite an existing listing from a draft. The caller asserts the id
    /// exists, so absence here is an error rather than a `None`.
    pub async fn update(&self, id: i32, draft: JobListingDraft) -> Result<(), ListingServiceError> {
        let mut listing = self
            .repository
            .get(id)
            .await?
            .ok_or(ListingServiceError::NotFound { id })?;

        listing.apply_draft(draft);
        self.repository.update(listing).await?;
        debug!(id, "job listing updated");
        Ok(())
    }

    /// Delete by id, deferring unknown-id handling to the repository.
    pub async fn delete(&self, id: i32) -> Result<(), ListingServiceError> {
        self.repository.delete(id).await?;
        debug!(id, "job listing deleted");
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<JobListingView>, ListingServiceError> {
        let listings = self.repository.list_all().await?;
        Ok(listings.iter().map(JobListingView::from_listing).collect())
    }

    /// Compose a query from the criteria, execute it, and return the matches
    /// in the draft shape, without ids. Result order is whatever the
    /// repository yields.
    pub async fn filter(
        &self,
        criteria: &JobSearchCriteria,
    ) -> Result<Vec<JobListingDraft>, ListingServiceError> {
        let query = ListingQuery::from_criteria(criteria);
        debug!(?query, "composed listing filter");
        let matched = self.repository.query(query).await?;
        Ok(matched.iter().map(JobListingDraft::from_listing).collect())
    }
}

/// Error raised by the listing service. Repository failures pass through
/// untranslated; the only semantics added here is `NotFound` on update.
#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error("job listing {id} not found")]
    NotFound { id: i32 },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
