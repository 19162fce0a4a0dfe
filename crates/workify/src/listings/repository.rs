use async_trait::async_trait;

use super::domain::JobListing;
use super::dto::JobSearchCriteria;
use super::query::ListingQuery;

/// Storage contract for job listings so the service can be exercised against
/// any backend. All calls are async and independent; cancellation and
/// timeouts are whatever the implementation provides.
#[async_trait]
pub trait JobListingRepository: Send + Sync {
    /// Search with repository-defined matching semantics. The service treats
    /// this as opaque.
    async fn search(&self, criteria: &JobSearchCriteria)
        -> Result<Vec<JobListing>, RepositoryError>;

    async fn list_by_employer(&self, employer_id: i32)
        -> Result<Vec<JobListing>, RepositoryError>;

    async fn get(&self, id: i32) -> Result<Option<JobListing>, RepositoryError>;

    /// Persists a new listing and returns the stored row with its assigned
    /// id.
    async fn insert(&self, listing: JobListing) -> Result<JobListing, RepositoryError>;

    async fn update(&self, listing: JobListing) -> Result<(), RepositoryError>;

    /// Removes a listing by id. What happens for an unknown id is the
    /// implementation's own choice.
    async fn delete(&self, id: i32) -> Result<(), RepositoryError>;

    async fn list_all(&self) -> Result<Vec<JobListing>, RepositoryError>;

    /// Executes a composed query, materializing the matching listings in
    /// whatever order the backend yields them.
    async fn query(&self, query: ListingQuery) -> Result<Vec<JobListing>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
