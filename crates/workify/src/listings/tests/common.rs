use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::listings::domain::JobListing;
use crate::listings::dto::{JobListingDraft, JobSearchCriteria};
use crate::listings::query::ListingQuery;
use crate::listings::repository::{JobListingRepository, RepositoryError};
use crate::listings::service::JobListingService;

pub(super) fn posted() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn listing(
    id: i32,
    employer_id: i32,
    title: &str,
    skills: &str,
    salary: f64,
    job_type: &str,
) -> JobListing {
    JobListing {
        id,
        employer_id,
        title: title.to_string(),
        description: format!("{title} at employer {employer_id}"),
        skills: skills.to_string(),
        salary,
        job_type: job_type.to_string(),
        location: "Berlin".to_string(),
        posted_at: posted(),
    }
}

/// Four listings covering the filter edge cases: substring skills, an exact
/// salary boundary, and a lowercase job type that must not match "Remote".
pub(super) fn sample_board() -> Vec<JobListing> {
    vec![
        listing(1, 1, "Backend Engineer", "Go Developer", 95_000.0, "Remote"),
        listing(2, 1, "Enterprise Developer", "Java", 50_000.0, "Hybrid"),
        listing(3, 2, "Systems Engineer", "Rust, Tokio", 70_000.0, "remote"),
        listing(4, 3, "Web Developer", "Python, Django", 45_000.0, "Remote"),
    ]
}

pub(super) fn draft(employer_id: i32, title: &str, skills: &str, salary: f64) -> JobListingDraft {
    JobListingDraft {
        employer_id,
        title: title.to_string(),
        description: format!("{title} posting"),
        skills: skills.to_string(),
        salary,
        job_type: "Remote".to_string(),
        location: "Hamburg".to_string(),
    }
}

pub(super) fn build_service() -> (Arc<JobListingService<MemoryRepository>>, Arc<MemoryRepository>) {
    build_service_with(sample_board())
}

pub(super) fn build_service_with(
    seed: Vec<JobListing>,
) -> (Arc<JobListingService<MemoryRepository>>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::with_listings(seed));
    let service = Arc::new(JobListingService::new(repository.clone()));
    (service, repository)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is json")
}

pub(super) struct MemoryRepository {
    listings: Mutex<HashMap<i32, JobListing>>,
    next_id: AtomicI32,
}

impl Default for MemoryRepository {
    fn default() -> Self {
        Self::with_listings(Vec::new())
    }
}

impl MemoryRepository {
    pub(super) fn with_listings(seed: Vec<JobListing>) -> Self {
        let next_id = seed.iter().map(|row| row.id).max().unwrap_or(0) + 1;
        Self {
            listings: Mutex::new(seed.into_iter().map(|row| (row.id, row)).collect()),
            next_id: AtomicI32::new(next_id),
        }
    }

    pub(super) fn snapshot(&self) -> Vec<JobListing> {
        let guard = self.listings.lock().expect("repository mutex poisoned");
        sorted_by_id(guard.values().cloned().collect())
    }
}

fn sorted_by_id(mut rows: Vec<JobListing>) -> Vec<JobListing> {
    rows.sort_by_key(|row| row.id);
    rows
}

#[async_trait]
impl JobListingRepository for MemoryRepository {
    async fn search(
        &self,
        criteria: &JobSearchCriteria,
    ) -> Result<Vec<JobListing>, RepositoryError> {
        self.query(ListingQuery::from_criteria(criteria)).await
    }

    async fn list_by_employer(
        &self,
        employer_id: i32,
    ) -> Result<Vec<JobListing>, RepositoryError> {
        let guard = self.listings.lock().expect("repository mutex poisoned");
        Ok(sorted_by_id(
            guard
                .values()
                .filter(|row| row.employer_id == employer_id)
                .cloned()
                .collect(),
        ))
    }

    async fn get(&self, id: i32) -> Result<Option<JobListing>, RepositoryError> {
        let guard = self.listings.lock().expect("repository mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    async fn insert(&self, mut listing: JobListing) -> Result<JobListing, RepositoryError> {
        listing.id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut guard = self.listings.lock().expect("repository mutex poisoned");
        guard.insert(listing.id, listing.clone());
        Ok(listing)
    }

    async fn update(&self, listing: JobListing) -> Result<(), RepositoryError> {
        let mut guard = self.listings.lock().expect("repository mutex poisoned");
        if guard.contains_key(&listing.id) {
            guard.insert(listing.id, listing);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    async fn delete(&self, id: i32) -> Result<(), RepositoryError> {
        let mut guard = self.listings.lock().expect("repository mutex poisoned");
        guard.remove(&id);
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<JobListing>, RepositoryError> {
        let guard = self.listings.lock().expect("repository mutex poisoned");
        Ok(sorted_by_id(guard.values().cloned().collect()))
    }

    async fn query(&self, query: ListingQuery) -> Result<Vec<JobListing>, RepositoryError> {
        let guard = self.listings.lock().expect("repository mutex poisoned");
        Ok(sorted_by_id(
            guard
                .values()
                .filter(|row| query.matches(row))
                .cloned()
                .collect(),
        ))
    }
}

/// Repository whose `search` answers a canned result set no matter the
/// criteria, so tests can prove the service treats search as opaque.
pub(super) struct CannedSearchRepository {
    pub(super) results: Vec<JobListing>,
}

#[async_trait]
impl JobListingRepository for CannedSearchRepository {
    async fn search(
        &self,
        _criteria: &JobSearchCriteria,
    ) -> Result<Vec<JobListing>, RepositoryError> {
        Ok(self.results.clone())
    }

    async fn list_by_employer(
        &self,
        _employer_id: i32,
    ) -> Result<Vec<JobListing>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn get(&self, _id: i32) -> Result<Option<JobListing>, RepositoryError> {
        Ok(None)
    }

    async fn insert(&self, _listing: JobListing) -> Result<JobListing, RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    async fn update(&self, _listing: JobListing) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    async fn delete(&self, _id: i32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("read only".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<JobListing>, RepositoryError> {
        Ok(Vec::new())
    }

    async fn query(&self, _query: ListingQuery) -> Result<Vec<JobListing>, RepositoryError> {
        Ok(Vec::new())
    }
}

pub(super) struct UnavailableRepository;

#[async_trait]
impl JobListingRepository for UnavailableRepository {
    async fn search(
        &self,
        _criteria: &JobSearchCriteria,
    ) -> Result<Vec<JobListing>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn list_by_employer(
        &self,
        _employer_id: i32,
    ) -> Result<Vec<JobListing>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn get(&self, _id: i32) -> Result<Option<JobListing>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn insert(&self, _listing: JobListing) -> Result<JobListing, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn update(&self, _listing: JobListing) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn delete(&self, _id: i32) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn list_all(&self) -> Result<Vec<JobListing>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    async fn query(&self, _query: ListingQuery) -> Result<Vec<JobListing>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
