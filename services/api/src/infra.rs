use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use metrics_exporter_prometheus::PrometheusHandle;
use workify::listings::{
    JobListing, JobListingDraft, JobListingRepository, JobSearchCriteria, ListingQuery,
    RepositoryError,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Map-backed repository standing in for a real database. Ids are assigned
/// from a monotonically increasing sequence; scans come back sorted by id so
/// output is deterministic, which callers must not rely on.
pub(crate) struct InMemoryJobListingRepository {
    listings: Mutex<HashMap<i32, JobListing>>,
    next_id: AtomicI32,
}

impl Default for InMemoryJobListingRepository {
    fn default() -> Self {
        Self {
            listings: Mutex::new(HashMap::new()),
            next_id: AtomicI32::new(1),
        }
    }
}

fn sorted_by_id(mut rows: Vec<JobListing>) -> Vec<JobListing> {
    rows.sort_by_key(|row| row.id);
    rows
}

#[async_trait]
impl JobListingRepository for InMemoryJobListingRepository {
    async fn search(
        &self,
        criteria: &JobSearchCriteria,
    ) -> Result<Vec<JobListing>, RepositoryError> {
        // This backend's own search semantics mirror the composed filter.
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
        // Removing an unknown id is a no-op for this backend.
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

/// Sample postings so the service is browsable without a write first.
pub(crate) fn sample_drafts() -> Vec<JobListingDraft> {
    vec![
        JobListingDraft {
            employer_id: 1,
            title: "Backend Engineer".to_string(),
            description: "Build and operate the listing APIs.".to_string(),
            skills: "Go Developer, PostgreSQL".to_string(),
            salary: 95_000.0,
            job_type: "Remote".to_string(),
            location: "Berlin".to_string(),
        },
        JobListingDraft {
            employer_id: 1,
            title: "Enterprise Developer".to_string(),
            description: "Maintain the internal billing integrations.".to_string(),
            skills: "Java".to_string(),
            salary: 50_000.0,
            job_type: "Hybrid".to_string(),
            location: "Munich".to_string(),
        },
        JobListingDraft {
            employer_id: 2,
            title: "Systems Engineer".to_string(),
            description: "Own the ingestion pipeline.".to_string(),
            skills: "Rust, Tokio".to_string(),
            salary: 70_000.0,
            job_type: "remote".to_string(),
            location: "Hamburg".to_string(),
        },
        JobListingDraft {
            employer_id: 3,
            title: "Web Developer".to_string(),
            description: "Ship the employer dashboard.".to_string(),
            skills: "Python, Django".to_string(),
            salary: 45_000.0,
            job_type: "Remote".to_string(),
            location: "Cologne".to_string(),
        },
    ]
}

pub(crate) async fn seed_listings(
    repository: &InMemoryJobListingRepository,
) -> Result<usize, RepositoryError> {
    let drafts = sample_drafts();
    let count = drafts.len();
    for draft in drafts {
        repository
            .insert(JobListing::from_draft(draft, Utc::now()))
            .await?;
    }
    Ok(count)
}
