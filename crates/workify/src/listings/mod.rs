//! Job-listing domain: entity and transfer shapes, the repository contract,
//! query composition for search filters, and the service orchestrating them.

pub mod domain;
pub mod dto;
mod mapper;
pub mod query;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::JobListing;
pub use dto::{JobListingDraft, JobListingView, JobSearchCriteria};
pub use query::ListingQuery;
pub use repository::{JobListingRepository, RepositoryError};
pub use router::listing_router;
pub use service::{JobListingService, ListingServiceError};
