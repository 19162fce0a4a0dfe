//! Core building blocks for the Workify job board backend: the job-listing
//! domain, its repository contract, and the service layer, plus the
//! configuration, telemetry, and error plumbing shared with the API binary.

pub mod config;
pub mod error;
pub mod listings;
pub mod telemetry;
