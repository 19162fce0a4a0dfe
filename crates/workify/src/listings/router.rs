use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Router,
};
use serde_json::json;

use super::dto::{JobListingDraft, JobSearchCriteria};
use super::repository::JobListingRepository;
use super::service::{JobListingService, ListingServiceError};

/// Router builder exposing the listing service over HTTP.
pub fn listing_router<R>(service: Arc<JobListingService<R>>) -> Router
where
    R: JobListingRepository + 'static,
{
    Router::new()
        .route("/api/v1/jobs", get(list_all_handler::<R>))
        .route("/api/v1/jobs", post(create_handler::<R>))
        .route("/api/v1/jobs/:id", get(get_handler::<R>))
        .route("/api/v1/jobs/:id", put(update_handler::<R>))
        .route("/api/v1/jobs/:id", delete(delete_handler::<R>))
        .route(
            "/api/v1/jobs/employer/:employer_id",
            get(list_by_employer_handler::<R>),
        )
        .route("/api/v1/jobs/search", post(search_handler::<R>))
        .route("/api/v1/jobs/filter", post(filter_handler::<R>))
        .with_state(service)
}

pub(crate) async fn list_all_handler<R>(
    State(service): State<Arc<JobListingService<R>>>,
) -> Response
where
    R: JobListingRepository + 'static,
{
    match service.list_all().await {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn get_handler<R>(
    State(service): State<Arc<JobListingService<R>>>,
    Path(id): Path<i32>,
) -> Response
where
    R: JobListingRepository + 'static,
{
    match service.get(id).await {
        Ok(Some(view)) => (StatusCode::OK, axum::Json(view)).into_response(),
        Ok(None) => not_found_response(id),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn create_handler<R>(
    State(service): State<Arc<JobListingService<R>>>,
    axum::Json(draft): axum::Json<JobListingDraft>,
) -> Response
where
    R: JobListingRepository + 'static,
{
    match service.create(draft).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_handler<R>(
    State(service): State<Arc<JobListingService<R>>>,
    Path(id): Path<i32>,
    axum::Json(draft): axum::Json<JobListingDraft>,
) -> Response
where
    R: JobListingRepository + 'static,
{
    match service.update(id, draft).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(ListingServiceError::NotFound { id }) => not_found_response(id),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn delete_handler<R>(
    State(service): State<Arc<JobListingService<R>>>,
    Path(id): Path<i32>,
) -> Response
where
    R: JobListingRepository + 'static,
{
    match service.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn list_by_employer_handler<R>(
    State(service): State<Arc<JobListingService<R>>>,
    Path(employer_id): Path<i32>,
) -> Response
where
    R: JobListingRepository + 'static,
{
    match service.list_by_employer(employer_id).await {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn search_handler<R>(
    State(service): State<Arc<JobListingService<R>>>,
    axum::Json(criteria): axum::Json<JobSearchCriteria>,
) -> Response
where
    R: JobListingRepository + 'static,
{
    match service.search(&criteria).await {
        Ok(views) => (StatusCode::OK, axum::Json(views)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn filter_handler<R>(
    State(service): State<Arc<JobListingService<R>>>,
    axum::Json(criteria): axum::Json<JobSearchCriteria>,
) -> Response
where
    R: JobListingRepository + 'static,
{
    match service.filter(&criteria).await {
        Ok(drafts) => (StatusCode::OK, axum::Json(drafts)).into_response(),
        Err(error) => error_response(error),
    }
}

fn not_found_response(id: i32) -> Response {
    let payload = json!({
        "error": format!("job listing {id} not found"),
    });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}

fn error_response(error: ListingServiceError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
