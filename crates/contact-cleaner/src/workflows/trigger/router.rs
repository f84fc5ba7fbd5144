use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};

use super::{CleanupTrigger, ObjectCreatedEvent};
use crate::error::AppError;
use crate::storage::ObjectStore;
use crate::workflows::contacts::ContactCleaner;

const ACCEPTED_HEADER: &str = "x-contacts-accepted";
const REJECTED_MISSING_HEADER: &str = "x-contacts-rejected-missing";
const REJECTED_DUPLICATE_HEADER: &str = "x-contacts-rejected-duplicate";

/// Router builder exposing the cleaner and the object-created trigger over HTTP.
pub fn contacts_router<S>(trigger: Arc<CleanupTrigger<S>>) -> Router
where
    S: ObjectStore + 'static,
{
    Router::new()
        .route("/api/v1/contacts/clean", post(clean_handler))
        .route(
            "/api/v1/events/object-created",
            post(object_created_handler::<S>),
        )
        .with_state(trigger)
}

pub(crate) async fn clean_handler(body: Bytes) -> Result<Response, AppError> {
    let (cleaned, summary) = ContactCleaner::clean_bytes(&body)?;

    let mut response = (
        StatusCode::OK,
        [(header::CONTENT_TYPE, mime::TEXT_CSV.essence_str())],
        cleaned,
    )
        .into_response();

    let headers = response.headers_mut();
    headers.insert(ACCEPTED_HEADER, HeaderValue::from(summary.accepted));
    headers.insert(
        REJECTED_MISSING_HEADER,
        HeaderValue::from(summary.rejected_missing_field),
    );
    headers.insert(
        REJECTED_DUPLICATE_HEADER,
        HeaderValue::from(summary.rejected_duplicate_phone),
    );

    Ok(response)
}

pub(crate) async fn object_created_handler<S>(
    State(trigger): State<Arc<CleanupTrigger<S>>>,
    Json(event): Json<ObjectCreatedEvent>,
) -> Result<Response, AppError>
where
    S: ObjectStore + 'static,
{
    // Stores may do blocking file IO, so the run happens off the async workers.
    let reply = tokio::task::spawn_blocking(move || trigger.handle(&event)).await??;
    let status = StatusCode::from_u16(reply.status_code).unwrap_or(StatusCode::OK);
    Ok((status, Json(reply)).into_response())
}
