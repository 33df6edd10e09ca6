use axum::{extract::{Path, State}, Json};
use models::service::{Model as ServiceModel, ServiceSummary};
use serde_json::Value;
use service::ids::parse_id;
use tracing::info;

use crate::errors::JsonApiError;
use crate::state::ServerState;

#[utoipa::path(
    get, path = "/services", tag = "services",
    responses((status = 200, description = "Every catalog entry"))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Value>>, JsonApiError> {
    let services = state.catalog.list().await?;
    info!(count = services.len(), "list services");
    Ok(Json(services.iter().map(ServiceModel::to_document).collect()))
}

/// Projected lookup; an unknown but well-formed id is `null`, not 404.
#[utoipa::path(
    get, path = "/services/{id}", tag = "services",
    params(("id" = String, Path, description = "Service identifier")),
    responses(
        (status = 200, description = "Projection or null", body = crate::openapi::ServiceSummaryDoc),
        (status = 400, description = "Invalid Identifier", body = crate::openapi::ErrorBodyDoc)
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Option<ServiceSummary>>, JsonApiError> {
    let id = parse_id(&id)?;
    let found = state.catalog.get(id).await?;
    Ok(Json(found.as_ref().map(ServiceSummary::from)))
}
