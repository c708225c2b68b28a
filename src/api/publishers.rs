//! Publisher endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{ApiResponse, AuthenticatedUser, ValidatedJson, ValidatedPath};
use crate::{
    error::AppResult,
    models::publisher::{PublisherResponse, PublisherRequest},
    AppState,
};

/// Create a publisher
#[utoipa::path(
    post,
    path = "/publishers",
    tag = "publishers",
    security(("bearer_auth" = [])),
    request_body = PublisherRequest,
    responses(
        (status = 201, description = "Publisher created", body = PublisherResponse),
        (status = 400, description = "Invalid publisher", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_publisher(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<PublisherRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<PublisherResponse>>)> {
    let publisher = state.services.publishers.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_data("Publisher created successfully", publisher),
    ))
}

/// List publishers
#[utoipa::path(
    get,
    path = "/publishers",
    tag = "publishers",
    responses(
        (status = 200, description = "List of publishers", body = Vec<PublisherResponse>)
    )
)]
pub async fn list_publishers(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<PublisherResponse>>>> {
    let publishers = state.services.publishers.get_list().await?;
    Ok(ApiResponse::with_data("List of publishers", publishers))
}

/// Get publisher by ID
#[utoipa::path(
    get,
    path = "/publishers/{id}",
    tag = "publishers",
    params(("id" = i64, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher details", body = PublisherResponse),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_publisher(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<PublisherResponse>>> {
    let publisher = state.services.publishers.get_by_id(id).await?;
    Ok(ApiResponse::with_data("Publisher details", publisher))
}

/// Update a publisher
#[utoipa::path(
    put,
    path = "/publishers/{id}",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Publisher ID")),
    request_body = PublisherRequest,
    responses(
        (status = 200, description = "Publisher updated"),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_publisher(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(data): ValidatedJson<PublisherRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.publishers.update(id, &data).await?;
    Ok(ApiResponse::message("Publisher updated successfully"))
}

/// Delete a publisher
#[utoipa::path(
    delete,
    path = "/publishers/{id}",
    tag = "publishers",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Publisher ID")),
    responses(
        (status = 200, description = "Publisher deleted"),
        (status = 404, description = "Publisher not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_publisher(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.publishers.delete(id).await?;
    Ok(ApiResponse::message("Publisher deleted successfully"))
}
