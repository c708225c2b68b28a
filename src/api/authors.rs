//! Author endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{ApiResponse, AuthenticatedUser, ValidatedJson, ValidatedPath};
use crate::{
    error::AppResult,
    models::author::{AuthorResponse, CreateAuthor, UpdateAuthor},
    AppState,
};

/// Create an author
#[utoipa::path(
    post,
    path = "/author",
    tag = "authors",
    security(("bearer_auth" = [])),
    request_body = CreateAuthor,
    responses(
        (status = 201, description = "Author created", body = AuthorResponse),
        (status = 400, description = "Invalid author", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_author(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateAuthor>,
) -> AppResult<(StatusCode, Json<ApiResponse<AuthorResponse>>)> {
    let author = state.services.authors.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_data("Author created successfully", author),
    ))
}

/// List authors
#[utoipa::path(
    get,
    path = "/author",
    tag = "authors",
    responses(
        (status = 200, description = "List of authors", body = Vec<AuthorResponse>)
    )
)]
pub async fn list_authors(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<AuthorResponse>>>> {
    let authors = state.services.authors.get_list().await?;
    Ok(ApiResponse::with_data("List of authors", authors))
}

/// Get author by ID
#[utoipa::path(
    get,
    path = "/author/{id}",
    tag = "authors",
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author details", body = AuthorResponse),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_author(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<AuthorResponse>>> {
    let author = state.services.authors.get_by_id(id).await?;
    Ok(ApiResponse::with_data("Author details", author))
}

/// Update an author
#[utoipa::path(
    put,
    path = "/author/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author ID")),
    request_body = UpdateAuthor,
    responses(
        (status = 200, description = "Author updated"),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_author(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(data): ValidatedJson<UpdateAuthor>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.authors.update(id, &data).await?;
    Ok(ApiResponse::message("Author updated successfully"))
}

/// Delete an author
#[utoipa::path(
    delete,
    path = "/author/{id}",
    tag = "authors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Author ID")),
    responses(
        (status = 200, description = "Author deleted"),
        (status = 404, description = "Author not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_author(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.authors.delete(id).await?;
    Ok(ApiResponse::message("Author deleted successfully"))
}
