//! Person endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{ApiResponse, AuthenticatedUser, ValidatedJson, ValidatedPath};
use crate::{
    error::AppResult,
    models::person::{PersonResponse, PersonRequest},
    AppState,
};

/// Create a person
#[utoipa::path(
    post,
    path = "/persons",
    tag = "persons",
    security(("bearer_auth" = [])),
    request_body = PersonRequest,
    responses(
        (status = 201, description = "Person created", body = PersonResponse),
        (status = 400, description = "Invalid person", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<PersonRequest>,
) -> AppResult<(StatusCode, Json<ApiResponse<PersonResponse>>)> {
    let person = state.services.persons.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_data("Person created successfully", person),
    ))
}

/// List persons
#[utoipa::path(
    get,
    path = "/persons",
    tag = "persons",
    responses(
        (status = 200, description = "List of persons", body = Vec<PersonResponse>)
    )
)]
pub async fn list_persons(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<PersonResponse>>>> {
    let persons = state.services.persons.get_list().await?;
    Ok(ApiResponse::with_data("List of persons", persons))
}

/// Get person by ID
#[utoipa::path(
    get,
    path = "/persons/{id}",
    tag = "persons",
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person details", body = PersonResponse),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<PersonResponse>>> {
    let person = state.services.persons.get_by_id(id).await?;
    Ok(ApiResponse::with_data("Person details", person))
}

/// Update a person
#[utoipa::path(
    put,
    path = "/persons/{id}",
    tag = "persons",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Person ID")),
    request_body = PersonRequest,
    responses(
        (status = 200, description = "Person updated"),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_person(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(data): ValidatedJson<PersonRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.persons.update(id, &data).await?;
    Ok(ApiResponse::message("Person updated successfully"))
}

/// Delete a person
#[utoipa::path(
    delete,
    path = "/persons/{id}",
    tag = "persons",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person deleted"),
        (status = 404, description = "Person not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.persons.delete(id).await?;
    Ok(ApiResponse::message("Person deleted successfully"))
}
