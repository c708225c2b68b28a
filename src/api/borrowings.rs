//! Borrowing endpoints

use axum::{
    extract::State,
    http::StatusCode,
    Json,
};

use super::{ApiResponse, AuthenticatedUser, ValidatedJson, ValidatedPath};
use crate::{
    error::AppResult,
    models::borrowing::{BorrowingResponse, CreateBorrowing, UpdateBorrowing},
    AppState,
};

/// Record a borrowing
#[utoipa::path(
    post,
    path = "/borrow",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    request_body = CreateBorrowing,
    responses(
        (status = 201, description = "Borrowing created", body = BorrowingResponse),
        (status = 400, description = "Invalid borrowing", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_borrowing(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateBorrowing>,
) -> AppResult<(StatusCode, Json<ApiResponse<BorrowingResponse>>)> {
    let borrowing = state.services.borrowings.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_data("Borrowing created successfully", borrowing),
    ))
}

/// List borrowings with their book and person
#[utoipa::path(
    get,
    path = "/borrow",
    tag = "borrowings",
    responses(
        (status = 200, description = "List of borrowings", body = Vec<BorrowingResponse>)
    )
)]
pub async fn list_borrowings(
    State(state): State<AppState>,
) -> AppResult<Json<ApiResponse<Vec<BorrowingResponse>>>> {
    let borrowings = state.services.borrowings.get_list().await?;
    Ok(ApiResponse::with_data("List of borrowings", borrowings))
}

/// Get borrowing by ID
#[utoipa::path(
    get,
    path = "/borrow/{id}",
    tag = "borrowings",
    params(("id" = i64, Path, description = "Borrowing ID")),
    responses(
        (status = 200, description = "Borrowing details", body = BorrowingResponse),
        (status = 404, description = "Borrowing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_borrowing(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<BorrowingResponse>>> {
    let borrowing = state.services.borrowings.get_by_id(id).await?;
    Ok(ApiResponse::with_data("Borrowing details", borrowing))
}

/// Set or clear the return date of a borrowing
#[utoipa::path(
    put,
    path = "/borrow/{id}",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Borrowing ID")),
    request_body = UpdateBorrowing,
    responses(
        (status = 200, description = "Borrowing updated"),
        (status = 404, description = "Borrowing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_borrowing(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(data): ValidatedJson<UpdateBorrowing>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.borrowings.update(id, &data).await?;
    Ok(ApiResponse::message("Borrowing updated successfully"))
}

/// Delete a borrowing
#[utoipa::path(
    delete,
    path = "/borrow/{id}",
    tag = "borrowings",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Borrowing ID")),
    responses(
        (status = 200, description = "Borrowing deleted"),
        (status = 404, description = "Borrowing not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_borrowing(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.borrowings.delete(id).await?;
    Ok(ApiResponse::message("Borrowing deleted successfully"))
}
