//! Book endpoints

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

use super::{ApiResponse, AuthenticatedUser, ValidatedJson, ValidatedPath};
use crate::{
    error::AppResult,
    models::book::{BookFilter, BookResponse, CreateBook, UpdateBook},
    AppState,
};

/// Create a book
#[utoipa::path(
    post,
    path = "/book",
    tag = "books",
    security(("bearer_auth" = [])),
    request_body = CreateBook,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Invalid book", body = crate::error::ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedJson(data): ValidatedJson<CreateBook>,
) -> AppResult<(StatusCode, Json<ApiResponse<BookResponse>>)> {
    let book = state.services.books.create(&data).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_data("Book created successfully", book),
    ))
}

/// List books with their publisher and author
#[utoipa::path(
    get,
    path = "/book",
    tag = "books",
    params(BookFilter),
    responses(
        (status = 200, description = "List of books", body = Vec<BookResponse>)
    )
)]
pub async fn list_books(
    State(state): State<AppState>,
    Query(filter): Query<BookFilter>,
) -> AppResult<Json<ApiResponse<Vec<BookResponse>>>> {
    let books = state.services.books.get_list(&filter).await?;
    Ok(ApiResponse::with_data("List of books", books))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/book/{id}",
    tag = "books",
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<BookResponse>>> {
    let book = state.services.books.get_by_id(id).await?;
    Ok(ApiResponse::with_data("Book details", book))
}

/// Update a book
#[utoipa::path(
    put,
    path = "/book/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    request_body = UpdateBook,
    responses(
        (status = 200, description = "Book updated"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
    ValidatedJson(data): ValidatedJson<UpdateBook>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.books.update(id, &data).await?;
    Ok(ApiResponse::message("Book updated successfully"))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/book/{id}",
    tag = "books",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted"),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    ValidatedPath(id): ValidatedPath<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    state.services.books.delete(id).await?;
    Ok(ApiResponse::message("Book deleted successfully"))
}
