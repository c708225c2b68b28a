//! Account registration and login endpoints

use axum::{extract::State, http::StatusCode, Json};

use super::{ApiResponse, ValidatedJson};
use crate::{
    error::AppResult,
    models::account::{AccountResponse, LoginRequest, LoginResponse, RegisterAccount},
    AppState,
};

/// Register a new account
#[utoipa::path(
    post,
    path = "/accounts",
    tag = "accounts",
    request_body = RegisterAccount,
    responses(
        (status = 201, description = "Account created", body = AccountResponse),
        (status = 400, description = "Invalid account", body = crate::error::ErrorResponse),
        (status = 409, description = "Username already taken", body = crate::error::ErrorResponse)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(data): ValidatedJson<RegisterAccount>,
) -> AppResult<(StatusCode, Json<ApiResponse<AccountResponse>>)> {
    let account = state.services.accounts.register(&data).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::with_data("Account created successfully", account),
    ))
}

/// Login and receive a bearer token
#[utoipa::path(
    post,
    path = "/accounts/login",
    tag = "accounts",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = crate::error::ErrorResponse)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> AppResult<Json<ApiResponse<LoginResponse>>> {
    let response = state
        .services
        .accounts
        .login(&request.username, &request.password)
        .await?;
    Ok(ApiResponse::with_data("Login successful", response))
}
