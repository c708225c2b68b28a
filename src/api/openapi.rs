//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{Http, HttpAuthScheme, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{accounts, authors, books, borrowings, health, persons, publishers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bibliotheca API",
        version = "1.0.0",
        description = "Library catalog and borrowing REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Accounts
        accounts::register,
        accounts::login,
        // Persons
        persons::list_persons,
        persons::get_person,
        persons::create_person,
        persons::update_person,
        persons::delete_person,
        // Publishers
        publishers::list_publishers,
        publishers::get_publisher,
        publishers::create_publisher,
        publishers::update_publisher,
        publishers::delete_publisher,
        // Authors
        authors::list_authors,
        authors::get_author,
        authors::create_author,
        authors::update_author,
        authors::delete_author,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        books::update_book,
        books::delete_book,
        // Borrowings
        borrowings::list_borrowings,
        borrowings::get_borrowing,
        borrowings::create_borrowing,
        borrowings::update_borrowing,
        borrowings::delete_borrowing,
    ),
    components(
        schemas(
            crate::models::enums::Gender,
            // Accounts
            crate::models::account::RegisterAccount,
            crate::models::account::LoginRequest,
            crate::models::account::LoginResponse,
            crate::models::account::AccountResponse,
            // Persons
            crate::models::person::PersonRequest,
            crate::models::person::PersonResponse,
            crate::models::person::PersonSummary,
            // Publishers
            crate::models::publisher::PublisherRequest,
            crate::models::publisher::PublisherResponse,
            crate::models::publisher::PublisherSummary,
            // Authors
            crate::models::author::CreateAuthor,
            crate::models::author::UpdateAuthor,
            crate::models::author::AuthorResponse,
            crate::models::author::AuthorSummary,
            // Books
            crate::models::book::CreateBook,
            crate::models::book::UpdateBook,
            crate::models::book::BookResponse,
            crate::models::book::BookSummary,
            // Borrowings
            crate::models::borrowing::CreateBorrowing,
            crate::models::borrowing::UpdateBorrowing,
            crate::models::borrowing::BorrowingResponse,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "accounts", description = "Account registration and login"),
        (name = "persons", description = "Borrower management"),
        (name = "publishers", description = "Publisher management"),
        (name = "authors", description = "Author management"),
        (name = "books", description = "Book catalog"),
        (name = "borrowings", description = "Borrowing records")
    )
)]
pub struct ApiDoc;

/// Registers the `bearer_auth` scheme referenced by write endpoints
struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
