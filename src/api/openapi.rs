//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{authors, books, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Book Service API",
        version = "1.0.0",
        description = "Book & Author catalog REST API",
        license(name = "Apache-2.0", url = "https://www.apache.org/licenses/LICENSE-2.0")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Authors
        authors::get_author,
        authors::create_author,
        authors::list_authors,
        authors::delete_author,
        // Books
        books::get_book,
        books::create_book,
        books::list_books,
        books::delete_book,
    ),
    components(
        schemas(
            health::HealthResponse,
            crate::error::ErrorResponse,
            crate::models::Author,
            crate::models::AuthorWithBooks,
            crate::models::AuthorSummary,
            crate::models::CreateAuthor,
            crate::models::Book,
            crate::models::CreateBook,
            crate::models::Genre,
            crate::models::pagination::AuthorPage,
            crate::models::pagination::BookPage,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "authors", description = "Author resource"),
        (name = "books", description = "Book resource"),
        (name = "health", description = "Service health")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "basic_auth",
                SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Basic).build()),
            );
        }
    }
}

/// Create router serving the Swagger UI and the OpenAPI document
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
