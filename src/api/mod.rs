//! API handlers for Bookshelf REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use axum::{
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{request_log, AppState};

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let books = Router::new()
        .route("/", get(books::list_books).post(books::create_book))
        .route("/count", get(books::count_books))
        .route("/health", get(health::health_check))
        .route("/isbn/:isbn", get(books::get_book_by_isbn))
        .route("/search/author", get(books::search_by_author))
        .route("/search/title", get(books::search_by_title))
        .route(
            "/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .with_state(state.clone());

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/books", books)
        .merge(openapi)
        .layer(middleware::from_fn_with_state(
            state,
            request_log::log_requests,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
