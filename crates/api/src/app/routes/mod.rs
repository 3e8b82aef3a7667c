use axum::Router;

pub mod common;
pub mod customers;
pub mod products;
pub mod system;

/// Router for all `/api` endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/products", products::router())
}
