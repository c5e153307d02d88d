use axum::Router;

use crate::state::AppState;

pub mod customers;
pub mod doc;
pub mod employees;
pub mod health;
pub mod orders;
pub mod products;
pub mod suppliers;

// Build the API router without binding state; it is provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .nest("/customers", customers::router())
        .nest("/employees", employees::router())
        .nest("/suppliers", suppliers::router())
        .nest("/products", products::router())
        .nest("/orders", orders::router())
}
