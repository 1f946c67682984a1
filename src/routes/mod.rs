pub mod admin;
pub mod contact;

use axum::Router;
use axum::routing::{delete, get, post};

use crate::state::SharedState;

pub fn contact_routes() -> Router<SharedState> {
    Router::new().route(
        "/api/contact",
        post(contact::submit)
            .options(contact::preflight)
            .fallback(contact::method_not_allowed),
    )
}

/// Administrative surface. Authentication is an external collaborator's
/// concern; these routes only honor the store's list/delete contract.
pub fn admin_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/admin/submissions", get(admin::list))
        .route("/api/admin/submissions/{id}", delete(admin::delete))
}
