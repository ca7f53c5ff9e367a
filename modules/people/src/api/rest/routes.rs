use axum::{routing::get, Extension, Router};
use std::sync::Arc;

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Build the application router with the service attached.
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/", get(handlers::list_people))
        .route(
            "/add",
            get(handlers::add_person_form).post(handlers::create_person),
        )
        .route(
            "/edit/{id}",
            get(handlers::edit_person_form).post(handlers::update_person),
        )
        .route("/delete/{id}", get(handlers::delete_person))
        .fallback(handlers::not_found)
        .layer(Extension(service))
}
