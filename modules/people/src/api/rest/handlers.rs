use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Extension, Form,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;

use crate::api::rest::dto::{ListParams, PersonForm};
use crate::api::rest::notice::Notice;
use crate::api::rest::pages;
use crate::domain::error::DomainError;
use crate::domain::service::{Service, UpdateOutcome};

const GENERIC_DB_ERROR: &str = "Database connection error. Please try again later.";

fn redirect_to_listing(notice: Notice) -> Redirect {
    Redirect::to(&format!("/?{}", notice.to_query()))
}

fn not_found_redirect() -> Response {
    redirect_to_listing(Notice::danger("Person not found.")).into_response()
}

/// Path ids are opaque; anything that is not a well-formed UUID cannot
/// name a record and is treated as not-found.
fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

pub async fn list_people(
    Extension(svc): Extension<Arc<Service>>,
    Query(params): Query<ListParams>,
) -> Response {
    let query = params.to_query();

    match svc.list_people(&query).await {
        Ok(page) => Html(pages::listing(&page, &query, params.notice())).into_response(),
        Err(e) => {
            error!("Failed to list people: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html(pages::server_error(GENERIC_DB_ERROR)),
            )
                .into_response()
        }
    }
}

pub async fn add_person_form() -> Html<String> {
    Html(pages::add_form(&PersonForm::default(), None))
}

pub async fn create_person(
    Extension(svc): Extension<Arc<Service>>,
    Form(form): Form<PersonForm>,
) -> Response {
    match svc.create_person(form.clone().into()).await {
        Ok(_) => redirect_to_listing(Notice::success("Person added successfully!")).into_response(),
        Err(DomainError::Validation { message, .. }) => {
            Html(pages::add_form(&form, Some(Notice::danger(message)))).into_response()
        }
        Err(e) => {
            error!("Failed to add person: {e}");
            Html(pages::add_form(
                &form,
                Some(Notice::danger("An error occurred while adding the person.")),
            ))
            .into_response()
        }
    }
}

pub async fn edit_person_form(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found_redirect();
    };

    match svc.get_person(id).await {
        Ok(person) => Html(pages::edit_form(&person, None)).into_response(),
        Err(DomainError::PersonNotFound { .. }) => not_found_redirect(),
        Err(e) => {
            error!("Failed to load person {id}: {e}");
            redirect_to_listing(Notice::danger("An error occurred.")).into_response()
        }
    }
}

pub async fn update_person(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
    Form(form): Form<PersonForm>,
) -> Response {
    let Some(id) = parse_id(&id) else {
        return not_found_redirect();
    };

    // The stored record backs the re-rendered form on validation failure.
    let current = match svc.get_person(id).await {
        Ok(p) => p,
        Err(DomainError::PersonNotFound { .. }) => return not_found_redirect(),
        Err(e) => {
            error!("Failed to load person {id}: {e}");
            return redirect_to_listing(Notice::danger("An error occurred.")).into_response();
        }
    };

    match svc.update_person(id, form.into()).await {
        Ok(UpdateOutcome::Updated(_)) => {
            redirect_to_listing(Notice::success("Person updated successfully!")).into_response()
        }
        Ok(UpdateOutcome::Unchanged(person)) => Html(pages::edit_form(
            &person,
            Some(Notice::info("No changes were made.")),
        ))
        .into_response(),
        Err(DomainError::Validation { message, .. }) => {
            Html(pages::edit_form(&current, Some(Notice::danger(message)))).into_response()
        }
        Err(DomainError::PersonNotFound { .. }) => not_found_redirect(),
        Err(e) => {
            error!("Failed to update person {id}: {e}");
            Html(pages::edit_form(
                &current,
                Some(Notice::danger(
                    "An error occurred while updating the person.",
                )),
            ))
            .into_response()
        }
    }
}

pub async fn delete_person(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<String>,
) -> Redirect {
    let Some(id) = parse_id(&id) else {
        return redirect_to_listing(Notice::danger("Person not found."));
    };

    match svc.delete_person(id).await {
        Ok(()) => redirect_to_listing(Notice::success("Person deleted successfully!")),
        Err(DomainError::PersonNotFound { .. }) => {
            redirect_to_listing(Notice::danger("Person not found."))
        }
        Err(e) => {
            error!("Failed to delete person {id}: {e}");
            redirect_to_listing(Notice::danger("An error occurred while deleting the person."))
        }
    }
}

pub async fn not_found() -> (StatusCode, Html<String>) {
    (StatusCode::NOT_FOUND, Html(pages::not_found()))
}
