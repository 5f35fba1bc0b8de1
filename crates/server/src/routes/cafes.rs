use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use models::{cafe::CafeSubmission, errors::ValidationError};
use service::errors::ServiceError;
use tracing::info;

use crate::{errors::AppError, metrics, routes::ServerState, views};

const DUPLICATE_NAME: &str = "A cafe with this name already exists.";

pub async fn home() -> Html<String> {
    views::index()
}

pub async fn all_cafes(State(state): State<ServerState>) -> Result<Html<String>, AppError> {
    let cafes = state.cafes.list_all().await?;
    info!(count = cafes.len(), "list cafes");
    Ok(views::all_cafes(&cafes))
}

pub async fn add_form() -> Html<String> {
    views::add_form(&CafeSubmission::default(), None)
}

/// Validation and duplicate-name failures bounce back to the form; only
/// storage failures become an error page.
pub async fn add_cafe(
    State(state): State<ServerState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let sub: CafeSubmission = pairs.into_iter().collect();
    match state.cafes.submit(&sub).await {
        Ok(_) => {
            metrics::CAFES_CREATED_TOTAL.inc();
            Ok(Redirect::to("/all").into_response())
        }
        Err(ServiceError::Validation(errors)) => {
            metrics::record_rejection("validation");
            Ok((StatusCode::UNPROCESSABLE_ENTITY, views::add_form(&sub, Some(&errors))).into_response())
        }
        Err(ServiceError::DuplicateName(_)) => {
            metrics::record_rejection("duplicate_name");
            let errors = ValidationError::single("name", DUPLICATE_NAME);
            Ok((StatusCode::CONFLICT, views::add_form(&sub, Some(&errors))).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// Unknown ids redirect exactly like successful deletes.
pub async fn delete_cafe(State(state): State<ServerState>, Path(id): Path<i32>) -> Result<Redirect, AppError> {
    match state.cafes.delete(id).await {
        Ok(()) => metrics::CAFES_DELETED_TOTAL.inc(),
        Err(ServiceError::NotFound(_)) => {}
        Err(e) => return Err(e.into()),
    }
    Ok(Redirect::to("/all"))
}
