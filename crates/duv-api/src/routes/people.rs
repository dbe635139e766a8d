//! # People API
//!
//! CRUD over `/api/pessoas`. Crew without a `sid` get a generated one unless
//! `require_crew_service_id` is set, in which case creation is rejected.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};
use duv_core::errors::DuvError;
use duv_core::ops::person_ops;
use duv_core::rules::validation::non_blank;
use duv_core::{Person, Role};
use duv_core_types::RequestId;

use super::observe;
use crate::error::AppError;
use crate::extractors::{extract_json, parse_id, PersonRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/pessoas", get(list_people).post(create_person))
        .route(
            "/api/pessoas/:id",
            get(get_person).put(update_person).delete(delete_person),
        )
}

/// GET /api/pessoas
async fn list_people(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Person>>, AppError> {
    observe("list_people", &request_id, || {
        Ok(Json(state.read(person_ops::list_people)))
    })
}

/// GET /api/pessoas/:id
async fn get_person(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, AppError> {
    observe("read_person", &request_id, || {
        let id = parse_id(&id)?;
        let person = state.read(|store| person_ops::read_person(store, &id).cloned())?;
        Ok(Json(person))
    })
}

/// POST /api/pessoas
async fn create_person(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    body: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Person>), AppError> {
    observe("create_person", &request_id, || {
        let fields = extract_json(body)?.into_fields()?;

        if state.settings.require_crew_service_id
            && fields.role == Some(Role::Crew)
            && non_blank(fields.service_id.clone()).is_none()
        {
            return Err(DuvError::MissingField {
                field: "sid".to_string(),
            }
            .into());
        }

        let person = state.write(|store| person_ops::create_person(store, fields))?;
        Ok((StatusCode::CREATED, Json(person)))
    })
}

/// PUT /api/pessoas/:id
async fn update_person(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<PersonRequest>, JsonRejection>,
) -> Result<Json<Person>, AppError> {
    observe("update_person", &request_id, || {
        let id = parse_id(&id)?;
        let fields = extract_json(body)?.into_fields()?;
        let person = state.write(|store| person_ops::update_person(store, &id, fields))?;
        Ok(Json(person))
    })
}

/// DELETE /api/pessoas/:id
async fn delete_person(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    observe("delete_person", &request_id, || {
        let id = parse_id(&id)?;
        state.write(|store| person_ops::delete_person(store, &id))?;
        Ok(StatusCode::NO_CONTENT)
    })
}
