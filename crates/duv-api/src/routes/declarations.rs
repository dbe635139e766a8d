//! # Declarations API
//!
//! CRUD over `/api/duvs`.
//!
//! - The list returns stored records (ship and people as ids).
//! - `GET /api/duvs/:id` returns the populated view: the full ship, and the
//!   people that still exist in reference order.
//! - Create always checks that every reference exists. Update checks the
//!   references it is given using the configured policy.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};
use duv_core::errors::{DuvError, ExError, ExErrorKind};
use duv_core::ops::declaration_ops;
use duv_core::{populate_declaration, Declaration, DeclarationView};
use duv_core_types::RequestId;

use super::observe;
use crate::error::AppError;
use crate::extractors::{extract_json, parse_id, DeclarationRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/duvs", get(list_declarations).post(create_declaration))
        .route(
            "/api/duvs/:id",
            get(get_declaration)
                .put(update_declaration)
                .delete(delete_declaration),
        )
}

async fn list_declarations(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Declaration>>, AppError> {
    observe("list_declarations", &request_id, || {
        Ok(Json(state.read(declaration_ops::list_declarations)))
    })
}

async fn get_declaration(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeclarationView>, AppError> {
    observe("populate_declaration", &request_id, || {
        let id = parse_id(&id)?;
        let view = state
            .read(|store| populate_declaration(store, &id))
            .map_err(|err| match err {
                DuvError::ShipNotFound { ship_id } => AppError::Domain(
                    ExError::new(ExErrorKind::NotFound)
                        .with_entity_id(ship_id)
                        .with_message("Associated ship not found"),
                ),
                other => other.into(),
            })?;
        Ok(Json(view))
    })
}

async fn create_declaration(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    body: Result<Json<DeclarationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Declaration>), AppError> {
    observe("create_declaration", &request_id, || {
        let fields = extract_json(body)?.into_fields()?;
        let declaration =
            state.write(|store| declaration_ops::create_declaration(store, fields))?;
        Ok((StatusCode::CREATED, Json(declaration)))
    })
}

async fn update_declaration(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<DeclarationRequest>, JsonRejection>,
) -> Result<Json<Declaration>, AppError> {
    observe("update_declaration", &request_id, || {
        let id = parse_id(&id)?;
        let fields = extract_json(body)?.into_fields()?;
        let policy = state.declaration_update_policy();
        tracing::debug!(policy = policy.name(), "checking declaration references");

        let declaration = state
            .write(|store| declaration_ops::update_declaration(store, &id, fields, policy))?;
        Ok(Json(declaration))
    })
}

async fn delete_declaration(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    observe("delete_declaration", &request_id, || {
        let id = parse_id(&id)?;
        state.write(|store| declaration_ops::delete_declaration(store, &id))?;
        Ok(StatusCode::NO_CONTENT)
    })
}
