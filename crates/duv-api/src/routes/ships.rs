//! # Ships API
//!
//! CRUD over `/api/navios`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Extension, Json, Router};
use duv_core::ops::ship_ops;
use duv_core::{Ship, ShipFields};
use duv_core_types::RequestId;

use super::observe;
use crate::error::AppError;
use crate::extractors::{extract_json, parse_id, ShipRequest};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/navios", get(list_ships).post(create_ship))
        .route(
            "/api/navios/:id",
            get(get_ship).put(update_ship).delete(delete_ship),
        )
}

async fn list_ships(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
) -> Result<Json<Vec<Ship>>, AppError> {
    observe("list_ships", &request_id, || Ok(Json(state.read(ship_ops::list_ships))))
}

async fn get_ship(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ship>, AppError> {
    observe("read_ship", &request_id, || {
        let id = parse_id(&id)?;
        let ship = state.read(|store| ship_ops::read_ship(store, &id).cloned())?;
        Ok(Json(ship))
    })
}

async fn create_ship(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    body: Result<Json<ShipRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Ship>), AppError> {
    observe("create_ship", &request_id, || {
        let fields = ShipFields::from(extract_json(body)?);
        let ship = state.write(|store| ship_ops::create_ship(store, fields))?;
        Ok((StatusCode::CREATED, Json(ship)))
    })
}

async fn update_ship(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ShipRequest>, JsonRejection>,
) -> Result<Json<Ship>, AppError> {
    observe("update_ship", &request_id, || {
        let id = parse_id(&id)?;
        let fields = ShipFields::from(extract_json(body)?);
        let ship = state.write(|store| ship_ops::update_ship(store, &id, fields))?;
        Ok(Json(ship))
    })
}

/// Refused with 400 while any declaration still names the ship
async fn delete_ship(
    Extension(request_id): Extension<RequestId>,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    observe("delete_ship", &request_id, || {
        let id = parse_id(&id)?;
        state.write(|store| ship_ops::delete_ship(store, &id))?;
        Ok(StatusCode::NO_CONTENT)
    })
}
