//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use tracing::warn;

use crate::domain::{ScheduleTime, Stop};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/departures", get(departures))
        .route("/trains", post(add_train))
        .route("/trains/:name", delete(remove_train))
        .route("/trains/:name/stops", put(add_stop))
        .route("/trains/:name/stops/:station", delete(remove_stop))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Departure board.
///
/// Without parameters, every train ordered by departure time. With both
/// `after` and `to`, the trains departing at or after `after` that call at
/// `to`, ordered by their time there.
async fn departures(
    State(state): State<AppState>,
    Query(query): Query<DeparturesQuery>,
) -> Result<Json<DeparturesResponse>, AppError> {
    let board = state.board();

    let trains = match (&query.after, &query.to) {
        (None, None) => board.trains(),
        (Some(after), Some(to)) => board.trains_towards(parse_time(after)?, to),
        _ => {
            return Err(AppError::BadRequest {
                message: "the filtered board needs both `after` and `to`".into(),
            });
        }
    };

    Ok(Json(DeparturesResponse {
        trains: trains.into_iter().map(TrainView::from_train).collect(),
    }))
}

/// Add a new train to the board.
async fn add_train(
    State(state): State<AppState>,
    Json(req): Json<AddTrainRequest>,
) -> Result<StatusCode, AppError> {
    let departure = parse_time(&req.departure)?;
    let destination = Stop::new(req.destination.station, parse_time(&req.destination.time)?);

    let mut board = state.board();
    match board.add_train(&req.name, departure, destination) {
        Ok(true) => Ok(StatusCode::CREATED),
        Ok(false) => Err(AppError::Conflict {
            message: format!("train {} already exists", req.name),
        }),
        Err(e) => Err(AppError::Unprocessable {
            message: e.to_string(),
        }),
    }
}

/// Remove a train from the board.
async fn remove_train(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<StatusCode, AppError> {
    if state.board().remove_train(&name) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            message: format!("no train named {name}"),
        })
    }
}

/// Add or reschedule a stop on a train.
async fn add_stop(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(req): Json<AddStopRequest>,
) -> Result<Json<AddStopResponse>, AppError> {
    let stop = Stop::new(req.station, parse_time(&req.time)?);

    let mut board = state.board();
    if board.get(&name).is_none() {
        return Err(AppError::NotFound {
            message: format!("no train named {name}"),
        });
    }

    match board.add_stop(&name, stop) {
        Ok(added) => Ok(Json(AddStopResponse { added })),
        Err(e) => Err(AppError::Unprocessable {
            message: e.to_string(),
        }),
    }
}

/// Remove an intermediate stop from a train.
async fn remove_stop(
    State(state): State<AppState>,
    Path((name, station)): Path<(String, String)>,
) -> Result<StatusCode, AppError> {
    if state.board().remove_stop(&name, &station) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound {
            message: format!("train {name} has no removable stop at {station}"),
        })
    }
}

/// Parse an "HH:MM" body or query value.
fn parse_time(s: &str) -> Result<ScheduleTime, AppError> {
    ScheduleTime::parse_hhmm(s).map_err(|e| AppError::BadRequest {
        message: format!("{s:?}: {e}"),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Conflict { message: String },
    Unprocessable { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Unprocessable { message } => (StatusCode::UNPROCESSABLE_ENTITY, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
