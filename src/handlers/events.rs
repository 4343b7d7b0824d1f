//! The event CRUD resource. Every handler runs behind the bearer-token
//! extractor; existence is checked before ownership so an unknown id is a
//! 404 and a foreign-owned one a 401.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::required;
use crate::auth::AuthUser;
use crate::models::{Event, EventCategory, EventPatch, Modality, NewEvent};
use crate::state::AppState;
use crate::utils::error::AppError;

/// Create payload. Enumerated fields arrive as raw labels and are parsed
/// through the canonical mapping; unknown keys (including any owner field)
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct CreateEventRequest {
    nombre: Option<String>,
    categoria: Option<String>,
    lugar: Option<String>,
    direccion: Option<String>,
    #[serde(rename = "fechaInicio")]
    fecha_inicio: Option<DateTime<Utc>>,
    #[serde(rename = "fechaFin")]
    fecha_fin: Option<DateTime<Utc>>,
    forma: Option<String>,
}

/// Merge-patch payload for PUT; only supplied fields overwrite.
#[derive(Debug, Deserialize)]
pub struct UpdateEventRequest {
    nombre: Option<String>,
    categoria: Option<String>,
    lugar: Option<String>,
    direccion: Option<String>,
    #[serde(rename = "fechaInicio")]
    fecha_inicio: Option<DateTime<Utc>>,
    #[serde(rename = "fechaFin")]
    fecha_fin: Option<DateTime<Utc>>,
    forma: Option<String>,
}

fn parse_category(label: &str) -> Result<EventCategory, AppError> {
    label.parse().map_err(|_| {
        AppError::Validation(format!("Valor desconocido para 'categoria': {}", label))
    })
}

fn parse_modality(label: &str) -> Result<Modality, AppError> {
    label
        .parse()
        .map_err(|_| AppError::Validation(format!("Valor desconocido para 'forma': {}", label)))
}

/// Load an event and enforce that `email` owns it.
async fn load_owned(state: &AppState, id: i64, email: &str) -> Result<Event, AppError> {
    let event = state
        .events
        .find(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("El evento {} no existe", id)))?;
    if event.owner_email != email {
        return Err(AppError::Forbidden("No tiene acceso a este evento".to_string()));
    }
    Ok(event)
}

/// GET /eventos
pub async fn list_events(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<Event>>, AppError> {
    let events = state.events.list_by_owner(&user.email).await?;
    Ok(Json(events))
}

/// POST /eventos
pub async fn create_event(
    State(state): State<AppState>,
    user: AuthUser,
    Json(body): Json<CreateEventRequest>,
) -> Result<Json<Event>, AppError> {
    let now = Utc::now();
    let new_event = NewEvent {
        name: required("nombre", body.nombre)?,
        category: parse_category(&required("categoria", body.categoria)?)?,
        venue: required("lugar", body.lugar)?,
        address: required("direccion", body.direccion)?,
        start_time: body.fecha_inicio.unwrap_or(now),
        end_time: body.fecha_fin.unwrap_or(now),
        modality: parse_modality(&required("forma", body.forma)?)?,
        owner_email: user.email,
    };

    let event = state.events.insert(new_event).await?;
    Ok(Json(event))
}

/// GET /eventos/:id
pub async fn get_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<Event>, AppError> {
    let event = load_owned(&state, id, &user.email).await?;
    Ok(Json(event))
}

/// PUT /eventos/:id
pub async fn update_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
    Json(body): Json<UpdateEventRequest>,
) -> Result<Json<Event>, AppError> {
    load_owned(&state, id, &user.email).await?;

    let patch = EventPatch {
        name: body.nombre,
        category: body.categoria.as_deref().map(parse_category).transpose()?,
        venue: body.lugar,
        address: body.direccion,
        start_time: body.fecha_inicio,
        end_time: body.fecha_fin,
        modality: body.forma.as_deref().map(parse_modality).transpose()?,
    };

    // The owner is immutable, so the check above cannot go stale; a racing
    // delete shows up here as a missing row.
    let event = state
        .events
        .update(id, patch)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("El evento {} no existe", id)))?;
    Ok(Json(event))
}

/// DELETE /eventos/:id
pub async fn delete_event(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    load_owned(&state, id, &user.email).await?;

    if !state.events.delete(id).await? {
        return Err(AppError::NotFound(format!("El evento {} no existe", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
