//! Tea resource handlers.

use actix_web::{HttpResponse, web};

use pantry_core::domain::NewTea;
use pantry_shared::dto::TeaPayload;
use pantry_shared::response::Ack;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Tea";

fn draft_from(payload: TeaPayload) -> NewTea {
    NewTea {
        style: payload.style,
        healthy: payload.healthy,
    }
}

/// POST /teas/
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<TeaPayload>,
) -> AppResult<HttpResponse> {
    let tea = state
        .teas
        .insert(draft_from(body.into_inner()))
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?;

    Ok(HttpResponse::Created().json(tea))
}

/// GET /teas/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let tea = state
        .teas
        .find_by_id(id)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    Ok(HttpResponse::Ok().json(tea))
}

/// PUT /teas/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<TeaPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .teas
        .update(id, draft_from(body.into_inner()))
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::updated(ENTITY)))
}

/// DELETE /teas/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .teas
        .delete(id)
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::deleted(ENTITY)))
}
