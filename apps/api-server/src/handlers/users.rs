//! User resource handlers.

use actix_web::{HttpResponse, web};

use pantry_core::domain::NewUser;
use pantry_shared::dto::UserPayload;
use pantry_shared::response::Ack;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "User";

/// POST /users/
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<UserPayload>,
) -> AppResult<HttpResponse> {
    let payload = body.into_inner();
    let draft = NewUser {
        username: payload.username,
    };

    let user = state
        .users
        .insert(draft)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?;

    Ok(HttpResponse::Created().json(user))
}

/// GET /users/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let user = state
        .users
        .find_by_id(id)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    Ok(HttpResponse::Ok().json(user))
}

/// PUT /users/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<UserPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let payload = body.into_inner();
    let draft = NewUser {
        username: payload.username,
    };

    state
        .users
        .update(id, draft)
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::updated(ENTITY)))
}

/// DELETE /users/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .users
        .delete(id)
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::deleted(ENTITY)))
}
