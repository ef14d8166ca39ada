//! Post resource handlers.
//!
//! `user_id` is accepted as given; it is not checked against the users
//! table.

use actix_web::{HttpResponse, web};

use pantry_core::domain::NewPost;
use pantry_shared::dto::PostPayload;
use pantry_shared::response::Ack;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Post";

fn draft_from(payload: PostPayload) -> NewPost {
    NewPost {
        title: payload.title,
        content: payload.content,
        user_id: payload.user_id,
    }
}

/// POST /posts/
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let post = state
        .posts
        .insert(draft_from(body.into_inner()))
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?;

    Ok(HttpResponse::Created().json(post))
}

/// GET /posts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    Ok(HttpResponse::Ok().json(post))
}

/// PUT /posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<PostPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .posts
        .update(id, draft_from(body.into_inner()))
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::updated(ENTITY)))
}

/// DELETE /posts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .posts
        .delete(id)
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::deleted(ENTITY)))
}
