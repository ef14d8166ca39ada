//! Beer resource handlers.

use actix_web::{HttpResponse, web};

use pantry_core::domain::NewBeer;
use pantry_shared::dto::BeerPayload;
use pantry_shared::response::Ack;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Beer";

fn draft_from(payload: BeerPayload) -> NewBeer {
    NewBeer {
        style: payload.style,
        alcohol: payload.alcohol,
        cereal: payload.cereal,
    }
}

/// POST /beers/
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<BeerPayload>,
) -> AppResult<HttpResponse> {
    let beer = state
        .beers
        .insert(draft_from(body.into_inner()))
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?;

    Ok(HttpResponse::Created().json(beer))
}

/// GET /beers/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let beer = state
        .beers
        .find_by_id(id)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    Ok(HttpResponse::Ok().json(beer))
}

/// PUT /beers/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<BeerPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .beers
        .update(id, draft_from(body.into_inner()))
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::updated(ENTITY)))
}

/// DELETE /beers/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .beers
        .delete(id)
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::deleted(ENTITY)))
}
