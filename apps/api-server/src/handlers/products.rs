//! Product resource handlers.

use actix_web::{HttpResponse, web};

use pantry_core::domain::NewProduct;
use pantry_shared::dto::ProductPayload;
use pantry_shared::response::Ack;

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

const ENTITY: &str = "Product";

fn draft_from(payload: ProductPayload) -> NewProduct {
    NewProduct {
        name: payload.name,
        price: payload.price,
    }
}

/// POST /products/
pub async fn create(
    state: web::Data<AppState>,
    body: web::Json<ProductPayload>,
) -> AppResult<HttpResponse> {
    let product = state
        .products
        .insert(draft_from(body.into_inner()))
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?;

    Ok(HttpResponse::Created().json(product))
}

/// GET /products/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let product = state
        .products
        .find_by_id(id)
        .await
        .map_err(|e| AppError::from_repo(ENTITY, e))?
        .ok_or_else(|| AppError::not_found(ENTITY, id))?;

    Ok(HttpResponse::Ok().json(product))
}

/// PUT /products/{id}
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: web::Json<ProductPayload>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .products
        .update(id, draft_from(body.into_inner()))
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::updated(ENTITY)))
}

/// DELETE /products/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    state
        .products
        .delete(id)
        .await
        .map_err(|e| AppError::from_repo_at(ENTITY, id, e))?;

    Ok(HttpResponse::Ok().json(Ack::deleted(ENTITY)))
}
