use actix_web::{delete, get, post, put, web, Responder};
use log::error;
use serde_json::json;

use crate::server::controller::error::CustomError;
use crate::server::model::drink::DrinkFields;
use crate::server::model::order::ValidationError;
use crate::server::state::AppState;

fn validate_fields(fields: &DrinkFields) -> Result<(), CustomError> {
    if fields.name.trim().is_empty() {
        return Err(ValidationError::EmptyName.into());
    }
    if !fields.price.is_finite() || fields.price < 0.0 {
        return Err(ValidationError::InvalidPrice.into());
    }
    Ok(())
}

#[get("/api/drinks")]
/// All drinks, sorted by name; an unavailable backend lists nothing.
pub(crate) async fn get_drinks(data: web::Data<AppState>) -> impl Responder {
    web::Json(data.drinks().list().await)
}

#[post("/api/drinks")]
pub(crate) async fn post_drink(
    body: web::Json<DrinkFields>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let fields = body.into_inner();
    validate_fields(&fields)?;
    match data.drinks().insert(&fields.name, fields.price).await {
        Ok(drink) => Ok(web::Json(drink)),
        Err(e) => {
            error!("post_drink failed, {e:#}");
            Err(CustomError::StorageError)
        }
    }
}

#[put("/api/drinks/{id}")]
pub(crate) async fn put_drink(
    id: web::Path<String>,
    body: web::Json<DrinkFields>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let fields = body.into_inner();
    validate_fields(&fields)?;
    match data.drinks().update(&id, &fields.name, fields.price).await {
        Ok(Some(drink)) => Ok(web::Json(drink)),
        Ok(None) => Err(CustomError::ResourceNotFound),
        Err(e) => {
            error!("put_drink failed, {e:#}");
            Err(CustomError::StorageError)
        }
    }
}

#[delete("/api/drinks/{id}")]
pub(crate) async fn delete_drink(
    id: web::Path<String>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    match data.drinks().remove(&id).await {
        Ok(true) => Ok(web::Json(json!({ "success": true }))),
        Ok(false) => Err(CustomError::ResourceNotFound),
        Err(e) => {
            error!("delete_drink failed, {e:#}");
            Err(CustomError::StorageError)
        }
    }
}
