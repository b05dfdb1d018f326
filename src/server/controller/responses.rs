use actix_web::{get, post, put, web, Responder};
use serde::{Deserialize, Serialize};

use crate::server::controller::error::CustomError;
use crate::server::model::order::{Order, OrderPayload};
use crate::server::model::person::{ExtraItem, ResponsesData};
use crate::server::state::AppState;

const PERSISTENCE_DEGRADED_WARNING: &str =
    "data saved in memory but will not persist; storage backend is unavailable";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PostResponseRequest {
    pub person_id: Option<i64>,
    pub order: Option<OrderPayload>,
    pub has_paid: Option<bool>,
    /// Legacy alias for `has_paid`; older clients still send it.
    pub deposit_paid: Option<bool>,
    pub notes: Option<String>,
    pub extras: Option<Vec<ExtraItem>>,
}

/// Either a wholesale replacement of a person's extras or a single
/// quantity adjustment.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PutExtrasRequest {
    Replace {
        extras: Vec<ExtraItem>,
    },
    #[serde(rename_all = "camelCase")]
    Adjust {
        drink_id: String,
        delta: i64,
    },
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitResponse {
    pub success: bool,
    pub data: ResponsesData,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<&'static str>,
}

#[get("/api/responses")]
/// The whole roster with orders; never fails, degrades to empty.
pub(crate) async fn get_responses(data: web::Data<AppState>) -> impl Responder {
    web::Json(data.responses().read_all().await)
}

#[post("/api/responses")]
/// Submit or update one person's order. A failed write still answers
/// 200 with the in-memory result and a warning.
pub(crate) async fn post_response(
    body: web::Json<PostResponseRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let body = body.into_inner();
    let (Some(person_id), Some(mut payload)) = (body.person_id, body.order) else {
        return Err(CustomError::MissingField);
    };
    if let Some(notes) = body.notes {
        payload.notes = Some(notes);
    }
    let has_paid = body.has_paid.or(body.deposit_paid);
    let extras = body.extras;

    let (data, persisted) = data
        .responses()
        .update(move |doc| {
            let person = doc.person_mut(person_id).ok_or(CustomError::ResourceNotFound)?;
            let order = Order::from_payload(payload, person.is_child)?;
            person.order = Some(order);
            if let Some(paid) = has_paid {
                person.has_paid = paid;
            }
            if let Some(extras) = extras {
                person.replace_extras(extras);
            }
            Ok::<(), CustomError>(())
        })
        .await?;

    Ok(web::Json(SubmitResponse {
        success: true,
        data,
        warning: (!persisted).then_some(PERSISTENCE_DEGRADED_WARNING),
    }))
}

#[put("/api/responses/{person_id}/extras")]
/// Replace or adjust one person's extras. Unlike order submission, a
/// failed write here is a hard error.
pub(crate) async fn put_extras(
    path: web::Path<i64>,
    body: web::Json<PutExtrasRequest>,
    data: web::Data<AppState>,
) -> Result<impl Responder, CustomError> {
    let person_id = path.into_inner();
    let request = body.into_inner();

    let (data, persisted) = data
        .responses()
        .update(move |doc| {
            let person = doc.person_mut(person_id).ok_or(CustomError::ResourceNotFound)?;
            match request {
                PutExtrasRequest::Replace { extras } => person.replace_extras(extras),
                PutExtrasRequest::Adjust { drink_id, delta } => {
                    person.set_extra_quantity(&drink_id, delta)
                }
            }
            Ok::<(), CustomError>(())
        })
        .await?;
    if !persisted {
        return Err(CustomError::StorageError);
    }

    Ok(web::Json(SubmitResponse {
        success: true,
        data,
        warning: None,
    }))
}
