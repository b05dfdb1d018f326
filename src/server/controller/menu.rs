use actix_web::{get, web, HttpResponse, Responder};

use crate::server::state::AppState;

#[get("/api/menu")]
/// The full catalog; read-only, code-defined.
pub(crate) async fn get_menu(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.menu())
}
