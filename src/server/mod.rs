//! main file for the server

pub(crate) mod controller;
pub mod model;
pub(crate) mod pricing;
mod state;
mod store;
mod util;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};

use crate::server::controller::drinks::{delete_drink, get_drinks, post_drink, put_drink};
use crate::server::controller::menu::get_menu;
use crate::server::controller::responses::{get_responses, post_response, put_extras};
use crate::server::controller::totals::{get_payments, get_receipt};
use crate::server::model::config::ServerConfig;
use crate::server::model::menu::MenuCatalog;
use crate::server::state::AppState;
use crate::server::store::drinks::DrinksStore;
use crate::server::store::responses::ResponsesStore;

/// Run the server
pub async fn run(ServerConfig { addr, data_dir, deposit }: ServerConfig) -> std::io::Result<()> {
    std::fs::create_dir_all(&data_dir)?;
    let state = AppState::new(
        MenuCatalog::sunday_menu(),
        ResponsesStore::new(data_dir.join("responses.json")),
        DrinksStore::new(data_dir.join("drinks.json")),
        deposit,
    );
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(web::Data::new(state.clone()))
            .service(get_menu)
            .service(get_responses)
            .service(post_response)
            .service(put_extras)
            .service(get_drinks)
            .service(post_drink)
            .service(put_drink)
            .service(delete_drink)
            .service(get_receipt)
            .service(get_payments)
    })
    .bind(addr)?
    .run()
    .await
}
