use std::sync::Arc;

use crate::server::model::menu::MenuCatalog;
use crate::server::store::drinks::DrinksStore;
use crate::server::store::responses::ResponsesStore;

/// Shared per-worker handles: the loaded catalog, the two stores and
/// the configured adult deposit.
#[derive(Clone)]
pub(crate) struct AppState {
    menu: Arc<MenuCatalog>,
    responses: Arc<ResponsesStore>,
    drinks: Arc<DrinksStore>,
    deposit: f64,
}

impl AppState {
    pub fn new(
        menu: MenuCatalog,
        responses: ResponsesStore,
        drinks: DrinksStore,
        deposit: f64,
    ) -> Self {
        Self {
            menu: Arc::new(menu),
            responses: Arc::new(responses),
            drinks: Arc::new(drinks),
            deposit,
        }
    }

    pub fn menu(&self) -> &MenuCatalog {
        &self.menu
    }

    pub fn responses(&self) -> &ResponsesStore {
        &self.responses
    }

    pub fn drinks(&self) -> &DrinksStore {
        &self.drinks
    }

    pub fn deposit(&self) -> f64 {
        self.deposit
    }
}
