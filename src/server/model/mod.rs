use serde::Deserialize;

pub(crate) mod config;
pub(crate) mod drink;
pub(crate) mod menu;
pub(crate) mod order;
pub(crate) mod person;
pub(crate) mod receipt;

/// Query params shared by the totals views. The percentage is a
/// per-request session parameter, never persisted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TotalsRequestParams {
    pub service_charge: Option<f64>,
}
