use serde::{Deserialize, Serialize};

/// A drinks-ledger entry. Unlike the meal catalog these are editable at
/// runtime and keyed by a generated opaque id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct DrinkItem {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Body of `POST /api/drinks` and `PUT /api/drinks/{id}`.
#[derive(Debug, Deserialize)]
pub(crate) struct DrinkFields {
    pub name: String,
    pub price: f64,
}
