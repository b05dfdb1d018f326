use serde::{Deserialize, Serialize};

use crate::server::model::order::Order;

/// A drink selected by a person, referencing the drinks ledger by id.
/// A person's extras are unique by `drink_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExtraItem {
    pub drink_id: String,
    pub quantity: u32,
}

/// An attendee. People are pre-seeded; the app only ever mutates
/// `order`, `has_paid` and `extras`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Person {
    pub id: i64,
    pub name: String,
    pub is_child: bool,
    #[serde(default)]
    pub has_paid: bool,
    #[serde(default)]
    pub order: Option<Order>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<ExtraItem>,
}

/// The whole persisted document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub(crate) struct ResponsesData {
    pub people: Vec<Person>,
}

impl Person {
    /// Completeness predicate: a person counts as having ordered only
    /// once a main course or Sunday roast is on record.
    pub fn has_order(&self) -> bool {
        self.order.as_ref().is_some_and(Order::has_main_course)
    }

    /// Adjusts the quantity of one drink by `delta`, merging into the
    /// existing entry. Quantities that drop to zero or below remove the
    /// entry; a negative delta for an absent drink is a no-op.
    pub fn set_extra_quantity(&mut self, drink_id: &str, delta: i64) {
        if let Some(idx) = self.extras.iter().position(|e| e.drink_id == drink_id) {
            let quantity = self.extras[idx].quantity as i64 + delta;
            if quantity <= 0 {
                self.extras.remove(idx);
            } else {
                self.extras[idx].quantity = quantity as u32;
            }
        } else if delta > 0 {
            self.extras.push(ExtraItem {
                drink_id: drink_id.to_string(),
                quantity: delta as u32,
            });
        }
    }

    /// Replaces the extras wholesale, merging duplicate drink ids and
    /// dropping non-positive quantities.
    pub fn replace_extras(&mut self, extras: Vec<ExtraItem>) {
        let mut merged: Vec<ExtraItem> = Vec::with_capacity(extras.len());
        for extra in extras {
            if extra.quantity == 0 {
                continue;
            }
            match merged.iter_mut().find(|e| e.drink_id == extra.drink_id) {
                Some(existing) => existing.quantity += extra.quantity,
                None => merged.push(extra),
            }
        }
        self.extras = merged;
    }
}

impl ResponsesData {
    pub fn person_mut(&mut self, id: i64) -> Option<&mut Person> {
        self.people.iter_mut().find(|p| p.id == id)
    }
}
