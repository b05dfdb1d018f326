use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// An adult's meal selection. `main` and `sunday_roast` are mutually
/// exclusive; [`Order::from_payload`] is the only construction path and
/// keeps that invariant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AdultOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday_roast: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sides: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dessert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A child's meal selection, validated against the kids categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct KidsOrder {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday_roast: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dessert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Stored order, tagged by person kind so adult and kids field sets
/// cannot mix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub(crate) enum Order {
    Adult(AdultOrder),
    Kids(KidsOrder),
}

/// Inbound order shape: every field optional, as submitted by the form.
/// Interpreted against the person's `is_child` flag at the boundary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct OrderPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sunday_roast: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sides: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dessert: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Display, Error, PartialEq)]
pub(crate) enum ValidationError {
    #[display("a main course or Sunday roast is required")]
    MissingMainCourse,
    #[display("price must be a non-negative number")]
    InvalidPrice,
    #[display("name must not be empty")]
    EmptyName,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

impl Order {
    /// Builds a stored order from a loose submission. A set
    /// `sunday_roast` clears `main` rather than rejecting the input;
    /// an order with neither is rejected outright.
    pub fn from_payload(payload: OrderPayload, is_child: bool) -> Result<Self, ValidationError> {
        let sunday_roast = non_empty(payload.sunday_roast);
        let mut main = non_empty(payload.main);
        if sunday_roast.is_none() && main.is_none() {
            return Err(ValidationError::MissingMainCourse);
        }
        if sunday_roast.is_some() {
            main = None; // roast takes precedence
        }
        if is_child {
            Ok(Order::Kids(KidsOrder {
                main,
                sunday_roast,
                dessert: non_empty(payload.dessert),
                notes: non_empty(payload.notes),
            }))
        } else {
            Ok(Order::Adult(AdultOrder {
                starter: non_empty(payload.starter),
                main,
                sunday_roast,
                sides: payload.sides.into_iter().filter(|s| !s.is_empty()).collect(),
                dessert: non_empty(payload.dessert),
                notes: non_empty(payload.notes),
            }))
        }
    }

    /// True when a main course or Sunday roast is selected. Notes,
    /// sides or a dessert alone do not make an order.
    pub fn has_main_course(&self) -> bool {
        match self {
            Order::Adult(o) => o.main.is_some() || o.sunday_roast.is_some(),
            Order::Kids(o) => o.main.is_some() || o.sunday_roast.is_some(),
        }
    }
}
