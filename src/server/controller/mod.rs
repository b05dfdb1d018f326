pub(crate) mod drinks;
pub(crate) mod error;
pub(crate) mod menu;
pub(crate) mod responses;
pub(crate) mod totals;
