pub(crate) mod drinks;
pub(crate) mod responses;
