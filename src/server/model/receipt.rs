use serde::Serialize;

/// One itemized line on a person's receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct ReceiptLine {
    pub label: String,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersonReceipt {
    pub id: i64,
    pub name: String,
    pub is_child: bool,
    pub lines: Vec<ReceiptLine>,
    pub subtotal: f64,
    pub service_charge: f64,
    pub total: f64,
}

/// `GET /api/receipt` body: per-person itemization plus party totals.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetReceiptResponse {
    pub people: Vec<PersonReceipt>,
    pub service_charge_percent: f64,
    pub subtotal: f64,
    pub service_charge: f64,
    pub grand_total: f64,
}

/// Amount still due for one person, after the adult deposit.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PersonPayment {
    pub id: i64,
    pub name: String,
    pub is_child: bool,
    pub subtotal: f64,
    pub deposit: f64,
    pub amount_after_deposit: f64,
    pub service_charge: f64,
    pub total: f64,
}

/// `GET /api/payments` body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GetPaymentsResponse {
    pub people: Vec<PersonPayment>,
    pub service_charge_percent: f64,
    pub subtotal: f64,
    pub deposits: f64,
    pub amount_after_deposits: f64,
    pub service_charge: f64,
    pub grand_total: f64,
}
