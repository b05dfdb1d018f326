//! The two derived-totals views. Totals are recomputed on every read;
//! nothing here is persisted.

use actix_web::{get, web, Responder};

use crate::server::model::receipt::{
    GetPaymentsResponse, GetReceiptResponse, PersonPayment, PersonReceipt,
};
use crate::server::model::TotalsRequestParams;
use crate::server::pricing::{service_charge, Pricer, DEFAULT_SERVICE_CHARGE_PERCENT};
use crate::server::state::AppState;

#[get("/api/receipt")]
/// Itemized receipt: per-person lines and totals with the service
/// charge on the full subtotal. People who ordered nothing are omitted.
pub(crate) async fn get_receipt(
    query: web::Query<TotalsRequestParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let percent = query.service_charge.unwrap_or(DEFAULT_SERVICE_CHARGE_PERCENT);
    let doc = data.responses().read_all().await;
    let drinks = data.drinks().list().await;
    let pricer = Pricer::new(data.menu(), &drinks);

    let mut people = Vec::new();
    for person in &doc.people {
        let lines = pricer.person_lines(person);
        let person_subtotal: f64 = lines.iter().map(|l| l.amount).sum();
        if person_subtotal == 0.0 {
            continue;
        }
        let person_service = service_charge(person_subtotal, percent);
        people.push(PersonReceipt {
            id: person.id,
            name: person.name.clone(),
            is_child: person.is_child,
            lines,
            subtotal: person_subtotal,
            service_charge: person_service,
            total: person_subtotal + person_service,
        });
    }
    let subtotal = pricer.subtotal(&doc.people);
    let charge = service_charge(subtotal, percent);
    web::Json(GetReceiptResponse {
        people,
        service_charge_percent: percent,
        subtotal,
        service_charge: charge,
        grand_total: subtotal + charge,
    })
}

#[get("/api/payments")]
/// Amounts still due: each adult's deposit comes off before the service
/// charge. Distinct from the receipt, which ignores deposits.
pub(crate) async fn get_payments(
    query: web::Query<TotalsRequestParams>,
    data: web::Data<AppState>,
) -> impl Responder {
    let percent = query.service_charge.unwrap_or(DEFAULT_SERVICE_CHARGE_PERCENT);
    let doc = data.responses().read_all().await;
    let drinks = data.drinks().list().await;
    let pricer = Pricer::new(data.menu(), &drinks);

    let mut people = Vec::new();
    let (mut subtotal, mut deposits, mut after_deposits, mut charges, mut grand_total) =
        (0.0, 0.0, 0.0, 0.0, 0.0);
    for person in &doc.people {
        let due = pricer.payment_breakdown(person, data.deposit(), percent);
        if due.subtotal == 0.0 {
            continue;
        }
        subtotal += due.subtotal;
        deposits += due.deposit;
        after_deposits += due.amount_after_deposit;
        charges += due.service_charge;
        grand_total += due.total;
        people.push(PersonPayment {
            id: person.id,
            name: person.name.clone(),
            is_child: person.is_child,
            subtotal: due.subtotal,
            deposit: due.deposit,
            amount_after_deposit: due.amount_after_deposit,
            service_charge: due.service_charge,
            total: due.total,
        });
    }
    web::Json(GetPaymentsResponse {
        people,
        service_charge_percent: percent,
        subtotal,
        deposits,
        amount_after_deposits: after_deposits,
        service_charge: charges,
        grand_total,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::model::menu::{MenuCatalog, MenuItem};
    use crate::server::model::order::{AdultOrder, Order};
    use crate::server::model::person::{Person, ResponsesData};
    use crate::server::store::drinks::DrinksStore;
    use crate::server::store::responses::ResponsesStore;
    use actix_web::{test, App};

    fn fixture_menu() -> MenuCatalog {
        MenuCatalog {
            snacks: vec![],
            starters: vec![],
            sunday_roasts: vec![],
            mains: vec![MenuItem { name: "Pie".into(), price: 10.00 }],
            sides: vec![
                MenuItem { name: "Chips".into(), price: 5.00 },
                MenuItem { name: "Greens".into(), price: 3.00 },
            ],
            desserts: vec![],
            kids_mains: vec![],
            kids_roasts: vec![],
            kids_desserts: vec![],
        }
    }

    async fn seeded_state(name: &str) -> AppState {
        let dir = std::env::temp_dir().join(format!(
            "roast-orders-totals-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).unwrap();
        let responses = ResponsesStore::new(dir.join("responses.json"));
        responses
            .write_all(&ResponsesData {
                people: vec![
                    Person {
                        id: 1,
                        name: "Alice".into(),
                        is_child: false,
                        has_paid: false,
                        order: Some(Order::Adult(AdultOrder {
                            main: Some("Pie".into()),
                            sides: vec!["Chips".into(), "Greens".into()],
                            ..Default::default()
                        })),
                        extras: vec![],
                    },
                    // never ordered, must not appear in either view
                    Person {
                        id: 2,
                        name: "Bobby".into(),
                        is_child: true,
                        has_paid: false,
                        order: None,
                        extras: vec![],
                    },
                ],
            })
            .await
            .unwrap();
        AppState::new(
            fixture_menu(),
            responses,
            DrinksStore::new(dir.join("drinks.json")),
            15.0,
        )
    }

    #[actix_web::test]
    async fn receipt_charges_service_on_full_subtotal() {
        let state = seeded_state("receipt").await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_receipt),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/receipt?serviceCharge=12.5")
            .to_request();
        let res: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(res["people"].as_array().unwrap().len(), 1);
        assert_eq!(res["subtotal"], 18.0);
        assert_eq!(res["grandTotal"], 20.25);
    }

    #[actix_web::test]
    async fn payments_subtract_the_deposit_first() {
        let state = seeded_state("payments").await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(get_payments),
        )
        .await;
        let req = test::TestRequest::get()
            .uri("/api/payments?serviceCharge=12.5")
            .to_request();
        let res: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        let person = &res["people"][0];
        assert_eq!(person["amountAfterDeposit"], 3.0);
        assert_eq!(person["serviceCharge"], 0.375);
        assert_eq!(person["total"], 3.375);
        assert_eq!(res["grandTotal"], 3.375);
    }
}
