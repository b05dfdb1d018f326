//! The pricing engine: pure lookups over the menu catalog and drinks
//! ledger. Totals are never stored; every view re-derives them here.

use log::warn;

use crate::server::model::drink::DrinkItem;
use crate::server::model::menu::{MenuCatalog, MenuCategory};
use crate::server::model::order::Order;
use crate::server::model::person::{ExtraItem, Person};
use crate::server::model::receipt::ReceiptLine;

pub(crate) const DEFAULT_SERVICE_CHARGE_PERCENT: f64 = 12.5;

/// Prices orders against a loaded catalog and drinks ledger. Holds
/// borrows only; construct one per request.
pub(crate) struct Pricer<'a> {
    menu: &'a MenuCatalog,
    drinks: &'a [DrinkItem],
}

/// Amount still due for one person once the deposit is accounted for.
#[derive(Debug, PartialEq)]
pub(crate) struct PaymentBreakdown {
    pub subtotal: f64,
    pub deposit: f64,
    pub amount_after_deposit: f64,
    pub service_charge: f64,
    pub total: f64,
}

pub(crate) fn service_charge(amount: f64, percent: f64) -> f64 {
    amount * percent / 100.0
}

impl<'a> Pricer<'a> {
    pub fn new(menu: &'a MenuCatalog, drinks: &'a [DrinkItem]) -> Self {
        Self { menu, drinks }
    }

    /// Catalog lookup that keeps the zero-for-unknown contract but logs
    /// the miss, so a renamed menu item on a historical order is
    /// visible instead of silently free.
    fn item_price(&self, category: MenuCategory, name: &str) -> f64 {
        match self.menu.lookup(category, name) {
            Some(price) => price,
            None => {
                warn!("unknown item in {}: {:?} priced at 0", category.key(), name);
                0.0
            }
        }
    }

    /// Adults pick starters and snacks from one combined list; the name
    /// is looked up in snacks first and falls through to starters when
    /// the snacks price is zero.
    fn starter_price(&self, name: &str) -> f64 {
        let snack_price = self.menu.find_price(MenuCategory::Snacks, name);
        if snack_price != 0.0 {
            return snack_price;
        }
        self.item_price(MenuCategory::Starters, name)
    }

    fn extra_lines(&self, extras: &[ExtraItem], lines: &mut Vec<ReceiptLine>) {
        for extra in extras {
            // A deleted drink leaves dangling references; they price at
            // zero rather than failing the whole receipt.
            let Some(drink) = self.drinks.iter().find(|d| d.id == extra.drink_id) else {
                warn!("unknown drink id {:?} priced at 0", extra.drink_id);
                continue;
            };
            lines.push(ReceiptLine {
                label: format!("{} x{}", drink.name, extra.quantity),
                amount: drink.price * extra.quantity as f64,
            });
        }
    }

    /// Itemized receipt lines for one person. Empty when no order is on
    /// record: extras are not charged for a person who never ordered.
    pub fn person_lines(&self, person: &Person) -> Vec<ReceiptLine> {
        let Some(order) = &person.order else {
            return Vec::new();
        };
        let mut lines = Vec::new();
        match order {
            Order::Kids(order) => {
                if let Some(roast) = &order.sunday_roast {
                    lines.push(ReceiptLine {
                        label: format!("Sunday Roast: {roast}"),
                        amount: self.item_price(MenuCategory::KidsRoasts, roast),
                    });
                } else if let Some(main) = &order.main {
                    lines.push(ReceiptLine {
                        label: format!("Main: {main}"),
                        amount: self.item_price(MenuCategory::KidsMains, main),
                    });
                }
                if let Some(dessert) = &order.dessert {
                    lines.push(ReceiptLine {
                        label: format!("Dessert: {dessert}"),
                        amount: self.item_price(MenuCategory::KidsDesserts, dessert),
                    });
                }
            }
            Order::Adult(order) => {
                if let Some(starter) = &order.starter {
                    lines.push(ReceiptLine {
                        label: format!("Starter: {starter}"),
                        amount: self.starter_price(starter),
                    });
                }
                if let Some(roast) = &order.sunday_roast {
                    lines.push(ReceiptLine {
                        label: format!("Sunday Roast: {roast}"),
                        amount: self.item_price(MenuCategory::SundayRoasts, roast),
                    });
                } else if let Some(main) = &order.main {
                    lines.push(ReceiptLine {
                        label: format!("Main: {main}"),
                        amount: self.item_price(MenuCategory::Mains, main),
                    });
                }
                for side in &order.sides {
                    lines.push(ReceiptLine {
                        label: format!("Side: {side}"),
                        amount: self.item_price(MenuCategory::Sides, side),
                    });
                }
                if let Some(dessert) = &order.dessert {
                    lines.push(ReceiptLine {
                        label: format!("Dessert: {dessert}"),
                        amount: self.item_price(MenuCategory::Desserts, dessert),
                    });
                }
            }
        }
        self.extra_lines(&person.extras, &mut lines);
        lines
    }

    /// Sum of the person's receipt lines.
    pub fn person_subtotal(&self, person: &Person) -> f64 {
        self.person_lines(person).iter().map(|l| l.amount).sum()
    }

    pub fn subtotal(&self, people: &[Person]) -> f64 {
        people.iter().map(|p| self.person_subtotal(p)).sum()
    }

    /// Amount still due: the deposit comes off an adult's subtotal
    /// (clamped at zero) before the service charge is applied. Distinct
    /// from the receipt total, which charges service on the full
    /// subtotal and ignores deposits.
    pub fn payment_breakdown(&self, person: &Person, deposit: f64, percent: f64) -> PaymentBreakdown {
        let subtotal = self.person_subtotal(person);
        if subtotal == 0.0 {
            return PaymentBreakdown {
                subtotal: 0.0,
                deposit: 0.0,
                amount_after_deposit: 0.0,
                service_charge: 0.0,
                total: 0.0,
            };
        }
        let deposit = if person.is_child { 0.0 } else { deposit };
        let amount_after_deposit = (subtotal - deposit).max(0.0);
        let service_charge = service_charge(amount_after_deposit, percent);
        PaymentBreakdown {
            subtotal,
            deposit,
            amount_after_deposit,
            service_charge,
            total: amount_after_deposit + service_charge,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::model::menu::MenuItem;
    use crate::server::model::order::{AdultOrder, KidsOrder};

    fn item(name: &str, price: f64) -> MenuItem {
        MenuItem {
            name: name.into(),
            price,
        }
    }

    fn fixture_menu() -> MenuCatalog {
        MenuCatalog {
            snacks: vec![item("Scotch egg", 7.50)],
            starters: vec![item("Soup", 6.00), item("Scotch egg", 9.00)],
            sunday_roasts: vec![item("Beef roast", 24.50)],
            mains: vec![item("Pie", 10.00)],
            sides: vec![item("Chips", 5.00), item("Greens", 3.00)],
            desserts: vec![item("Cheesecake", 9.50)],
            kids_mains: vec![item("Sausages", 8.50)],
            kids_roasts: vec![item("Beef roast", 14.50)],
            kids_desserts: vec![item("Brownie", 5.50)],
        }
    }

    fn adult(order: AdultOrder, extras: Vec<ExtraItem>) -> Person {
        Person {
            id: 1,
            name: "Alice".into(),
            is_child: false,
            has_paid: false,
            order: Some(Order::Adult(order)),
            extras,
        }
    }

    fn child(order: KidsOrder) -> Person {
        Person {
            id: 2,
            name: "Bobby".into(),
            is_child: true,
            has_paid: false,
            order: Some(Order::Kids(order)),
            extras: vec![],
        }
    }

    #[test]
    fn pie_with_two_sides_prices_to_eighteen() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let person = adult(
            AdultOrder {
                main: Some("Pie".into()),
                sides: vec!["Chips".into(), "Greens".into()],
                ..Default::default()
            },
            vec![],
        );
        let subtotal = pricer.person_subtotal(&person);
        assert_eq!(subtotal, 18.00);
        // receipt total: full subtotal plus 12.5% service
        assert_eq!(subtotal + service_charge(subtotal, 12.5), 20.25);
        // amount due: deposit comes off first
        let due = pricer.payment_breakdown(&person, 15.0, 12.5);
        assert_eq!(due.amount_after_deposit, 3.00);
        assert_eq!(due.service_charge, 0.375);
        assert_eq!(due.total, 3.375);
    }

    #[test]
    fn subtotal_is_sum_of_lines() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let person = adult(
            AdultOrder {
                starter: Some("Soup".into()),
                sunday_roast: Some("Beef roast".into()),
                sides: vec!["Chips".into()],
                dessert: Some("Cheesecake".into()),
                ..Default::default()
            },
            vec![],
        );
        let lines = pricer.person_lines(&person);
        let by_hand: f64 = [6.00, 24.50, 5.00, 9.50].iter().sum();
        assert_eq!(lines.iter().map(|l| l.amount).sum::<f64>(), by_hand);
        assert_eq!(pricer.person_subtotal(&person), by_hand);
    }

    #[test]
    fn starter_falls_back_through_snacks_first() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        // "Scotch egg" exists in both lists; the snacks price wins.
        let person = adult(
            AdultOrder {
                starter: Some("Scotch egg".into()),
                main: Some("Pie".into()),
                ..Default::default()
            },
            vec![],
        );
        assert_eq!(pricer.person_subtotal(&person), 7.50 + 10.00);
        // unknown in snacks, known in starters
        let person = adult(
            AdultOrder {
                starter: Some("Soup".into()),
                main: Some("Pie".into()),
                ..Default::default()
            },
            vec![],
        );
        assert_eq!(pricer.person_subtotal(&person), 6.00 + 10.00);
    }

    #[test]
    fn kids_roast_uses_kids_prices() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let person = child(KidsOrder {
            sunday_roast: Some("Beef roast".into()),
            dessert: Some("Brownie".into()),
            ..Default::default()
        });
        assert_eq!(pricer.person_subtotal(&person), 14.50 + 5.50);
    }

    #[test]
    fn unknown_item_prices_at_zero() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let person = adult(
            AdultOrder {
                main: Some("Discontinued pie".into()),
                sides: vec!["Chips".into()],
                ..Default::default()
            },
            vec![],
        );
        assert_eq!(pricer.person_subtotal(&person), 5.00);
    }

    #[test]
    fn extras_multiply_price_by_quantity() {
        let menu = fixture_menu();
        let drinks = vec![DrinkItem {
            id: "drink_1".into(),
            name: "House red".into(),
            price: 6.50,
        }];
        let pricer = Pricer::new(&menu, &drinks);
        let person = adult(
            AdultOrder {
                main: Some("Pie".into()),
                ..Default::default()
            },
            vec![ExtraItem {
                drink_id: "drink_1".into(),
                quantity: 2,
            }],
        );
        assert_eq!(pricer.person_subtotal(&person), 10.00 + 13.00);
    }

    #[test]
    fn deleted_drink_contributes_zero() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let person = adult(
            AdultOrder {
                main: Some("Pie".into()),
                ..Default::default()
            },
            vec![ExtraItem {
                drink_id: "drink_gone".into(),
                quantity: 3,
            }],
        );
        assert_eq!(pricer.person_subtotal(&person), 10.00);
    }

    #[test]
    fn extras_without_an_order_price_at_zero() {
        let menu = fixture_menu();
        let drinks = vec![DrinkItem {
            id: "drink_1".into(),
            name: "House red".into(),
            price: 6.50,
        }];
        let pricer = Pricer::new(&menu, &drinks);
        let person = Person {
            id: 3,
            name: "Cara".into(),
            is_child: false,
            has_paid: false,
            order: None,
            extras: vec![ExtraItem {
                drink_id: "drink_1".into(),
                quantity: 2,
            }],
        };
        assert_eq!(pricer.person_subtotal(&person), 0.0);
        assert!(pricer.person_lines(&person).is_empty());
    }

    #[test]
    fn deposit_clamps_at_zero() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let person = adult(
            AdultOrder {
                main: Some("Pie".into()),
                ..Default::default()
            },
            vec![],
        );
        // subtotal 10 with a 15 deposit never goes negative
        let due = pricer.payment_breakdown(&person, 15.0, 12.5);
        assert_eq!(due.amount_after_deposit, 0.0);
        assert_eq!(due.total, 0.0);
    }

    #[test]
    fn children_pay_no_deposit() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let person = child(KidsOrder {
            main: Some("Sausages".into()),
            ..Default::default()
        });
        let due = pricer.payment_breakdown(&person, 15.0, 0.0);
        assert_eq!(due.deposit, 0.0);
        assert_eq!(due.total, 8.50);
    }

    #[test]
    fn zero_subtotal_means_zero_due() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let person = Person {
            id: 4,
            name: "Dee".into(),
            is_child: false,
            has_paid: false,
            order: None,
            extras: vec![],
        };
        let due = pricer.payment_breakdown(&person, 15.0, 12.5);
        assert_eq!(due.total, 0.0);
        assert_eq!(due.deposit, 0.0);
    }

    #[test]
    fn party_subtotal_sums_everyone() {
        let menu = fixture_menu();
        let pricer = Pricer::new(&menu, &[]);
        let people = vec![
            adult(
                AdultOrder {
                    main: Some("Pie".into()),
                    ..Default::default()
                },
                vec![],
            ),
            child(KidsOrder {
                main: Some("Sausages".into()),
                ..Default::default()
            }),
        ];
        assert_eq!(pricer.subtotal(&people), 18.50);
    }
}
