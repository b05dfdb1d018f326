use clap::{Args, Parser, Subcommand};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(name = "roast-orders")]
#[command(about = "client cli used by event organisers to read totals from the server", version, long_about = None
)]
struct Cli {
    /// Server base url
    #[arg(long, default_value = "http://localhost:8080")]
    host: String,
    /// Service charge percentage applied to the totals
    #[arg(long, default_value_t = 12.5)]
    service_charge: f64,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Parser, Debug)]
enum Commands {
    /// print the itemized receipt for the whole party
    Receipt(ViewArgs),
    /// print what each person still owes after deposits
    Payments(ViewArgs),
}

#[derive(Debug, Args)]
struct ViewArgs {
    /// Only show this person id
    #[arg(long)]
    person: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct Line {
    label: String,
    amount: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptPerson {
    id: i64,
    name: String,
    is_child: bool,
    lines: Vec<Line>,
    subtotal: f64,
    service_charge: f64,
    total: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReceiptResponse {
    people: Vec<ReceiptPerson>,
    service_charge_percent: f64,
    subtotal: f64,
    service_charge: f64,
    grand_total: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentPerson {
    id: i64,
    name: String,
    is_child: bool,
    subtotal: f64,
    deposit: f64,
    amount_after_deposit: f64,
    service_charge: f64,
    total: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PaymentsResponse {
    people: Vec<PaymentPerson>,
    service_charge_percent: f64,
    grand_total: f64,
}

fn badge(is_child: bool) -> &'static str {
    if is_child {
        " (C)"
    } else {
        ""
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let args = Cli::parse();

    match args.command {
        Commands::Receipt(view) => {
            let res = Client::new()
                .get(format!("{}/api/receipt", args.host))
                .query(&[("serviceCharge", args.service_charge)])
                .send()
                .await?;
            if res.status() != StatusCode::OK {
                println!("got unexpected status code, {}", res.status());
                return Ok(());
            }
            let receipt = res.json::<ReceiptResponse>().await?;
            for person in receipt
                .people
                .iter()
                .filter(|p| view.person.is_none_or(|id| id == p.id))
            {
                println!("{}{}", person.name, badge(person.is_child));
                for line in &person.lines {
                    println!("  {:<50} £{:>8.2}", line.label, line.amount);
                }
                println!("  {:<50} £{:>8.2}", "Subtotal", person.subtotal);
                println!(
                    "  {:<50} £{:>8.2}",
                    format!("Service charge ({}%)", receipt.service_charge_percent),
                    person.service_charge
                );
                println!("  {:<50} £{:>8.2}", "Total", person.total);
            }
            if view.person.is_none() {
                println!();
                println!("{:<52} £{:>8.2}", "Party subtotal", receipt.subtotal);
                println!(
                    "{:<52} £{:>8.2}",
                    format!("Service charge ({}%)", receipt.service_charge_percent),
                    receipt.service_charge
                );
                println!("{:<52} £{:>8.2}", "Grand total", receipt.grand_total);
            }
        }
        Commands::Payments(view) => {
            let res = Client::new()
                .get(format!("{}/api/payments", args.host))
                .query(&[("serviceCharge", args.service_charge)])
                .send()
                .await?;
            if res.status() != StatusCode::OK {
                println!("got unexpected status code, {}", res.status());
                return Ok(());
            }
            let payments = res.json::<PaymentsResponse>().await?;
            for person in payments
                .people
                .iter()
                .filter(|p| view.person.is_none_or(|id| id == p.id))
            {
                println!("{}{}", person.name, badge(person.is_child));
                println!("  {:<40} £{:>8.2}", "Subtotal", person.subtotal);
                if person.deposit > 0.0 {
                    println!("  {:<40} -£{:>7.2}", "Deposit paid", person.deposit);
                }
                println!(
                    "  {:<40} £{:>8.2}",
                    "After deposit", person.amount_after_deposit
                );
                println!(
                    "  {:<40} £{:>8.2}",
                    format!("Service charge ({}%)", payments.service_charge_percent),
                    person.service_charge
                );
                println!("  {:<40} £{:>8.2}", "Total to pay", person.total);
            }
            if view.person.is_none() {
                println!();
                println!("{:<42} £{:>8.2}", "Grand total to pay", payments.grand_total);
            }
        }
    };
    Ok(())
}
