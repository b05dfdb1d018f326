//! Seeds the roster into the responses store. People are not creatable
//! through the API, so the initial list is loaded here once, before the
//! app is used.
//!
//! Usage: `seed <roster.json> [data-dir]`
//!
//! The roster file is a `{"people": [...]}` document; entries are
//! upserted by id into `<data-dir>/responses.json`, keeping whatever
//! order/payment state an existing entry already has.

use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde_json::Value;

fn person_id(person: &Value) -> Option<i64> {
    person.get("id").and_then(Value::as_i64)
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let roster_path = args
        .next()
        .context("usage: seed <roster.json> [data-dir]")?;
    let data_dir = args
        .next()
        .or_else(|| env::var("DATA_DIR").ok())
        .unwrap_or("./data".to_string());
    let responses_path = PathBuf::from(&data_dir).join("responses.json");

    let roster: Value = serde_json::from_slice(
        &tokio::fs::read(&roster_path)
            .await
            .with_context(|| format!("reading roster {roster_path}"))?,
    )
    .context("roster is not valid JSON")?;
    let Some(seeded) = roster.get("people").and_then(Value::as_array) else {
        bail!("roster must be an object with a \"people\" array");
    };

    let mut existing: Vec<Value> = match tokio::fs::read(&responses_path).await {
        Ok(bytes) => serde_json::from_slice::<Value>(&bytes)
            .ok()
            .and_then(|v| v.get("people").and_then(Value::as_array).cloned())
            .unwrap_or_default(),
        Err(_) => Vec::new(),
    };

    let (mut inserted, mut kept) = (0usize, 0usize);
    for person in seeded {
        let Some(id) = person_id(person) else {
            bail!("roster entry without a numeric id: {person}");
        };
        if existing.iter().any(|p| person_id(p) == Some(id)) {
            kept += 1; // already present, leave their order alone
        } else {
            inserted += 1;
            existing.push(person.clone());
        }
    }

    tokio::fs::create_dir_all(&data_dir).await?;
    tokio::fs::write(
        &responses_path,
        serde_json::to_vec_pretty(&serde_json::json!({ "people": existing }))?,
    )
    .await
    .with_context(|| format!("writing {}", responses_path.display()))?;

    println!(
        "seeded {}: {} inserted, {} already present",
        responses_path.display(),
        inserted,
        kept
    );
    Ok(())
}
