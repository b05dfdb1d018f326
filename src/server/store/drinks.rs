//! The editable drinks ledger, a JSON file of [`DrinkItem`] entries
//! keyed by generated opaque ids.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use log::warn;
use rand::distributions::Alphanumeric;
use rand::Rng;
use tokio::sync::Mutex;

use crate::server::model::drink::DrinkItem;
use crate::server::util::time::helper::get_utc_now;

pub(crate) struct DrinksStore {
    path: PathBuf,
    write_cycle: Mutex<()>,
}

fn generate_id() -> String {
    let suffix = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(9)
        .map(char::from)
        .collect::<String>()
        .to_lowercase();
    format!("drink_{}_{}", get_utc_now().timestamp_millis(), suffix)
}

impl DrinksStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_cycle: Mutex::new(()),
        }
    }

    async fn try_read(&self) -> anyhow::Result<Vec<DrinkItem>> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("malformed drinks file {}", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.path.display())),
        }
    }

    async fn write(&self, drinks: &[DrinkItem]) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(drinks).context("serializing drinks")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("writing {}", self.path.display()))
    }

    /// All drinks, sorted by name. Degrades to an empty ledger when the
    /// backend is unavailable.
    pub async fn list(&self) -> Vec<DrinkItem> {
        let mut drinks = match self.try_read().await {
            Ok(drinks) => drinks,
            Err(e) => {
                warn!("drinks store unavailable, serving empty list: {e:#}");
                Vec::new()
            }
        };
        drinks.sort_by(|a, b| a.name.cmp(&b.name));
        drinks
    }

    pub async fn insert(&self, name: &str, price: f64) -> anyhow::Result<DrinkItem> {
        let _cycle = self.write_cycle.lock().await;
        let mut drinks = self.try_read().await?;
        let drink = DrinkItem {
            id: generate_id(),
            name: name.trim().to_string(),
            price,
        };
        drinks.push(drink.clone());
        self.write(&drinks).await?;
        Ok(drink)
    }

    /// Updates name and price in place; `None` for an unknown id.
    pub async fn update(&self, id: &str, name: &str, price: f64) -> anyhow::Result<Option<DrinkItem>> {
        let _cycle = self.write_cycle.lock().await;
        let mut drinks = self.try_read().await?;
        let Some(drink) = drinks.iter_mut().find(|d| d.id == id) else {
            return Ok(None);
        };
        drink.name = name.trim().to_string();
        drink.price = price;
        let updated = drink.clone();
        self.write(&drinks).await?;
        Ok(Some(updated))
    }

    /// Deletes a drink. Dangling references from people's extras are
    /// left in place; they price at zero.
    pub async fn remove(&self, id: &str) -> anyhow::Result<bool> {
        let _cycle = self.write_cycle.lock().await;
        let mut drinks = self.try_read().await?;
        let before = drinks.len();
        drinks.retain(|d| d.id != id);
        if drinks.len() == before {
            return Ok(false);
        }
        self.write(&drinks).await?;
        Ok(true)
    }
}
