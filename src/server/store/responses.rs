//! Whole-document store for the roster and its orders. The entire
//! [`ResponsesData`] is read and written as one JSON file; there is no
//! row-level update.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::Context;
use log::{info, warn};
use tokio::sync::Mutex;

use crate::server::model::person::ResponsesData;

pub(crate) struct ResponsesStore {
    path: PathBuf,
    // Serializes every read-modify-write cycle. Without it, a stale
    // reader's whole-document write drops any update that landed in
    // between, even for an unrelated person.
    write_cycle: Mutex<()>,
}

impl ResponsesStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_cycle: Mutex::new(()),
        }
    }

    async fn try_read(&self) -> anyhow::Result<ResponsesData> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .with_context(|| format!("malformed responses file {}", self.path.display())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ResponsesData::default()),
            Err(e) => Err(e).with_context(|| format!("reading {}", self.path.display())),
        }
    }

    /// Reads the full document. A broken backend degrades to an empty
    /// roster so the views still render.
    pub async fn read_all(&self) -> ResponsesData {
        match self.try_read().await {
            Ok(data) => data,
            Err(e) => {
                warn!("responses store unavailable, serving empty data: {e:#}");
                ResponsesData::default()
            }
        }
    }

    /// Writes the full document back, replacing whatever was there.
    pub async fn write_all(&self, data: &ResponsesData) -> anyhow::Result<()> {
        let json = serde_json::to_vec_pretty(data).context("serializing responses")?;
        tokio::fs::write(&self.path, json)
            .await
            .with_context(|| format!("writing {}", self.path.display()))?;
        info!("saved {} people to {}", data.people.len(), self.path.display());
        Ok(())
    }

    /// One locked read-modify-write cycle. Returns the mutated document
    /// and whether it was persisted; a failed write is not an error,
    /// the caller surfaces it as a warning.
    pub async fn update<F, E>(&self, apply: F) -> Result<(ResponsesData, bool), E>
    where
        F: FnOnce(&mut ResponsesData) -> Result<(), E>,
    {
        let _cycle = self.write_cycle.lock().await;
        let mut data = self.read_all().await;
        apply(&mut data)?;
        let persisted = match self.write_all(&data).await {
            Ok(()) => true,
            Err(e) => {
                warn!("keeping result in memory only, write failed: {e:#}");
                false
            }
        };
        Ok((data, persisted))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::server::model::person::Person;

    fn temp_store(name: &str) -> ResponsesStore {
        let path = std::env::temp_dir().join(format!(
            "roast-orders-{}-{}.json",
            name,
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);
        ResponsesStore::new(path)
    }

    fn roster() -> ResponsesData {
        ResponsesData {
            people: vec![Person {
                id: 1,
                name: "Alice".into(),
                is_child: false,
                has_paid: false,
                order: None,
                extras: vec![],
            }],
        }
    }

    #[actix_web::test]
    async fn missing_file_reads_as_empty() {
        let store = temp_store("missing");
        assert_eq!(store.read_all().await, ResponsesData::default());
    }

    #[actix_web::test]
    async fn write_then_read_round_trips() {
        let store = temp_store("roundtrip");
        store.write_all(&roster()).await.unwrap();
        assert_eq!(store.read_all().await, roster());
        let _ = std::fs::remove_file(&store.path);
    }

    #[actix_web::test]
    async fn malformed_file_degrades_to_empty() {
        let store = temp_store("malformed");
        std::fs::write(&store.path, b"not json").unwrap();
        assert_eq!(store.read_all().await, ResponsesData::default());
        let _ = std::fs::remove_file(&store.path);
    }

    #[actix_web::test]
    async fn update_persists_the_mutation() {
        let store = temp_store("update");
        store.write_all(&roster()).await.unwrap();
        let (data, persisted) = store
            .update(|doc| {
                doc.person_mut(1).unwrap().has_paid = true;
                Ok::<_, ()>(())
            })
            .await
            .unwrap();
        assert!(persisted);
        assert!(data.people[0].has_paid);
        assert!(store.read_all().await.people[0].has_paid);
        let _ = std::fs::remove_file(&store.path);
    }

    #[actix_web::test]
    async fn update_error_leaves_file_untouched() {
        let store = temp_store("update-err");
        store.write_all(&roster()).await.unwrap();
        let result = store
            .update(|doc| {
                doc.person_mut(1).unwrap().has_paid = true;
                Err("rejected")
            })
            .await;
        assert_eq!(result.unwrap_err(), "rejected");
        assert!(!store.read_all().await.people[0].has_paid);
        let _ = std::fs::remove_file(&store.path);
    }

    #[actix_web::test]
    async fn unwritable_path_reports_degraded_persistence() {
        let store = ResponsesStore::new(PathBuf::from("/nonexistent-dir/responses.json"));
        let (data, persisted) = store
            .update(|doc| {
                doc.people = roster().people;
                Ok::<_, ()>(())
            })
            .await
            .unwrap();
        assert!(!persisted);
        assert_eq!(data.people.len(), 1);
    }
}
