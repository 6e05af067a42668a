//! In-memory ObjectStore for command tests
//!
//! A BTreeMap keyed by object key, so listings come back in the same
//! lexicographic order S3 guarantees. Pages are kept deliberately small
//! to exercise the continuation-token loop.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use sx_core::{Error, ListPage, ObjectEntry, ObjectStore, Result};

/// Entries per list page
const PAGE_SIZE: usize = 2;

#[derive(Debug, Default)]
pub(crate) struct MemStore {
    objects: Mutex<BTreeMap<String, Vec<u8>>>,
}

impl MemStore {
    pub fn insert(&self, key: &str, data: &[u8]) {
        self.objects
            .lock()
            .unwrap()
            .insert(key.to_string(), data.to_vec());
    }

    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.objects.lock().unwrap().contains_key(key)
    }
}

#[async_trait]
impl ObjectStore for MemStore {
    async fn list_page(
        &self,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> Result<ListPage> {
        let objects = self.objects.lock().unwrap();

        let mut matching = objects
            .iter()
            .filter(|(k, _)| prefix.is_none_or(|p| k.starts_with(p)))
            .filter(|(k, _)| continuation_token.is_none_or(|t| k.as_str() > t));

        let entries: Vec<ObjectEntry> = matching
            .by_ref()
            .take(PAGE_SIZE)
            .map(|(k, v)| ObjectEntry::new(k, v.len() as i64))
            .collect();

        let continuation_token = if matching.next().is_some() {
            entries.last().map(|e| e.key.clone())
        } else {
            None
        };

        Ok(ListPage {
            entries,
            continuation_token,
        })
    }

    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.contains(key))
    }

    async fn get_object(&self, key: &str) -> Result<Vec<u8>> {
        self.get(key).ok_or_else(|| Error::NotFound(key.to_string()))
    }

    async fn put_object(
        &self,
        key: &str,
        source: &std::path::Path,
        _content_type: Option<&str>,
    ) -> Result<()> {
        let data = std::fs::read(source)?;
        self.insert(key, &data);
        Ok(())
    }

    async fn delete_object(&self, key: &str) -> Result<()> {
        let removed = self.objects.lock().unwrap().remove(key);
        match removed {
            Some(_) => Ok(()),
            None => Err(Error::NotFound(key.to_string())),
        }
    }
}
