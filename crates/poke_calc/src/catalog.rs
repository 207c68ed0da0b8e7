//! Read-only reference catalogs.
//!
//! The calculator never reaches into global data: species, moves, abilities
//! and items are looked up through a [`Catalog`] instance the caller owns.
//! [`MemoryCatalog`] is the in-memory implementation, built from records or
//! from a JSON array.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::CatalogError;

/// Normalize an identifier: lowercase ASCII alphanumerics only.
///
/// `"Life Orb"`, `"life-orb"` and `"LIFEORB"` all map to `"lifeorb"`.
pub fn to_id(name: &str) -> String {
    name.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A record that can be stored in a catalog.
pub trait Keyed {
    /// Human-readable record kind, used in error messages.
    const KIND: &'static str;

    /// Display name; the catalog key is `to_id(key())`.
    fn key(&self) -> &str;
}

/// Read-only lookup contract.
pub trait Catalog<T> {
    fn get(&self, id: &str) -> Option<&T>;

    fn all(&self) -> Vec<&T>;

    /// Like [`get`](Catalog::get), but a miss is an error.
    fn require(&self, id: &str) -> Result<&T, CatalogError>
    where
        T: Keyed,
    {
        self.get(id).ok_or_else(|| CatalogError::NotFound {
            kind: T::KIND,
            id: id.to_string(),
        })
    }
}

/// In-memory catalog keyed by normalized id. Iteration follows insertion order.
#[derive(Clone, Debug)]
pub struct MemoryCatalog<T> {
    records: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Keyed> MemoryCatalog<T> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert a record; a later record with the same id replaces the earlier one.
    pub fn insert(&mut self, record: T) {
        let id = to_id(record.key());
        match self.index.get(&id) {
            Some(&slot) => self.records[slot] = record,
            None => {
                self.index.insert(id, self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<T: Keyed> Default for MemoryCatalog<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> FromIterator<T> for MemoryCatalog<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut catalog = Self::new();
        for record in iter {
            catalog.insert(record);
        }
        catalog
    }
}

impl<T: Keyed + DeserializeOwned> MemoryCatalog<T> {
    /// Load from a JSON array of records.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<T> = serde_json::from_str(json)?;
        tracing::debug!(kind = T::KIND, count = records.len(), "loaded catalog");
        Ok(records.into_iter().collect())
    }
}

impl<T: Keyed> Catalog<T> for MemoryCatalog<T> {
    fn get(&self, id: &str) -> Option<&T> {
        self.index.get(&to_id(id)).map(|&slot| &self.records[slot])
    }

    fn all(&self) -> Vec<&T> {
        self.records.iter().collect()
    }
}
