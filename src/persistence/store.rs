//! Best-effort, JSON-encoded key/value store for form state.
//!
//! Every key is namespaced under a fixed prefix before reaching the port.
//! Failures never propagate: a failed `save` is logged and dropped, a failed
//! `load` is logged and reported as absent.
//!
//! A `SaveBatch` collects several values and hands them to the port in a
//! single `write_many`, so one user action costs one backend write.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::ports::{StorageError, StoragePort};
use crate::config::PERSISTENCE;

#[cfg(debug_assertions)]
use crate::config::DEBUG_FLAGS;

pub struct FormStore<P: StoragePort> {
    port: P,
    prefix: String,
}

impl<P: StoragePort> FormStore<P> {
    pub fn new(port: P) -> Self {
        Self::with_prefix(port, PERSISTENCE.prefix)
    }

    pub fn with_prefix(port: P, prefix: impl Into<String>) -> Self {
        Self {
            port,
            prefix: prefix.into(),
        }
    }

    pub fn full_key(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    /// Serializes `value` and writes it under the prefixed key.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        if let Err(e) = self.try_save(key, value) {
            log::error!("Error saving '{}' to storage: {}", key, e);
        }
    }

    /// Starts a batch of saves, written when the batch is committed.
    pub fn batch(&mut self) -> SaveBatch<'_, P> {
        SaveBatch {
            store: self,
            entries: Vec::new(),
        }
    }

    fn encode<T: Serialize + ?Sized>(value: &T) -> Result<String, StorageError> {
        serde_json::to_string(value)
            .map_err(|e| StorageError::WriteFailed(format!("serialization: {}", e)))
    }

    fn try_save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StorageError> {
        let encoded = Self::encode(value)?;
        let full_key = self.full_key(key);
        self.port.write(&full_key, &encoded)?;

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            log::info!("[store] {} <- {}", full_key, encoded);
        }
        Ok(())
    }

    /// Reads and deserializes the value under `key`. Absent keys, corrupt
    /// data and unavailable storage all give `None`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let full_key = self.full_key(key);
        let raw = match self.port.read(&full_key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::error!("Error reading '{}' from storage: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                #[cfg(debug_assertions)]
                if DEBUG_FLAGS.print_state_serde {
                    log::info!("[store] {} -> {}", full_key, raw);
                }
                Some(value)
            }
            Err(e) => {
                log::error!("Error decoding '{}' from storage: {}", key, e);
                None
            }
        }
    }

    /// Loads a numeric value stored either as a JSON number or as a numeric
    /// JSON string (`"5000"`).
    pub fn load_number(&self, key: &str) -> Option<f64> {
        let number = match self.load::<serde_json::Value>(key)? {
            serde_json::Value::Number(n) => n.as_f64(),
            serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        }?;
        number.is_finite().then_some(number)
    }

    pub fn port(&self) -> &P {
        &self.port
    }

}

/// Pending saves against one `FormStore`. Nothing reaches the port until
/// `commit`; dropping an uncommitted batch discards it.
pub struct SaveBatch<'a, P: StoragePort> {
    store: &'a mut FormStore<P>,
    entries: Vec<(String, String)>,
}

impl<P: StoragePort> SaveBatch<'_, P> {
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match FormStore::<P>::encode(value) {
            Ok(encoded) => self.entries.push((self.store.full_key(key), encoded)),
            Err(e) => log::error!("Error saving '{}' to storage: {}", key, e),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes every collected entry in one go. Failures are logged.
    pub fn commit(self) {
        if self.entries.is_empty() {
            return;
        }
        if let Err(e) = self.store.port.write_many(&self.entries) {
            log::error!("Error saving {} entries to storage: {}", self.entries.len(), e);
            return;
        }

        #[cfg(debug_assertions)]
        if DEBUG_FLAGS.print_state_serde {
            for (key, encoded) in &self.entries {
                log::info!("[store] {} <- {}", key, encoded);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryPort;

    #[test]
    fn save_then_load_round_trips_scalars() {
        let mut store = FormStore::new(MemoryPort::new());

        store.save("campaignObjective", "Lead Generation");
        store.save("gaEnabled", &true);
        store.save("facebookBudget", &2440u64);
        store.save("ratio", &0.25f64);

        assert_eq!(
            store.load::<String>("campaignObjective").as_deref(),
            Some("Lead Generation")
        );
        assert_eq!(store.load::<bool>("gaEnabled"), Some(true));
        assert_eq!(store.load::<u64>("facebookBudget"), Some(2440));
        assert_eq!(store.load::<f64>("ratio"), Some(0.25));
    }

    #[test]
    fn keys_are_prefixed_and_json_encoded() {
        let mut store = FormStore::new(MemoryPort::new());
        store.save("primaryCta", "Shop now");
        assert_eq!(
            store.port().get_raw("marketingSystem_primaryCta"),
            Some("\"Shop now\"")
        );
    }

    #[test]
    fn absent_key_loads_as_none() {
        let store = FormStore::new(MemoryPort::new());
        assert_eq!(store.load::<String>("utmParams"), None);
    }

    #[test]
    fn later_save_overwrites_earlier() {
        let mut store = FormStore::new(MemoryPort::new());
        store.save("postSchedule", "Daily");
        store.save("postSchedule", "Weekly");
        assert_eq!(store.load::<String>("postSchedule").as_deref(), Some("Weekly"));
        assert_eq!(store.port().len(), 1);
    }

    #[test]
    fn unavailable_storage_never_propagates() {
        let mut store = FormStore::new(MemoryPort::unavailable());
        store.save("totalBudget", &5000u64);
        assert_eq!(store.load::<u64>("totalBudget"), None);
        assert!(store.port().is_empty());
    }

    #[test]
    fn corrupt_or_mistyped_values_load_as_none() {
        let mut port = MemoryPort::new();
        port.insert_raw("marketingSystem_gtmEnabled", "{oops");
        port.insert_raw("marketingSystem_pixelEnabled", "\"yes\"");
        let store = FormStore::new(port);

        assert_eq!(store.load::<bool>("gtmEnabled"), None);
        assert_eq!(store.load::<bool>("pixelEnabled"), None);
    }

    #[test]
    fn numbers_load_from_numeric_strings() {
        let mut port = MemoryPort::new();
        port.insert_raw("marketingSystem_totalBudget", "\"5000\"");
        port.insert_raw("marketingSystem_facebookBudget", "1967");
        port.insert_raw("marketingSystem_twitterBudget", "\"lots\"");
        let store = FormStore::new(port);

        assert_eq!(store.load_number("totalBudget"), Some(5000.0));
        assert_eq!(store.load_number("facebookBudget"), Some(1967.0));
        assert_eq!(store.load_number("twitterBudget"), None);
        assert_eq!(store.load_number("linkedinBudget"), None);
    }

    #[test]
    fn batch_reaches_the_port_once() {
        let mut store = FormStore::new(MemoryPort::new());
        let mut batch = store.batch();
        batch.save("facebookBudget", &2400u64);
        batch.save("totalBudget", &6100u64);
        assert_eq!(batch.len(), 2);
        batch.commit();

        assert_eq!(store.port().write_calls(), 1);
        assert_eq!(store.load::<u64>("facebookBudget"), Some(2400));
        assert_eq!(store.port().get_raw("marketingSystem_totalBudget"), Some("6100"));
    }

    #[test]
    fn uncommitted_or_failed_batch_writes_nothing() {
        let mut store = FormStore::new(MemoryPort::new());
        store.batch().save("promoOffer", "20% off");
        assert!(store.port().is_empty());

        let mut store = FormStore::new(MemoryPort::unavailable());
        let mut batch = store.batch();
        batch.save("promoOffer", "20% off");
        batch.commit();
        assert!(store.port().is_empty());
    }

    #[test]
    fn custom_prefix_namespaces_keys() {
        let mut store = FormStore::with_prefix(MemoryPort::new(), "test_");
        store.save("k", &1u8);
        assert_eq!(store.full_key("k"), "test_k");
        assert_eq!(store.port().get_raw("test_k"), Some("1"));
    }
}
