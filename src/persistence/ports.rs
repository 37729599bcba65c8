//! Storage backends the form store writes through.

use std::collections::HashMap;
use std::fmt;

/// Errors raised by a storage backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// Storage is disabled or missing entirely
    Unavailable(String),
    ReadFailed(String),
    /// Includes quota exhaustion
    WriteFailed(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::ReadFailed(msg) => write!(f, "Storage read failed: {}", msg),
            StorageError::WriteFailed(msg) => write!(f, "Storage write failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Raw string key/value access. Keys arrive fully prefixed.
pub trait StoragePort {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Writes several entries as one unit. Backends that pay per write
    /// (a file rewrite, say) override this to pay once.
    fn write_many(&mut self, entries: &[(String, String)]) -> Result<(), StorageError> {
        for (key, value) in entries {
            self.write(key, value)?;
        }
        Ok(())
    }
}

impl<P: StoragePort + ?Sized> StoragePort for Box<P> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn write_many(&mut self, entries: &[(String, String)]) -> Result<(), StorageError> {
        (**self).write_many(entries)
    }
}

/// Shared handle, so a caller can keep inspecting a port it handed over.
impl<P: StoragePort + ?Sized> StoragePort for std::rc::Rc<std::cell::RefCell<P>> {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.borrow().read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.borrow_mut().write(key, value)
    }

    fn write_many(&mut self, entries: &[(String, String)]) -> Result<(), StorageError> {
        self.borrow_mut().write_many(entries)
    }
}

/// In-memory backend. Reads and writes can be made to fail, which is how
/// disabled storage and quota errors are exercised in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryPort {
    entries: HashMap<String, String>,
    write_calls: usize,
    pub fail_reads: bool,
    pub fail_writes: bool,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend that behaves like disabled storage.
    pub fn unavailable() -> Self {
        Self {
            fail_reads: true,
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Stores `value` verbatim, bypassing serialization.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Successful `write`/`write_many` calls so far; a batch counts once.
    pub fn write_calls(&self) -> usize {
        self.write_calls
    }
}

impl StoragePort for MemoryPort {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("memory storage disabled".to_string()));
        }
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed(format!(
                "quota exceeded writing {}",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.write_calls += 1;
        Ok(())
    }

    fn write_many(&mut self, entries: &[(String, String)]) -> Result<(), StorageError> {
        if self.fail_writes {
            return Err(StorageError::WriteFailed(format!(
                "quota exceeded writing {} entries",
                entries.len()
            )));
        }
        self.entries.extend(entries.iter().cloned());
        self.write_calls += 1;
        Ok(())
    }
}

/// Native backend: the whole key space as one JSON object on disk,
/// rewritten on every `write` and once per `write_many`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct JsonFilePort {
    path: std::path::PathBuf,
    entries: std::collections::BTreeMap<String, String>,
}

#[cfg(not(target_arch = "wasm32"))]
impl JsonFilePort {
    /// Opens `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<std::path::PathBuf>) -> anyhow::Result<Self> {
        use anyhow::Context;

        use std::collections::BTreeMap;

        let path = path.into();
        let entries = if path.exists() {
            let text = std::fs::read_to_string(&path)
                .context(format!("Failed to read state file: {}", path.display()))?;
            if text.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&text)
                    .context(format!("Failed to parse state file: {}", path.display()))?
            }
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    fn flush(&self) -> anyhow::Result<()> {
        use anyhow::Context;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .context(format!("Failed to create directory: {}", parent.display()))?;
            }
        }
        let text = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, text)
            .context(format!("Failed to write state file: {}", self.path.display()))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl StoragePort for JsonFilePort {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.write_many(&[(key.to_string(), value.to_string())])
    }

    fn write_many(&mut self, entries: &[(String, String)]) -> Result<(), StorageError> {
        let previous: Vec<(String, Option<String>)> = entries
            .iter()
            .map(|(key, value)| (key.clone(), self.entries.insert(key.clone(), value.clone())))
            .collect();

        if let Err(e) = self.flush() {
            // Keep memory consistent with what is on disk. Undo in reverse so
            // a key repeated within the batch ends up at its original value.
            for (key, old) in previous.into_iter().rev() {
                match old {
                    Some(old) => self.entries.insert(key, old),
                    None => self.entries.remove(&key),
                };
            }
            return Err(StorageError::WriteFailed(format!("{:#}", e)));
        }
        Ok(())
    }
}

/// Browser backend over `window.localStorage`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalStoragePort;

#[cfg(target_arch = "wasm32")]
impl LocalStoragePort {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no global `window`".to_string()))?;
        window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{:?}", e)))?
            .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl StoragePort for LocalStoragePort {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| StorageError::ReadFailed(format!("{:?}", e)))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::WriteFailed(format!("{:?}", e)))
    }
}
