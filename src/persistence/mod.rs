// Key/value persistence of form state
pub mod ports;
pub mod store;

pub use ports::{MemoryPort, StorageError, StoragePort};
#[cfg(not(target_arch = "wasm32"))]
pub use ports::JsonFilePort;
#[cfg(target_arch = "wasm32")]
pub use ports::LocalStoragePort;
pub use store::{FormStore, SaveBatch};
