/// Capped newest-first histories persisted in the local store.
pub mod history;
/// Local key-value store backends.
pub mod local_store;
/// Persisted record definitions.
pub mod models;
/// Storage error types shared by every backend.
pub mod storage;
