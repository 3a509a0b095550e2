//! Flag store port - per-document namespaced key/value persistence

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::value_objects::CharacterId;

#[derive(Debug, thiserror::Error)]
pub enum FlagStoreError {
    #[error("Document not found: {0}")]
    DocumentNotFound(CharacterId),
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for the host's per-document flag storage.
///
/// Flags are loose JSON values scoped by a module namespace and key.
/// `set_flag` resolves only once the write is durably committed, which is
/// what lets the activation handler order its side effects against the
/// host's reactive re-render.
#[async_trait]
pub trait FlagStorePort: Send + Sync {
    /// Read a flag. `None` when the flag has never been written.
    async fn get_flag(
        &self,
        character_id: CharacterId,
        namespace: &str,
        key: &str,
    ) -> Result<Option<Value>, FlagStoreError>;

    /// Write a flag, resolving on durable commit.
    async fn set_flag(
        &self,
        character_id: CharacterId,
        namespace: &str,
        key: &str,
        value: Value,
    ) -> Result<(), FlagStoreError>;
}
