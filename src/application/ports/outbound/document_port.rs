//! Document ports - host actor registry and reference resolution

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::{Character, Item};
use crate::domain::value_objects::ItemUuid;

/// Port for resolving an item document by its opaque uuid.
#[async_trait]
pub trait ItemResolverPort: Send + Sync {
    /// Resolve a reference. `Ok(None)` when the host knows nothing under
    /// that uuid; `Err` for resolver failures.
    async fn resolve(&self, uuid: &ItemUuid) -> Result<Option<Item>>;
}

/// Port over the host's actor document registry.
#[async_trait]
pub trait ActorRegistryPort: Send + Sync {
    /// All actor documents the host currently holds, of every kind.
    /// Callers filter by [`DocumentKind`](crate::domain::entities::DocumentKind).
    async fn actors(&self) -> Result<Vec<Character>>;
}
