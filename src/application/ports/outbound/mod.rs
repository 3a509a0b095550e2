//! Outbound ports - Interfaces the module requires from the host
//!
//! These traits define the contracts the embedding host must implement.
//! Application services depend on these traits, not concrete implementations.

mod document_port;
mod flag_store_port;
mod message_port;
mod sheet_port;

pub use document_port::{ActorRegistryPort, ItemResolverPort};
pub use flag_store_port::{FlagStoreError, FlagStorePort};
pub use message_port::{AudioCue, AudioPort, ChatPort, NotificationPort};
pub use sheet_port::{OpenSheet, SheetRegistryPort};
