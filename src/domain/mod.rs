//! Domain layer - Core business logic with no external dependencies
//!
//! This layer contains:
//! - Entities: Character, Item, ChatCard
//! - Value Objects: ids, Hope/HopeCost, UsedFlag, ButtonView, Viewer

pub mod entities;
pub mod value_objects;
