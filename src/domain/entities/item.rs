//! Item entity - a resolved host item document carrying actions

use serde_json::Value;

use crate::domain::value_objects::ItemUuid;

/// An item document returned by the host's reference resolver.
///
/// Like [`super::ClassItem`], the `system` payload stays raw JSON: the
/// `actions` collection inside it comes in several shapes across host
/// versions and is normalized by the shape adapter at resolution time.
#[derive(Debug, Clone)]
pub struct Item {
    pub uuid: ItemUuid,
    pub name: String,
    pub system: Value,
}

impl Item {
    pub fn new(uuid: ItemUuid, name: impl Into<String>, system: Value) -> Self {
        Self {
            uuid,
            name: name.into(),
            system,
        }
    }

    /// The raw `actions` collection, whatever shape it arrived in.
    pub fn actions(&self) -> Option<&Value> {
        self.system.get("actions")
    }
}
