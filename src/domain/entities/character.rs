//! Character entity - the host-owned actor document as this module sees it

use serde_json::Value;

use crate::domain::value_objects::{CharacterId, Hope};

/// Kind tag of a host actor document. Only `Character` participates in
/// Tag Team; the other kinds are ignored by every handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Character,
    Adversary,
    Companion,
    Environment,
}

impl DocumentKind {
    pub fn is_character(&self) -> bool {
        matches!(self, DocumentKind::Character)
    }
}

/// A character as handed over by the host on render or lookup.
///
/// The host owns the full document; this is the slice the module reads:
/// identity and presentation, the Hope pool, and the embedded class item
/// the cost resolution walks. The used-flag is NOT part of this snapshot,
/// it lives in the host's flag store and is read fresh on every handler.
#[derive(Debug, Clone)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    /// Path to the portrait image asset, used on the activation chat card
    pub portrait_asset: Option<String>,
    pub kind: DocumentKind,
    pub hope: Hope,
    /// The character's single class-type item, if any
    pub class_item: Option<ClassItem>,
}

impl Character {
    pub fn new(name: impl Into<String>, kind: DocumentKind) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            portrait_asset: None,
            kind,
            hope: Hope::default(),
            class_item: None,
        }
    }

    pub fn with_hope(mut self, hope: Hope) -> Self {
        self.hope = hope;
        self
    }

    pub fn with_portrait(mut self, asset_path: impl Into<String>) -> Self {
        self.portrait_asset = Some(asset_path.into());
        self
    }

    pub fn with_class_item(mut self, class_item: ClassItem) -> Self {
        self.class_item = Some(class_item);
        self
    }
}

/// The class item embedded in a character document.
///
/// `system` is the host's raw system payload; its `features` collection is
/// decoded on demand by the cost resolver's shape adapter rather than up
/// front, since malformed class data must never break rendering.
#[derive(Debug, Clone)]
pub struct ClassItem {
    pub name: String,
    pub system: Value,
}

impl ClassItem {
    pub fn new(name: impl Into<String>, system: Value) -> Self {
        Self {
            name: name.into(),
            system,
        }
    }

    /// The raw `features` collection, whatever shape it arrived in.
    pub fn features(&self) -> Option<&Value> {
        self.system.get("features")
    }
}
