//! Hope cost resolution - class item, hope feature, linked item, action cost
//!
//! Walks the character's class data to find what the Tag Team action
//! actually costs. Class data is host-owned and loosely shaped, so every
//! step is defensive: anything missing or malformed ends in the default
//! cost, and sheet rendering never breaks on bad data.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, instrument, warn};

use crate::application::dto::system_shape;
use crate::application::ports::outbound::ItemResolverPort;
use crate::domain::entities::Character;
use crate::domain::value_objects::HopeCost;

/// Feature type tag marking the class feature the cost hangs off.
const HOPE_FEATURE_TYPE: &str = "hope";

/// Resource key of the cost entry the resolver is after.
const HOPE_COST_KEY: &str = "hope";

/// Resolves the Hope cost of the Tag Team action for a character.
pub struct HopeCostResolver {
    items: Arc<dyn ItemResolverPort>,
}

impl HopeCostResolver {
    pub fn new(items: Arc<dyn ItemResolverPort>) -> Self {
        Self { items }
    }

    /// Resolve the cost. Never fails: resolution errors are logged and the
    /// default cost is returned instead.
    #[instrument(skip(self, character), fields(character = %character.name))]
    pub async fn resolve_cost(&self, character: &Character) -> HopeCost {
        match self.try_resolve(character).await {
            Ok(Some(cost)) => cost,
            Ok(None) => HopeCost::DEFAULT,
            Err(e) => {
                warn!("Failed to resolve hope cost, using default: {e:#}");
                HopeCost::DEFAULT
            }
        }
    }

    /// The happy path: class item -> ordered feature list -> first
    /// hope-typed feature -> its linked item -> first action cost keyed
    /// `hope`. `Ok(None)` at any step means "fall back to default".
    async fn try_resolve(&self, character: &Character) -> Result<Option<HopeCost>> {
        let Some(class_item) = &character.class_item else {
            return Ok(None);
        };

        let Some(features) = class_item.features() else {
            return Ok(None);
        };
        let Some(features) = system_shape::feature_entries(features) else {
            debug!(class = %class_item.name, "Class feature collection is not an ordered list");
            return Ok(None);
        };

        let Some(hope_feature) = features
            .iter()
            .find(|f| f.feature_type == HOPE_FEATURE_TYPE)
        else {
            return Ok(None);
        };
        let Some(uuid) = &hope_feature.item else {
            return Ok(None);
        };

        // Suspend point: the host resolves the reference asynchronously
        let item = self
            .items
            .resolve(uuid)
            .await
            .with_context(|| format!("Failed to resolve hope feature item {uuid}"))?;
        let Some(item) = item else {
            return Ok(None);
        };

        let Some(actions) = item.actions() else {
            return Ok(None);
        };
        for action in system_shape::collection_entries(actions) {
            let hope_entry = system_shape::action_cost_entries(action)
                .into_iter()
                .find(|c| c.key == HOPE_COST_KEY);
            if let Some(entry) = hope_entry {
                // An entry with no value still counts as found
                return Ok(Some(entry.value.map(HopeCost::new).unwrap_or_default()));
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;

    use crate::domain::entities::{ClassItem, DocumentKind, Item};
    use crate::domain::value_objects::ItemUuid;

    struct StubItemResolver {
        item: Option<Item>,
        fail: bool,
    }

    impl StubItemResolver {
        fn returning(item: Item) -> Self {
            Self {
                item: Some(item),
                fail: false,
            }
        }

        fn empty() -> Self {
            Self {
                item: None,
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                item: None,
                fail: true,
            }
        }
    }

    #[async_trait]
    impl ItemResolverPort for StubItemResolver {
        async fn resolve(&self, _uuid: &ItemUuid) -> Result<Option<Item>> {
            if self.fail {
                anyhow::bail!("resolver offline");
            }
            Ok(self.item.clone())
        }
    }

    fn resolver(items: StubItemResolver) -> HopeCostResolver {
        HopeCostResolver::new(Arc::new(items))
    }

    fn character_with_features(features: serde_json::Value) -> Character {
        Character::new("Marlowe", DocumentKind::Character)
            .with_class_item(ClassItem::new("Rogue", json!({ "features": features })))
    }

    fn hope_class_character() -> Character {
        character_with_features(json!([
            {"type": "foundation"},
            {"type": "hope", "item": "Compendium.daggerheart.features.tagteam"},
        ]))
    }

    fn item_with_actions(actions: serde_json::Value) -> Item {
        Item::new(
            ItemUuid::new("Compendium.daggerheart.features.tagteam"),
            "Tag Team",
            json!({ "actions": actions }),
        )
    }

    #[tokio::test]
    async fn test_no_class_item_yields_default() {
        let character = Character::new("Classless", DocumentKind::Character);
        let cost = resolver(StubItemResolver::empty())
            .resolve_cost(&character)
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }

    #[tokio::test]
    async fn test_map_shaped_feature_list_yields_default() {
        let character = character_with_features(json!({"f1": {"type": "hope", "item": "x"}}));
        let cost = resolver(StubItemResolver::empty())
            .resolve_cost(&character)
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }

    #[tokio::test]
    async fn test_no_hope_feature_yields_default() {
        let character = character_with_features(json!([{"type": "foundation"}]));
        let cost = resolver(StubItemResolver::empty())
            .resolve_cost(&character)
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }

    #[tokio::test]
    async fn test_hope_feature_without_item_ref_yields_default() {
        let character = character_with_features(json!([{"type": "hope"}]));
        let cost = resolver(StubItemResolver::empty())
            .resolve_cost(&character)
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }

    #[tokio::test]
    async fn test_resolver_failure_yields_default() {
        let cost = resolver(StubItemResolver::failing())
            .resolve_cost(&hope_class_character())
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }

    #[tokio::test]
    async fn test_unresolvable_reference_yields_default() {
        let cost = resolver(StubItemResolver::empty())
            .resolve_cost(&hope_class_character())
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }

    #[tokio::test]
    async fn test_item_without_actions_yields_default() {
        let item = Item::new(ItemUuid::new("x"), "Tag Team", json!({}));
        let cost = resolver(StubItemResolver::returning(item))
            .resolve_cost(&hope_class_character())
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }

    #[tokio::test]
    async fn test_list_shaped_actions_resolve_cost() {
        let item = item_with_actions(json!([
            {"cost": [{"key": "stress", "value": 1}]},
            {"cost": [{"key": "hope", "value": 2}]},
        ]));
        let cost = resolver(StubItemResolver::returning(item))
            .resolve_cost(&hope_class_character())
            .await;
        assert_eq!(cost, HopeCost::new(2));
    }

    #[tokio::test]
    async fn test_map_shaped_actions_and_costs_resolve() {
        let item = item_with_actions(json!({
            "a1": {"cost": {"c1": {"key": "hope", "value": 4}}},
        }));
        let cost = resolver(StubItemResolver::returning(item))
            .resolve_cost(&hope_class_character())
            .await;
        assert_eq!(cost, HopeCost::new(4));
    }

    #[tokio::test]
    async fn test_hope_entry_without_value_yields_default() {
        let item = item_with_actions(json!([{"cost": [{"key": "hope"}]}]));
        let cost = resolver(StubItemResolver::returning(item))
            .resolve_cost(&hope_class_character())
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }

    #[tokio::test]
    async fn test_no_hope_cost_in_any_action_yields_default() {
        let item = item_with_actions(json!([
            {"cost": [{"key": "stress", "value": 1}]},
            {"cost": []},
        ]));
        let cost = resolver(StubItemResolver::returning(item))
            .resolve_cost(&hope_class_character())
            .await;
        assert_eq!(cost, HopeCost::DEFAULT);
    }
}
