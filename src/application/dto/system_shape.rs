//! Shape adapter for polymorphic host system data
//!
//! Host system payloads are loosely shaped: action and cost collections
//! arrive as ordered lists, maps keyed by id, or plain objects depending
//! on host version. Everything is normalized here, once, into ordered
//! lists before the cost resolver touches it.

use serde_json::Value;

use crate::domain::value_objects::ItemUuid;

/// A class feature entry decoded from the class item's feature list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureEntry {
    pub feature_type: String,
    /// Reference to the linked item, when the feature carries one
    pub item: Option<ItemUuid>,
}

impl FeatureEntry {
    /// Decode one feature entry. Entries without a string `type` are
    /// dropped rather than failing the whole list.
    pub fn from_value(value: &Value) -> Option<Self> {
        let feature_type = value.get("type")?.as_str()?.to_string();
        Some(Self {
            feature_type,
            item: item_ref(value.get("item")),
        })
    }
}

/// A single action cost, keyed by resource type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostEntry {
    pub key: String,
    /// Missing values are kept as `None`; the resolver substitutes the
    /// default cost for them
    pub value: Option<u32>,
}

impl CostEntry {
    pub fn from_value(value: &Value) -> Option<Self> {
        let key = value.get("key")?.as_str()?.to_string();
        Some(Self {
            key,
            value: value.get("value").and_then(as_cost_value),
        })
    }
}

/// Decode a class item's feature list.
///
/// Features are the one collection required to be a proper ordered list;
/// any other shape means the class data is malformed and resolution falls
/// back to the default cost.
pub fn feature_entries(features: &Value) -> Option<Vec<FeatureEntry>> {
    let list = features.as_array()?;
    Some(list.iter().filter_map(FeatureEntry::from_value).collect())
}

/// Normalize a host collection into an ordered list of raw entries.
///
/// Lists yield their elements, map-like objects their values. Scalars and
/// nulls yield nothing.
pub fn collection_entries(value: &Value) -> Vec<&Value> {
    match value {
        Value::Array(items) => items.iter().collect(),
        Value::Object(map) => map.values().collect(),
        _ => Vec::new(),
    }
}

/// The normalized cost entries of one action, in collection order.
pub fn action_cost_entries(action: &Value) -> Vec<CostEntry> {
    let Some(cost) = action.get("cost") else {
        return Vec::new();
    };
    collection_entries(cost)
        .into_iter()
        .filter_map(CostEntry::from_value)
        .collect()
}

/// An item reference is either a bare uuid string or a structured
/// reference carrying a `uuid` field.
fn item_ref(value: Option<&Value>) -> Option<ItemUuid> {
    match value? {
        Value::String(uuid) => Some(ItemUuid::new(uuid.clone())),
        Value::Object(map) => map
            .get("uuid")
            .and_then(Value::as_str)
            .map(ItemUuid::new),
        _ => None,
    }
}

fn as_cost_value(value: &Value) -> Option<u32> {
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok();
    }
    // Hosts occasionally serialize numeric fields as floats
    value
        .as_f64()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .map(|n| n as u32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_feature_entries_require_ordered_list() {
        assert!(feature_entries(&json!({"0": {"type": "hope"}})).is_none());
        assert!(feature_entries(&json!("hope")).is_none());
        assert!(feature_entries(&json!(null)).is_none());

        let features = json!([
            {"type": "foundation"},
            {"type": "hope", "item": "Compendium.daggerheart.items.abc"},
        ]);
        let entries = feature_entries(&features).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[1].feature_type, "hope");
        assert_eq!(
            entries[1].item,
            Some(ItemUuid::new("Compendium.daggerheart.items.abc"))
        );
    }

    #[test]
    fn test_feature_item_ref_shapes() {
        let bare = json!([{"type": "hope", "item": "uuid-1"}]);
        let structured = json!([{"type": "hope", "item": {"uuid": "uuid-2"}}]);
        let missing = json!([{"type": "hope"}]);

        assert_eq!(
            feature_entries(&bare).unwrap()[0].item,
            Some(ItemUuid::new("uuid-1"))
        );
        assert_eq!(
            feature_entries(&structured).unwrap()[0].item,
            Some(ItemUuid::new("uuid-2"))
        );
        assert_eq!(feature_entries(&missing).unwrap()[0].item, None);
    }

    #[test]
    fn test_collection_entries_from_list_and_map() {
        let list = json!([{"key": "a"}, {"key": "b"}]);
        assert_eq!(collection_entries(&list).len(), 2);

        let map = json!({"x1": {"key": "a"}, "x2": {"key": "b"}});
        assert_eq!(collection_entries(&map).len(), 2);

        assert!(collection_entries(&json!(42)).is_empty());
        assert!(collection_entries(&json!(null)).is_empty());
    }

    #[test]
    fn test_action_cost_entries_shapes() {
        let list_shaped = json!({"cost": [{"key": "hope", "value": 3}]});
        let map_shaped = json!({"cost": {"c1": {"key": "hope", "value": 2}}});
        let no_cost = json!({"name": "Tag Team"});

        assert_eq!(
            action_cost_entries(&list_shaped),
            vec![CostEntry {
                key: "hope".to_string(),
                value: Some(3)
            }]
        );
        assert_eq!(action_cost_entries(&map_shaped)[0].value, Some(2));
        assert!(action_cost_entries(&no_cost).is_empty());
    }

    #[test]
    fn test_cost_value_decoding() {
        let float_value = json!({"cost": [{"key": "hope", "value": 2.0}]});
        assert_eq!(action_cost_entries(&float_value)[0].value, Some(2));

        let missing_value = json!({"cost": [{"key": "hope"}]});
        assert_eq!(action_cost_entries(&missing_value)[0].value, None);

        let negative = json!({"cost": [{"key": "hope", "value": -1}]});
        assert_eq!(action_cost_entries(&negative)[0].value, None);
    }
}
