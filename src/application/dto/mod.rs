//! Data transfer shapes - adapters between host payloads and the domain

pub mod system_shape;

pub use system_shape::{
    action_cost_entries, collection_entries, feature_entries, CostEntry, FeatureEntry,
};
