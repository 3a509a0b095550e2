//! Hope resource values - the currency the Tag Team action spends

use serde::{Deserialize, Serialize};

/// A character's current Hope pool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Hope(u32);

impl Hope {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Whether this pool covers the given cost.
    pub fn covers(&self, cost: HopeCost) -> bool {
        self.0 >= cost.value()
    }
}

impl std::fmt::Display for Hope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The Hope cost of the Tag Team action.
///
/// Resolved from the character's class feature when possible; falls back
/// to [`HopeCost::DEFAULT`] whenever the class data cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HopeCost(u32);

impl HopeCost {
    /// Fallback cost when the class feature data is missing or malformed.
    pub const DEFAULT: Self = Self(3);

    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl Default for HopeCost {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for HopeCost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hope_covers_cost() {
        assert!(Hope::new(3).covers(HopeCost::new(3)));
        assert!(Hope::new(5).covers(HopeCost::new(3)));
        assert!(!Hope::new(2).covers(HopeCost::new(3)));
        assert!(!Hope::new(0).covers(HopeCost::DEFAULT));
    }

    #[test]
    fn test_default_cost() {
        assert_eq!(HopeCost::default(), HopeCost::new(3));
    }
}
