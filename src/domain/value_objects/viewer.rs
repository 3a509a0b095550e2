//! Viewer identity - who is looking at a sheet or invoking an operation

use serde::{Deserialize, Serialize};

use super::ids::UserId;

/// Privilege role of the current viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewerRole {
    GameMaster,
    Player,
}

/// The user on whose behalf a handler runs.
///
/// Passed explicitly into every service entry point instead of being read
/// from an ambient global, so the permission checks are testable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewer {
    pub id: UserId,
    pub role: ViewerRole,
}

impl Viewer {
    pub fn new(id: UserId, role: ViewerRole) -> Self {
        Self { id, role }
    }

    pub fn gm(id: UserId) -> Self {
        Self::new(id, ViewerRole::GameMaster)
    }

    pub fn player(id: UserId) -> Self {
        Self::new(id, ViewerRole::Player)
    }

    pub fn is_gm(&self) -> bool {
        self.role == ViewerRole::GameMaster
    }
}
