//! Exposed module API - entry points for other extensions
//!
//! The Rust rendition of the global namespace object the module exports:
//! three invocable operations plus the two identifying constants. Not a
//! formal API contract; callers bypass the sheet UI entirely.

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{
    ActivationOutcome, ActivationService, ResetOutcome, ResetService,
};
use crate::domain::entities::Character;
use crate::domain::value_objects::{Viewer, FLAG_KEY, MODULE_ID};

/// Invocable surface exposed to other extensions and macros.
pub struct TagTeamApi {
    activation: Arc<ActivationService>,
    reset: Arc<ResetService>,
}

impl TagTeamApi {
    /// Flag namespace this module writes under.
    pub const MODULE_ID: &'static str = MODULE_ID;

    /// Key of the used-flag inside the module namespace.
    pub const FLAG_KEY: &'static str = FLAG_KEY;

    pub fn new(activation: Arc<ActivationService>, reset: Arc<ResetService>) -> Self {
        Self { activation, reset }
    }

    /// Trigger the activation state machine for a character, exactly as a
    /// button click would.
    pub async fn activate(
        &self,
        character: &Character,
        viewer: &Viewer,
    ) -> Result<ActivationOutcome> {
        self.activation.on_activate(character, viewer).await
    }

    /// Post the activation chat card without touching any state.
    pub async fn send_message(&self, character: &Character) -> Result<()> {
        self.activation.send_activation_message(character).await
    }

    /// Bulk reset, GM gated.
    pub async fn reset_all(&self, viewer: &Viewer) -> Result<ResetOutcome> {
        self.reset.reset_all(viewer).await
    }
}
