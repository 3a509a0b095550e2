//! Host lifecycle hooks - typed handlers for the events the host dispatches
//!
//! The host adapter registers these against its own hook bus: sheet
//! render, GM menu render, long rest, and the button click it wired up
//! when mounting. Handlers take explicit event payloads instead of
//! reading ambient globals.

use std::sync::Arc;

use anyhow::Result;

use crate::application::services::{
    ActivationOutcome, ActivationService, ButtonRenderer, ResetService,
};
use crate::domain::entities::Character;
use crate::domain::value_objects::{ButtonView, SheetId, Viewer};

/// A character sheet finished rendering.
#[derive(Debug, Clone)]
pub struct SheetRenderEvent {
    pub sheet_id: SheetId,
    pub character: Character,
    pub viewer: Viewer,
}

/// The GM configuration menu is rendering.
#[derive(Debug, Clone)]
pub struct GmMenuRenderEvent {
    pub viewer: Viewer,
}

/// A character completed a long rest.
#[derive(Debug, Clone)]
pub struct LongRestEvent {
    pub character: Character,
}

/// The section this module contributes to the GM menu. The host renders
/// it and routes clicks on the button to the API's `reset_all`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GmMenuSection {
    pub legend: String,
    pub button_label: String,
    pub button_icon: String,
}

impl Default for GmMenuSection {
    fn default() -> Self {
        Self {
            legend: "Tag Team Module".to_string(),
            button_label: "Reset All Tag Teams".to_string(),
            button_icon: "fas fa-sync".to_string(),
        }
    }
}

/// The module's hook handlers, one per host lifecycle event.
pub struct TagTeamHooks {
    renderer: ButtonRenderer,
    activation: Arc<ActivationService>,
    reset: Arc<ResetService>,
}

impl TagTeamHooks {
    pub fn new(
        renderer: ButtonRenderer,
        activation: Arc<ActivationService>,
        reset: Arc<ResetService>,
    ) -> Self {
        Self {
            renderer,
            activation,
            reset,
        }
    }

    /// Sheet render: mount the button. Non-character sheets and repeat
    /// renders come back as `Ok(None)`.
    pub async fn on_render_character_sheet(
        &self,
        event: &SheetRenderEvent,
    ) -> Result<Option<ButtonView>> {
        self.renderer
            .render(event.sheet_id, &event.character, &event.viewer)
            .await
    }

    /// Click forwarded from the mounted button.
    pub async fn on_button_click(
        &self,
        character: &Character,
        viewer: &Viewer,
    ) -> Result<ActivationOutcome> {
        self.activation.on_activate(character, viewer).await
    }

    /// GM menu render: contribute the reset section, GM viewers only.
    pub fn on_render_gm_menu(&self, event: &GmMenuRenderEvent) -> Option<GmMenuSection> {
        if !event.viewer.is_gm() {
            return None;
        }
        Some(GmMenuSection::default())
    }

    /// Long rest completion for a character.
    pub async fn on_long_rest(&self, event: &LongRestEvent) -> Result<()> {
        self.reset.on_long_rest(&event.character).await
    }
}
