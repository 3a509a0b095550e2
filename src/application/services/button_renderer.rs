//! Button rendering - computes and mounts the Tag Team button on a sheet

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, instrument};

use crate::application::ports::outbound::{FlagStorePort, SheetRegistryPort};
use crate::application::services::cost_resolver::HopeCostResolver;
use crate::domain::entities::Character;
use crate::domain::value_objects::{
    ButtonView, Hope, HopeCost, SheetId, UsedFlag, Viewer, FLAG_KEY, MODULE_ID,
};

/// Renders the Tag Team button into character sheets.
pub struct ButtonRenderer {
    flags: Arc<dyn FlagStorePort>,
    sheets: Arc<dyn SheetRegistryPort>,
    cost_resolver: Arc<HopeCostResolver>,
}

impl ButtonRenderer {
    pub fn new(
        flags: Arc<dyn FlagStorePort>,
        sheets: Arc<dyn SheetRegistryPort>,
        cost_resolver: Arc<HopeCostResolver>,
    ) -> Self {
        Self {
            flags,
            sheets,
            cost_resolver,
        }
    }

    /// Compute the button presentation. First match wins: used state
    /// overrides everything, then the Hope shortfall, then ready.
    pub fn button_view(used: UsedFlag, hope: Hope, cost: HopeCost, viewer: &Viewer) -> ButtonView {
        if used.is_used() {
            ButtonView::used(viewer.is_gm())
        } else if !hope.covers(cost) {
            ButtonView::no_hope(cost)
        } else {
            ButtonView::ready()
        }
    }

    /// Handle a character sheet render: compute the view and mount the
    /// button on the sheet.
    ///
    /// Returns `Ok(None)` without touching the sheet for non-character
    /// documents, and when a button is already mounted (repeated host
    /// re-renders must never inject a second button).
    #[instrument(skip(self, character, viewer), fields(character = %character.name))]
    pub async fn render(
        &self,
        sheet_id: SheetId,
        character: &Character,
        viewer: &Viewer,
    ) -> Result<Option<ButtonView>> {
        if !character.kind.is_character() {
            return Ok(None);
        }
        if self.sheets.has_button(sheet_id) {
            debug!(%sheet_id, "Button already mounted, skipping injection");
            return Ok(None);
        }

        let raw = self
            .flags
            .get_flag(character.id, MODULE_ID, FLAG_KEY)
            .await
            .context("Failed to read used-flag for sheet render")?;
        let used = UsedFlag::from_value(raw.as_ref());
        let cost = self.cost_resolver.resolve_cost(character).await;

        let view = Self::button_view(used, character.hope, cost, viewer);
        self.sheets
            .mount_button(sheet_id, &view)
            .context("Failed to mount Tag Team button")?;

        debug!(state = ?view.state, "Mounted Tag Team button");
        Ok(Some(view))
    }
}
