//! Reset handling - GM bulk reset and the long-rest lifecycle hook

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{
    ActorRegistryPort, ChatPort, FlagStorePort, NotificationPort, SheetRegistryPort,
};
use crate::application::services::chat_cards;
use crate::domain::entities::Character;
use crate::domain::value_objects::{UsedFlag, Viewer, FLAG_KEY, MODULE_ID};

/// Result of a bulk reset request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// Caller was not a GM; a warning was shown and nothing changed.
    NotPermitted,
    /// Flags cleared for `reset_count` characters.
    Completed { reset_count: usize },
}

/// Clears used-flags: per table on GM request, per character on long rest.
pub struct ResetService {
    actors: Arc<dyn ActorRegistryPort>,
    flags: Arc<dyn FlagStorePort>,
    chat: Arc<dyn ChatPort>,
    notifications: Arc<dyn NotificationPort>,
    sheets: Arc<dyn SheetRegistryPort>,
}

impl ResetService {
    pub fn new(
        actors: Arc<dyn ActorRegistryPort>,
        flags: Arc<dyn FlagStorePort>,
        chat: Arc<dyn ChatPort>,
        notifications: Arc<dyn NotificationPort>,
        sheets: Arc<dyn SheetRegistryPort>,
    ) -> Self {
        Self {
            actors,
            flags,
            chat,
            notifications,
            sheets,
        }
    }

    /// Clear the used-flag across every character. GM only; non-GM callers
    /// get a warning toast and no state change.
    ///
    /// Posts a single summary card when anything was cleared, then forces
    /// a re-render of every open character sheet so the buttons update
    /// without waiting for the host's own reactive cycle.
    #[instrument(skip(self, viewer))]
    pub async fn reset_all(&self, viewer: &Viewer) -> Result<ResetOutcome> {
        if !viewer.is_gm() {
            self.notifications.warn("Only the GM can reset Tag Teams.");
            return Ok(ResetOutcome::NotPermitted);
        }

        let actors = self
            .actors
            .actors()
            .await
            .context("Failed to list actors for bulk reset")?;

        let mut reset_count = 0usize;
        for character in actors.iter().filter(|c| c.kind.is_character()) {
            let raw = self
                .flags
                .get_flag(character.id, MODULE_ID, FLAG_KEY)
                .await
                .context("Failed to read used-flag during bulk reset")?;
            if !UsedFlag::from_value(raw.as_ref()).is_used() {
                continue;
            }
            // Sequential writes: one in-flight persistence call at a time
            self.flags
                .set_flag(character.id, MODULE_ID, FLAG_KEY, UsedFlag::CLEAR.to_value())
                .await
                .context("Failed to clear used-flag during bulk reset")?;
            reset_count += 1;
        }

        if reset_count > 0 {
            self.chat
                .create_message(chat_cards::reset_card(reset_count))
                .await
                .context("Failed to post bulk reset summary")?;
        }

        for sheet in self.sheets.open_sheets() {
            if sheet.kind.is_character() {
                self.sheets.render(sheet.character_id);
            }
        }

        info!(reset_count, "Tag Team bulk reset complete");
        Ok(ResetOutcome::Completed { reset_count })
    }

    /// Long-rest completion: clear the character's flag and refresh their
    /// sheet. Idempotent; a character whose flag is already clear is left
    /// untouched.
    #[instrument(skip(self, character), fields(character = %character.name))]
    pub async fn on_long_rest(&self, character: &Character) -> Result<()> {
        if !character.kind.is_character() {
            return Ok(());
        }

        let raw = self
            .flags
            .get_flag(character.id, MODULE_ID, FLAG_KEY)
            .await
            .context("Failed to read used-flag on long rest")?;
        if !UsedFlag::from_value(raw.as_ref()).is_used() {
            debug!("Long rest with no used-flag set, nothing to clear");
            return Ok(());
        }

        self.flags
            .set_flag(character.id, MODULE_ID, FLAG_KEY, UsedFlag::CLEAR.to_value())
            .await
            .context("Failed to clear used-flag on long rest")?;
        self.sheets.render(character.id);

        info!(character_id = %character.id, "Tag Team recovered after long rest");
        Ok(())
    }
}
