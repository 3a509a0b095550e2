//! Activation handling - the click state machine over the used-flag

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, instrument, warn};

use crate::application::ports::outbound::{AudioCue, AudioPort, ChatPort, FlagStorePort};
use crate::application::services::chat_cards;
use crate::domain::entities::Character;
use crate::domain::value_objects::{UsedFlag, Viewer, FLAG_KEY, MODULE_ID};

/// What a click on the Tag Team button ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// The action fired: cue played, card posted, flag set.
    Activated,
    /// A GM clicked a used button: the flag was cleared for this character.
    Reset,
    /// A non-GM invoked a used action; nothing changed.
    Ignored,
}

/// Handles Tag Team activation clicks.
pub struct ActivationService {
    flags: Arc<dyn FlagStorePort>,
    chat: Arc<dyn ChatPort>,
    audio: Arc<dyn AudioPort>,
    cue: AudioCue,
}

impl ActivationService {
    pub fn new(
        flags: Arc<dyn FlagStorePort>,
        chat: Arc<dyn ChatPort>,
        audio: Arc<dyn AudioPort>,
        cue: AudioCue,
    ) -> Self {
        Self {
            flags,
            chat,
            audio,
            cue,
        }
    }

    /// Process a click on the button (or a direct invocation through the
    /// exposed API, which bypasses the sheet's disabled state).
    ///
    /// The flag write is awaited so the host's reactive re-render fires
    /// only after persistence; the chat card is posted before that await.
    #[instrument(skip(self, character, viewer), fields(character = %character.name))]
    pub async fn on_activate(
        &self,
        character: &Character,
        viewer: &Viewer,
    ) -> Result<ActivationOutcome> {
        let raw = self
            .flags
            .get_flag(character.id, MODULE_ID, FLAG_KEY)
            .await
            .context("Failed to read used-flag")?;
        let used = UsedFlag::from_value(raw.as_ref());

        if used.is_used() {
            if viewer.is_gm() {
                self.flags
                    .set_flag(character.id, MODULE_ID, FLAG_KEY, UsedFlag::CLEAR.to_value())
                    .await
                    .context("Failed to clear used-flag")?;
                info!(character_id = %character.id, "Tag Team reset by GM");
                return Ok(ActivationOutcome::Reset);
            }
            // The sheet disables the button for non-GM viewers, but the
            // exposed API can still land here
            return Ok(ActivationOutcome::Ignored);
        }

        // Local cue for the triggering user; playback never blocks the
        // activation and its failures are only logged
        let audio = Arc::clone(&self.audio);
        let cue = self.cue.clone();
        tokio::spawn(async move {
            if let Err(e) = audio.play(cue).await {
                warn!("Tag Team audio cue failed: {e:#}");
            }
        });

        self.send_activation_message(character).await?;

        self.flags
            .set_flag(character.id, MODULE_ID, FLAG_KEY, UsedFlag::USED.to_value())
            .await
            .context("Failed to persist used-flag")?;

        info!(character_id = %character.id, "Tag Team activated");
        Ok(ActivationOutcome::Activated)
    }

    /// Post the activation card for a character. Also exposed on the
    /// module API for other extensions.
    pub async fn send_activation_message(&self, character: &Character) -> Result<()> {
        self.chat
            .create_message(chat_cards::activation_card(character))
            .await
            .context("Failed to post Tag Team activation message")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::entities::DocumentKind;
    use crate::domain::value_objects::{Hope, UserId};
    use crate::infrastructure::memory_host::MemoryHost;

    fn service(host: &Arc<MemoryHost>) -> ActivationService {
        ActivationService::new(
            host.clone(),
            host.clone(),
            host.clone(),
            AudioCue {
                src: "modules/dh-tagteam/assets/sfx/pipchange.mp3".to_string(),
                volume: 0.5,
                autoplay: true,
            },
        )
    }

    fn character() -> Character {
        Character::new("Marlowe", DocumentKind::Character).with_hope(Hope::new(5))
    }

    #[tokio::test]
    async fn test_activation_posts_one_message_and_sets_flag() {
        let host = Arc::new(MemoryHost::new());
        let character = character();

        let outcome = service(&host)
            .on_activate(&character, &Viewer::player(UserId::new()))
            .await
            .unwrap();

        assert_eq!(outcome, ActivationOutcome::Activated);
        assert_eq!(host.messages().len(), 1);
        assert_eq!(
            host.flag(character.id, MODULE_ID, FLAG_KEY),
            Some(json!(true))
        );
    }

    #[tokio::test]
    async fn test_activation_message_precedes_flag_commit() {
        let host = Arc::new(MemoryHost::new());
        let character = character();

        service(&host)
            .on_activate(&character, &Viewer::player(UserId::new()))
            .await
            .unwrap();

        let journal = host.journal();
        let message_at = journal
            .iter()
            .position(|op| op.starts_with("create_message"))
            .expect("message was posted");
        let flag_at = journal
            .iter()
            .position(|op| op.starts_with("set_flag"))
            .expect("flag was written");
        assert!(message_at < flag_at);
    }

    #[tokio::test]
    async fn test_gm_click_on_used_resets_without_message() {
        let host = Arc::new(MemoryHost::new());
        let character = character();
        host.seed_flag(character.id, MODULE_ID, FLAG_KEY, json!(true));

        let outcome = service(&host)
            .on_activate(&character, &Viewer::gm(UserId::new()))
            .await
            .unwrap();

        assert_eq!(outcome, ActivationOutcome::Reset);
        assert!(host.messages().is_empty());
        assert_eq!(
            host.flag(character.id, MODULE_ID, FLAG_KEY),
            Some(json!(false))
        );
    }

    #[tokio::test]
    async fn test_player_click_on_used_is_ignored() {
        let host = Arc::new(MemoryHost::new());
        let character = character();
        host.seed_flag(character.id, MODULE_ID, FLAG_KEY, json!(true));

        let outcome = service(&host)
            .on_activate(&character, &Viewer::player(UserId::new()))
            .await
            .unwrap();

        assert_eq!(outcome, ActivationOutcome::Ignored);
        assert!(host.messages().is_empty());
        assert_eq!(
            host.flag(character.id, MODULE_ID, FLAG_KEY),
            Some(json!(true))
        );
    }

    #[tokio::test]
    async fn test_second_activation_by_player_is_ignored() {
        let host = Arc::new(MemoryHost::new());
        let character = character();
        let service = service(&host);
        let viewer = Viewer::player(UserId::new());

        service.on_activate(&character, &viewer).await.unwrap();
        let outcome = service.on_activate(&character, &viewer).await.unwrap();

        assert_eq!(outcome, ActivationOutcome::Ignored);
        assert_eq!(host.messages().len(), 1);
    }
}
