//! In-memory host - a reference implementation of every host port
//!
//! Backs the module's tests and headless embedding scenarios. State lives
//! in plain mutex-guarded maps; locks are never held across an await.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use crate::application::ports::outbound::{
    ActorRegistryPort, AudioCue, AudioPort, ChatPort, FlagStoreError, FlagStorePort,
    ItemResolverPort, NotificationPort, OpenSheet, SheetRegistryPort,
};
use crate::domain::entities::{Character, ChatCard, Item};
use crate::domain::value_objects::{ButtonView, CharacterId, ItemUuid, SheetId};

type FlagKey = (CharacterId, String, String);

/// Host double holding all module-visible state in memory.
#[derive(Default)]
pub struct MemoryHost {
    actors: Mutex<Vec<Character>>,
    items: Mutex<HashMap<ItemUuid, Item>>,
    flags: Mutex<HashMap<FlagKey, Value>>,
    open_sheets: Mutex<Vec<OpenSheet>>,
    mounted: Mutex<Vec<(SheetId, ButtonView)>>,
    messages: Mutex<Vec<ChatCard>>,
    warnings: Mutex<Vec<String>>,
    cues: Mutex<Vec<AudioCue>>,
    render_requests: Mutex<Vec<CharacterId>>,
    /// Ordered record of side-effecting port calls
    journal: Mutex<Vec<String>>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_actor(&self, character: Character) {
        self.actors.lock().unwrap().push(character);
    }

    pub fn add_item(&self, item: Item) {
        self.items.lock().unwrap().insert(item.uuid.clone(), item);
    }

    /// Register an open sheet window for a character and return its id.
    pub fn open_sheet(&self, character: &Character) -> SheetId {
        let sheet_id = SheetId::new();
        self.open_sheets.lock().unwrap().push(OpenSheet {
            sheet_id,
            character_id: character.id,
            kind: character.kind,
        });
        sheet_id
    }

    /// Write a flag directly, bypassing the journal.
    pub fn seed_flag(&self, character_id: CharacterId, namespace: &str, key: &str, value: Value) {
        self.flags.lock().unwrap().insert(
            (character_id, namespace.to_string(), key.to_string()),
            value,
        );
    }

    pub fn flag(&self, character_id: CharacterId, namespace: &str, key: &str) -> Option<Value> {
        self.flags
            .lock()
            .unwrap()
            .get(&(character_id, namespace.to_string(), key.to_string()))
            .cloned()
    }

    pub fn messages(&self) -> Vec<ChatCard> {
        self.messages.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }

    pub fn cues(&self) -> Vec<AudioCue> {
        self.cues.lock().unwrap().clone()
    }

    pub fn mounted_button_count(&self, sheet_id: SheetId) -> usize {
        self.mounted
            .lock()
            .unwrap()
            .iter()
            .filter(|(id, _)| *id == sheet_id)
            .count()
    }

    pub fn render_requests(&self) -> Vec<CharacterId> {
        self.render_requests.lock().unwrap().clone()
    }

    pub fn journal(&self) -> Vec<String> {
        self.journal.lock().unwrap().clone()
    }

    fn record(&self, op: String) {
        self.journal.lock().unwrap().push(op);
    }
}

#[async_trait]
impl FlagStorePort for MemoryHost {
    async fn get_flag(
        &self,
        character_id: CharacterId,
        namespace: &str,
        key: &str,
    ) -> Result<Option<Value>, FlagStoreError> {
        Ok(self.flag(character_id, namespace, key))
    }

    async fn set_flag(
        &self,
        character_id: CharacterId,
        namespace: &str,
        key: &str,
        value: Value,
    ) -> Result<(), FlagStoreError> {
        self.record(format!("set_flag {character_id} {key}={value}"));
        self.seed_flag(character_id, namespace, key, value);
        Ok(())
    }
}

#[async_trait]
impl ItemResolverPort for MemoryHost {
    async fn resolve(&self, uuid: &ItemUuid) -> Result<Option<Item>> {
        Ok(self.items.lock().unwrap().get(uuid).cloned())
    }
}

#[async_trait]
impl ActorRegistryPort for MemoryHost {
    async fn actors(&self) -> Result<Vec<Character>> {
        Ok(self.actors.lock().unwrap().clone())
    }
}

#[async_trait]
impl ChatPort for MemoryHost {
    async fn create_message(&self, card: ChatCard) -> Result<()> {
        self.record("create_message".to_string());
        self.messages.lock().unwrap().push(card);
        Ok(())
    }
}

#[async_trait]
impl AudioPort for MemoryHost {
    async fn play(&self, cue: AudioCue) -> Result<()> {
        self.record(format!("play {}", cue.src));
        self.cues.lock().unwrap().push(cue);
        Ok(())
    }
}

impl NotificationPort for MemoryHost {
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
}

impl SheetRegistryPort for MemoryHost {
    fn open_sheets(&self) -> Vec<OpenSheet> {
        self.open_sheets.lock().unwrap().clone()
    }

    fn render(&self, character_id: CharacterId) {
        self.render_requests.lock().unwrap().push(character_id);
    }

    fn has_button(&self, sheet_id: SheetId) -> bool {
        self.mounted
            .lock()
            .unwrap()
            .iter()
            .any(|(id, _)| *id == sheet_id)
    }

    fn mount_button(&self, sheet_id: SheetId, view: &ButtonView) -> Result<()> {
        self.mounted.lock().unwrap().push((sheet_id, view.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::domain::entities::DocumentKind;

    #[tokio::test]
    async fn test_flag_round_trip_through_ports() {
        let host = MemoryHost::new();
        let id = CharacterId::new();

        let absent = host.get_flag(id, "dh-tagteam", "tagTeamUsed").await.unwrap();
        assert!(absent.is_none());

        host.set_flag(id, "dh-tagteam", "tagTeamUsed", json!(true))
            .await
            .unwrap();
        let stored = host.get_flag(id, "dh-tagteam", "tagTeamUsed").await.unwrap();
        assert_eq!(stored, Some(json!(true)));
    }

    #[tokio::test]
    async fn test_audio_playback_is_recorded() {
        let host = MemoryHost::new();
        host.play(AudioCue {
            src: "sfx/pipchange.mp3".to_string(),
            volume: 0.5,
            autoplay: true,
        })
        .await
        .unwrap();

        assert_eq!(host.cues().len(), 1);
        assert_eq!(host.journal(), vec!["play sfx/pipchange.mp3"]);
    }

    #[test]
    fn test_open_sheet_registers_window() {
        let host = MemoryHost::new();
        let character = Character::new("Marlowe", DocumentKind::Character);
        let sheet_id = host.open_sheet(&character);

        let sheets = host.open_sheets();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].sheet_id, sheet_id);
        assert_eq!(sheets[0].character_id, character.id);
    }
}
