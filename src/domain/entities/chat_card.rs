//! Chat card entity - a message handed to the host's chat log

use chrono::{DateTime, Utc};

use crate::domain::value_objects::CharacterId;

/// Who a chat card speaks as.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Speaker {
    /// Spoken as a specific character (activation cards).
    Character { id: CharacterId, name: String },
    /// Table-wide announcement with no character attribution (reset cards).
    Table,
}

/// Host chat message style. Mirrors the host's style enum; every card this
/// module posts uses `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    InCharacter,
    OutOfCharacter,
    Emote,
    Other,
}

/// A rendered chat card ready for delivery.
///
/// Built by the card builders, posted through the chat port, never stored
/// by this module.
#[derive(Debug, Clone)]
pub struct ChatCard {
    pub speaker: Speaker,
    /// Rendered markup string, as the host chat log expects
    pub content: String,
    pub style: MessageStyle,
    pub created_at: DateTime<Utc>,
}

impl ChatCard {
    pub fn new(speaker: Speaker, content: impl Into<String>) -> Self {
        Self {
            speaker,
            content: content.into(),
            style: MessageStyle::Other,
            created_at: Utc::now(),
        }
    }
}
