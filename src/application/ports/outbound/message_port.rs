//! Message ports - chat delivery, user notifications and audio cues

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::entities::ChatCard;

/// Port for posting cards to the host chat log.
#[async_trait]
pub trait ChatPort: Send + Sync {
    async fn create_message(&self, card: ChatCard) -> Result<()>;
}

/// A local sound effect request.
#[derive(Debug, Clone)]
pub struct AudioCue {
    /// Host resource path of the sound file
    pub src: String,
    pub volume: f32,
    pub autoplay: bool,
}

/// Port for local audio playback. Playback is best effort; callers treat
/// failures as log-and-continue.
#[async_trait]
pub trait AudioPort: Send + Sync {
    async fn play(&self, cue: AudioCue) -> Result<()>;
}

/// Port for user-visible notification toasts. Synchronous: the host shows
/// these inline.
pub trait NotificationPort: Send + Sync {
    fn warn(&self, message: &str);
}
