//! Module configuration

use std::env;

use anyhow::{Context, Result};

use crate::application::ports::outbound::AudioCue;

const DEFAULT_AUDIO_SRC: &str = "modules/dh-tagteam/assets/sfx/pipchange.mp3";
const DEFAULT_AUDIO_VOLUME: f32 = 0.5;

/// Module configuration loaded from environment
#[derive(Debug, Clone)]
pub struct ModuleConfig {
    /// Host resource path of the activation sound effect
    pub audio_src: String,
    /// Playback volume for the activation cue
    pub audio_volume: f32,
}

impl ModuleConfig {
    /// Load configuration from environment variables, falling back to the
    /// module defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            audio_src: env::var("TAGTEAM_AUDIO_SRC")
                .unwrap_or_else(|_| DEFAULT_AUDIO_SRC.to_string()),
            audio_volume: env::var("TAGTEAM_AUDIO_VOLUME")
                .unwrap_or_else(|_| DEFAULT_AUDIO_VOLUME.to_string())
                .parse()
                .context("TAGTEAM_AUDIO_VOLUME must be a number")?,
        })
    }

    /// The activation cue handed to the audio port.
    pub fn activation_cue(&self) -> AudioCue {
        AudioCue {
            src: self.audio_src.clone(),
            volume: self.audio_volume,
            autoplay: true,
        }
    }
}

impl Default for ModuleConfig {
    fn default() -> Self {
        Self {
            audio_src: DEFAULT_AUDIO_SRC.to_string(),
            audio_volume: DEFAULT_AUDIO_VOLUME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cue() {
        let cue = ModuleConfig::default().activation_cue();
        assert_eq!(cue.src, DEFAULT_AUDIO_SRC);
        assert_eq!(cue.volume, 0.5);
        assert!(cue.autoplay);
    }
}
