//! Tag Team button presentation state

use serde::{Deserialize, Serialize};

use super::hope::HopeCost;

/// Which of the three button states the sheet should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonState {
    /// Flag clear, enough Hope: the action can be taken.
    Ready,
    /// Flag clear but the pool is short of the resolved cost.
    NoHope,
    /// Flag set: spent this session.
    Used,
}

/// Everything the host needs to draw the button.
///
/// `enabled` gates the click handler; `hoverable` keeps pointer events on
/// even when the button is inert, so the tooltip still shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonView {
    pub state: ButtonState,
    pub label: String,
    pub tooltip: String,
    pub enabled: bool,
    pub hoverable: bool,
}

impl ButtonView {
    pub fn ready() -> Self {
        Self {
            state: ButtonState::Ready,
            label: "Tag Team (Ready)".to_string(),
            tooltip: "Use Tag Team".to_string(),
            enabled: true,
            hoverable: true,
        }
    }

    pub fn no_hope(cost: HopeCost) -> Self {
        Self {
            state: ButtonState::NoHope,
            label: "Tag Team (No Hope)".to_string(),
            tooltip: format!("Requires {} Hope to use", cost),
            enabled: false,
            hoverable: false,
        }
    }

    pub fn used(viewer_is_gm: bool) -> Self {
        if viewer_is_gm {
            Self {
                state: ButtonState::Used,
                label: "Tag Team (Used)".to_string(),
                tooltip: "GM: Click to reset for this character".to_string(),
                enabled: true,
                hoverable: true,
            }
        } else {
            Self {
                state: ButtonState::Used,
                label: "Tag Team (Used)".to_string(),
                tooltip: "Tag Team already used this session".to_string(),
                enabled: false,
                // Inert, but the tooltip must still display on hover
                hoverable: true,
            }
        }
    }
}
