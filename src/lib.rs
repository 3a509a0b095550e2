//! Tag Team module for Daggerheart character sheets
//!
//! Adds a per-character, once-per-session "Tag Team" action to a tabletop
//! host:
//! - Injects a state-tracked button into character sheets
//! - Resolves the action's Hope cost from the character's class feature
//! - Posts an activation card to chat and plays a local cue
//! - GM-only resets, per character, in bulk, or on long rest
//!
//! The host (sheet rendering, flag persistence, chat, audio, windows) is
//! abstracted behind the outbound ports in [`application::ports`]; wire a
//! [`TagTeamModule`] with the host's implementations and register its
//! hooks against the host's lifecycle events.

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::services::{ActivationOutcome, ResetOutcome};
pub use domain::value_objects::{FLAG_KEY, MODULE_ID};
pub use infrastructure::{HostPorts, ModuleConfig, TagTeamApi, TagTeamModule};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging for embedders that run the module outside a host
/// with its own tracing setup. Call at most once.
pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dh_tagteam=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
