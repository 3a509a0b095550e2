//! Module wiring - builds the services from the host's port implementations

use std::sync::Arc;

use crate::application::ports::outbound::{
    ActorRegistryPort, AudioPort, ChatPort, FlagStorePort, ItemResolverPort, NotificationPort,
    SheetRegistryPort,
};
use crate::application::services::{
    ActivationService, ButtonRenderer, HopeCostResolver, ResetService,
};
use crate::infrastructure::api::TagTeamApi;
use crate::infrastructure::config::ModuleConfig;
use crate::infrastructure::hooks::TagTeamHooks;

/// The host's implementations of every outbound port, bundled for wiring.
#[derive(Clone)]
pub struct HostPorts {
    pub flags: Arc<dyn FlagStorePort>,
    pub items: Arc<dyn ItemResolverPort>,
    pub actors: Arc<dyn ActorRegistryPort>,
    pub chat: Arc<dyn ChatPort>,
    pub audio: Arc<dyn AudioPort>,
    pub notifications: Arc<dyn NotificationPort>,
    pub sheets: Arc<dyn SheetRegistryPort>,
}

impl HostPorts {
    /// Wire every port to one object implementing them all, such as the
    /// in-memory host.
    pub fn from_memory(host: Arc<crate::infrastructure::memory_host::MemoryHost>) -> Self {
        Self {
            flags: host.clone(),
            items: host.clone(),
            actors: host.clone(),
            chat: host.clone(),
            audio: host.clone(),
            notifications: host.clone(),
            sheets: host,
        }
    }
}

/// The assembled module: hook handlers for the host plus the exposed API.
pub struct TagTeamModule {
    pub hooks: TagTeamHooks,
    pub api: TagTeamApi,
}

impl TagTeamModule {
    pub fn new(ports: HostPorts, config: ModuleConfig) -> Self {
        let cost_resolver = Arc::new(HopeCostResolver::new(ports.items.clone()));
        let renderer = ButtonRenderer::new(
            ports.flags.clone(),
            ports.sheets.clone(),
            cost_resolver,
        );
        let activation = Arc::new(ActivationService::new(
            ports.flags.clone(),
            ports.chat.clone(),
            ports.audio.clone(),
            config.activation_cue(),
        ));
        let reset = Arc::new(ResetService::new(
            ports.actors.clone(),
            ports.flags.clone(),
            ports.chat.clone(),
            ports.notifications.clone(),
            ports.sheets.clone(),
        ));

        Self {
            hooks: TagTeamHooks::new(renderer, activation.clone(), reset.clone()),
            api: TagTeamApi::new(activation, reset),
        }
    }
}
