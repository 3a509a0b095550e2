//! Application services - Use case implementations
//!
//! Each service is handed its host ports at construction and owns one
//! slice of the module's behavior: cost resolution, button rendering,
//! activation, and resets.

pub mod activation_service;
pub mod button_renderer;
pub mod chat_cards;
pub mod cost_resolver;
pub mod reset_service;

pub use activation_service::{ActivationOutcome, ActivationService};
pub use button_renderer::ButtonRenderer;
pub use cost_resolver::HopeCostResolver;
pub use reset_service::{ResetOutcome, ResetService};
