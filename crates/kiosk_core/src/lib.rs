//! Session logic for the capstone totem: filter derivation, the view state machine with its
//! idle handling, and the assistant gateway.

pub mod assistant;
pub mod config;
pub mod error;
pub mod filter;
pub mod session;
pub mod timer;

pub use assistant::{
    AssistantBackend, AssistantGateway, AssistantQuery, GeminiBackend, FALLBACK_ANSWER,
};
pub use config::{load_settings, load_settings_from, AssistantSettings, Settings};
pub use error::AssistantError;
pub use filter::{AwardFilter, FilterSelection, FilterValue};
pub use session::{
    Activity, AssistantRequest, AssistantTicket, Effect, Intent, KioskSession, ModalState, View,
};
pub use timer::CancellableTimer;
