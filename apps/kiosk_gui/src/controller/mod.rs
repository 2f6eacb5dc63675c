//! Controller layer: UI events, input classification, and effect orchestration.

pub mod events;
pub mod input;
pub mod orchestration;
