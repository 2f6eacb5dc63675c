//! UI layer for the kiosk: app shell, screens, widgets, theme and remote imagery.

pub mod app;
pub mod media;
pub mod panels;
pub mod theme;
pub mod widgets;

pub use app::KioskApp;
