//! Maps raw egui input to the activity kinds that keep the kiosk awake.

use kiosk_core::Activity;

/// Returns the first qualifying activity in this frame's events, if any. Scroll, zoom and
/// window-level events do not count.
pub fn qualifying_activity(events: &[egui::Event]) -> Option<Activity> {
    events.iter().find_map(|event| match event {
        egui::Event::PointerButton { pressed: true, .. } => Some(Activity::PointerDown),
        egui::Event::PointerMoved(_) | egui::Event::MouseMoved(_) => Some(Activity::PointerMove),
        egui::Event::Touch { .. } => Some(Activity::Touch),
        egui::Event::Key { pressed: true, .. } | egui::Event::Text(_) => Some(Activity::KeyPress),
        _ => None,
    })
}
