//! Events flowing from the backend worker back to the UI thread.

use kiosk_core::AssistantTicket;

use crate::ui::media::PreviewImage;

#[derive(Debug)]
pub enum UiEvent {
    AssistantAnswered {
        ticket: AssistantTicket,
        answer: String,
    },
    ImageLoaded {
        url: String,
        image: PreviewImage,
    },
    ImageFailed {
        url: String,
        reason: String,
    },
    /// The worker could not start; nothing sent to it will be answered.
    WorkerFailed(String),
}
