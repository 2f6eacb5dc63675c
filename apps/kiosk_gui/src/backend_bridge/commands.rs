//! Backend commands queued from UI to backend worker.

use kiosk_core::{AssistantQuery, AssistantTicket};

#[derive(Debug)]
pub enum BackendCommand {
    AskAssistant {
        ticket: AssistantTicket,
        query: AssistantQuery,
    },
    FetchImage {
        url: String,
    },
}
