//! Carries out session effects against the backend command queue.

use crossbeam_channel::{Sender, TrySendError};
use kiosk_core::{Effect, KioskSession, FALLBACK_ANSWER};

use crate::backend_bridge::commands::BackendCommand;

/// Queues the work an effect asks for. A request the worker cannot accept is completed
/// immediately with the fallback answer so the dialog never waits forever.
pub fn run_effect(session: &mut KioskSession<'_>, cmd_tx: &Sender<BackendCommand>, effect: Effect) {
    let Effect::AskAssistant(request) = effect else {
        return;
    };
    let ticket = request.ticket;
    let cmd = BackendCommand::AskAssistant {
        ticket,
        query: request.query,
    };
    match cmd_tx.try_send(cmd) {
        Ok(()) => tracing::debug!(%ticket, "queued assistant request"),
        Err(TrySendError::Full(_)) => {
            tracing::warn!(%ticket, "backend command queue is full; answering with fallback");
            session.complete_assistant(ticket, FALLBACK_ANSWER.to_string());
        }
        Err(TrySendError::Disconnected(_)) => {
            tracing::warn!(%ticket, "backend worker disconnected; answering with fallback");
            session.complete_assistant(ticket, FALLBACK_ANSWER.to_string());
        }
    }
}
