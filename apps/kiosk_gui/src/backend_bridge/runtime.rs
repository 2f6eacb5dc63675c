//! Runtime bridge between UI command queue and backend event intake.

use std::{thread, time::Duration};

use catalog::Catalog;
use crossbeam_channel::{Receiver, Sender};
use kiosk_core::{AssistantGateway, AssistantSettings, FALLBACK_ANSWER};
use reqwest::Client as HttpClient;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::ui::media::decode_preview_image;

const IMAGE_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Starts the worker thread that owns the async runtime. Every command runs as its own task, so
/// duplicate assistant requests proceed independently and nothing blocks the UI thread.
pub fn launch(
    settings: AssistantSettings,
    catalog: &'static Catalog,
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
) {
    thread::spawn(move || {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                tracing::error!("failed to build backend runtime: {err}");
                let _ = ui_tx.try_send(UiEvent::WorkerFailed(format!(
                    "backend worker startup failure: failed to build runtime: {err}"
                )));
                return;
            }
        };

        let gateway = match AssistantGateway::from_settings(settings, catalog) {
            Ok(gateway) => Some(gateway),
            Err(err) => {
                tracing::error!("failed to build assistant client; answering with fallback: {err}");
                None
            }
        };
        let http = match HttpClient::builder().timeout(IMAGE_FETCH_TIMEOUT).build() {
            Ok(http) => Some(http),
            Err(err) => {
                tracing::error!("failed to build image client; showing placeholders: {err}");
                None
            }
        };

        tracing::info!("backend worker started");
        while let Ok(cmd) = cmd_rx.recv() {
            let ui_tx = ui_tx.clone();
            match cmd {
                BackendCommand::AskAssistant { ticket, query } => {
                    let gateway = gateway.clone();
                    runtime.spawn(async move {
                        let answer = match gateway {
                            Some(gateway) => gateway.ask(&query).await,
                            None => FALLBACK_ANSWER.to_string(),
                        };
                        deliver(&ui_tx, UiEvent::AssistantAnswered { ticket, answer });
                    });
                }
                BackendCommand::FetchImage { url } => {
                    let http = http.clone();
                    runtime.spawn(async move {
                        let event = match fetch_image(http.as_ref(), &url).await {
                            Ok(bytes) => match decode_preview_image(&bytes) {
                                Ok(image) => UiEvent::ImageLoaded { url, image },
                                Err(reason) => UiEvent::ImageFailed { url, reason },
                            },
                            Err(reason) => UiEvent::ImageFailed {
                                url,
                                reason: format!("failed to download image: {reason}"),
                            },
                        };
                        deliver(&ui_tx, event);
                    });
                }
            }
        }
        tracing::info!("backend command queue closed; worker exiting");
    });
}

/// Hands a result to the UI, waiting for room in the queue. Results are only dropped once the
/// UI has gone away.
fn deliver(ui_tx: &Sender<UiEvent>, event: UiEvent) {
    if ui_tx.send(event).is_err() {
        tracing::debug!("ui closed before backend result arrived");
    }
}

async fn fetch_image(http: Option<&HttpClient>, url: &str) -> Result<Vec<u8>, String> {
    let http = http.ok_or_else(|| "image client unavailable".to_string())?;
    let response = http
        .get(url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| err.to_string())?;
    let bytes = response.bytes().await.map_err(|err| err.to_string())?;
    Ok(bytes.to_vec())
}
