//! Remote project imagery: decoded on the backend worker, uploaded as textures on demand.

use std::collections::HashMap;

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;

/// Largest edge kept after decoding; cards and headers never draw bigger than this.
const MAX_IMAGE_EDGE: u32 = 1024;

#[derive(Clone, Debug)]
pub(crate) struct PreviewImage {
    width: usize,
    height: usize,
    rgba: Vec<u8>,
}

impl PreviewImage {
    pub(crate) fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }
}

pub(crate) fn decode_preview_image(bytes: &[u8]) -> Result<PreviewImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = dynamic.thumbnail(MAX_IMAGE_EDGE, MAX_IMAGE_EDGE).to_rgba8();
    Ok(PreviewImage {
        width: resized.width() as usize,
        height: resized.height() as usize,
        rgba: resized.into_raw(),
    })
}

enum ImageState {
    Loading,
    Decoded(PreviewImage),
    Ready(egui::TextureHandle),
    Failed,
}

/// Per-URL image state. Each URL is fetched at most once per process.
pub struct MediaCache {
    entries: HashMap<String, ImageState>,
    cmd_tx: Sender<BackendCommand>,
}

impl MediaCache {
    pub fn new(cmd_tx: Sender<BackendCommand>) -> Self {
        Self {
            entries: HashMap::new(),
            cmd_tx,
        }
    }

    /// Texture for `url`, or `None` while it loads or if it failed. The first call queues the
    /// download.
    pub fn texture(&mut self, ctx: &egui::Context, url: &str) -> Option<egui::TextureHandle> {
        if !self.entries.contains_key(url) {
            let state = self.request(url);
            self.entries.insert(url.to_string(), state);
        }
        let entry = self.entries.get_mut(url)?;
        if let ImageState::Decoded(image) = entry {
            let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba);
            let texture = ctx.load_texture(
                format!("project-image:{url}"),
                color_image,
                egui::TextureOptions::LINEAR,
            );
            *entry = ImageState::Ready(texture);
        }
        match entry {
            ImageState::Ready(texture) => Some(texture.clone()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.entries
            .values()
            .any(|state| matches!(state, ImageState::Loading))
    }

    pub fn insert_loaded(&mut self, url: String, image: PreviewImage) {
        self.entries.insert(url, ImageState::Decoded(image));
    }

    pub fn insert_failed(&mut self, url: String, reason: &str) {
        tracing::warn!(%url, "project image unavailable: {reason}");
        self.entries.insert(url, ImageState::Failed);
    }

    fn request(&self, url: &str) -> ImageState {
        match self.cmd_tx.try_send(BackendCommand::FetchImage {
            url: url.to_string(),
        }) {
            Ok(()) => ImageState::Loading,
            Err(TrySendError::Full(_)) => {
                tracing::debug!(%url, "backend command queue is full; skipping image");
                ImageState::Failed
            }
            Err(TrySendError::Disconnected(_)) => ImageState::Failed,
        }
    }
}
