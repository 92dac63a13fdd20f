use super::data::{MediaFile, ScanResult};

/// The MediaStore holds the results of the most recent folder scan.
///
/// It is owned by the application struct and mutated only through
/// `set_local_media`, which replaces both lists wholesale. There is no
/// history and no merging: each completed scan overwrites whatever was
/// there before, including with empty lists.
#[derive(Debug, Clone, Default)]
pub struct MediaStore {
    local_audio: Vec<MediaFile>,
    local_images: Vec<MediaFile>,
}

impl MediaStore {
    /// Create an empty store (the state before any scan has run)
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both lists with the contents of a completed scan.
    ///
    /// Unconditional: no validation, no diffing against the previous
    /// contents. An empty result clears the store.
    pub fn set_local_media(&mut self, result: ScanResult) {
        self.local_audio = result.audio;
        self.local_images = result.images;
    }

    /// Audio files from the most recent scan, in traversal order
    pub fn local_audio(&self) -> &[MediaFile] {
        &self.local_audio
    }

    /// Image files from the most recent scan, in traversal order
    pub fn local_images(&self) -> &[MediaFile] {
        &self.local_images
    }

    /// True when the store holds no media at all
    pub fn is_empty(&self) -> bool {
        self.local_audio.is_empty() && self.local_images.is_empty()
    }
}
