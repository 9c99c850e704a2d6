//! Image Preview Handles
//!
//! Scoped acquisition of browser object URLs for local file previews. The
//! URL is revoked when the handle drops, so replacing, resetting, or
//! unmounting a preview cannot leak the underlying blob.

use web_sys::{File, Url};

#[derive(Debug)]
pub struct ImagePreview {
    url: String,
}

impl ImagePreview {
    /// Acquire a displayable object URL for a locally-selected file
    pub fn from_file(file: &File) -> Option<Self> {
        Url::create_object_url_with_blob(file)
            .ok()
            .map(|url| ImagePreview { url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Drop for ImagePreview {
    fn drop(&mut self) {
        let _ = Url::revoke_object_url(&self.url);
    }
}
