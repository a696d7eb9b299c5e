//! Object URLs for images picked in the add-book form.
//!
//! `URL.createObjectURL` keeps the file alive until the URL is revoked, so
//! every URL is wrapped in a [`PreviewHandle`] that revokes it when released.

use bookstore::{ImageAttachment, PreviewHandle};
use wasm_bindgen::JsValue;
use web_sys::{File, Url};

use crate::types::{AppError, AppResult};

/// Metadata of a picked file.
pub fn image_attachment(file: &File) -> ImageAttachment {
    ImageAttachment::new(file.name(), file.type_(), file.size() as u64)
}

/// Create a preview URL for `file`, revoked when the handle goes away.
pub fn create_preview(file: &File) -> AppResult<PreviewHandle> {
    let url = Url::create_object_url_with_blob(file).map_err(js_error)?;
    log::debug!("🖼️ Preview created for {}", file.name());

    Ok(PreviewHandle::new(url, |url: &str| {
        if let Err(e) = Url::revoke_object_url(url) {
            log::warn!("Could not revoke preview {}: {:?}", url, e);
        }
    }))
}

fn js_error(err: JsValue) -> AppError {
    AppError::Preview(
        err.as_string()
            .unwrap_or_else(|| format!("{:?}", err)),
    )
}
