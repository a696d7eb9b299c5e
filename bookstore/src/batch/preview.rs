//! Scoped preview URL for an attached image.
//!
//! In the browser a preview is an object URL that stays alive until it is
//! revoked. A [`PreviewHandle`] owns one such URL together with the function
//! that releases it, and calls that function exactly once: on
//! [`PreviewHandle::release`] or when dropped.

use std::fmt;

type ReleaseFn = Box<dyn FnOnce(&str)>;

/// An acquired preview URL that is released when the handle goes away.
pub struct PreviewHandle {
    url: String,
    release: Option<ReleaseFn>,
}

impl PreviewHandle {
    /// Wrap `url`; `release` runs once when the handle is released or dropped.
    pub fn new(url: impl Into<String>, release: impl FnOnce(&str) + 'static) -> Self {
        Self {
            url: url.into(),
            release: Some(Box::new(release)),
        }
    }

    /// A URL with nothing to release (static assets, tests).
    pub fn unmanaged(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            release: None,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Release the URL now.
    pub fn release(mut self) {
        self.run_release();
    }

    fn run_release(&mut self) {
        if let Some(release) = self.release.take() {
            log::debug!("Releasing image preview {}", self.url);
            release(&self.url);
        }
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.run_release();
    }
}

impl fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewHandle")
            .field("url", &self.url)
            .field("managed", &self.release.is_some())
            .finish()
    }
}
