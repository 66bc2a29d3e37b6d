//! Broken-image handling shared by every image-bearing view.

use axum::{http::header, response::IntoResponse, routing::get, Router};
use tracing::debug;

/// Path of the placeholder shown in place of an image that failed to load.
pub const FALLBACK_IMAGE: &str = "/images/no-image.svg";

const FALLBACK_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="320" height="240" viewBox="0 0 320 240"><rect width="320" height="240" fill="#eef0f3"/><path d="M112 160l36-44 28 32 20-22 32 34z" fill="#c3c8d0"/><circle cx="200" cy="92" r="14" fill="#c3c8d0"/><text x="160" y="210" font-family="sans-serif" font-size="14" text-anchor="middle" fill="#8a919c">No Image</text></svg>"##;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackOutcome {
    /// The source was swapped for the fallback.
    Substituted,
    /// The fallback is already showing; nothing changed.
    AlreadyFallback,
}

/// Current source of one rendered image plus whether the fallback has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlot {
    src: String,
    fallback: &'static str,
    substituted: bool,
}

impl ImageSlot {
    pub fn new(src: impl Into<String>) -> Self {
        Self::with_fallback(src, FALLBACK_IMAGE)
    }

    pub fn with_fallback(src: impl Into<String>, fallback: &'static str) -> Self {
        Self {
            src: src.into(),
            fallback,
            substituted: false,
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn is_showing_fallback(&self) -> bool {
        self.substituted || self.src == self.fallback
    }

    /// Reacts to a load failure. Swaps in the fallback at most once; a failure
    /// of the fallback itself is left alone so the error cannot loop.
    pub fn handle_load_error(&mut self) -> FallbackOutcome {
        if self.is_showing_fallback() {
            self.substituted = true;
            debug!(src = %self.src, "image fallback already applied");
            return FallbackOutcome::AlreadyFallback;
        }

        debug!(src = %self.src, fallback = self.fallback, "image failed to load");
        self.src = self.fallback.to_string();
        self.substituted = true;
        FallbackOutcome::Substituted
    }
}

/// Serves the placeholder image at [`FALLBACK_IMAGE`].
pub fn fallback_router() -> Router {
    Router::new().route(FALLBACK_IMAGE, get(fallback_image))
}

async fn fallback_image() -> impl IntoResponse {
    (
        [
            (header::CONTENT_TYPE, "image/svg+xml"),
            (header::CACHE_CONTROL, "public, max-age=86400"),
        ],
        FALLBACK_SVG,
    )
}
