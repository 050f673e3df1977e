//! HTTP request handlers for the Axum web server.
//!
//! Handlers validate their query, make one upstream call and shape the
//! results through the shared `VideoShaper`.

pub mod browse;
pub mod search;
pub mod videos;

use futures_util::future::{BoxFuture, FutureExt};
use futures_util::stream::{self, StreamExt};
use vidrelay_core::{ShapeOutcome, SourceError, VideoHandle, VideoShaper};

use crate::error::{HttpError, UpstreamStatus};

/// Videos shaped concurrently per request.
pub const SHAPE_CONCURRENCY: usize = 8;

/// Shape every video, at most [`SHAPE_CONCURRENCY`] at a time, keeping order.
///
/// Boxed so the handler futures stay `Send` under axum's `Handler` bound.
pub(crate) fn shape_all<'a>(
    shaper: &'a VideoShaper,
    videos: Vec<VideoHandle>,
    include_base64: bool,
) -> BoxFuture<'a, Vec<ShapeOutcome>> {
    stream::iter(videos)
        .map(move |video: VideoHandle| {
            async move { shaper.shape(video.as_ref(), include_base64).await }.boxed()
        })
        .buffered(SHAPE_CONCURRENCY)
        .collect::<Vec<_>>()
        .map(|results| {
            let degraded = results.iter().filter(|r| r.is_degraded()).count();
            if degraded > 0 {
                tracing::debug!(
                    total = results.len(),
                    degraded,
                    "Listing shaped with degraded records"
                );
            }
            results
        })
        .boxed()
}

/// Log an upstream failure and translate it for the client.
pub(crate) fn upstream_failure(
    operation: &'static str,
    status: UpstreamStatus,
) -> impl FnOnce(SourceError) -> HttpError {
    move |err| {
        tracing::error!(operation, error = ?err, "Upstream request failed");
        HttpError::upstream(status, &err)
    }
}
