//! Remote feed loader.
//!
//! # Design
//! `RemoteFeedLoader` holds an immutable `url`, the shared `HttpClient`, and
//! a liveness token. Every `load` registers a callback that captures only a
//! `Weak` handle to that token. When the outcome arrives the callback
//! upgrades the handle first; if the loader has been dropped the upgrade
//! fails and the caller's completion is discarded without running.
//!
//! Nothing per-call is stored on the loader, so concurrent `load` calls are
//! independent and the loader is `Send + Sync`.

use std::sync::Arc;

use url::Url;

use crate::error::LoadError;
use crate::http::{HttpClient, HttpOutcome};
use crate::mapper;
use crate::types::FeedItem;

/// Final outcome of a single `load` call.
pub type LoadResult = Result<Vec<FeedItem>, LoadError>;

/// Callback receiving the `LoadResult` of one `load` call.
pub type LoadCompletion = Box<dyn FnOnce(LoadResult) + Send + 'static>;

/// Anything that can produce feed items asynchronously.
pub trait FeedLoader {
    /// Start loading; `completion` runs at most once.
    fn load(&self, completion: LoadCompletion);
}

/// Loads feed items from a fixed URL through an `HttpClient`.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    liveness: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            liveness: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    fn interpret(outcome: HttpOutcome) -> LoadResult {
        match outcome {
            HttpOutcome::Success(response) => mapper::map(response.status, &response.body),
            HttpOutcome::Failure(err) => {
                tracing::warn!(error = %err, "feed request failed");
                Err(LoadError::Connectivity)
            }
        }
    }
}

impl FeedLoader for RemoteFeedLoader {
    fn load(&self, completion: LoadCompletion) {
        let liveness = Arc::downgrade(&self.liveness);
        let url = self.url.clone();
        tracing::debug!(%url, "requesting feed");
        self.client.get(
            &self.url,
            Box::new(move |outcome| {
                // Checked once on arrival; a drop racing with delivery on
                // another thread does not recall a completion already running.
                if liveness.upgrade().is_none() {
                    tracing::debug!(%url, "loader dropped before response; discarding result");
                    return;
                }
                completion(Self::interpret(outcome));
            }),
        );
    }
}
