//! Blocking `HttpClient` backed by ureq.
//!
//! # Design
//! Each `get` runs on its own worker thread, so the completion is always
//! delivered off the calling thread and after `get` has returned. HTTP error
//! statuses come back as data (`http_status_as_error(false)`); only failures
//! to complete the exchange become `HttpOutcome::Failure`.
//!
//! Bodies are read up to `max_body_bytes` (256 MiB unless overridden with
//! [`UreqHttpClient::with_body_limit`]). A body over the limit is reported as
//! a failure, since the response cannot be handed over whole.
//!
//! Like the loader, the client owns a liveness token and workers hold only a
//! `Weak` to it. A request that finishes after the client was dropped is
//! discarded instead of delivered.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use ureq::Agent;
use url::Url;

use crate::error::TransportError;
use crate::http::{HttpClient, HttpCompletion, HttpOutcome, HttpResponse};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_MAX_BODY_BYTES: u64 = 256 * 1024 * 1024;

pub struct UreqHttpClient {
    agent: Agent,
    max_body_bytes: u64,
    liveness: Arc<()>,
}

impl UreqHttpClient {
    /// Client with a 30 second timeout and the default body limit.
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Build a client whose requests give up after `timeout` overall.
    pub fn with_timeout(timeout: Duration) -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .timeout_global(Some(timeout))
            .build()
            .new_agent();
        Self {
            agent,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            liveness: Arc::new(()),
        }
    }

    /// Replace the maximum number of body bytes read per response.
    pub fn with_body_limit(mut self, max_body_bytes: u64) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }

    pub fn max_body_bytes(&self) -> u64 {
        self.max_body_bytes
    }
}

impl Default for UreqHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpClient for UreqHttpClient {
    fn get(&self, url: &Url, completion: HttpCompletion) {
        let agent = self.agent.clone();
        let max_body_bytes = self.max_body_bytes;
        let liveness = Arc::downgrade(&self.liveness);
        let url = url.clone();
        let worker_url = url.clone();
        let spawned = thread::Builder::new()
            .name("feed-http".to_string())
            .spawn(move || {
                let url = worker_url;
                let outcome = match execute(&agent, &url, max_body_bytes) {
                    Ok(response) => HttpOutcome::Success(response),
                    Err(err) => {
                        tracing::warn!(%url, error = %err, "GET failed");
                        HttpOutcome::Failure(err)
                    }
                };
                if liveness.upgrade().is_none() {
                    tracing::debug!(%url, "client dropped before response; discarding outcome");
                    return;
                }
                completion(outcome);
            });
        // The completion went down with the closure; no outcome can be delivered.
        if let Err(err) = spawned {
            tracing::error!(%url, error = %err, "could not start request worker");
        }
    }
}

fn execute(agent: &Agent, url: &Url, max_body_bytes: u64) -> Result<HttpResponse, TransportError> {
    let mut response = agent.get(url.as_str()).call()?;
    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .with_config()
        .limit(max_body_bytes)
        .read_to_vec()?;
    tracing::debug!(%url, status, bytes = body.len(), "GET completed");
    Ok(HttpResponse { status, body })
}
