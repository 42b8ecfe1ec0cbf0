//! HTTP transport boundary.
//!
//! # Design
//! The core never talks to the network itself. It asks an `HttpClient` for a
//! GET and is called back with an `HttpOutcome` once the round-trip is over.
//! Tests plug in a recording fake; production code uses
//! [`UreqHttpClient`](crate::UreqHttpClient).
//!
//! # Contract
//! Implementations of [`HttpClient::get`] must:
//! - invoke the completion exactly once per call,
//! - never invoke it before `get` has returned (no inline delivery),
//! - never invoke it if the client itself has been dropped in the meantime.

use url::Url;

use crate::error::TransportError;

/// A completed HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Result of one GET, before any interpretation of status or body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpOutcome {
    Success(HttpResponse),
    Failure(TransportError),
}

/// Callback through which an `HttpClient` reports its outcome.
pub type HttpCompletion = Box<dyn FnOnce(HttpOutcome) + Send + 'static>;

/// Capability to perform a single asynchronous GET.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: HttpCompletion);
}
