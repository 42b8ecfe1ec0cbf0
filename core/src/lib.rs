//! Remote feed loading core.
//!
//! # Overview
//! Fetches a list of feed items over HTTP and delivers exactly one typed
//! `LoadResult` per `load` call. The network sits behind the `HttpClient`
//! trait, so the loader and the payload mapper are deterministic and can be
//! driven entirely by a fake in tests.
//!
//! # Design
//! - `RemoteFeedLoader` holds only its `url`, the client, and a liveness
//!   token; a result is never delivered once the loader has been dropped.
//! - `mapper` turns `(status, body)` into items, failing closed on any
//!   malformed entry.
//! - Failures collapse to two kinds: `Connectivity` and `InvalidData`.
//! - `UreqHttpClient` is the production transport.

pub mod error;
pub mod http;
pub mod loader;
pub mod mapper;
pub mod transport;
pub mod types;

pub use error::{LoadError, TransportError};
pub use http::{HttpClient, HttpCompletion, HttpOutcome, HttpResponse};
pub use loader::{FeedLoader, LoadCompletion, LoadResult, RemoteFeedLoader};
pub use transport::UreqHttpClient;
pub use types::FeedItem;
