//! Asynchronous file loading for the Glint demo framework.
//!
//! A single background worker reads files into caller-sized buffers; the
//! owning thread drains completions once per frame. Each request resolves
//! exactly once, on the draining thread, so completion handlers never need
//! locking.
//!
//! ```ignore
//! let mut fetch = FetchService::spawn()?;
//! let id = fetch.submit(FetchRequest::new("assets/grass16x16.png"))?;
//!
//! // Once per frame, on the owning thread:
//! fetch.process_completions(|response| {
//!     // route the response to its consumer
//! });
//! ```

mod request;
mod response;
mod service;

pub use request::{FetchRequest, RequestId};
pub use response::{FetchError, FetchResponse};
pub use service::FetchService;
