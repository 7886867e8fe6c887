//! Core components for signing API gateway requests.
//!
//! This crate provides the foundational types and traits shared by the apigsign crates.
//!
//! ## Overview
//!
//! The crate is built around several key concepts:
//!
//! - **Context**: A container that holds implementations for HTTP sending, environment access
//!   and observability, injected explicitly instead of read from process-wide state
//! - **Body**: A request body that can be buffered for hashing and still be sent afterwards
//! - **SignRequest**: The trait implemented by service-specific signing schemes
//! - **Signer**: Binds a [`Context`] to a [`SignRequest`] implementation
//!
//! ## Example
//!
//! ```no_run
//! use apigsign_core::{Body, Context, Result, SignRequest, Signer};
//!
//! #[derive(Debug)]
//! struct MySigner;
//!
//! impl SignRequest for MySigner {
//!     fn sign_request(&self, _: &Context, req: &mut http::Request<Body>) -> Result<()> {
//!         req.headers_mut()
//!             .insert(http::header::AUTHORIZATION, "Custom token".parse()?);
//!         Ok(())
//!     }
//! }
//!
//! # fn example() -> Result<()> {
//! let signer = Signer::new(Context::new(), MySigner);
//!
//! let mut req = http::Request::builder()
//!     .method("GET")
//!     .uri("https://example.com")
//!     .body(Body::Empty)?;
//!
//! signer.sign(&mut req)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time formatting and parsing utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod error;
pub use error::{Error, ErrorKind, Result};

mod body;
pub use body::Body;

mod context;
pub use context::{
    Context, Env, Event, HttpSend, LogObserve, NoopEnv, NoopHttpSend, NoopObserve, Observe,
    OsEnv, StaticEnv,
};

mod api;
pub use api::SignRequest;
mod request;
pub use request::SigningRequest;
mod signer;
pub use signer::Signer;
