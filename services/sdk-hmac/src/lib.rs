//! Signer for API gateway requests authenticated with `SDK-HMAC-SHA256`.
//!
//! The scheme signs a canonical form of the request (method, path, query, every
//! header present and the payload hash) with HMAC-SHA256 and sends the result in the
//! `Authorization` header:
//!
//! ```text
//! Authorization: SDK-HMAC-SHA256 Access=<ak>, SignedHeaders=host;x-sdk-date, Signature=<hex>
//! X-Sdk-Date: 20240101T000000Z
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use apigsign_core::{Body, Context, Signer};
//! use apigsign_sdk_hmac::{Credential, RequestSigner};
//!
//! # fn example() -> apigsign_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     RequestSigner::new(Credential::new("access_key", "secret_key")),
//! );
//!
//! let mut req = http::Request::post("https://apig.example.com/v1/rates")
//!     .header("content-type", "application/json")
//!     .body(Body::from(r#"{"from":"CNY"}"#))?;
//!
//! // Finalize every header before signing: all of them are signed.
//! signer.sign(&mut req)?;
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::*;

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

pub mod canonical;

mod sign_request;
pub use sign_request::RequestSigner;
