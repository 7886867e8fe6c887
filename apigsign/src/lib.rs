//! Sign API gateway requests with `SDK-HMAC-SHA256`.
//!
//! This crate bundles [`apigsign_core`] with the signing scheme and the clients
//! built on it, each behind a feature flag:
//!
//! - `sdk-hmac`: the [`sdk_hmac`] request signer
//! - `exchange-rate`: the [`exchange_rate`] query client
//! - `default-context`: [`default_context`] wired with the OS environment, a
//!   reqwest client and `log` based observability
//!
//! ## Example
//!
//! ```no_run
//! use apigsign::Body;
//!
//! # fn example() -> apigsign::Result<()> {
//! let signer = apigsign::sdk_hmac::default_signer(apigsign::sdk_hmac::Config::new())?;
//!
//! let mut req = http::Request::get("https://apig.example.com/v1/rates").body(Body::Empty)?;
//! signer.sign(&mut req)?;
//! # Ok(())
//! # }
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use apigsign_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

#[cfg(feature = "sdk-hmac")]
pub mod sdk_hmac;

#[cfg(feature = "exchange-rate")]
pub mod exchange_rate;
