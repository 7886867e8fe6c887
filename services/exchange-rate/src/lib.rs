//! Exchange rate client for API gateways protected by `SDK-HMAC-SHA256`.
//!
//! ## Example
//!
//! ```no_run
//! use apigsign_core::{Context, OsEnv};
//! use apigsign_exchange_rate::{Config, ExchangeRateClient};
//! use apigsign_http_send_reqwest::ReqwestHttpSend;
//!
//! # async fn example() -> apigsign_core::Result<()> {
//! let ctx = Context::new()
//!     .with_env(OsEnv)
//!     .with_http_send(ReqwestHttpSend::default());
//! let config = Config::new().from_env(&ctx);
//!
//! let client = ExchangeRateClient::new(ctx, config)?;
//! let rate = client.query_exchange_rate("CNY", "USD").await?;
//! println!("1 {} = {} {}", rate.from, rate.exchange, rate.to);
//! # Ok(())
//! # }
//! ```

mod constants;
pub use constants::*;

mod config;
pub use config::Config;

mod model;
pub use model::{ExchangeRate, ExchangeRateResponse};

mod client;
pub use client::ExchangeRateClient;
