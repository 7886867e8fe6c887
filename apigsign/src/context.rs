use std::time::Duration;

use apigsign_core::{Context, LogObserve, OsEnv};
use apigsign_http_send_reqwest::ReqwestHttpSend;
use reqwest::Client;

/// Timeout of the HTTP client used by [`default_context`].
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Create a context for common use.
///
/// - env: [`OsEnv`]
/// - http: [`ReqwestHttpSend`] over a client with a 10 seconds timeout
/// - observe: [`LogObserve`]
pub fn default_context() -> Context {
    let client = Client::builder()
        .timeout(DEFAULT_HTTP_TIMEOUT)
        .build()
        .unwrap_or_default();

    Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::new(client))
        .with_observe(LogObserve)
}
