// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::{Error, Result};
use bytes::Bytes;
use std::collections::HashMap;
use std::fmt::{Debug, Write};
use std::sync::Arc;

/// Context provides the collaborators used while signing and sending requests.
///
/// ## Important
///
/// apigsign provides NO default implementations. Users MAY configure components they need.
/// Any unconfigured component will use a no-op implementation that returns errors or empty
/// values when called. Library code never reads process-wide state such as environment
/// variables or a global logger directly; everything goes through the context.
///
/// ## Example
///
/// ```
/// use apigsign_core::{Context, LogObserve, OsEnv};
///
/// let ctx = Context::new()
///     .with_env(OsEnv)
///     .with_observe(LogObserve);
/// ```
#[derive(Clone)]
pub struct Context {
    http: Arc<dyn HttpSend>,
    env: Arc<dyn Env>,
    observe: Arc<dyn Observe>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("http", &self.http)
            .field("env", &self.env)
            .field("observe", &self.observe)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with no-op implementations.
    ///
    /// Use the `with_*` methods to configure the components you need.
    pub fn new() -> Self {
        Self {
            http: Arc::new(NoopHttpSend),
            env: Arc::new(NoopEnv),
            observe: Arc::new(NoopObserve),
        }
    }

    /// Replace the HTTP client implementation.
    pub fn with_http_send(mut self, http: impl HttpSend) -> Self {
        self.http = Arc::new(http);
        self
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the observability sink.
    pub fn with_observe(mut self, observe: impl Observe) -> Self {
        self.observe = Arc::new(observe);
        self
    }

    /// Send http request and return the response.
    #[inline]
    pub async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        self.http.http_send(req).await
    }

    /// Send http request and return the response as string.
    pub async fn http_send_as_string(
        &self,
        req: http::Request<Bytes>,
    ) -> Result<http::Response<String>> {
        let (parts, body) = self.http.http_send(req).await?.into_parts();
        let body = String::from_utf8_lossy(&body).to_string();
        Ok(http::Response::from_parts(parts, body))
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Hand an event to the configured observability sink.
    #[inline]
    pub fn observe(&self, event: &Event<'_>) {
        self.observe.observe(event)
    }
}

/// HttpSend is used to send http request for services that consume signed requests.
#[async_trait::async_trait]
pub trait HttpSend: Debug + Send + Sync + 'static {
    /// Send http request and return the response.
    async fn http_send(&self, req: http::Request<Bytes>) -> Result<http::Response<Bytes>>;
}

/// Env abstracts access to environment variables so that configuration loading can be
/// tested without touching the process environment.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS process environment.
#[derive(Debug, Copy, Clone)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key)?.into_string().ok()
    }
}

/// StaticEnv provides a static env environment.
///
/// This is useful for testing or for providing a fixed environment.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables to use.
    pub envs: HashMap<String, String>,
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// Event is a single diagnostic record emitted by signers and clients.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// Severity of this event.
    pub level: log::Level,
    /// Component that emitted the event, for example `apigsign::sdk_hmac`.
    pub target: &'a str,
    /// Human readable message.
    pub message: &'a str,
    /// Structured fields attached to the event.
    pub fields: &'a [(&'a str, String)],
}

/// Observe receives the diagnostic events emitted while signing and sending requests.
///
/// Implementations must not block; they are called inline on the signing path.
pub trait Observe: Debug + Send + Sync + 'static {
    /// Record an event.
    fn observe(&self, event: &Event<'_>);
}

/// LogObserve forwards events to the [`log`] facade.
///
/// Fields are appended to the message as `key=value` pairs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserve;

impl Observe for LogObserve {
    fn observe(&self, event: &Event<'_>) {
        if !log::log_enabled!(target: event.target, event.level) {
            return;
        }

        let mut s = String::from(event.message);
        for (k, v) in event.fields {
            // Writing into a String never fails.
            let _ = write!(s, " {k}={v:?}");
        }
        log::log!(target: event.target, event.level, "{s}");
    }
}

/// NoopHttpSend is a no-op implementation that always returns an error.
///
/// This is used when no HTTP client is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHttpSend;

#[async_trait::async_trait]
impl HttpSend for NoopHttpSend {
    async fn http_send(&self, _req: http::Request<Bytes>) -> Result<http::Response<Bytes>> {
        Err(Error::unexpected(
            "HTTP sending not supported: no HTTP client configured",
        ))
    }
}

/// NoopEnv is a no-op implementation that always returns None.
///
/// This is used when no environment is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _key: &str) -> Option<String> {
        None
    }
}

/// NoopObserve drops every event.
///
/// This is used when no observability sink is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserve;

impl Observe for NoopObserve {
    fn observe(&self, _event: &Event<'_>) {}
}
