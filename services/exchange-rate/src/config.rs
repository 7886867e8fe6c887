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

use std::fmt::{Debug, Formatter};
use std::time::Duration;

use apigsign_core::utils::Redact;
use apigsign_core::{Context, Error, Result};
use apigsign_sdk_hmac::{Credential, HUAWEICLOUD_SDK_AK, HUAWEICLOUD_SDK_SK};
use serde::Deserialize;

use crate::constants::*;

/// Config for [`ExchangeRateClient`](crate::ExchangeRateClient).
///
/// It can be deserialized from JSON shaped like:
///
/// ```json
/// {"accessKey": "...", "secretKey": "...", "exchangeRateUrl": "https://..."}
/// ```
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// `access_key` will be loaded from
    ///
    /// - this field if it's not empty
    /// - env value: [`HUAWEICLOUD_SDK_AK`]
    #[serde(default)]
    pub access_key: String,
    /// `secret_key` will be loaded from
    ///
    /// - this field if it's not empty
    /// - env value: [`HUAWEICLOUD_SDK_SK`]
    #[serde(default)]
    pub secret_key: String,
    /// `exchange_rate_url` will be loaded from
    ///
    /// - this field if it's not empty
    /// - env value: [`EXCHANGE_RATE_URL`]
    #[serde(default)]
    pub exchange_rate_url: String,
    /// Upper bound for sending a query and receiving its response.
    #[serde(skip, default = "default_timeout")]
    pub timeout: Duration,
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            access_key: String::new(),
            secret_key: String::new(),
            exchange_rate_url: String::new(),
            timeout: default_timeout(),
        }
    }
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse config from its JSON form.
    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| Error::config_invalid("failed to parse exchange rate config").with_source(e))
    }

    /// Set access_key
    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = access_key.into();
        self
    }

    /// Set secret_key
    pub fn with_secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.secret_key = secret_key.into();
        self
    }

    /// Set exchange_rate_url
    pub fn with_exchange_rate_url(mut self, url: impl Into<String>) -> Self {
        self.exchange_rate_url = url.into();
        self
    }

    /// Set timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load config from env.
    ///
    /// Only empty fields are filled.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        for (field, key) in [
            (&mut self.access_key, HUAWEICLOUD_SDK_AK),
            (&mut self.secret_key, HUAWEICLOUD_SDK_SK),
            (&mut self.exchange_rate_url, EXCHANGE_RATE_URL),
        ] {
            if field.is_empty() {
                if let Some(v) = ctx.env_var(key) {
                    *field = v;
                }
            }
        }

        self
    }

    /// Build the signing credential described by this config.
    pub fn credential(&self) -> Result<Credential> {
        apigsign_sdk_hmac::Config::new()
            .with_access_key_id(&self.access_key)
            .with_secret_access_key(&self.secret_key)
            .credential()
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key", &Redact::from(&self.access_key))
            .field("secret_key", &Redact::from(&self.secret_key))
            .field("exchange_rate_url", &self.exchange_rate_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
