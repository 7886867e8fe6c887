use std::fmt::{Debug, Formatter};

use crate::constants::*;
use crate::Credential;
use apigsign_core::{utils::Redact, Context, Error, Result};

/// Config carries the signing key configuration.
#[derive(Clone, Default)]
pub struct Config {
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HUAWEICLOUD_SDK_AK`]
    pub access_key_id: Option<String>,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`HUAWEICLOUD_SDK_SK`]
    pub secret_access_key: Option<String>,
}

impl Config {
    /// Create a new Config
    pub fn new() -> Self {
        Self::default()
    }

    /// Set access_key_id
    pub fn with_access_key_id(mut self, access_key_id: impl Into<String>) -> Self {
        self.access_key_id = Some(access_key_id.into());
        self
    }

    /// Set secret_access_key
    pub fn with_secret_access_key(mut self, secret_access_key: impl Into<String>) -> Self {
        self.secret_access_key = Some(secret_access_key.into());
        self
    }

    /// Load config from env.
    ///
    /// Fields that are already set take precedence over the environment.
    pub fn from_env(mut self, ctx: &Context) -> Self {
        if let Some(v) = ctx.env_var(HUAWEICLOUD_SDK_AK) {
            self.access_key_id.get_or_insert(v);
        }
        if let Some(v) = ctx.env_var(HUAWEICLOUD_SDK_SK) {
            self.secret_access_key.get_or_insert(v);
        }

        self
    }

    /// Build the credential described by this config.
    pub fn credential(&self) -> Result<Credential> {
        match (&self.access_key_id, &self.secret_access_key) {
            (Some(ak), Some(sk)) if !ak.is_empty() && !sk.is_empty() => {
                Ok(Credential::new(ak.clone(), sk.clone()))
            }
            _ => Err(Error::credential_invalid(format!(
                "access key id and secret access key are required, set {HUAWEICLOUD_SDK_AK} and {HUAWEICLOUD_SDK_SK}"
            ))),
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .finish()
    }
}
