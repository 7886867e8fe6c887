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

//! `SDK-HMAC-SHA256` signing with convenience APIs

pub use apigsign_sdk_hmac::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result, Signer};

/// Create a signer with the [default context](crate::default_context).
///
/// Fields left unset in `config` are loaded from `HUAWEICLOUD_SDK_AK` and
/// `HUAWEICLOUD_SDK_SK`.
///
/// # Example
///
/// ```no_run
/// use apigsign::sdk_hmac::{default_signer, Config};
///
/// # fn example() -> apigsign::Result<()> {
/// let signer = default_signer(Config::new().with_access_key_id("my-access-key"))?;
/// # Ok(())
/// # }
/// ```
#[cfg(feature = "default-context")]
pub fn default_signer(config: Config) -> Result<Signer> {
    let ctx = default_context();
    let credential = config.from_env(&ctx).credential()?;

    Ok(Signer::new(ctx, RequestSigner::new(credential)))
}
