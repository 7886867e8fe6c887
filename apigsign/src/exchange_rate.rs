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

//! Exchange rate queries with convenience APIs

pub use apigsign_exchange_rate::*;

#[cfg(feature = "default-context")]
use crate::{default_context, Result};

/// Create an exchange rate client with the [default context](crate::default_context).
///
/// Empty fields of `config` are loaded from `HUAWEICLOUD_SDK_AK`,
/// `HUAWEICLOUD_SDK_SK` and `EXCHANGE_RATE_URL`.
#[cfg(feature = "default-context")]
pub fn default_client(config: Config) -> Result<ExchangeRateClient> {
    let ctx = default_context();
    let config = config.from_env(&ctx);

    ExchangeRateClient::new(ctx, config)
}
