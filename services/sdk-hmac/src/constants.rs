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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Algorithm identifier written in the string to sign and the `Authorization` header.
pub const SIGN_ALGORITHM: &str = "SDK-HMAC-SHA256";

// Headers used by the SDK-HMAC-SHA256 scheme.
/// Header carrying the signing timestamp, formatted as `YYYYMMDDThhmmssZ`.
pub const X_SDK_DATE: &str = "x-sdk-date";
/// Header carrying a precomputed hex SHA-256 of the body.
pub const X_SDK_CONTENT_SHA256: &str = "x-sdk-content-sha256";

// Env values used to load credentials.
/// Env value for the access key id.
pub const HUAWEICLOUD_SDK_AK: &str = "HUAWEICLOUD_SDK_AK";
/// Env value for the secret access key.
pub const HUAWEICLOUD_SDK_SK: &str = "HUAWEICLOUD_SDK_SK";

/// AsciiSet for the scheme's percent escaping.
///
/// - Escape every byte except the unreserved characters: 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
/// - Applied to path segments, query keys and query values alike; `/` is always escaped.
pub static SDK_HMAC_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
