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

use super::*;
use anyhow::Result;
use apigsign_core::Body;
use apigsign_sdk_hmac::X_SDK_DATE;
use http::header::HOST;
use http::HeaderValue;
use http::Request;
use pretty_assertions::assert_eq;

#[test]
fn test_path_with_special_characters() -> Result<()> {
    let signer = test_signer();
    let mut req = Request::get("http://example.com/files/%E6%B1%87%E7%8E%87/report(1)%20final.txt")
        .header(HOST, "example.com")
        .header(X_SDK_DATE, DATE)
        .body(Body::Empty)?;

    signer.sign(&mut req)?;

    let creq = format!(
        "GET\n/files/%E6%B1%87%E7%8E%87/report%281%29%20final.txt/\n\n\
         host:example.com\nx-sdk-date:{DATE}\n\nhost;x-sdk-date\n{}",
        empty_payload_hash()
    );
    assert_eq!(
        parse_authorization(&req).signature,
        expected_signature(&creq, DATE)
    );
    Ok(())
}

#[test]
fn test_encoded_slash_stays_in_segment() -> Result<()> {
    let signer = test_signer();
    let mut req = Request::get("http://example.com/objects/a%2Fb")
        .header(X_SDK_DATE, DATE)
        .body(Body::Empty)?;

    signer.sign(&mut req)?;

    let creq = format!(
        "GET\n/objects/a%2Fb/\n\nx-sdk-date:{DATE}\n\nx-sdk-date\n{}",
        empty_payload_hash()
    );
    assert_eq!(
        parse_authorization(&req).signature,
        expected_signature(&creq, DATE)
    );
    Ok(())
}

#[test]
fn test_query_with_special_characters() -> Result<()> {
    let signer = test_signer();
    let mut req = Request::get("http://example.com/search?sym=%24%26&q=a+b&empty")
        .header(HOST, "example.com")
        .header(X_SDK_DATE, DATE)
        .body(Body::Empty)?;

    signer.sign(&mut req)?;

    assert_eq!(
        req.uri().query(),
        Some("empty=&q=a%20b&sym=%24%26"),
        "query on the wire must match the signed form"
    );

    let creq = format!(
        "GET\n/search/\nempty=&q=a%20b&sym=%24%26\n\
         host:example.com\nx-sdk-date:{DATE}\n\nhost;x-sdk-date\n{}",
        empty_payload_hash()
    );
    assert_eq!(
        parse_authorization(&req).signature,
        expected_signature(&creq, DATE)
    );
    Ok(())
}

#[test]
fn test_query_with_invalid_utf8_byte() -> Result<()> {
    let signer = test_signer();
    let mut req = Request::get("http://example.com/search?k=%FF")
        .header(X_SDK_DATE, DATE)
        .body(Body::Empty)?;

    signer.sign(&mut req)?;

    assert_eq!(req.uri().query(), Some("k=%FF"));

    let creq = format!(
        "GET\n/search/\nk=%FF\nx-sdk-date:{DATE}\n\nx-sdk-date\n{}",
        empty_payload_hash()
    );
    assert_eq!(
        parse_authorization(&req).signature,
        expected_signature(&creq, DATE)
    );
    Ok(())
}

#[test]
fn test_header_with_non_ascii_value() -> Result<()> {
    let signer = test_signer();
    let mut req = Request::get("http://example.com/rates")
        .header(HOST, "example.com")
        .header(X_SDK_DATE, DATE)
        .header("x-name", HeaderValue::from_bytes(" 汇率 ".as_bytes())?)
        .body(Body::Empty)?;

    signer.sign(&mut req)?;

    let creq = format!(
        "GET\n/rates/\n\nhost:example.com\nx-name:汇率\nx-sdk-date:{DATE}\n\n\
         host;x-name;x-sdk-date\n{}",
        empty_payload_hash()
    );
    assert_eq!(
        parse_authorization(&req).signature,
        expected_signature(&creq, DATE)
    );
    Ok(())
}
