use super::*;
use anyhow::Result;
use apigsign_core::{Body, Context, StaticEnv};
use apigsign_sdk_hmac::{Config, X_SDK_DATE};
use chrono::NaiveDateTime;
use http::header::{CONTENT_TYPE, HOST};
use http::Request;
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn test_get_signature_can_be_rederived() -> Result<()> {
    let signer = test_signer();
    let mut req = Request::get("http://example.com/test")
        .header(HOST, "example.com")
        .body(Body::Empty)?;

    signer.sign(&mut req)?;

    let date = req.headers()[X_SDK_DATE].to_str()?.to_string();
    assert!(NaiveDateTime::parse_from_str(&date, "%Y%m%dT%H%M%SZ").is_ok());

    let auth = parse_authorization(&req);
    assert_eq!(auth.access, ACCESS_KEY);
    assert_eq!(auth.signed_headers, vec!["host", "x-sdk-date"]);

    let creq = format!(
        "GET\n/test/\n\nhost:example.com\nx-sdk-date:{date}\n\nhost;x-sdk-date\n{}",
        empty_payload_hash()
    );
    assert_eq!(auth.signature, expected_signature(&creq, &date));
    Ok(())
}

#[test]
fn test_known_signature() -> Result<()> {
    let signer = test_signer();
    let mut req = Request::get("http://example.com/test")
        .header(HOST, "example.com")
        .header(X_SDK_DATE, DATE)
        .body(Body::Empty)?;

    signer.sign(&mut req)?;

    assert_eq!(
        parse_authorization(&req).signature,
        "83d466bec531ee837b10ffa6229151ea46cd3143e8588857a861bcbac60e2b0c"
    );
    Ok(())
}

#[test]
fn test_every_header_is_signed() -> Result<()> {
    let signer = test_signer();
    let mut req = Request::post("https://apig.example.com/v1/rates")
        .header(CONTENT_TYPE, "application/json")
        .header("x-project-id", "  project-1 ")
        .header("x-stage", "RELEASE")
        .header(X_SDK_DATE, DATE)
        .body(Body::from(r#"{"from":"CNY","to":"USD"}"#))?;

    signer.sign(&mut req)?;

    let auth = parse_authorization(&req);
    assert_eq!(
        auth.signed_headers,
        vec!["content-type", "x-project-id", "x-sdk-date", "x-stage"]
    );

    let creq = format!(
        "POST\n/v1/rates/\n\ncontent-type:application/json\nx-project-id:project-1\n\
         x-sdk-date:{DATE}\nx-stage:RELEASE\n\ncontent-type;x-project-id;x-sdk-date;x-stage\n{}",
        hex::encode(Sha256::digest(br#"{"from":"CNY","to":"USD"}"#))
    );
    assert_eq!(auth.signature, expected_signature(&creq, DATE));
    Ok(())
}

#[test]
fn test_sign_concurrently() -> Result<()> {
    let signer = Arc::new(test_signer());
    let build = || {
        Request::get("http://example.com/v1/items?page=2")
            .header(HOST, "example.com")
            .header(X_SDK_DATE, DATE)
            .body(Body::Empty)
    };

    let values = std::thread::scope(|s| {
        let handles = (0..4)
            .map(|_| {
                let signer = signer.clone();
                s.spawn(move || -> Result<http::HeaderValue> {
                    let mut req = build()?;
                    signer.sign(&mut req)?;
                    Ok(req.headers()[http::header::AUTHORIZATION].clone())
                })
            })
            .collect::<Vec<_>>();

        handles
            .into_iter()
            .map(|h| h.join().expect("signing thread must not panic"))
            .collect::<Result<Vec<_>>>()
    })?;

    assert!(values.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}

#[test]
fn test_signer_from_config() -> Result<()> {
    init_logger();
    let ctx = Context::new().with_env(StaticEnv {
        envs: HashMap::from([
            ("HUAWEICLOUD_SDK_AK".to_string(), ACCESS_KEY.to_string()),
            ("HUAWEICLOUD_SDK_SK".to_string(), SECRET_KEY.to_string()),
        ]),
    });
    let cred = Config::new().from_env(&ctx).credential()?;
    let signer = Signer::new(ctx, RequestSigner::new(cred));

    let mut req = Request::get("http://example.com/test")
        .header(HOST, "example.com")
        .header(X_SDK_DATE, DATE)
        .body(Body::Empty)?;
    signer.sign(&mut req)?;

    assert_eq!(
        parse_authorization(&req).signature,
        "83d466bec531ee837b10ffa6229151ea46cd3143e8588857a861bcbac60e2b0c"
    );
    Ok(())
}
