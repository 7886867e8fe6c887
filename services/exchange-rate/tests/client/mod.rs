use std::time::Duration;

use anyhow::Result;
use apigsign_core::{Context, ErrorKind};
use apigsign_exchange_rate::{Config, ExchangeRate, ExchangeRateClient};
use hmac::{Hmac, Mac};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::{Method, StatusCode};
use pretty_assertions::assert_eq;
use sha2::{Digest, Sha256};

use super::*;

#[tokio::test]
async fn test_query_success() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, SUCCESS_RESPONSE);
    let client = test_client(http.clone(), RecordObserve::default());

    let rate = client.query_exchange_rate("CNY", "USD").await?;

    assert_eq!(
        rate,
        ExchangeRate {
            money: "1".to_string(),
            to_name: "美元".to_string(),
            from: "CNY".to_string(),
            exchange: "0.14".to_string(),
            to: "USD".to_string(),
            from_name: "人民币".to_string(),
            updatetime: "2024-03-20 10:00:00".to_string(),
        }
    );
    assert_eq!(http.requests.lock().unwrap().len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_query_sends_signed_form() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, SUCCESS_RESPONSE);
    let client = test_client(http.clone(), RecordObserve::default());

    client.query_exchange_rate("CNY", "USD").await?;

    let requests = http.requests.lock().unwrap();
    let req = &requests[0];
    assert_eq!(req.method(), Method::POST);
    assert_eq!(req.uri().to_string(), URL);
    assert_eq!(
        req.headers()[CONTENT_TYPE],
        "application/x-www-form-urlencoded"
    );
    assert_eq!(req.body().as_ref(), b"fromCode=CNY&money=1&toCode=USD");

    let date = req.headers()["x-sdk-date"].to_str()?;
    let creq = format!(
        "POST\n/exchange-rate/\n\ncontent-type:application/x-www-form-urlencoded\n\
         x-sdk-date:{date}\n\ncontent-type;x-sdk-date\n{}",
        hex::encode(Sha256::digest(req.body()))
    );
    let string_to_sign = format!(
        "SDK-HMAC-SHA256\n{date}\n{}",
        hex::encode(Sha256::digest(creq.as_bytes()))
    );
    let mut mac =
        Hmac::<Sha256>::new_from_slice(SECRET_KEY.as_bytes()).expect("hmac accepts any key");
    mac.update(string_to_sign.as_bytes());

    assert_eq!(
        req.headers()[AUTHORIZATION].to_str()?,
        format!(
            "SDK-HMAC-SHA256 Access={ACCESS_KEY}, SignedHeaders=content-type;x-sdk-date, Signature={}",
            hex::encode(mac.finalize().into_bytes())
        )
    );
    Ok(())
}

#[tokio::test]
async fn test_query_form_encodes_codes() -> Result<()> {
    let http = MockHttpSend::new(StatusCode::OK, SUCCESS_RESPONSE);
    let client = test_client(http.clone(), RecordObserve::default());

    client.query_exchange_rate("C N&Y", "U=SD").await?;

    assert_eq!(
        http.requests.lock().unwrap()[0].body().as_ref(),
        b"fromCode=C+N%26Y&money=1&toCode=U%3DSD"
    );
    Ok(())
}

#[tokio::test]
async fn test_query_service_failure() -> Result<()> {
    for status in [StatusCode::OK, StatusCode::BAD_REQUEST] {
        let observe = RecordObserve::default();
        let client = test_client(MockHttpSend::new(status, FAILURE_RESPONSE), observe.clone());

        let err = client.query_exchange_rate("CNY", "XXX").await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ServiceFailed);
        assert!(err.is_service_error());
        assert_eq!(err.to_string(), "invalid currency code");

        let events = observe.events.lock().unwrap();
        assert_eq!(events.len(), 1, "service failures log one summary event");
        let (level, message, fields) = &events[0];
        assert_eq!(*level, log::Level::Info);
        assert_eq!(message, "query exchange rate");
        assert!(fields.contains(&("code".to_string(), "400".to_string())));
        assert!(fields.contains(&("msg".to_string(), "invalid currency code".to_string())));
    }
    Ok(())
}

#[tokio::test]
async fn test_query_malformed_response() -> Result<()> {
    let observe = RecordObserve::default();
    let client = test_client(
        MockHttpSend::new(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>"),
        observe.clone(),
    );

    let err = client.query_exchange_rate("CNY", "USD").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);

    let events = observe.events.lock().unwrap();
    let messages: Vec<_> = events.iter().map(|(l, m, _)| (*l, m.as_str())).collect();
    assert_eq!(
        messages,
        vec![
            (log::Level::Error, "decode response failed"),
            (log::Level::Info, "query exchange rate"),
        ]
    );
    assert!(events[1]
        .2
        .contains(&("response".to_string(), "<html>bad gateway</html>".to_string())));
    Ok(())
}

#[tokio::test]
async fn test_query_timeout() -> Result<()> {
    let observe = RecordObserve::default();
    let ctx = Context::new()
        .with_http_send(
            MockHttpSend::new(StatusCode::OK, SUCCESS_RESPONSE).with_delay(Duration::from_secs(5)),
        )
        .with_observe(observe.clone());
    let client = ExchangeRateClient::new(
        ctx,
        test_config().with_timeout(Duration::from_millis(50)),
    )?;

    let err = client.query_exchange_rate("CNY", "USD").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    assert_eq!(
        observe.events.lock().unwrap()[0].1,
        "send request failed".to_string()
    );
    Ok(())
}

#[tokio::test]
async fn test_query_without_transport() -> Result<()> {
    let client = ExchangeRateClient::new(Context::new(), test_config())?;

    let err = client.query_exchange_rate("CNY", "USD").await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Unexpected);
    Ok(())
}

#[test]
fn test_new_rejects_invalid_config() {
    let cases = vec![
        (test_config().with_exchange_rate_url(""), ErrorKind::ConfigInvalid),
        (
            test_config().with_exchange_rate_url("/exchange-rate"),
            ErrorKind::ConfigInvalid,
        ),
        (
            test_config().with_exchange_rate_url("http://exa mple.com"),
            ErrorKind::ConfigInvalid,
        ),
        (
            Config::new().with_exchange_rate_url(URL),
            ErrorKind::CredentialInvalid,
        ),
    ];

    for (config, kind) in cases {
        let err = ExchangeRateClient::new(Context::new(), config.clone()).unwrap_err();
        assert_eq!(err.kind(), kind, "config: {config:?}");
    }
}
