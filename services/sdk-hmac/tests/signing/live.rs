use super::init_logger;
use anyhow::Result;
use apigsign_core::{Body, Context, OsEnv, Signer};
use apigsign_http_send_reqwest::ReqwestHttpSend;
use apigsign_sdk_hmac::{Config, RequestSigner};
use http::{Request, StatusCode};
use log::{debug, warn};
use std::env;

/// Sign and send a request against a real gateway.
///
/// Requires `APIGSIGN_SDK_HMAC_TEST=on`, `APIGSIGN_SDK_HMAC_URL` and the
/// `HUAWEICLOUD_SDK_AK` / `HUAWEICLOUD_SDK_SK` credential.
#[tokio::test]
async fn test_signed_request_is_accepted() -> Result<()> {
    init_logger();

    if env::var("APIGSIGN_SDK_HMAC_TEST").as_deref() != Ok("on") {
        warn!("APIGSIGN_SDK_HMAC_TEST is not set, skipped");
        return Ok(());
    }
    let url = env::var("APIGSIGN_SDK_HMAC_URL").expect("APIGSIGN_SDK_HMAC_URL must be set");

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default());
    let cred = Config::new().from_env(&ctx).credential()?;
    let signer = Signer::new(ctx.clone(), RequestSigner::new(cred));

    let mut req = Request::get(url).body(Body::Empty)?;
    signer.sign(&mut req)?;
    debug!("signed request: {req:?}");

    let (parts, body) = req.into_parts();
    let resp = ctx
        .http_send(Request::from_parts(parts, body.into_bytes()?))
        .await?;

    debug!("got response: {resp:?}");
    assert_ne!(StatusCode::UNAUTHORIZED, resp.status());
    Ok(())
}
