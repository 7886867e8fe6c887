use std::time::Duration;

use apigsign_core::{Body, Context, Error, Event, Result, Signer};
use apigsign_sdk_hmac::RequestSigner;
use http::header::CONTENT_TYPE;
use http::Uri;
use log::Level;

use crate::config::Config;
use crate::constants::*;
use crate::model::{ExchangeRate, ExchangeRateResponse};

const TARGET: &str = "apigsign::exchange_rate";

/// Client that queries exchange rates from an SDK-HMAC-SHA256 protected gateway.
///
/// Requests are signed with the configured key and sent through the
/// [`HttpSend`](apigsign_core::HttpSend) of the given [`Context`].
#[derive(Debug, Clone)]
pub struct ExchangeRateClient {
    signer: Signer,
    url: Uri,
    timeout: Duration,
}

impl ExchangeRateClient {
    /// Create a new client.
    ///
    /// Fails if the url is missing or not absolute, or if the key is incomplete.
    pub fn new(ctx: Context, config: Config) -> Result<Self> {
        if config.exchange_rate_url.is_empty() {
            return Err(Error::config_invalid(format!(
                "exchange rate url is required, set {EXCHANGE_RATE_URL}"
            )));
        }
        let url: Uri = config.exchange_rate_url.parse().map_err(|e| {
            Error::config_invalid(format!(
                "invalid exchange rate url: {}",
                config.exchange_rate_url
            ))
            .with_source(e)
        })?;
        if url.authority().is_none() {
            return Err(Error::config_invalid(format!(
                "exchange rate url must be absolute: {}",
                config.exchange_rate_url
            )));
        }

        let signer = Signer::new(ctx, RequestSigner::new(config.credential()?));
        Ok(Self {
            signer,
            url,
            timeout: config.timeout,
        })
    }

    fn ctx(&self) -> &Context {
        self.signer.context()
    }

    /// Query the rate for converting one unit of `from_code` into `to_code`.
    ///
    /// A response with `success` set to false fails with
    /// [`ErrorKind::ServiceFailed`](apigsign_core::ErrorKind::ServiceFailed) carrying
    /// the service message, whatever the HTTP status was.
    pub async fn query_exchange_rate(&self, from_code: &str, to_code: &str) -> Result<ExchangeRate> {
        let post_data = form_urlencoded::Serializer::new(String::new())
            .append_pair("fromCode", from_code)
            .append_pair("money", "1")
            .append_pair("toCode", to_code)
            .finish();

        let mut fields = vec![
            ("from_code", from_code.to_string()),
            ("to_code", to_code.to_string()),
            ("post_data", post_data.clone()),
        ];
        let result = self.query(post_data, &mut fields).await;

        self.ctx().observe(&Event {
            level: Level::Info,
            target: TARGET,
            message: "query exchange rate",
            fields: &fields,
        });
        result
    }

    async fn query(
        &self,
        post_data: String,
        fields: &mut Vec<(&'static str, String)>,
    ) -> Result<ExchangeRate> {
        let mut req = http::Request::post(self.url.clone())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(Body::from(post_data))
            .map_err(|e| self.failed(fields, "create request failed", e.into()))?;

        self.signer
            .sign(&mut req)
            .map_err(|e| self.failed(fields, "sign request failed", e))?;

        let (parts, body) = req.into_parts();
        let req = http::Request::from_parts(parts, body.into_bytes()?);
        let resp = match tokio::time::timeout(self.timeout, self.ctx().http_send(req)).await {
            Ok(resp) => resp,
            Err(_) => Err(Error::unexpected(format!(
                "exchange rate query timed out after {:?}",
                self.timeout
            ))),
        }
        .map_err(|e| self.failed(fields, "send request failed", e))?;

        let body = resp.into_body();
        fields.push(("response", String::from_utf8_lossy(&body).into_owned()));

        let resp: ExchangeRateResponse = serde_json::from_slice(&body).map_err(|e| {
            let err =
                Error::unexpected("failed to decode exchange rate response").with_source(e);
            self.failed(fields, "decode response failed", err)
        })?;
        if !resp.success {
            fields.push(("code", resp.code.to_string()));
            fields.push(("msg", resp.msg.clone()));
            return Err(Error::service_failed(resp.msg));
        }

        Ok(resp.data.unwrap_or_default())
    }

    fn failed(&self, fields: &[(&'static str, String)], message: &str, err: Error) -> Error {
        let mut fields = fields.to_vec();
        fields.push(("error", err.to_string()));

        self.ctx().observe(&Event {
            level: Level::Error,
            target: TARGET,
            message,
            fields: &fields,
        });
        err
    }
}
