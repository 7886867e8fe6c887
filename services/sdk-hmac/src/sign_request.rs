//! SDK-HMAC-SHA256 request signer
use http::header::AUTHORIZATION;
use http::HeaderValue;
use log::Level;

use apigsign_core::hash::hex_hmac_sha256;
use apigsign_core::time::{format_iso8601, now, parse_iso8601, DateTime};
use apigsign_core::{Body, Context, Error, Event, Result, SignRequest};

use crate::canonical;
use crate::constants::*;
use crate::credential::Credential;

const TARGET: &str = "apigsign::sdk_hmac";

/// RequestSigner that implements the `SDK-HMAC-SHA256` authorization scheme.
///
/// Every header present on the request is signed, so all headers must be set
/// before calling [`SignRequest::sign_request`].
#[derive(Debug)]
pub struct RequestSigner {
    credential: Credential,

    time: Option<DateTime>,
}

impl RequestSigner {
    /// Create a new signer for the given credential.
    pub fn new(credential: Credential) -> Self {
        Self {
            credential,
            time: None,
        }
    }

    /// Specify the signing time.
    ///
    /// # Note
    ///
    /// We should always take current time to sign requests.
    /// Only use this function for testing.
    #[cfg(test)]
    pub fn with_time(mut self, time: DateTime) -> Self {
        self.time = Some(time);
        self
    }

    /// Get the credential used by this signer.
    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    /// Reuse a well formed `X-Sdk-Date` or stamp the request with the signing time.
    fn signing_date(&self, ctx: &Context, req: &mut http::Request<Body>) -> Result<String> {
        if let Some(v) = req.headers().get(X_SDK_DATE) {
            match v
                .to_str()
                .map_err(Error::from)
                .and_then(|s| parse_iso8601(s))
            {
                Ok(t) => return Ok(format_iso8601(t)),
                Err(err) => ctx.observe(&Event {
                    level: Level::Debug,
                    target: TARGET,
                    message: "overwrite malformed x-sdk-date",
                    fields: &[("error", err.to_string())],
                }),
            }
        }

        let date = format_iso8601(self.time.unwrap_or_else(now));
        req.headers_mut()
            .insert(X_SDK_DATE, HeaderValue::from_str(&date)?);
        Ok(date)
    }
}

impl SignRequest for RequestSigner {
    fn sign_request(&self, ctx: &Context, req: &mut http::Request<Body>) -> Result<()> {
        let date = self.signing_date(ctx, req)?;

        let signed_headers = canonical::signed_headers(req.headers());
        let creq = canonical::canonical_request(req, &signed_headers)?;
        ctx.observe(&Event {
            level: Level::Debug,
            target: TARGET,
            message: "calculated canonical request",
            fields: &[(
                "canonical_request",
                String::from_utf8_lossy(&creq).into_owned(),
            )],
        });

        let string_to_sign = canonical::string_to_sign(&creq, &date);
        ctx.observe(&Event {
            level: Level::Debug,
            target: TARGET,
            message: "calculated string to sign",
            fields: &[("string_to_sign", string_to_sign.clone())],
        });

        let signature = hex_hmac_sha256(
            self.credential.secret_access_key.as_bytes(),
            string_to_sign.as_bytes(),
        )?;

        let mut authorization = HeaderValue::from_str(&format!(
            "{SIGN_ALGORITHM} Access={}, SignedHeaders={}, Signature={signature}",
            self.credential.access_key_id,
            signed_headers.join(";"),
        ))?;
        authorization.set_sensitive(true);
        req.headers_mut().insert(AUTHORIZATION, authorization);

        Ok(())
    }
}
