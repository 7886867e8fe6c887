//! Canonical request construction for the SDK-HMAC-SHA256 scheme.
//!
//! Every function here must produce exactly the bytes the verifying gateway
//! rebuilds from the received request, so ordering, escaping and newlines are
//! fixed:
//!
//! ```text
//! METHOD + "\n" +
//! CanonicalURI + "\n" +
//! CanonicalQueryString + "\n" +
//! CanonicalHeaders + "\n" +
//! SignedHeaders + "\n" +
//! HexEncode(SHA256(Body))
//! ```

use std::collections::BTreeMap;

use apigsign_core::hash::hex_sha256;
use apigsign_core::{Body, Result, SigningRequest};
use http::header::HOST;
use http::uri::Authority;
use http::HeaderMap;
use percent_encoding::{percent_decode_str, percent_encode};

use crate::constants::*;

/// Check if a byte must be percent escaped.
///
/// Only ASCII letters, digits and `-`, `_`, `.`, `~` pass through.
pub fn should_escape(b: u8) -> bool {
    !(b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~'))
}

/// Percent escape every byte of `s` that [`should_escape`], using uppercase hex.
pub fn escape(s: &str) -> String {
    escape_bytes(s.as_bytes())
}

fn escape_bytes(bs: &[u8]) -> String {
    percent_encode(bs, &SDK_HMAC_ENCODE_SET).to_string()
}

/// Build the canonical URI from a wire path.
///
/// Each `/` separated segment is decoded and escaped on its own, so an encoded
/// `%2F` stays inside its segment. The result always ends with `/`.
pub fn canonical_uri(path: &str) -> String {
    let mut uri = path
        .split('/')
        .map(|seg| escape_bytes(&percent_decode_str(seg).collect::<Vec<u8>>()))
        .collect::<Vec<_>>()
        .join("/");
    if !uri.ends_with('/') {
        uri.push('/');
    }

    uri
}

/// Build the canonical query string from decoded query pairs.
///
/// Keys are sorted byte-wise, the values of a repeated key are sorted too, and
/// every byte of every key and value is escaped: `b=2&a=1` becomes `a=1&b=2`.
pub fn canonical_query_string(query: &[(Vec<u8>, Vec<u8>)]) -> String {
    let mut params: BTreeMap<&[u8], Vec<&[u8]>> = BTreeMap::new();
    for (k, v) in query {
        params.entry(k.as_slice()).or_default().push(v.as_slice());
    }

    let mut pairs = Vec::with_capacity(query.len());
    for (k, mut values) in params {
        values.sort_unstable();

        let k = escape_bytes(k);
        for v in values {
            pairs.push(format!("{k}={}", escape_bytes(v)));
        }
    }

    pairs.join("&")
}

/// Build the canonical headers block.
///
/// Lines follow the order of `signed_headers`, which must already be lowercase
/// and sorted. `host` takes its value from `authority` instead of the header map,
/// without any userinfo. Values are written as raw bytes, so the block is not
/// always valid UTF-8. The block is always newline terminated.
pub fn canonical_headers(
    headers: &HeaderMap,
    authority: &Authority,
    signed_headers: &[String],
) -> Vec<u8> {
    let mut lines = Vec::with_capacity(signed_headers.len());
    for name in signed_headers {
        if name == HOST.as_str() {
            let mut line = format!("{name}:{}", authority.host());
            if let Some(port) = authority.port() {
                line.push(':');
                line.push_str(port.as_str());
            }
            lines.push(line.into_bytes());
            continue;
        }

        for value in SigningRequest::header_values_sorted(headers, name) {
            let mut line = format!("{name}:").into_bytes();
            line.extend_from_slice(value);
            lines.push(line);
        }
    }

    let mut block = lines.join(&b'\n');
    block.push(b'\n');
    block
}

/// Collect the names of every header present on the request, lowercase and sorted.
pub fn signed_headers(headers: &HeaderMap) -> Vec<String> {
    SigningRequest::header_name_to_vec_sorted(headers)
        .into_iter()
        .map(String::from)
        .collect()
}

/// Compute the hex SHA-256 payload hash of the request.
///
/// A non-empty `X-Sdk-Content-Sha256` header is trusted verbatim. Otherwise the
/// body is buffered and hashed, and left in place so the transport can still send it.
pub fn payload_hash(req: &mut http::Request<Body>) -> Result<String> {
    if let Some(v) = req.headers().get(X_SDK_CONTENT_SHA256) {
        let v = v.to_str()?;
        if !v.is_empty() {
            return Ok(v.to_string());
        }
    }

    let content = req.body_mut().buffer()?;
    Ok(hex_sha256(&content))
}

/// Build the canonical request.
///
/// The request query is rewritten to its canonical form so the bytes on the wire
/// match what was signed. Header values are copied as raw bytes.
pub fn canonical_request(
    req: &mut http::Request<Body>,
    signed_headers: &[String],
) -> Result<Vec<u8>> {
    let payload_hash = payload_hash(req)?;

    let sr = SigningRequest::build(req)?;
    let query = canonical_query_string(&sr.query);
    SigningRequest::apply_query(req, &query)?;
    let headers = canonical_headers(req.headers(), &sr.authority, signed_headers);

    // 256 is specially chosen to avoid reallocation for most requests.
    let mut f = Vec::with_capacity(256);
    f.extend_from_slice(
        format!("{}\n{}\n{query}\n", sr.method, canonical_uri(&sr.path)).as_bytes(),
    );
    f.extend_from_slice(&headers);
    f.extend_from_slice(format!("\n{}\n{payload_hash}", signed_headers.join(";")).as_bytes());

    Ok(f)
}

/// Build the string to sign.
///
/// ```text
/// SDK-HMAC-SHA256
/// 20240101T000000Z
/// <hex sha256 of the canonical request>
/// ```
pub fn string_to_sign(canonical_request: &[u8], date: &str) -> String {
    format!(
        "{SIGN_ALGORITHM}\n{date}\n{}",
        hex_sha256(canonical_request)
    )
}
