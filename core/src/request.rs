use std::str::FromStr;

use http::header::HeaderName;
use http::uri::Authority;
use http::uri::PathAndQuery;
use http::HeaderMap;
use http::Method;
use http::Uri;
use percent_encoding::percent_decode_str;

use crate::{Error, Result};

/// Signing view of a request.
///
/// Unlike the request itself, the view keeps the query decoded into ordered
/// `(key, value)` pairs so signing schemes can sort and escape them. Headers are
/// not copied: signers read them from the request directly, so every header a
/// signer writes lands on the request immediately.
#[derive(Debug, Clone)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: Method,
    /// HTTP authority, used as the value of the `host` header.
    pub authority: Authority,
    /// HTTP path, still percent encoded as it appears on the wire.
    pub path: String,
    /// HTTP query parameters, form decoded to raw bytes, in their original order.
    ///
    /// Decoded values are kept as bytes since `%FF` and friends are not valid UTF-8.
    pub query: Vec<(Vec<u8>, Vec<u8>)>,
}

impl SigningRequest {
    /// Build a signing view from a request.
    pub fn build<B>(req: &http::Request<B>) -> Result<Self> {
        let uri = req.uri();

        Ok(SigningRequest {
            method: req.method().clone(),
            authority: uri.authority().cloned().ok_or_else(|| {
                Error::request_invalid("request without authority is invalid for signing")
            })?,
            path: uri.path().to_string(),
            query: uri.query().map(parse_query).unwrap_or_default(),
        })
    }

    /// Replace the raw query of the request.
    ///
    /// `query` must already be encoded for the wire. An empty query removes the `?`.
    pub fn apply_query<B>(req: &mut http::Request<B>, query: &str) -> Result<()> {
        let mut parts = std::mem::take(req.uri_mut()).into_parts();
        let path = parts
            .path_and_query
            .as_ref()
            .map(|paq| paq.path())
            .unwrap_or("/");

        let paq = if query.is_empty() {
            path.to_string()
        } else {
            let mut s = String::with_capacity(path.len() + query.len() + 1);
            s.push_str(path);
            s.push('?');
            s.push_str(query);
            s
        };
        parts.path_and_query = Some(PathAndQuery::from_str(&paq)?);

        *req.uri_mut() = Uri::from_parts(parts)?;
        Ok(())
    }

    /// Get header names as sorted vector.
    ///
    /// `http` stores header names in lowercase, so the result is lowercase too.
    pub fn header_name_to_vec_sorted(headers: &HeaderMap) -> Vec<&str> {
        let mut h = headers
            .keys()
            .map(HeaderName::as_str)
            .collect::<Vec<&str>>();
        h.sort_unstable();

        h
    }

    /// Get all values of a header as raw bytes, sorted and with surrounding
    /// whitespace trimmed.
    ///
    /// Values are not required to be visible ASCII.
    pub fn header_values_sorted<'a>(headers: &'a HeaderMap, name: &str) -> Vec<&'a [u8]> {
        let mut values = headers
            .get_all(name)
            .iter()
            .map(|v| v.as_bytes().trim_ascii())
            .collect::<Vec<&[u8]>>();
        values.sort_unstable();

        values
    }
}

/// Split a raw query into form decoded pairs.
///
/// `+` decodes to a space, a pair without `=` gets an empty value, and empty
/// pairs are skipped.
fn parse_query(query: &str) -> Vec<(Vec<u8>, Vec<u8>)> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (k, v) = pair.split_once('=').unwrap_or((pair, ""));
            (form_decode(k), form_decode(v))
        })
        .collect()
}

fn form_decode(s: &str) -> Vec<u8> {
    percent_decode_str(&s.replace('+', " ")).collect()
}
