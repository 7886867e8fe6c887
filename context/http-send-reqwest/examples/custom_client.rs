use std::time::Duration;

use anyhow::Result;
use apigsign_core::Context;
use apigsign_http_send_reqwest::ReqwestHttpSend;
use bytes::Bytes;
use reqwest::Client;

#[tokio::main]
async fn main() -> Result<()> {
    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .user_agent("apigsign-example/0.1")
        .build()?;
    let ctx = Context::new().with_http_send(ReqwestHttpSend::new(client));

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://httpbin.org/get".to_string());
    let req = http::Request::get(&url).body(Bytes::new())?;

    let resp = ctx.http_send_as_string(req).await?;
    println!("GET {url} -> {}", resp.status());
    println!("{}", resp.body());
    Ok(())
}
