//! Query an exchange rate with a JSON config file.
//!
//! ```shell
//! cat > config.json <<EOF
//! {"accessKey": "...", "secretKey": "...", "exchangeRateUrl": "https://..."}
//! EOF
//! RUST_LOG=info cargo run --example query -- config.json CNY USD
//! ```

use anyhow::{Context as _, Result};
use apigsign_core::{Context, LogObserve, OsEnv};
use apigsign_exchange_rate::{Config, ExchangeRateClient};
use apigsign_http_send_reqwest::ReqwestHttpSend;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let path = args.next().context("usage: query <config.json> [FROM] [TO]")?;
    let from = args.next().unwrap_or_else(|| "CNY".to_string());
    let to = args.next().unwrap_or_else(|| "USD".to_string());

    let ctx = Context::new()
        .with_env(OsEnv)
        .with_http_send(ReqwestHttpSend::default())
        .with_observe(LogObserve);
    let config = Config::from_json(&std::fs::read_to_string(&path)?)?.from_env(&ctx);

    let client = ExchangeRateClient::new(ctx, config)?;
    let rate = client.query_exchange_rate(&from, &to).await?;
    println!(
        "1 {} ({}) = {} {} ({}), updated at {}",
        rate.from, rate.from_name, rate.exchange, rate.to, rate.to_name, rate.updatetime
    );
    Ok(())
}
