use anyhow::Result;
use apigsign::exchange_rate::{default_client, Config};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let client = default_client(Config::new())?;
    let rate = client.query_exchange_rate("CNY", "USD").await?;
    println!("1 {} = {} {}", rate.from, rate.exchange, rate.to);
    Ok(())
}
