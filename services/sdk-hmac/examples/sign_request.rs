//! Sign a request with credentials read from `HUAWEICLOUD_SDK_AK` / `HUAWEICLOUD_SDK_SK`.
//!
//! ```shell
//! RUST_LOG=debug cargo run --example sign_request -- https://apig.example.com/v1/rates
//! ```

use anyhow::Result;
use apigsign_core::{Body, Context, LogObserve, OsEnv, Signer};
use apigsign_sdk_hmac::{Config, RequestSigner};
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let ctx = Context::new().with_env(OsEnv).with_observe(LogObserve);
    let config = Config::new().from_env(&ctx);
    let credential = match config.credential() {
        Ok(cred) => cred,
        Err(err) => {
            info!("no credential in environment ({err}), using a demo key");
            Config::new()
                .with_access_key_id("demo_access_key")
                .with_secret_access_key("demo_secret_key")
                .credential()?
        }
    };
    let signer = Signer::new(ctx, RequestSigner::new(credential));

    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://apig.example.com/v1/rates?to=USD&from=CNY".to_string());
    let mut req = http::Request::get(url)
        .header("content-type", "application/json")
        .body(Body::Empty)?;

    signer.sign(&mut req)?;

    println!("{} {}", req.method(), req.uri());
    for (name, value) in req.headers() {
        println!("{name}: {}", value.to_str()?);
    }
    Ok(())
}
