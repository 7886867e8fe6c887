use apigsign_core::hash::hex_hmac_sha256;
use apigsign_core::time::{format_iso8601, now};
use apigsign_core::{Body, Context, Error, Result, SignRequest, Signer};
use http::header::AUTHORIZATION;

/// Signs `METHOD\nPATH\nDATE` with a shared secret.
#[derive(Debug)]
struct MySigner {
    api_key: String,
    api_secret: String,
}

impl SignRequest for MySigner {
    fn sign_request(&self, _: &Context, req: &mut http::Request<Body>) -> Result<()> {
        if self.api_key.is_empty() || self.api_secret.is_empty() {
            return Err(Error::credential_invalid("api key and secret are required"));
        }

        let date = format_iso8601(now());
        let signature = hex_hmac_sha256(
            self.api_secret.as_bytes(),
            format!("{}\n{}\n{date}", req.method(), req.uri().path()).as_bytes(),
        )?;

        req.headers_mut().insert("x-date", date.parse()?);
        req.headers_mut().insert(
            AUTHORIZATION,
            format!("MY-HMAC {}:{signature}", self.api_key).parse()?,
        );
        Ok(())
    }
}

fn main() -> Result<()> {
    let ctx = Context::new();
    let signer = Signer::new(
        ctx.clone(),
        MySigner {
            api_key: ctx.env_var("MY_API_KEY").unwrap_or_else(|| "demo-api-key".to_string()),
            api_secret: ctx
                .env_var("MY_API_SECRET")
                .unwrap_or_else(|| "demo-api-secret".to_string()),
        },
    );

    let mut req = http::Request::get("https://api.example.com/v1/items").body(Body::Empty)?;
    signer.sign(&mut req)?;

    for (name, value) in req.headers() {
        println!("{name}: {value:?}");
    }
    Ok(())
}
