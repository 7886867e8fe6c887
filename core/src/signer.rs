use crate::{Body, Context, Result, SignRequest};
use std::sync::Arc;

/// Signer is the main struct used to sign the request.
///
/// It binds a [`Context`] to a [`SignRequest`] implementation and is cheap to clone.
#[derive(Clone, Debug)]
pub struct Signer {
    ctx: Context,
    builder: Arc<dyn SignRequest>,
}

impl Signer {
    /// Create a new signer.
    pub fn new(ctx: Context, builder: impl SignRequest) -> Self {
        Self {
            ctx,
            builder: Arc::new(builder),
        }
    }

    /// Get the context of this signer.
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Signing request.
    ///
    /// See [`SignRequest`] for the contract on headers and in-place mutation.
    pub fn sign(&self, req: &mut http::Request<Body>) -> Result<()> {
        self.builder.sign_request(&self.ctx, req)
    }
}
