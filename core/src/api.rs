use crate::{Body, Context, Result};
use std::fmt::Debug;

/// SignRequest is the trait implemented by signing schemes.
///
/// Implementations hold their signing key and no per-request state, so one instance
/// can sign many requests concurrently.
///
/// ## Headers
///
/// Schemes that authenticate every header present on the request sign exactly the
/// headers that exist at call time. Callers must finalize all headers before signing:
/// any header added afterwards invalidates the signature on the server side.
///
/// ## Mutation
///
/// The request is mutated in place. If signing fails, the changes made before the
/// failure stay on the request.
pub trait SignRequest: Debug + Send + Sync + Unpin + 'static {
    /// Sign the request in place.
    fn sign_request(&self, ctx: &Context, req: &mut http::Request<Body>) -> Result<()>;
}
