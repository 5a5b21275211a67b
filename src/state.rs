use std::sync::Arc;

use crate::auth::Authenticator;
use crate::rate_limit::RateLimiter;
use crate::upstream::ModelGateway;

// App's shared state. Both collaborators sit behind traits so tests can
// swap them out; the rate limiter is an injected instance, not a global.
pub struct AppState {
    pub authenticator: Arc<dyn Authenticator>,
    pub gateway: Arc<dyn ModelGateway>,
    pub rate_limiter: RateLimiter,
}
