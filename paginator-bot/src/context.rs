use std::sync::Arc;

use paginator_twilight::SessionRegistry;
use twilight_http::Client;

use crate::config::BotConfig;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub sessions: Arc<SessionRegistry>,
    pub config: Arc<BotConfig>,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, config: BotConfig) -> Self {
        Self {
            http,
            sessions: Arc::new(SessionRegistry::new()),
            config: Arc::new(config),
        }
    }
}
