use tokio::sync::RwLock;

use crate::campaign::store::CampaignStore;
use crate::config::Config;
use crate::user::source::UserSource;
use crate::user::store::UserStore;

/// Everything the handlers share: both stores, the user source and the
/// configuration the service was started with.
pub struct AppState {
    pub config: Config,
    pub campaigns: RwLock<CampaignStore>,
    pub users: RwLock<UserStore>,
    user_source: Box<dyn UserSource + Send + Sync>,
}

impl AppState {
    pub fn new(config: Config, user_source: Box<dyn UserSource + Send + Sync>) -> AppState {
        AppState::with_campaigns(config, user_source, CampaignStore::seeded())
    }

    pub fn with_campaigns(
        config: Config,
        user_source: Box<dyn UserSource + Send + Sync>,
        campaigns: CampaignStore,
    ) -> AppState {
        AppState {
            config,
            campaigns: RwLock::new(campaigns),
            users: RwLock::new(UserStore::default()),
            user_source,
        }
    }

    pub fn user_source(&self) -> &dyn UserSource {
        &*self.user_source
    }
}
