use crate::seed;

use super::Campaign;

/// Ordered, append-only list of campaigns plus its loading and error flags.
/// Nothing is validated here; callers validate before adding.
#[derive(Clone, Debug)]
pub struct CampaignStore {
    campaigns: Vec<Campaign>,
    loading: bool,
    error: Option<String>,
}

impl CampaignStore {
    pub fn new(campaigns: Vec<Campaign>) -> CampaignStore {
        CampaignStore {
            campaigns,
            loading: false,
            error: None,
        }
    }

    pub fn seeded() -> CampaignStore {
        CampaignStore::new(seed::campaigns())
    }

    pub fn campaigns(&self) -> &[Campaign] {
        &self.campaigns
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn add_one(&mut self, campaign: Campaign) {
        self.campaigns.push(campaign);
    }

    pub fn add_many<I>(&mut self, campaigns: I) -> usize
    where
        I: IntoIterator<Item = Campaign>,
    {
        let before = self.campaigns.len();
        self.campaigns.extend(campaigns);
        self.campaigns.len() - before
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }
}
