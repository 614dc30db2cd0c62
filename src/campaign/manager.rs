use chrono::NaiveDate;
use tracing::info;

use crate::error::Error;
use crate::state::AppState;

use super::dashboard::Dashboard;
use super::filter::{enrich_campaigns, filter_campaigns, CampaignFilter};
use super::form::{self, CreateCampaignBody};
use super::Campaign;

#[tracing::instrument(skip(state))]
pub async fn create_campaign(state: &AppState, body: CreateCampaignBody) -> Result<Campaign, Error> {
    let campaign = form::validate(body).map_err(|violations| Error::InvalidCampaign { violations })?;

    state.campaigns.write().await.add_one(campaign.clone());
    info!("added campaign {:?}", campaign.name);

    Ok(campaign)
}

#[tracing::instrument(skip(state, campaigns))]
pub async fn add_campaigns(state: &AppState, campaigns: Vec<Campaign>) -> usize {
    let added = state.campaigns.write().await.add_many(campaigns);
    info!("{} campaign(s) have been added successfully", added);

    added
}

/// Filters and enriches the current campaigns against the current users.
#[tracing::instrument(skip(state))]
pub async fn get_dashboard(state: &AppState, filter: &CampaignFilter, today: NaiveDate) -> Dashboard {
    let campaigns = state.campaigns.read().await;
    let users = state.users.read().await;

    let filtered = filter_campaigns(campaigns.campaigns(), filter);

    Dashboard {
        campaigns: enrich_campaigns(filtered, users.users(), today),
        total: campaigns.campaigns().len(),
        users_loading: users.loading(),
        users_error: users.error().map(str::to_string),
    }
}
