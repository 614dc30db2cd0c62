use chrono::NaiveDate;

use crate::user::{User, UserId};

use super::{Campaign, CampaignWithStatus};

pub const UNKNOWN_USER: &str = "Unknown User";

/// Name and date criteria for narrowing the campaign list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CampaignFilter {
    pub search: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl CampaignFilter {
    pub fn matches(&self, campaign: &Campaign) -> bool {
        self.matches_name(campaign) && self.matches_dates(campaign)
    }

    fn matches_name(&self, campaign: &Campaign) -> bool {
        campaign
            .name
            .to_lowercase()
            .contains(&self.search.to_lowercase())
    }

    // With both bounds only the campaign's start date is checked against the
    // range; a lone end bound is checked against the campaign's end date.
    fn matches_dates(&self, campaign: &Campaign) -> bool {
        match (self.start_date, self.end_date) {
            (None, None) => true,
            (Some(start), Some(end)) if end < start => false,
            (Some(start), Some(end)) => campaign
                .starts_on()
                .map_or(false, |date| start <= date && date <= end),
            (Some(start), None) => campaign.starts_on().map_or(false, |date| date >= start),
            (None, Some(end)) => campaign.ends_on().map_or(false, |date| date <= end),
        }
    }
}

pub fn filter_campaigns<'a>(campaigns: &'a [Campaign], filter: &CampaignFilter) -> Vec<&'a Campaign> {
    campaigns
        .iter()
        .filter(|campaign| filter.matches(campaign))
        .collect()
}

pub fn resolve_user_name(users: &[User], user_id: Option<UserId>) -> String {
    user_id
        .and_then(|user_id| users.iter().find(|user| user.id == user_id))
        .map(|user| user.name.clone())
        .unwrap_or_else(|| UNKNOWN_USER.to_string())
}

pub fn enrich_campaigns<'a, I>(campaigns: I, users: &[User], today: NaiveDate) -> Vec<CampaignWithStatus>
where
    I: IntoIterator<Item = &'a Campaign>,
{
    campaigns
        .into_iter()
        .map(|campaign| CampaignWithStatus {
            campaign: campaign.clone(),
            is_active: campaign.is_active_on(today),
            user_name: resolve_user_name(users, campaign.user_id),
        })
        .collect()
}
