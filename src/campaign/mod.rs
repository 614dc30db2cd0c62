use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::parse_calendar_date;
use crate::user::UserId;

pub mod dashboard;
pub mod endpoints;
pub mod filter;
pub mod form;
pub mod manager;
pub mod store;
pub use endpoints::*;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub budget: f64,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl Campaign {
    pub fn starts_on(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.start_date)
    }

    pub fn ends_on(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.end_date)
    }

    /// Whether `today` falls within the campaign's dates, inclusive. Campaigns
    /// with an unreadable date are never active.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        match (self.starts_on(), self.ends_on()) {
            (Some(start), Some(end)) => start <= today && today <= end,
            _ => false,
        }
    }
}

/// A campaign joined with its owner's name and its activity on a given day.
/// Always computed on demand from the stores, never stored itself.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignWithStatus {
    #[serde(flatten)]
    pub campaign: Campaign,
    pub is_active: bool,
    pub user_name: String,
}
