use actix_web::web::{Data, Json, Query};
use actix_web::{get, post};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::calendar::parse_calendar_date;
use crate::error::Error;
use crate::format::{format_currency, format_display_date};
use crate::state::AppState;

use super::dashboard::Dashboard;
use super::filter::CampaignFilter;
use super::form::CreateCampaignBody;
use super::{manager, Campaign, CampaignWithStatus};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CampaignQuery {
    #[serde(default)]
    pub search: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl CampaignQuery {
    pub fn into_filter(self) -> Result<CampaignFilter, Error> {
        Ok(CampaignFilter {
            search: self.search,
            start_date: parse_bound("start_date", self.start_date)?,
            end_date: parse_bound("end_date", self.end_date)?,
        })
    }
}

fn parse_bound(field: &'static str, value: Option<String>) -> Result<Option<NaiveDate>, Error> {
    match value {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => match parse_calendar_date(&value) {
            Some(date) => Ok(Some(date)),
            None => Err(Error::InvalidFilterDate { field, value }),
        },
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignRowBody {
    pub id: Option<String>,
    pub name: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub is_active: bool,
    pub budget: String,
    pub user_name: String,
}

impl CampaignRowBody {
    pub fn render(row: CampaignWithStatus) -> CampaignRowBody {
        let status = if row.is_active { "Active" } else { "Inactive" };
        CampaignRowBody {
            start_date: format_display_date(&row.campaign.start_date),
            end_date: format_display_date(&row.campaign.end_date),
            budget: format_currency(row.campaign.budget),
            status: status.to_string(),
            is_active: row.is_active,
            user_name: row.user_name,
            id: row.campaign.id,
            name: row.campaign.name,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CampaignListBody {
    pub title: String,
    pub subtitle: String,
    pub empty_message: Option<String>,
    pub users_error: Option<String>,
    pub campaigns: Vec<CampaignRowBody>,
}

impl CampaignListBody {
    pub fn render(dashboard: Dashboard) -> CampaignListBody {
        CampaignListBody {
            title: dashboard.title(),
            subtitle: dashboard.subtitle(),
            empty_message: dashboard.empty_message().map(str::to_string),
            users_error: dashboard.users_error_banner(),
            campaigns: dashboard
                .campaigns
                .into_iter()
                .map(CampaignRowBody::render)
                .collect(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AddedCampaignsBody {
    pub added: usize,
}

#[get("/campaigns")]
#[tracing::instrument(skip(state))]
pub async fn get_campaigns(
    state: Data<AppState>,
    query: Query<CampaignQuery>,
) -> Result<Json<CampaignListBody>, Error> {
    let filter = query.into_inner().into_filter()?;
    let today = Local::now().date_naive();

    let dashboard = manager::get_dashboard(&state, &filter, today).await;

    Ok(Json(CampaignListBody::render(dashboard)))
}

#[post("/campaigns")]
#[tracing::instrument(skip(state))]
pub async fn create_campaign(
    state: Data<AppState>,
    body: Json<CreateCampaignBody>,
) -> Result<Json<Campaign>, Error> {
    let campaign = manager::create_campaign(&state, body.into_inner()).await?;

    Ok(Json(campaign))
}

/// Appends a batch of campaigns as-is, without form validation. Meant for
/// loading fixtures into a running dashboard.
#[post("/campaigns/batch")]
#[tracing::instrument(skip(state, body))]
pub async fn add_campaigns(
    state: Data<AppState>,
    body: Json<Vec<Campaign>>,
) -> Result<Json<AddedCampaignsBody>, Error> {
    let added = manager::add_campaigns(&state, body.into_inner()).await;

    Ok(Json(AddedCampaignsBody { added }))
}
