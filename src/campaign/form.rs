use serde::{Deserialize, Serialize, Serializer};

use crate::calendar::{format_form_date, parse_calendar_date};
use crate::user::UserId;

use super::Campaign;

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FormViolation {
    NameRequired,
    StartDateRequired,
    StartDateInvalid,
    EndDateRequired,
    EndDateInvalid,
    BudgetNotPositive,
    EndDateBeforeStartDate,
}

impl FormViolation {
    pub fn field(&self) -> &'static str {
        match self {
            FormViolation::NameRequired => "name",
            FormViolation::StartDateRequired => "startDate",
            FormViolation::StartDateInvalid => "startDate",
            FormViolation::EndDateRequired => "endDate",
            FormViolation::EndDateInvalid => "endDate",
            FormViolation::BudgetNotPositive => "budget",
            FormViolation::EndDateBeforeStartDate => "endDate",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            FormViolation::NameRequired => "Campaign name is required",
            FormViolation::StartDateRequired => "Start date is required",
            FormViolation::StartDateInvalid => "Start date is invalid",
            FormViolation::EndDateRequired => "End date is required",
            FormViolation::EndDateInvalid => "End date is invalid",
            FormViolation::BudgetNotPositive => "Budget must be greater than 0",
            FormViolation::EndDateBeforeStartDate => "End date must be after start date",
        }
    }
}

impl Serialize for FormViolation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Dummy {
            field: &'static str,
            message: &'static str,
        }

        Dummy {
            field: self.field(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}

/// Checks a submitted form and turns it into a campaign ready for the store.
/// Every violation is reported, not just the first.
pub fn validate(body: CreateCampaignBody) -> Result<Campaign, Vec<FormViolation>> {
    let mut violations = vec![];

    if body.name.trim().is_empty() {
        violations.push(FormViolation::NameRequired);
    }

    let start_date = match body.start_date.as_deref().map(str::trim) {
        None | Some("") => {
            violations.push(FormViolation::StartDateRequired);
            None
        }
        Some(text) => {
            let date = parse_calendar_date(text);
            if date.is_none() {
                violations.push(FormViolation::StartDateInvalid);
            }
            date
        }
    };

    let end_date = match body.end_date.as_deref().map(str::trim) {
        None | Some("") => {
            violations.push(FormViolation::EndDateRequired);
            None
        }
        Some(text) => {
            let date = parse_calendar_date(text);
            if date.is_none() {
                violations.push(FormViolation::EndDateInvalid);
            }
            date
        }
    };

    // written so that NaN fails as well
    if !(body.budget >= 1.0) {
        violations.push(FormViolation::BudgetNotPositive);
    }

    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            violations.push(FormViolation::EndDateBeforeStartDate);
        }
    }

    match (start_date, end_date) {
        (Some(start), Some(end)) if violations.is_empty() => Ok(Campaign {
            id: None,
            name: body.name,
            start_date: format_form_date(start),
            end_date: format_form_date(end),
            budget: body.budget,
            user_id: body.user_id,
        }),
        _ => Err(violations),
    }
}
