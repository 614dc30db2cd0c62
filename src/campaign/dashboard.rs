use super::CampaignWithStatus;

pub const EMPTY_MESSAGE: &str = "No campaigns found matching your criteria.";
pub const USERS_LOADING_MESSAGE: &str = "Loading user data...";

/// One evaluation of the campaign table: the filtered, enriched rows plus
/// what is needed to describe them.
#[derive(Clone, Debug, PartialEq)]
pub struct Dashboard {
    pub campaigns: Vec<CampaignWithStatus>,
    pub total: usize,
    pub users_loading: bool,
    pub users_error: Option<String>,
}

impl Dashboard {
    pub fn shown(&self) -> usize {
        self.campaigns.len()
    }

    pub fn title(&self) -> String {
        if self.shown() == self.total {
            "Campaigns".to_string()
        } else {
            format!("Campaigns ({} of {})", self.shown(), self.total)
        }
    }

    pub fn subtitle(&self) -> String {
        if self.users_loading {
            return USERS_LOADING_MESSAGE.to_string();
        }

        let plural = if self.shown() == 1 { "" } else { "s" };
        format!("Showing {} campaign{}", self.shown(), plural)
    }

    pub fn empty_message(&self) -> Option<&'static str> {
        if self.campaigns.is_empty() {
            Some(EMPTY_MESSAGE)
        } else {
            None
        }
    }

    pub fn users_error_banner(&self) -> Option<String> {
        self.users_error
            .as_ref()
            .map(|error| format!("Error Loading Users: {}", error))
    }
}
