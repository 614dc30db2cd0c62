use tracing::{info, warn};

use crate::error::Error;
use crate::state::AppState;

use super::User;

/// Fetches the user list into the user store. Whatever the outcome, the store
/// ends up not loading; on failure it carries the message to show.
#[tracing::instrument(skip(state))]
pub async fn fetch_users(state: &AppState) -> Result<Vec<User>, Error> {
    state.users.write().await.begin_fetch();

    match state.user_source().fetch_users().await {
        Ok(users) => {
            info!("fetched {} users", users.len());
            state.users.write().await.complete_fetch(users.clone());
            Ok(users)
        }
        Err(err) => {
            let message = failure_message(&err);
            warn!("failed to fetch users: {}", message);
            state.users.write().await.fail_fetch(message);
            Err(err)
        }
    }
}

pub fn failure_message(error: &Error) -> String {
    match error {
        Error::UserFetchFailed { .. } => error.error_message().to_string(),
        Error::UserRequestFailed(err) => err.to_string(),
        Error::UserPayloadInvalid(err) => err.to_string(),
        Error::IoError(err) => err.to_string(),
        _ => "Unknown error".to_string(),
    }
}
