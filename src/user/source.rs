use async_trait::async_trait;
use awc::Client;

use crate::error::Error;

use super::User;

/// Where users come from. The service talks to the user api over http; tests
/// swap in their own source.
#[async_trait(?Send)]
pub trait UserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, Error>;
}

#[derive(Clone, Debug)]
pub struct HttpUserSource {
    base_url: String,
}

impl HttpUserSource {
    pub fn new(base_url: &str) -> HttpUserSource {
        HttpUserSource {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

#[async_trait(?Send)]
impl UserSource for HttpUserSource {
    #[tracing::instrument(skip(self))]
    async fn fetch_users(&self) -> Result<Vec<User>, Error> {
        // awc clients are tied to the current thread, so one is made per call
        let client = Client::default();
        let mut response = client.get(self.users_url()).send().await?;

        if !response.status().is_success() {
            return Err(Error::UserFetchFailed {
                status: response.status().as_u16(),
            });
        }

        let users: Vec<User> = response.json().await?;

        Ok(users)
    }
}
