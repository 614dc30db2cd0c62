use std::collections::VecDeque;
use std::sync::Mutex;

use actix_web::web::Data;
use async_trait::async_trait;
use campaign_dashboard::user::source::UserSource;
use campaign_dashboard::{AppState, Config, Error, User};

/// Replays scripted responses in order, repeating the last one.
pub struct ScriptedUserSource {
    responses: Mutex<VecDeque<Option<Vec<User>>>>,
}

impl ScriptedUserSource {
    pub fn new(responses: Vec<Option<Vec<User>>>) -> ScriptedUserSource {
        ScriptedUserSource {
            responses: Mutex::new(responses.into()),
        }
    }
}

#[async_trait(?Send)]
impl UserSource for ScriptedUserSource {
    async fn fetch_users(&self) -> Result<Vec<User>, Error> {
        let mut responses = self.responses.lock().unwrap();
        let response = if responses.len() > 1 {
            responses.pop_front().unwrap()
        } else {
            responses.front().cloned().unwrap()
        };

        response.ok_or(Error::UserFetchFailed { status: 500 })
    }
}

pub fn test_users() -> Vec<User> {
    vec![
        User::new(1, "Leanne Graham"),
        User::new(2, "Ervin Howell"),
        User::new(3, "Clementine Bauch"),
    ]
}

pub fn test_state(responses: Vec<Option<Vec<User>>>) -> Data<AppState> {
    Data::new(AppState::new(
        Config::default(),
        Box::new(ScriptedUserSource::new(responses)),
    ))
}
