use actix_web::web::{Data, Json};
use actix_web::{get, post};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::state::AppState;
use crate::user::store::UserStore;

use super::{manager, User};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserListBody {
    pub users: Vec<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl UserListBody {
    pub fn render(store: &UserStore) -> UserListBody {
        UserListBody {
            users: store.users().to_vec(),
            loading: store.loading(),
            error: store.error().map(str::to_string),
        }
    }
}

#[get("/users")]
#[tracing::instrument(skip(state))]
pub async fn get_users(state: Data<AppState>) -> Result<Json<UserListBody>, Error> {
    let store = state.users.read().await;

    Ok(Json(UserListBody::render(&store)))
}

#[post("/users/refresh")]
#[tracing::instrument(skip(state))]
pub async fn refresh_users(state: Data<AppState>) -> Result<Json<UserListBody>, Error> {
    manager::fetch_users(&state).await?;

    let store = state.users.read().await;

    Ok(Json(UserListBody::render(&store)))
}
