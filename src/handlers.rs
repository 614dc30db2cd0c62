use actix_web::web::{Data, Json};
use actix_web::{get, HttpResponse, ResponseError};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::state::AppState;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AboutBody {
    pub app_name: String,
    pub app_version: String,
    pub environment: String,
}

#[get("/about")]
#[tracing::instrument(skip(state))]
pub async fn get_about(state: Data<AppState>) -> Result<Json<AboutBody>, Error> {
    let config = &state.config;

    Ok(Json(AboutBody {
        app_name: config.app_name.clone(),
        app_version: config.app_version.clone(),
        environment: config.environment.clone(),
    }))
}

pub async fn path_not_found() -> HttpResponse {
    Error::PathNotFound.error_response()
}
