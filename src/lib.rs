use actix_web::web::{self, Data, JsonConfig, PathConfig, QueryConfig};
use actix_web::{App, HttpServer};
use tracing::{info, warn, Level};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::fmt::format::FmtSpan;

pub mod calendar;
pub mod campaign;
pub mod config;
pub mod error;
pub mod format;
pub mod handlers;
pub mod seed;
pub mod state;
pub mod user;

pub use campaign::{
    AddedCampaignsBody, Campaign, CampaignListBody, CampaignRowBody, CampaignWithStatus,
};
pub use config::Config;
pub use error::Error;
pub use handlers::AboutBody;
pub use state::AppState;
pub use user::{User, UserListBody};

use crate::user::source::HttpUserSource;

pub fn init_tracing(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::INFO };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::NEW)
        .compact()
        .init();
}

/// Registers every endpoint along with the json error formatting.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(JsonConfig::default().error_handler(|err, _req| {
        // format json errors with custom format
        Error::InvalidJson(err).into()
    }))
    .app_data(PathConfig::default().error_handler(|err, _req| {
        // format path errors with custom format
        Error::InvalidPath(err).into()
    }))
    .app_data(QueryConfig::default().error_handler(|err, _req| {
        // format query errors with custom format
        Error::InvalidQuery(err).into()
    }))
    .service(campaign::endpoints::get_campaigns)
    .service(campaign::endpoints::create_campaign)
    .service(campaign::endpoints::add_campaigns)
    .service(user::endpoints::get_users)
    .service(user::endpoints::refresh_users)
    .service(handlers::get_about)
    .default_service(web::to(handlers::path_not_found));
}

pub async fn run(config: Config) -> Result<(), Error> {
    let bind_address = config.bind_address.clone();
    let user_source = HttpUserSource::new(&config.api_base_url);
    let state = Data::new(AppState::new(config, Box::new(user_source)));

    info!("fetching users from {}", state.config.api_base_url);
    if let Err(err) = user::manager::fetch_users(&state).await {
        warn!("starting without users: {}", err);
    }

    info!("listening on {}", bind_address);
    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .configure(configure)
    })
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
