use campaign_dashboard::{Config, Error};

#[actix_web::main]
async fn main() -> Result<(), Error> {
    let config = Config::from_env()?;
    campaign_dashboard::init_tracing(config.is_debug);

    campaign_dashboard::run(config).await
}
