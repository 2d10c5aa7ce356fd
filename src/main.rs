use alias_shortener::{config, logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    logging::init(config.env, config.log_filter.as_deref())?;
    config.print_summary();

    server::run(config).await
}
