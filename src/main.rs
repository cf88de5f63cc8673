use std::net::TcpListener;

use env_logger::Env;
use snatch::{
    configuration::get_configuration, dal::scraped_data_db, services::PageFetcher, startup::run,
};
use sqlx::sqlite::SqlitePoolOptions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let configuration = get_configuration()?;

    let connection_pool = SqlitePoolOptions::new()
        .connect_with(configuration.database.with_db())
        .await?;
    scraped_data_db::create_scraped_data_table(&connection_pool).await?;
    log::info!("Opened scrape store at {}", configuration.database.path);

    let address = format!(
        "{}:{}",
        configuration.application.host, configuration.application.port
    );
    let listener = TcpListener::bind(&address)?;
    let page_fetcher = PageFetcher::new()?;

    log::info!("Listening on {}", address);
    let served = run(listener, connection_pool.clone(), page_fetcher)?.await;

    connection_pool.close().await;
    log::info!("Closed scrape store");

    Ok(served?)
}
