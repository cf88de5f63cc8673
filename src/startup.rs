use std::net::TcpListener;

use actix_web::{dev::Server, middleware::Logger, web, App, HttpServer};
use sqlx::SqlitePool;

use crate::{
    routes::{default_route, scrape_route},
    services::PageFetcher,
};

pub fn run(
    listener: TcpListener,
    db_pool: SqlitePool,
    page_fetcher: PageFetcher,
) -> Result<Server, std::io::Error> {
    let db_pool = web::Data::new(db_pool);
    let page_fetcher = web::Data::new(page_fetcher);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .service(default_route::default)
            .service(scrape_route::scrape_and_save)
            .app_data(web::QueryConfig::default().error_handler(scrape_route::query_error_handler))
            .app_data(db_pool.clone())
            .app_data(page_fetcher.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
