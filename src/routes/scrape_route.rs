use actix_web::{
    error::QueryPayloadError, http::StatusCode, post, web, HttpRequest, HttpResponse,
    ResponseError,
};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::{
    dal::scraped_data_db,
    domain::{fragment::extract_fragment, scraped_record::ScrapedRecord},
    services::PageFetcher,
};

#[derive(Deserialize)]
struct ScrapeQuery {
    page_url: String,
}

#[derive(Serialize)]
struct ScrapeAck {
    status: &'static str,
    message: &'static str,
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Any failure in fetch, extract or store. Carries the cause's message only.
#[derive(Debug, thiserror::Error)]
#[error(transparent)]
pub struct ScrapeError(#[from] anyhow::Error);

impl ResponseError for ScrapeError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            detail: format!("{:#}", self.0),
        })
    }
}

#[post("/scrape")]
async fn scrape_and_save(
    query: web::Query<ScrapeQuery>,
    pool: web::Data<SqlitePool>,
    page_fetcher: web::Data<PageFetcher>,
) -> Result<HttpResponse, ScrapeError> {
    let record = scrape_page(&query.page_url, &pool, &page_fetcher)
        .await
        .inspect_err(|e| log::error!("Scrape of {} failed: {:?}", query.page_url, e))?;

    log::info!(
        "Saved scraped data id={} from {} | fragment found? {}",
        record.id,
        query.page_url,
        record.content.is_some()
    );

    Ok(HttpResponse::Ok().json(ScrapeAck {
        status: "success",
        message: "Data scraped and saved successfully.",
    }))
}

async fn scrape_page(
    page_url: &str,
    pool: &SqlitePool,
    page_fetcher: &PageFetcher,
) -> anyhow::Result<ScrapedRecord> {
    let html_content = page_fetcher
        .fetch(page_url)
        .await
        .with_context(|| format!("Failed to fetch {}", page_url))?;

    let content = extract_fragment(&html_content);

    // Released back to the pool on drop, whichever way we leave.
    let mut con = pool
        .acquire()
        .await
        .context("Failed to acquire a database connection")?;

    scraped_data_db::insert_scraped_data(&mut *con, content)
        .await
        .context("Failed to save scraped data")
}

/// Rejects requests without a usable `page_url` before anything is fetched.
pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let detail = err.to_string();
    actix_web::error::InternalError::from_response(
        err,
        HttpResponse::UnprocessableEntity().json(ErrorBody { detail }),
    )
    .into()
}
