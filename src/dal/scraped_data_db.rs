use chrono::Utc;
use sqlx::{SqliteConnection, SqlitePool};

use crate::domain::scraped_record::ScrapedRecord;

pub async fn create_scraped_data_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r"
        create table if not exists scraped_data (
            id integer primary key autoincrement,
            content text,
            timestamp text not null default current_timestamp
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        create index if not exists ix_scraped_data_content on scraped_data (content)
        ",
    )
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn insert_scraped_data(
    con: &mut SqliteConnection,
    content: Option<String>,
) -> Result<ScrapedRecord, sqlx::Error> {
    sqlx::query_as::<_, ScrapedRecord>(
        r"
        insert into scraped_data
            (content, timestamp)
        values
            (?1, ?2)
        returning id, content, timestamp
        ",
    )
    .bind(content)
    .bind(Utc::now())
    .fetch_one(&mut *con)
    .await
}

/// Not routed; for operators poking at the file and for tests.
pub async fn get_all_scraped_data(pool: &SqlitePool) -> Result<Vec<ScrapedRecord>, sqlx::Error> {
    sqlx::query_as::<_, ScrapedRecord>(
        r"
        select
            id,
            content,
            timestamp
        from
            scraped_data
        order by id asc
        ",
    )
    .fetch_all(pool)
    .await
}
