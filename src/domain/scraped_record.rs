use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ScrapedRecord {
    pub id: i64,
    /// `None` when the page had no matching fragment.
    pub content: Option<String>,
    pub timestamp: DateTime<Utc>,
}
