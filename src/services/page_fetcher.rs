use reqwest::{redirect::Policy, Client, StatusCode};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("Unexpected status {status} for url ({url})")]
    UnexpectedStatus { status: StatusCode, url: String },
}

pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Result<Self, FetchError> {
        let client = Client::builder()
            .redirect(Policy::none())
            .user_agent(format!(
                "{}/{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            ))
            .build()?;

        Ok(PageFetcher { client })
    }

    /// Single GET, no retries, no redirects. Anything but 2xx is an error.
    pub async fn fetch(&self, page_url: &str) -> Result<String, FetchError> {
        let response = self.client.get(page_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus {
                status,
                url: page_url.to_string(),
            });
        }

        Ok(response.text().await?)
    }
}
