use std::time::Duration;

use frontpage_core::FetchError;
use frontpage_core::traits::Fetcher;
use reqwest::Client;
use url::Url;

/// HTTP fetcher using reqwest.
///
/// Downloads one page of raw HTML per call, with a per-source User-Agent
/// and a fixed request timeout. Any transport failure, timeout, or
/// non-success status maps to a [`FetchError`] carrying the locator; there
/// is no retry here — a failed fetch fails the run.
#[derive(Clone)]
pub struct ReqwestFetcher {
    client: Client,
    timeout_secs: u64,
}

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

impl ReqwestFetcher {
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        Self::with_timeout(user_agent, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(user_agent: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            timeout_secs: timeout.as_secs(),
        })
    }
}

impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, locator: &str) -> Result<String, FetchError> {
        validate_locator(locator)?;

        let response = self.client.get(locator).send().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    locator: locator.to_string(),
                    timeout_secs: self.timeout_secs,
                }
            } else if e.is_connect() {
                FetchError::Network {
                    locator: locator.to_string(),
                    cause: format!("connection failed: {e}"),
                }
            } else {
                FetchError::Network {
                    locator: locator.to_string(),
                    cause: e.to_string(),
                }
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                locator: locator.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| FetchError::Network {
            locator: locator.to_string(),
            cause: format!("failed to read response body: {e}"),
        })
    }
}

/// Adapters only ever build http(s) locators; anything else is a bug in
/// the caller, reported rather than sent.
fn validate_locator(locator: &str) -> Result<(), FetchError> {
    let parsed = Url::parse(locator).map_err(|e| FetchError::Network {
        locator: locator.to_string(),
        cause: format!("invalid locator: {e}"),
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        scheme => Err(FetchError::Network {
            locator: locator.to_string(),
            cause: format!("scheme '{scheme}' is not allowed (only http/https)"),
        }),
    }
}
