use std::future::Future;

use reqwest::Client;

use crate::config::Config;
use crate::error::{DocsError, Result};

/// Retrieves the raw HTML behind a URL.
pub trait PageFetcher: Send + Sync {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String>> + Send;
}

/// Plain GET over a shared reqwest client. No retries and no timeout beyond
/// reqwest's defaults.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(DocsError::Client)?;
        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let transport = |source| DocsError::Transport {
            url: url.to_string(),
            source,
        };

        let res = self.client.get(url).send().await.map_err(transport)?;
        let status = res.status();
        if !status.is_success() {
            log::warn!("fetching {url} returned {status}");
            return Err(DocsError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        let body = res.text().await.map_err(transport)?;
        log::debug!("fetched {url}, length: {}", body.len());
        Ok(body)
    }
}
