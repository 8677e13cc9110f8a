use crate::config::PageConfig;
use crate::core::{LikeClient, MessageId};
use crate::utils::error::{Result, UiError};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// Sends like registrations as bodiless `POST {like_path}/{message_id}` requests.
#[derive(Debug, Clone)]
pub struct ReqwestLikeClient {
    client: Client,
    endpoint: Url,
}

impl ReqwestLikeClient {
    pub fn new(base_url: &str, like_path: &str) -> Result<Self> {
        let base = Url::parse(base_url).map_err(|e| UiError::InvalidConfigValueError {
            field: "base_url".to_string(),
            value: base_url.to_string(),
            reason: format!("Invalid URL format: {}", e),
        })?;
        let endpoint = base
            .join(like_path)
            .map_err(|e| UiError::InvalidConfigValueError {
                field: "like_path".to_string(),
                value: like_path.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client: Client::new(),
            endpoint,
        })
    }

    pub fn from_config(config: &PageConfig) -> Result<Self> {
        Self::new(&config.base_url, &config.like_path)
    }

    pub fn like_url(&self, message_id: &MessageId) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.path_segments_mut()
            .map_err(|_| UiError::ConfigError {
                message: format!("{} cannot carry a path", self.endpoint),
            })?
            .pop_if_empty()
            .push(message_id.as_str());
        Ok(url)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl LikeClient for ReqwestLikeClient {
    async fn add_like(&self, message_id: &MessageId) -> Result<()> {
        let url = self.like_url(message_id)?;
        tracing::debug!("POST {}", url);

        let response = self.client.post(url.clone()).send().await?;
        let status = response.status();
        tracing::debug!("Like response status: {}", status);

        if !status.is_success() {
            return Err(UiError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        Ok(())
    }
}
