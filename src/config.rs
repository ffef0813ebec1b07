use std::env;
use std::time::Duration;

use clashtrack_coc_api::ClientOptions;

use crate::error::AppError;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_token: String,
    pub base_url: Option<String>,
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_token = env::var("COC_API_TOKEN")
            .map_err(|_| AppError::Config("COC_API_TOKEN must be set".into()))?;

        let base_url = env::var("COC_BASE_URL").ok().filter(|v| !v.is_empty());

        let timeout = env::var("COC_TIMEOUT_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Ok(Self {
            api_token,
            base_url,
            timeout,
        })
    }

    pub fn client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::new(self.api_token.clone());
        if let Some(base_url) = &self.base_url {
            options = options.with_base_url(base_url.clone());
        }
        if let Some(timeout) = self.timeout {
            options = options.with_timeout(timeout);
        }
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_options_keep_defaults_when_unset() {
        let config = Config {
            api_token: "token".to_string(),
            base_url: None,
            timeout: None,
        };

        let options = config.client_options();

        assert_eq!(options.token, "token");
        assert_eq!(options.base_url, clashtrack_coc_api::api::client::DEFAULT_BASE_URL);
        assert_eq!(options.timeout, None);
    }

    #[test]
    fn client_options_apply_overrides() {
        let config = Config {
            api_token: "token".to_string(),
            base_url: Some("http://localhost:8080/v1".to_string()),
            timeout: Some(Duration::from_millis(1500)),
        };

        let options = config.client_options();

        assert_eq!(options.base_url, "http://localhost:8080/v1");
        assert_eq!(options.timeout, Some(Duration::from_millis(1500)));
    }
}
