//! Connection configuration for a Jenkins server.

/// Basic-auth credentials for a Jenkins account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Account name the requests authenticate as.
    pub username: String,
    /// API token (or password) paired with the username.
    pub api_token: String,
}

/// Connection configuration for a single Jenkins server.
///
/// Every setting is an explicit field; nothing is resolved from
/// ambient state at call time. Use [`JenkinsConfig::from_env`] to load
/// from the environment instead.
#[derive(Debug, Clone)]
pub struct JenkinsConfig {
    /// Base HTTP URL, e.g. `http://host:8080`.
    pub base_url: String,
    /// Credentials for basic auth; `None` for anonymous access.
    pub credentials: Option<Credentials>,
}

/// Errors raised while loading configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `JENKINS_URL` is missing or empty.
    #[error("JENKINS_URL is not set")]
    MissingUrl,

    /// Only one of `JENKINS_USER` / `JENKINS_API_TOKEN` is set.
    #[error("JENKINS_USER and JENKINS_API_TOKEN must be set together")]
    PartialCredentials,
}

impl JenkinsConfig {
    /// Configuration for anonymous access to `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: None,
        }
    }

    /// Configuration for authenticated access to `base_url`.
    pub fn with_credentials(
        base_url: impl Into<String>,
        username: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            credentials: Some(Credentials {
                username: username.into(),
                api_token: api_token.into(),
            }),
        }
    }

    /// Load configuration from environment variables (a `.env` file is
    /// honored when present).
    ///
    /// | Env Var             | Meaning                              |
    /// |---------------------|--------------------------------------|
    /// | `JENKINS_URL`       | Base HTTP URL (required)             |
    /// | `JENKINS_USER`      | Basic-auth username (optional)       |
    /// | `JENKINS_API_TOKEN` | API token, paired with `JENKINS_USER`|
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let base_url = std::env::var("JENKINS_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .ok_or(ConfigError::MissingUrl)?;

        let username = std::env::var("JENKINS_USER").ok();
        let api_token = std::env::var("JENKINS_API_TOKEN").ok();

        let credentials = match (username, api_token) {
            (Some(username), Some(api_token)) => Some(Credentials {
                username,
                api_token,
            }),
            (None, None) => None,
            _ => return Err(ConfigError::PartialCredentials),
        };

        Ok(Self {
            base_url,
            credentials,
        })
    }
}
