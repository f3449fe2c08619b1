//! HTTP transport configuration for the ConnectBox client

use std::time::Duration;

use tracing::warn;

use crate::error::{ClientError, Result};

/// Environment variable overriding [`ClientConfig::timeout`], in seconds.
pub const TIMEOUT_ENV: &str = "CONNECTBOX_TIMEOUT_SECS";
/// Environment variable overriding [`ClientConfig::connect_timeout`], in seconds.
pub const CONNECT_TIMEOUT_ENV: &str = "CONNECTBOX_CONNECT_TIMEOUT_SECS";

/// Configuration for the HTTP transport under a [`Client`](crate::Client)
///
/// The client never retries and owns no timers besides these transport
/// timeouts; a request that exceeds them fails with a transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Total time allowed for one request, from connect to end of body
    /// Default: 30 seconds
    pub timeout: Duration,

    /// Time allowed to establish the TCP connection
    /// Default: 10 seconds
    pub connect_timeout: Duration,

    /// Value of the `User-Agent` header
    /// Default: `connectbox/<crate version>`
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("connectbox/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overridden by `CONNECTBOX_TIMEOUT_SECS` and
    /// `CONNECTBOX_CONNECT_TIMEOUT_SECS` when set.
    ///
    /// Values that are not a positive integer are ignored with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            timeout: secs_override(&lookup, TIMEOUT_ENV).unwrap_or(defaults.timeout),
            connect_timeout: secs_override(&lookup, CONNECT_TIMEOUT_ENV)
                .unwrap_or(defaults.connect_timeout),
            ..defaults
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Build the transport. Redirects are never followed: the device answers
    /// an expired session with a redirect to the login page, which must
    /// surface as a status error.
    pub(crate) fn build_http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent.as_str())
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|e| ClientError::transport("init http client", e))
    }
}

fn secs_override(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<Duration> {
    let raw = lookup(name)?;
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            warn!(variable = name, value = %raw, "ignoring invalid timeout override");
            None
        }
    }
}
