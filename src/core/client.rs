//! Public client surface + builder.
//!
//! `RdpClient` owns the `reqwest::Client` and the three RDP endpoint URLs.
//! It holds no token state: tokens are caller-owned values threaded into
//! each request builder.

use std::time::Duration;

use url::Url;

use crate::core::RdpError;

const USER_AGENT: &str = concat!("rdplatform-rs/", env!("CARGO_PKG_VERSION"));

const DEFAULT_AUTH_URL: &str = "https://api.refinitiv.com/auth/oauth2/v1/token";
const DEFAULT_ESG_URL: &str =
    "https://api.refinitiv.com/data/environmental-social-governance/v2/views/scores-full";
const DEFAULT_SEARCH_URL: &str = "https://api.refinitiv.com/discovery/search/v1/explore";

#[derive(Debug, Clone)]
pub struct RdpClient {
    http: reqwest::Client,
    auth_url: Url,
    esg_url: Url,
    search_url: Url,
}

impl RdpClient {
    /// Create a new builder.
    pub fn builder() -> RdpClientBuilder {
        RdpClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }
    pub(crate) fn auth_url(&self) -> &Url {
        &self.auth_url
    }
    pub(crate) fn esg_url(&self) -> &Url {
        &self.esg_url
    }
    pub(crate) fn search_url(&self) -> &Url {
        &self.search_url
    }
}

impl Default for RdpClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct RdpClientBuilder {
    user_agent: Option<String>,
    auth_url: Option<Url>,
    esg_url: Option<Url>,
    search_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl RdpClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the OAuth2 token endpoint
    /// (e.g., `https://api.refinitiv.com/auth/oauth2/v1/token`).
    #[must_use]
    pub fn auth_url(mut self, url: Url) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Override the ESG scores-full endpoint.
    #[must_use]
    pub fn esg_url(mut self, url: Url) -> Self {
        self.esg_url = Some(url);
        self
    }

    /// Override the search/explore endpoint.
    #[must_use]
    pub fn search_url(mut self, url: Url) -> Self {
        self.search_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 30 seconds.
    ///
    /// A timed-out request surfaces as [`RdpError::Transport`], never as an
    /// indefinite block.
    #[must_use]
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `RdpError` if a default endpoint constant fails to parse or
    /// the underlying HTTP client cannot be constructed.
    pub fn build(self) -> Result<RdpClient, RdpError> {
        let auth_url = match self.auth_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_AUTH_URL)?,
        };
        let esg_url = match self.esg_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_ESG_URL)?,
        };
        let search_url = match self.search_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_SEARCH_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(Duration::from_secs(30)));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(RdpClient {
            http,
            auth_url,
            esg_url,
            search_url,
        })
    }
}
