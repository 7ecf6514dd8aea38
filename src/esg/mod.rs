//! ESG scores-full retrieval.
//!
//! The scores-full view returns a wide tabular JSON shape
//! (`{headers, data, universe}`) that [`crate::table::Table`] can render.
//! The service also returns HTTP 200 with an `{error: {code, description}}`
//! payload for semantic failures such as an unresolvable identifier, so the
//! fetch hands back the parsed body as-is and leaves shape inspection to the
//! caller (typically via table conversion one layer up).

use crate::core::{RdpClient, RdpError, net};

/// A builder for fetching ESG scores for a single instrument.
#[derive(Debug)]
pub struct EsgBuilder<'a> {
    client: &'a RdpClient,
    access_token: String,
    universe: String,
}

impl<'a> EsgBuilder<'a> {
    /// Creates a new `EsgBuilder` for a given instrument identifier
    /// (e.g. a RIC such as `LSEG.L`).
    pub fn new(
        client: &'a RdpClient,
        access_token: impl Into<String>,
        universe: impl Into<String>,
    ) -> Self {
        Self {
            client,
            access_token: access_token.into(),
            universe: universe.into(),
        }
    }

    /// Executes the request and returns the parsed response body.
    ///
    /// An HTTP 200 body is returned unconditionally, including the
    /// `{error: {code, description}}` envelope the service uses for
    /// semantic failures.
    ///
    /// # Errors
    ///
    /// - [`RdpError::InvalidArgument`] when the access token or universe is
    ///   empty (no network call is made).
    /// - [`RdpError::Transport`] when no HTTP response could be obtained.
    /// - [`RdpError::Request`] for any non-200 status; 401 means the access
    ///   token expired.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(universe = %self.universe))
    )]
    pub async fn fetch(self) -> Result<serde_json::Value, RdpError> {
        if self.access_token.is_empty() {
            return Err(RdpError::InvalidArgument("access_token must not be empty"));
        }
        if self.universe.is_empty() {
            return Err(RdpError::InvalidArgument("universe must not be empty"));
        }

        let mut url = self.client.esg_url().clone();
        url.query_pairs_mut().append_pair("universe", &self.universe);

        let req = self
            .client
            .http()
            .get(url)
            .bearer_auth(&self.access_token);

        let resp = net::send(req).await?;
        if !resp.status().is_success() {
            return Err(net::request_failure(resp).await);
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
