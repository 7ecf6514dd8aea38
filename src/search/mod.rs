//! Entity metadata lookup via the search/explore service.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::core::{RdpClient, RdpError, net};

/// Parsed body of a successful search/explore call.
///
/// `{Total: 0, Hits: []}` is a valid zero-hit success, not an error. Hit
/// entries are kept as raw JSON mappings because the fields returned depend
/// entirely on the request's `Select` clause.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchResponse {
    /// Number of entities matched by the filter.
    #[serde(rename = "Total", default)]
    pub total: i64,
    /// One metadata mapping per matched entity, keyed by the selected fields.
    #[serde(rename = "Hits", default)]
    pub hits: Vec<Map<String, Value>>,
}

/// A builder for a search/explore request.
///
/// The service expects a JSON body with `View`, `Filter`, and `Select`
/// members; the setters below cover that shape, and [`payload`](Self::payload)
/// replaces the body wholesale for anything more exotic.
#[derive(Debug)]
pub struct SearchBuilder<'a> {
    client: &'a RdpClient,
    access_token: String,
    view: String,
    filter: Option<String>,
    select: Option<String>,
    payload: Option<Value>,
}

impl<'a> SearchBuilder<'a> {
    /// Creates a new `SearchBuilder`. The view defaults to `"Entities"`.
    pub fn new(client: &'a RdpClient, access_token: impl Into<String>) -> Self {
        Self {
            client,
            access_token: access_token.into(),
            view: "Entities".to_string(),
            filter: None,
            select: None,
            payload: None,
        }
    }

    /// Sets the search view (e.g. `Entities`, `Quotes`).
    #[must_use]
    pub fn view(mut self, view: impl Into<String>) -> Self {
        self.view = view.into();
        self
    }

    /// Sets the filter expression (e.g. `RIC eq 'LSEG.L'`).
    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Sets the comma-separated list of fields to return per hit.
    #[must_use]
    pub fn select(mut self, select: impl Into<String>) -> Self {
        self.select = Some(select.into());
        self
    }

    /// Replaces the request body wholesale. Setter-built `View`/`Filter`/
    /// `Select` members are ignored when a payload is supplied.
    #[must_use]
    pub fn payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    fn build_payload(&self) -> Value {
        match &self.payload {
            Some(p) => p.clone(),
            None => json!({
                "View": self.view,
                "Filter": self.filter.as_deref().unwrap_or_default(),
                "Select": self.select.as_deref().unwrap_or_default(),
            }),
        }
    }

    /// Executes the search request.
    ///
    /// # Errors
    ///
    /// - [`RdpError::InvalidArgument`] when the access token is empty or a
    ///   supplied payload is not a non-empty JSON object (no network call is
    ///   made).
    /// - [`RdpError::Transport`] when no HTTP response could be obtained.
    /// - [`RdpError::Request`] for any non-200 status; 400 carries the
    ///   service's validation envelope in the body, 401 means the access
    ///   token expired.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn fetch(self) -> Result<SearchResponse, RdpError> {
        if self.access_token.is_empty() {
            return Err(RdpError::InvalidArgument("access_token must not be empty"));
        }
        let payload = self.build_payload();
        let non_empty_object = payload.as_object().is_some_and(|m| !m.is_empty());
        if !non_empty_object {
            return Err(RdpError::InvalidArgument(
                "payload must be a non-empty JSON object",
            ));
        }

        let req = self
            .client
            .http()
            .post(self.client.search_url().clone())
            .bearer_auth(&self.access_token)
            .header("accept", "application/json")
            .json(&payload);

        let resp = net::send(req).await?;
        if !resp.status().is_success() {
            return Err(net::request_failure(resp).await);
        }

        let body = resp.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
