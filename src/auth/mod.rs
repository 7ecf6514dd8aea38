//! OAuth2 login against the RDP token service.
//!
//! Two grant flows share one request shape: the password grant for the
//! initial login and the refresh grant for renewal. Both POST a form-encoded
//! body with HTTP basic auth `(client_id, client_secret)` and return a fresh
//! [`Token`] triple. The client never stores the triple; the caller owns it
//! and passes the access token into each data request.

mod wire;

use serde_json::from_str;

use crate::core::{RdpClient, RdpError, net};
use wire::TokenWire;

/// The OAuth2 scope requested on every password-grant login.
const SCOPE: &str = "trapi";

/// Machine-account credentials, fixed for the process lifetime.
#[derive(Debug, Clone)]
pub struct Credentials {
    username: String,
    password: String,
    client_id: String,
    client_secret: String,
}

impl Credentials {
    /// Credentials with an empty client secret (the common RDP setup).
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        client_id: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            client_id: client_id.into(),
            client_secret: String::new(),
        }
    }

    /// Set a non-empty client secret.
    #[must_use]
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.client_secret = secret.into();
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }
    pub fn client_id(&self) -> &str {
        &self.client_id
    }
}

/// A token triple issued by the auth service.
///
/// Replaced wholesale by every successful login or refresh; never partially
/// mutated. `expires_in` counts down from the moment of issuance, but this
/// crate does no clock tracking: expiry surfaces as an HTTP 401 on the next
/// data request and the caller refreshes then.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Short-lived bearer credential for data requests.
    pub access_token: String,
    /// Longer-lived credential accepted by the refresh grant.
    pub refresh_token: String,
    /// Access-token lifetime in seconds, as reported by the server.
    pub expires_in: u64,
}

/// Log in with the password grant.
///
/// # Errors
///
/// Returns `RdpError` on missing credentials, transport failure, or a
/// non-success HTTP status from the token endpoint.
pub async fn login(client: &RdpClient, credentials: &Credentials) -> Result<Token, RdpError> {
    AuthBuilder::new(client, credentials).fetch().await
}

/// Renew a token pair with the refresh grant.
///
/// # Errors
///
/// Returns `RdpError` on missing credentials, transport failure, or a
/// non-success HTTP status from the token endpoint.
pub async fn refresh(
    client: &RdpClient,
    credentials: &Credentials,
    refresh_token: &str,
) -> Result<Token, RdpError> {
    AuthBuilder::new(client, credentials)
        .refresh_token(refresh_token)
        .fetch()
        .await
}

/// A builder for a single token request against the RDP auth service.
#[derive(Debug)]
pub struct AuthBuilder<'a> {
    client: &'a RdpClient,
    credentials: &'a Credentials,
    refresh_token: Option<String>,
}

impl<'a> AuthBuilder<'a> {
    /// Creates a builder for a password-grant login.
    pub fn new(client: &'a RdpClient, credentials: &'a Credentials) -> Self {
        Self {
            client,
            credentials,
            refresh_token: None,
        }
    }

    /// Switch to the refresh grant, renewing via a previously issued
    /// refresh token. The password is not transmitted in this flow.
    #[must_use]
    pub fn refresh_token(mut self, token: impl Into<String>) -> Self {
        self.refresh_token = Some(token.into());
        self
    }

    /// Executes the token request and returns a fresh [`Token`].
    ///
    /// # Errors
    ///
    /// - [`RdpError::InvalidArgument`] when username, password, or client id
    ///   is empty (checked before any network call, for both grants).
    /// - [`RdpError::Transport`] when no HTTP response could be obtained.
    /// - [`RdpError::Authentication`] for any non-200 status, carrying the
    ///   status code, reason phrase, and raw body.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(username = %self.credentials.username))
    )]
    pub async fn fetch(self) -> Result<Token, RdpError> {
        let creds = self.credentials;
        if creds.username.is_empty() {
            return Err(RdpError::InvalidArgument("username must not be empty"));
        }
        if creds.password.is_empty() {
            return Err(RdpError::InvalidArgument("password must not be empty"));
        }
        if creds.client_id.is_empty() {
            return Err(RdpError::InvalidArgument("client_id must not be empty"));
        }

        // Field order mirrors the service examples; the server does not care,
        // but recorded traffic is easier to diff this way.
        let form: Vec<(&str, &str)> = match &self.refresh_token {
            None => vec![
                ("username", creds.username.as_str()),
                ("password", creds.password.as_str()),
                ("grant_type", "password"),
                ("scope", SCOPE),
                ("takeExclusiveSignOnControl", "true"),
                ("client_id", creds.client_id.as_str()),
            ],
            Some(rt) => vec![
                ("username", creds.username.as_str()),
                ("refresh_token", rt.as_str()),
                ("grant_type", "refresh_token"),
                ("client_id", creds.client_id.as_str()),
            ],
        };

        let req = self
            .client
            .http()
            .post(self.client.auth_url().clone())
            .basic_auth(&creds.client_id, Some(&creds.client_secret))
            .form(&form);

        let resp = net::send(req).await?;
        if !resp.status().is_success() {
            return Err(net::auth_failure(resp).await);
        }

        let body = resp.text().await?;
        let wire: TokenWire = from_str(&body)?;
        Ok(Token {
            access_token: wire.access_token,
            refresh_token: wire.refresh_token,
            expires_in: wire.expires_in,
        })
    }
}
