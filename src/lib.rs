//! rdplatform-rs: ergonomic client for the Refinitiv Data Platform (RDP).
//!
//! Covers the three RDP operations this crate cares about:
//! - OAuth2 login (password grant) and renewal (refresh grant) via [`AuthBuilder`],
//! - ESG scores-full retrieval via [`EsgBuilder`],
//! - entity metadata lookup via the search/explore service with [`SearchBuilder`].
//!
//! Token state is a plain [`Token`] value owned by the caller and threaded into
//! each request; nothing is cached or persisted inside the client. Expiry shows
//! up as an HTTP 401 ([`RdpError::Request`] / [`RdpError::Authentication`]) and
//! the caller decides whether to refresh or re-login.

pub mod auth;
pub mod core;
pub mod esg;
pub mod search;
pub mod table;

pub use auth::{AuthBuilder, Credentials, Token, login, refresh};
pub use core::{RdpClient, RdpClientBuilder, RdpError};
pub use esg::EsgBuilder;
pub use search::{SearchBuilder, SearchResponse};
pub use table::Table;
