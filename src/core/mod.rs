//! Core components of the `rdplatform-rs` client.
//!
//! This module contains the foundational building blocks of the library:
//! - The main [`RdpClient`] and its builder.
//! - The primary [`RdpError`] type.
//! - Internal transport glue shared by the auth and data modules.

/// The main client (`RdpClient`), builder, and endpoint configuration.
pub mod client;
/// The primary error type (`RdpError`) for the crate.
pub mod error;
pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::RdpClient`
pub use client::{RdpClient, RdpClientBuilder};
pub use error::RdpError;
