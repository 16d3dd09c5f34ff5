//! rp-client library
//!
//! HTTP client for the registration backend's admin endpoints. It is the
//! production [`rp_core::ModerationAuthority`].

pub(crate) mod client;
pub(crate) mod error;


pub use client::AdminClient;
pub use error::{ClientError, Result as ClientResult};
