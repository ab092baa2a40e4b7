//! Thin async client for Cloud Foundry UAA: fetch bearer tokens from `/oauth/token` and verify
//! them against `/check_token`.
//!
//! ```no_run
//! # async fn demo() -> uaa_client::error::Result<()> {
//! let client = uaa_client::Client::new("https://uaa.example.com")?;
//! let token = client.get_auth_token("doppler", "secret", false).await?;
//!
//! assert!(token.starts_with("bearer "));
//! assert!(client.token_is_authorized(&token, "doppler").await);
//! # Ok(())
//! # }
//! ```

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod client;
pub mod error;
pub mod http;
pub mod obs;
pub mod token;

pub use client::{Client, ClientBuilder};

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		sync::Arc,
		time::Duration as StdDuration,
	};

	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::Deserialize;
	pub use thiserror::Error as ThisError;
	pub use time::{Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
