//! Transport primitives for UAA calls.
//!
//! [`ReqwestHttpClient`] owns two reqwest clients that share the same settings but differ in
//! certificate handling: one validates the server's TLS chain, the other accepts any
//! certificate. Calls pick one of them per request, so toggling verification never rebuilds
//! a connection pool.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::{
	Response,
	header::{HeaderMap, HeaderValue, RETRY_AFTER},
	redirect::Policy,
};
use time::format_description::well_known::Rfc2822;
// self
use crate::{_prelude::*, error::ConfigError};

/// Reqwest transport pair used by [`Client`](crate::Client).
///
/// Token requests should not follow redirects, matching OAuth 2.0 guidance that token
/// endpoints return results directly instead of delegating to another URI. Configure any
/// custom [`ReqwestClient`] passed to [`ReqwestHttpClient::with_clients`] the same way.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient {
	verified: ReqwestClient,
	unverified: ReqwestClient,
}
impl ReqwestHttpClient {
	/// Builds both transports with redirects disabled and an optional request timeout.
	pub fn new(timeout: Option<StdDuration>) -> Result<Self, ConfigError> {
		let verified = base_builder(timeout).build()?;
		let unverified = base_builder(timeout)
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()?;

		Ok(Self { verified, unverified })
	}

	/// Wraps existing reqwest clients; `unverified` is used whenever TLS verification is skipped.
	pub fn with_clients(verified: ReqwestClient, unverified: ReqwestClient) -> Self {
		Self { verified, unverified }
	}

	/// Returns the transport matching the requested certificate policy.
	pub fn select(&self, skip_verify_ssl: bool) -> &ReqwestClient {
		if skip_verify_ssl { &self.unverified } else { &self.verified }
	}
}

/// Metadata captured from a UAA response before its body is consumed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// HTTP status code returned by UAA.
	pub status: u16,
	/// Retry-After hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}
impl ResponseMetadata {
	pub(crate) fn from_response(response: &Response) -> Self {
		Self {
			status: response.status().as_u16(),
			retry_after: parse_retry_after(response.headers()),
		}
	}
}

/// Encodes `username:password` as an HTTP Basic `Authorization` header value.
///
/// The value is flagged as sensitive so reqwest and hyper keep it out of debug output.
pub fn basic_authorization(username: &str, password: &str) -> HeaderValue {
	let encoded = STANDARD.encode(format!("{username}:{password}"));
	// Base64 output is visible ASCII, so the header value is always valid.
	let mut value = HeaderValue::try_from(format!("Basic {encoded}"))
		.expect("Base64 credentials should form a valid header value.");

	value.set_sensitive(true);

	value
}

fn base_builder(timeout: Option<StdDuration>) -> reqwest::ClientBuilder {
	let builder = ReqwestClient::builder().redirect(Policy::none());

	match timeout {
		Some(timeout) => builder.timeout(timeout),
		None => builder,
	}
}

fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u32>() {
		return Some(Duration::seconds(i64::from(secs)));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
