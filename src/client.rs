//! UAA client handle plus the response classification shared by its calls.
//!
//! A [`Client`] is an immutable value: the base URL, the derived endpoints, the grant type,
//! and the transport pair are fixed at construction. Clones share the same transports, so a
//! single client can serve concurrent callers without locking.

pub mod builder;

mod check_token;
mod token;

pub use builder::*;

// crates.io
use reqwest::StatusCode;
// self
use crate::{_prelude::*, http::ReqwestHttpClient};

/// `grant_type` sent to the token endpoint unless the builder overrides it.
pub const DEFAULT_GRANT_TYPE: &str = "client_credentials";

const BODY_PREVIEW_LIMIT: usize = 256;

/// Client for a single UAA deployment.
#[derive(Clone)]
pub struct Client {
	base_url: Url,
	token_endpoint: Url,
	check_token_endpoint: Url,
	grant_type: String,
	skip_verify_ssl: bool,
	http_client: Arc<ReqwestHttpClient>,
}
impl Client {
	/// Creates a client for `base_url` with TLS certificate verification enabled.
	///
	/// Fails with [`ConfigError::InvalidUrl`](crate::error::ConfigError::InvalidUrl) or
	/// [`ConfigError::UnsupportedScheme`](crate::error::ConfigError::UnsupportedScheme) when the
	/// URL is not an absolute `http`/`https` URL.
	pub fn new(base_url: impl AsRef<str>) -> Result<Self> {
		Self::builder(base_url).build()
	}

	/// Returns a builder for non-default configurations.
	pub fn builder(base_url: impl AsRef<str>) -> ClientBuilder {
		ClientBuilder::new(base_url)
	}

	/// UAA base URL as parsed at construction.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// `{base_url}/oauth/token`.
	pub fn token_endpoint(&self) -> &Url {
		&self.token_endpoint
	}

	/// `{base_url}/check_token`.
	pub fn check_token_endpoint(&self) -> &Url {
		&self.check_token_endpoint
	}

	/// `grant_type` form value sent with token requests.
	pub fn grant_type(&self) -> &str {
		&self.grant_type
	}

	/// Whether certificate verification is skipped for every call made by this client.
	pub fn skip_verify_ssl(&self) -> bool {
		self.skip_verify_ssl
	}

	/// Per-call skip requests only widen the client-wide setting.
	fn transport(&self, skip_verify_ssl: bool) -> &ReqwestClient {
		self.http_client.select(skip_verify_ssl || self.skip_verify_ssl)
	}
}
impl Debug for Client {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("base_url", &self.base_url.as_str())
			.field("grant_type", &self.grant_type)
			.field("skip_verify_ssl", &self.skip_verify_ssl)
			.finish()
	}
}

#[derive(Deserialize)]
struct OAuthErrorBody {
	error: String,
	#[serde(default)]
	error_description: Option<String>,
}

/// Maps a non-success UAA response into the client error taxonomy.
fn status_error(status: StatusCode, retry_after: Option<Duration>, body: &[u8]) -> Error {
	let reason = failure_reason(status, body);

	match status.as_u16() {
		status @ (401 | 403) => Error::Unauthorized { status, reason },
		status => Error::RequestFailed { status, reason, retry_after },
	}
}

fn failure_reason(status: StatusCode, body: &[u8]) -> String {
	if let Ok(parsed) = serde_json::from_slice::<OAuthErrorBody>(body) {
		return parsed.error_description.filter(|value| !value.is_empty()).unwrap_or(parsed.error);
	}

	let text = String::from_utf8_lossy(body);
	let text = text.trim();

	if !text.is_empty() {
		return truncate_preview(text);
	}

	status.canonical_reason().unwrap_or("unknown status").to_owned()
}

fn truncate_preview(body: &str) -> String {
	if body.chars().count() <= BODY_PREVIEW_LIMIT {
		return body.to_owned();
	}

	let mut buf = body.chars().take(BODY_PREVIEW_LIMIT).collect::<String>();

	buf.push('…');

	buf
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn oauth_error_body_supplies_reason() {
		let body = br#"{"error":"unauthorized","error_description":"Bad credentials"}"#;
		let err = status_error(StatusCode::UNAUTHORIZED, None, body);

		match err {
			Error::Unauthorized { status, reason } => {
				assert_eq!(status, 401);
				assert_eq!(reason, "Bad credentials");
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}

		let body = br#"{"error":"invalid_client"}"#;

		assert_eq!(failure_reason(StatusCode::BAD_REQUEST, body), "invalid_client");
	}

	#[test]
	fn other_statuses_become_request_failed_with_retry_hint() {
		let err = status_error(StatusCode::SERVICE_UNAVAILABLE, Some(Duration::seconds(7)), b"");

		match err {
			Error::RequestFailed { status, reason, retry_after } => {
				assert_eq!(status, 503);
				assert_eq!(reason, "Service Unavailable");
				assert_eq!(retry_after, Some(Duration::seconds(7)));
			},
			other => panic!("Unexpected error variant: {other:?}."),
		}
	}

	#[test]
	fn plain_text_reasons_are_truncated() {
		let long = "x".repeat(BODY_PREVIEW_LIMIT + 10);
		let reason = failure_reason(StatusCode::INTERNAL_SERVER_ERROR, long.as_bytes());

		assert_eq!(reason.chars().count(), BODY_PREVIEW_LIMIT + 1);
		assert!(reason.ends_with('…'));
		assert_eq!(failure_reason(StatusCode::BAD_GATEWAY, b"  upstream down \n"), "upstream down");
	}

	#[test]
	fn debug_output_omits_transport_details() {
		let client = Client::new("https://uaa.example.com").expect("Client should build.");
		let rendered = format!("{client:?}");

		assert!(rendered.contains("https://uaa.example.com/"));
		assert!(rendered.contains("client_credentials"));
	}
}
