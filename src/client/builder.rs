//! Builder for [`Client`] plus the base URL validation it applies.

// self
use crate::{
	_prelude::*,
	client::{Client, DEFAULT_GRANT_TYPE},
	error::ConfigError,
	http::ReqwestHttpClient,
};

/// Builder for [`Client`].
#[derive(Clone, Debug)]
pub struct ClientBuilder {
	base_url: String,
	grant_type: String,
	skip_verify_ssl: bool,
	timeout: Option<StdDuration>,
	http_client: Option<ReqwestHttpClient>,
}
impl ClientBuilder {
	/// Starts a builder for the UAA deployment at `base_url`.
	pub fn new(base_url: impl AsRef<str>) -> Self {
		Self {
			base_url: base_url.as_ref().to_owned(),
			grant_type: DEFAULT_GRANT_TYPE.to_owned(),
			skip_verify_ssl: false,
			timeout: None,
			http_client: None,
		}
	}

	/// Skips TLS certificate verification for every call (defaults to `false`).
	pub fn skip_verify_ssl(mut self, skip_verify_ssl: bool) -> Self {
		self.skip_verify_ssl = skip_verify_ssl;

		self
	}

	/// Overrides the `grant_type` form value (defaults to `client_credentials`).
	pub fn grant_type(mut self, grant_type: impl Into<String>) -> Self {
		self.grant_type = grant_type.into();

		self
	}

	/// Applies a whole-request timeout to the transports the builder creates.
	///
	/// Ignored when a transport is supplied through [`ClientBuilder::http_client`].
	pub fn timeout(mut self, timeout: StdDuration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Uses a caller-provided transport pair instead of building one.
	pub fn http_client(mut self, http_client: ReqwestHttpClient) -> Self {
		self.http_client = Some(http_client);

		self
	}

	/// Validates the configuration and builds the client.
	pub fn build(self) -> Result<Client> {
		let base_url = parse_base_url(&self.base_url)?;

		if self.grant_type.trim().is_empty() {
			return Err(ConfigError::EmptyGrantType.into());
		}

		let token_endpoint = endpoint(&base_url, &["oauth", "token"])?;
		let check_token_endpoint = endpoint(&base_url, &["check_token"])?;
		let http_client = match self.http_client {
			Some(http_client) => http_client,
			None => ReqwestHttpClient::new(self.timeout)?,
		};

		Ok(Client {
			base_url,
			token_endpoint,
			check_token_endpoint,
			grant_type: self.grant_type,
			skip_verify_ssl: self.skip_verify_ssl,
			http_client: Arc::new(http_client),
		})
	}
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw.trim())
		.map_err(|source| ConfigError::InvalidUrl { url: raw.to_owned(), source })?;

	match url.scheme() {
		"http" | "https" => Ok(url),
		_ => Err(ConfigError::UnsupportedScheme { url: raw.to_owned() }),
	}
}

/// Appends `segments` to the base path, dropping any query or fragment.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, ConfigError> {
	let mut url = base.clone();

	url.set_query(None);
	url.set_fragment(None);
	url.path_segments_mut()
		.map_err(|_| ConfigError::UnsupportedScheme { url: base.to_string() })?
		.pop_if_empty()
		.extend(segments);

	Ok(url)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn url(value: &str) -> Url {
		Url::parse(value).expect("Fixture URL should parse.")
	}

	#[test]
	fn endpoints_extend_the_base_path() {
		let cases = [
			("http://127.0.0.1:8080", "http://127.0.0.1:8080/oauth/token"),
			("https://uaa.example.com/", "https://uaa.example.com/oauth/token"),
			("https://example.com/uaa", "https://example.com/uaa/oauth/token"),
			("https://example.com/uaa/?trace=1#frag", "https://example.com/uaa/oauth/token"),
		];

		for (base, expected) in cases {
			let endpoint =
				endpoint(&url(base), &["oauth", "token"]).expect("Endpoint should derive.");

			assert_eq!(endpoint.as_str(), expected, "Base {base} derived the wrong endpoint.");
		}
	}

	#[test]
	fn base_url_must_be_absolute_http() {
		for raw in ["", "not a url", "/relative/path", "uaa.example.com"] {
			assert!(
				matches!(parse_base_url(raw), Err(ConfigError::InvalidUrl { .. })),
				"{raw:?} should fail to parse."
			);
		}
		for raw in ["ftp://uaa.example.com", "mailto:ops@example.com", "file:///tmp/uaa"] {
			assert!(
				matches!(parse_base_url(raw), Err(ConfigError::UnsupportedScheme { .. })),
				"{raw:?} should be rejected for its scheme."
			);
		}

		assert!(parse_base_url(" https://uaa.example.com ").is_ok());
	}

	#[test]
	fn build_applies_defaults_and_overrides() {
		let client = ClientBuilder::new("https://uaa.example.com/uaa")
			.build()
			.expect("Default client should build.");

		assert_eq!(client.grant_type(), "client_credentials");
		assert!(!client.skip_verify_ssl());
		assert_eq!(client.check_token_endpoint().as_str(), "https://uaa.example.com/uaa/check_token");

		let client = ClientBuilder::new("https://uaa.example.com")
			.grant_type("password")
			.skip_verify_ssl(true)
			.timeout(StdDuration::from_secs(5))
			.build()
			.expect("Configured client should build.");

		assert_eq!(client.grant_type(), "password");
		assert!(client.skip_verify_ssl());
	}

	#[test]
	fn build_rejects_blank_grant_type() {
		let err = ClientBuilder::new("https://uaa.example.com")
			.grant_type("  ")
			.build()
			.expect_err("Blank grant types should be rejected.");

		assert!(matches!(err, Error::Config(ConfigError::EmptyGrantType)));
	}
}
