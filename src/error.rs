//! Client-level error types shared by construction, token, and introspection calls.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem (bad base URL, unbuildable transport).
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Token endpoint answered 2xx with a body that is not a usable token response.
	#[error(transparent)]
	MalformedResponse(#[from] MalformedResponseError),

	/// UAA rejected the client credentials (HTTP 401 or 403).
	#[error("UAA rejected the credentials with HTTP {status}: {reason}.")]
	Unauthorized {
		/// HTTP status code returned by UAA.
		status: u16,
		/// UAA-supplied reason string.
		reason: String,
	},
	/// UAA answered with any other non-success status.
	#[error("UAA request failed with HTTP {status}: {reason}.")]
	RequestFailed {
		/// HTTP status code returned by UAA.
		status: u16,
		/// UAA-supplied reason string.
		reason: String,
		/// Retry-After hint from upstream, if supplied.
		retry_after: Option<Duration>,
	},
}
impl Error {
	/// Returns the HTTP status code carried by the error, when UAA produced one.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Unauthorized { status, .. } | Self::RequestFailed { status, .. } =>
				Some(*status),
			Self::MalformedResponse(MalformedResponseError::Json { status, .. }) => *status,
			_ => None,
		}
	}
}

/// Configuration and validation failures raised while building a [`Client`](crate::Client).
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Base URL cannot be parsed as an absolute URL.
	#[error("UAA base URL `{url}` is invalid.")]
	InvalidUrl {
		/// Raw URL supplied by the caller.
		url: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL parsed but is not an `http` or `https` URL.
	#[error("UAA base URL `{url}` must use the http or https scheme.")]
	UnsupportedScheme {
		/// Raw URL supplied by the caller.
		url: String,
	},
	/// Configured grant type is empty.
	#[error("The grant_type value must not be empty.")]
	EmptyGrantType,
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Returns `true` for the variants that reject the base URL itself.
	pub fn is_invalid_url(&self) -> bool {
		matches!(self, Self::InvalidUrl { .. } | Self::UnsupportedScheme { .. })
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Token endpoint payload failures.
#[derive(Debug, ThisError)]
pub enum MalformedResponseError {
	/// Body is not JSON, lacks a required field, or carries a field of the wrong type.
	#[error("Token endpoint returned malformed JSON.")]
	Json {
		/// Structured parsing failure, including the offending JSON path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code, when available.
		status: Option<u16>,
	},
	/// Token endpoint returned an `expires_in` that does not fit a signed 64-bit integer.
	#[error("The expires_in value exceeds the supported range.")]
	ExpiresInOutOfRange,
}

/// Transport-level failures (network, TLS, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling UAA.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}
