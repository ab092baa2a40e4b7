//! Token endpoint payloads and the token values handed back to callers.

mod access_token;

// self
use crate::{_prelude::*, error::MalformedResponseError};
use access_token::AccessToken;

/// Token plus lifetime returned by
/// [`Client::get_auth_token_with_expires_in`](crate::Client::get_auth_token_with_expires_in).
#[derive(Clone, PartialEq, Eq)]
pub struct ExpiringToken {
	/// `"<token_type> <access_token>"`, ready for an `Authorization` header.
	pub token: String,
	/// Seconds until expiry; `0` when UAA omitted `expires_in`.
	pub expires_in: i64,
}
impl ExpiringToken {
	/// Sentinel `expires_in` for a response whose lifetime could not be read.
	pub const UNPARSED_EXPIRES_IN: i64 = -1;

	/// The `("", -1)` value standing in for a failed exchange.
	///
	/// Useful for callers that flatten errors:
	/// `result.unwrap_or_else(|_| ExpiringToken::unparsed())`.
	pub fn unparsed() -> Self {
		Self { token: String::new(), expires_in: Self::UNPARSED_EXPIRES_IN }
	}

	/// Returns the positive lifetime, or `None` when UAA reported none.
	pub fn lifetime(&self) -> Option<Duration> {
		if self.expires_in > 0 { Some(Duration::seconds(self.expires_in)) } else { None }
	}
}
impl Debug for ExpiringToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ExpiringToken")
			.field("token", &"<redacted>")
			.field("expires_in", &self.expires_in)
			.finish()
	}
}

/// JSON document returned by `/oauth/token`.
#[derive(Deserialize)]
pub(crate) struct TokenResponse {
	access_token: AccessToken,
	token_type: String,
	#[serde(default)]
	expires_in: Option<u64>,
	#[serde(default)]
	scope: Option<String>,
	#[serde(default)]
	jti: Option<String>,
}
impl TokenResponse {
	/// Decodes the body; any field failure rejects the whole document.
	pub(crate) fn parse(body: &[u8], status: Option<u16>) -> Result<Self, MalformedResponseError> {
		let mut deserializer = serde_json::Deserializer::from_slice(body);

		serde_path_to_error::deserialize(&mut deserializer)
			.map_err(|source| MalformedResponseError::Json { source, status })
	}

	pub(crate) fn authorization_value(&self) -> String {
		self.access_token.authorization_value(&self.token_type)
	}

	pub(crate) fn expires_in_seconds(&self) -> Result<i64, MalformedResponseError> {
		match self.expires_in {
			None => Ok(0),
			Some(secs) =>
				i64::try_from(secs).map_err(|_| MalformedResponseError::ExpiresInOutOfRange),
		}
	}
}
impl Debug for TokenResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("TokenResponse")
			.field("access_token", &self.access_token)
			.field("token_type", &self.token_type)
			.field("expires_in", &self.expires_in)
			.field("scope", &self.scope)
			.field("jti", &self.jti)
			.finish()
	}
}
