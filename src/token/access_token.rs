// self
use crate::_prelude::*;

/// Raw `access_token` field of a UAA token document; never printed.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub(crate) struct AccessToken(String);
impl AccessToken {
	/// Joins `token_type` and the raw token into an `Authorization` header value.
	///
	/// The token type is kept as UAA spelled it (`bearer`, `Bearer`, ...).
	pub(crate) fn authorization_value(&self, token_type: &str) -> String {
		format!("{token_type} {}", self.0)
	}
}
impl Debug for AccessToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("AccessToken(<redacted>)")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn debug_hides_the_token_but_header_value_carries_it() {
		let token: AccessToken =
			serde_json::from_str("\"good-token\"").expect("A JSON string should decode.");

		assert_eq!(format!("{token:?}"), "AccessToken(<redacted>)");
		assert_eq!(token.authorization_value("bearer"), "bearer good-token");
	}

	#[test]
	fn non_string_tokens_are_rejected() {
		assert!(serde_json::from_str::<AccessToken>("42").is_err());
		assert!(serde_json::from_str::<AccessToken>("null").is_err());
	}
}
