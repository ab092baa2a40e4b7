//! Token introspection against `POST {base_url}/check_token`.

// self
use crate::{
	_prelude::*,
	client::{self, Client},
	error::TransportError,
	http::ResponseMetadata,
	obs::{self, CallKind, CallOutcome, CallSpan},
};

impl Client {
	/// Returns `true` only when UAA answers 2xx with a body equal to `client_id`, byte for byte.
	///
	/// Every failure (network error, error status, any other body) reads as `false`; callers
	/// that need to tell a denial apart from an outage must query UAA themselves.
	pub async fn token_is_authorized(&self, token: &str, client_id: &str) -> bool {
		const KIND: CallKind = CallKind::CheckToken;

		let span = CallSpan::new(KIND, "token_is_authorized");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		match span.instrument(self.introspect(token)).await {
			Ok(body) if body == client_id.as_bytes() => {
				obs::record_call_outcome(KIND, CallOutcome::Success);

				true
			},
			Ok(_) => {
				obs::record_call_outcome(KIND, CallOutcome::Denied);

				false
			},
			Err(err) => {
				span.swallowed(&err);
				obs::record_call_outcome(KIND, CallOutcome::Failure);

				false
			},
		}
	}

	async fn introspect(&self, token: &str) -> Result<Vec<u8>> {
		let response = self
			.transport(false)
			.post(self.check_token_endpoint().clone())
			.form(&[("token", token)])
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();
		let retry_after = ResponseMetadata::from_response(&response).retry_after;
		let body = response.bytes().await.map_err(TransportError::from)?;

		if !status.is_success() {
			return Err(client::status_error(status, retry_after, &body));
		}

		Ok(body.to_vec())
	}
}
