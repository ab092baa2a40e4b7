//! Token acquisition against `POST {base_url}/oauth/token`.
//!
//! The username/password pair travels as HTTP Basic credentials, while the form body carries
//! `client_id` (the username) and the configured `grant_type`. A 2xx answer must decode as a
//! complete token document: a single bad field, `expires_in` included, fails the whole call.

// crates.io
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
// self
use crate::{
	_prelude::*,
	client::{self, Client},
	error::TransportError,
	http::{self, ResponseMetadata},
	obs::{self, CallKind, CallOutcome, CallSpan},
	token::{ExpiringToken, TokenResponse},
};

impl Client {
	/// Fetches a token and returns it as `"<token_type> <access_token>"`.
	///
	/// `skip_verify_ssl` disables TLS certificate verification for this call; the client-wide
	/// setting from [`ClientBuilder::skip_verify_ssl`](crate::ClientBuilder::skip_verify_ssl)
	/// still applies when this flag is `false`.
	pub async fn get_auth_token(
		&self,
		username: &str,
		password: &str,
		skip_verify_ssl: bool,
	) -> Result<String> {
		let fut = self.bearer_token(username, password, skip_verify_ssl);

		observe(CallKind::Token, "get_auth_token", fut).await
	}

	/// Fetches a token together with its `expires_in` lifetime.
	///
	/// A missing `expires_in` yields `0`. A non-numeric one fails the call even though the
	/// access token itself was readable; callers wanting the `("", -1)` pair can flatten the
	/// error with [`ExpiringToken::unparsed`].
	pub async fn get_auth_token_with_expires_in(
		&self,
		username: &str,
		password: &str,
		skip_verify_ssl: bool,
	) -> Result<ExpiringToken> {
		let fut = self.expiring_token(username, password, skip_verify_ssl);

		observe(CallKind::TokenWithExpiresIn, "get_auth_token_with_expires_in", fut).await
	}

	async fn bearer_token(
		&self,
		username: &str,
		password: &str,
		skip_verify_ssl: bool,
	) -> Result<String> {
		let response = self.request_token(username, password, skip_verify_ssl).await?;

		Ok(response.authorization_value())
	}

	async fn expiring_token(
		&self,
		username: &str,
		password: &str,
		skip_verify_ssl: bool,
	) -> Result<ExpiringToken> {
		let response = self.request_token(username, password, skip_verify_ssl).await?;
		let expires_in = response.expires_in_seconds()?;

		obs::record_token_lifetime(expires_in);

		Ok(ExpiringToken { token: response.authorization_value(), expires_in })
	}

	async fn request_token(
		&self,
		username: &str,
		password: &str,
		skip_verify_ssl: bool,
	) -> Result<TokenResponse> {
		let authorization = http::basic_authorization(username, password);
		let form = [("client_id", username), ("grant_type", self.grant_type())];
		let response = self
			.transport(skip_verify_ssl)
			.post(self.token_endpoint().clone())
			.header(AUTHORIZATION, authorization)
			.header(ACCEPT, HeaderValue::from_static("application/json"))
			.form(&form)
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();
		let meta = ResponseMetadata::from_response(&response);
		let body = response.bytes().await.map_err(TransportError::from)?;

		if !status.is_success() {
			return Err(client::status_error(status, meta.retry_after, &body));
		}

		Ok(TokenResponse::parse(&body, Some(meta.status))?)
	}
}

async fn observe<T, Fut>(kind: CallKind, stage: &'static str, fut: Fut) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = CallSpan::new(kind, stage);

	obs::record_call_outcome(kind, CallOutcome::Attempt);

	let result = span.instrument(fut).await;

	match &result {
		Ok(_) => obs::record_call_outcome(kind, CallOutcome::Success),
		Err(_) => obs::record_call_outcome(kind, CallOutcome::Failure),
	}

	result
}
