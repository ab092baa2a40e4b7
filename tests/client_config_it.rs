// std
use std::time::Duration as StdDuration;
// crates.io
use httpmock::prelude::*;
// self
use uaa_client::{
	Client,
	error::{ConfigError, Error, TransportError},
	http::ReqwestHttpClient,
	reqwest,
};

fn http_base_url(server: &MockServer) -> String {
	format!("http://{}", server.address())
}

#[test]
fn new_rejects_invalid_urls() {
	for raw in ["", "::not a url::", "relative/path", "ftp://uaa.example.com"] {
		let err = Client::new(raw).expect_err("Invalid base URLs should be rejected.");

		match err {
			Error::Config(config) => assert!(config.is_invalid_url(), "{raw:?} gave {config:?}."),
			other => panic!("Unexpected error variant for {raw:?}: {other:?}."),
		}
	}
}

#[test]
fn new_derives_endpoints_and_secure_defaults() {
	let client = Client::new("https://uaa.sys.example.com").expect("Client should build.");

	assert_eq!(client.base_url().as_str(), "https://uaa.sys.example.com/");
	assert_eq!(client.token_endpoint().as_str(), "https://uaa.sys.example.com/oauth/token");
	assert_eq!(client.check_token_endpoint().as_str(), "https://uaa.sys.example.com/check_token");
	assert_eq!(client.grant_type(), "client_credentials");
	assert!(!client.skip_verify_ssl());
}

#[test]
fn builder_rejects_empty_grant_type() {
	let err = Client::builder("https://uaa.example.com")
		.grant_type("")
		.build()
		.expect_err("An empty grant type should be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::EmptyGrantType)));
}

#[tokio::test]
async fn builder_timeout_bounds_slow_servers() {
	let server = MockServer::start_async().await;
	let _mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).delay(StdDuration::from_secs(3)).body("{}");
		})
		.await;
	let client = Client::builder(http_base_url(&server))
		.timeout(StdDuration::from_millis(200))
		.build()
		.expect("Client should build with a timeout.");
	let err = client
		.get_auth_token("myusername", "mypassword", false)
		.await
		.expect_err("The slow server should trip the timeout.");

	match err {
		Error::Transport(TransportError::Network { source }) => {
			let source = source
				.downcast_ref::<reqwest::Error>()
				.expect("Network errors should wrap the reqwest failure.");

			assert!(source.is_timeout(), "{source:?}");
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}

#[tokio::test]
async fn caller_supplied_transports_are_used() {
	let server = MockServer::start_async().await;
	let mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/check_token").header("user-agent", "uaa-client-test");
			then.status(200).body("ingestor");
		})
		.await;
	let build = || {
		reqwest::Client::builder()
			.user_agent("uaa-client-test")
			.build()
			.expect("Custom reqwest client should build.")
	};
	let client = Client::builder(http_base_url(&server))
		.http_client(ReqwestHttpClient::with_clients(build(), build()))
		.build()
		.expect("Client should build with custom transports.");

	assert!(client.token_is_authorized("some token", "ingestor").await);

	mock.assert_async().await;
}
