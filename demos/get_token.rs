//! Fetches a token from a mock UAA and verifies it against `/check_token`.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use uaa_client::Client;

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/oauth/token");
			then.status(200).header("content-type", "application/json").body(
				"{\"access_token\":\"demo-access\",\"token_type\":\"bearer\",\"expires_in\":900}",
			);
		})
		.await;
	let check_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/check_token").form_urlencoded_tuple("token", "demo-access");
			then.status(200).body("doppler");
		})
		.await;
	let client = Client::new(format!("http://{}", server.address()))?;
	let token = client.get_auth_token_with_expires_in("doppler", "doppler-secret", false).await?;

	println!("Authorization header: {} (expires in {}s).", token.token, token.expires_in);

	let authorized = client.token_is_authorized("demo-access", "doppler").await;

	println!("Token belongs to doppler: {authorized}.");

	token_mock.assert_async().await;
	check_mock.assert_async().await;

	Ok(())
}
