//! Counters and histograms behind the optional `metrics` feature.

// self
use crate::obs::{CallKind, CallOutcome};

#[cfg(feature = "metrics")] const CALL_TOTAL: &str = "uaa_client_call_total";
#[cfg(feature = "metrics")] const TOKEN_LIFETIME_SECONDS: &str = "uaa_client_token_lifetime_seconds";

/// Counts one call event under `uaa_client_call_total{call, outcome}`.
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(CALL_TOTAL, "call" => kind.as_str(), "outcome" => outcome.as_str())
			.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Samples the `expires_in` UAA granted into `uaa_client_token_lifetime_seconds`.
///
/// Tokens without a lifetime (`expires_in == 0`) are not sampled.
pub fn record_token_lifetime(expires_in: i64) {
	if expires_in <= 0 {
		return;
	}

	#[cfg(feature = "metrics")]
	{
		metrics::histogram!(TOKEN_LIFETIME_SECONDS).record(expires_in as f64);
	}
}
