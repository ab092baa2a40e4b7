//! Optional observability helpers for UAA calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `uaa_client.call` with the `call` (operation)
//!   and `stage` (call site) fields.
//! - Enable `metrics` to increment the `uaa_client_call_total` counter for every
//!   attempt/success/failure/denial, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Client operations observed by the instrumentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// `get_auth_token`.
	Token,
	/// `get_auth_token_with_expires_in`.
	TokenWithExpiresIn,
	/// `token_is_authorized`.
	CheckToken,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::Token => "token",
			CallKind::TokenWithExpiresIn => "token_with_expires_in",
			CallKind::CheckToken => "check_token",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion (token issued, or token authorized).
	Success,
	/// Error returned to the caller, or swallowed by `token_is_authorized`.
	Failure,
	/// UAA answered but the token does not belong to the expected client.
	Denied,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
			CallOutcome::Denied => "denied",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
