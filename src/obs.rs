//! Optional observability helpers for provider setup.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit spans named `awx_provider.setup` carrying a `stage` field, plus
//!   a debug event describing each resolved configuration (key names and auth scheme only).
//! - Enable `metrics` to increment the `awx_provider_setup_total` counter for every
//!   attempt/success/failure, labeled by `outcome` + `error`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Steps of a provider setup, used as span stages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetupStage {
	/// The whole setup call.
	Setup,
	/// Provider config lookup.
	FetchProviderConfig,
	/// Usage bookkeeping.
	TrackUsage,
	/// Raw credential extraction.
	ExtractCredentials,
	/// Credential resolution.
	ResolveCredentials,
}
impl SetupStage {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SetupStage::Setup => "setup",
			SetupStage::FetchProviderConfig => "fetch_provider_config",
			SetupStage::TrackUsage => "track_usage",
			SetupStage::ExtractCredentials => "extract_credentials",
			SetupStage::ResolveCredentials => "resolve_credentials",
		}
	}
}
impl Display for SetupStage {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each setup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SetupOutcome {
	/// Entry to [`Orchestrator::setup`](crate::setup::Orchestrator::setup).
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl SetupOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			SetupOutcome::Attempt => "attempt",
			SetupOutcome::Success => "success",
			SetupOutcome::Failure => "failure",
		}
	}
}
impl Display for SetupOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
