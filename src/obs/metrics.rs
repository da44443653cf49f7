// self
use crate::{error::ErrorKind, obs::SetupOutcome};

/// Records a setup outcome via the global metrics recorder (when enabled).
///
/// `error` labels failures with their [`ErrorKind`]; other outcomes use `none`.
pub fn record_setup_outcome(outcome: SetupOutcome, error: Option<ErrorKind>) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"awx_provider_setup_total",
			"outcome" => outcome.as_str(),
			"error" => error.map_or("none", ErrorKind::as_str)
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (outcome, error);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn record_setup_outcome_noop_without_metrics() {
		record_setup_outcome(SetupOutcome::Failure, Some(ErrorKind::UsageTrackingFailed));
		record_setup_outcome(SetupOutcome::Success, None);
	}
}
