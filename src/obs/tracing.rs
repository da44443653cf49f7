// self
use crate::{_prelude::*, credentials::ResolvedConfiguration, obs::SetupStage};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedSetup<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedSetup<F> = F;

/// A span builder used by the setup orchestrator.
#[derive(Clone, Debug)]
pub struct SetupSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl SetupSpan {
	/// Creates a new span tagged with the provided stage.
	pub fn new(stage: SetupStage) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("awx_provider.setup", stage = stage.as_str());

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = stage;

			Self {}
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> SetupSpanGuard {
		#[cfg(feature = "tracing")]
		{
			SetupSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			SetupSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedSetup<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`SetupSpan::entered`].
pub struct SetupSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for SetupSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("SetupSpanGuard(..)")
	}
}

/// Emits a debug event describing a resolved configuration without its values.
pub fn log_resolved(config: &ResolvedConfiguration) {
	#[cfg(feature = "tracing")]
	{
		let keys = config.iter().map(|(key, _)| key.as_str()).collect::<Vec<_>>().join(",");

		tracing::debug!(
			auth_scheme = config.auth_scheme().map_or("none", |scheme| scheme.as_str()),
			verify_ssl = ?config.verify_ssl(),
			keys = %keys,
			"resolved provider configuration"
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = config;
	}
}
