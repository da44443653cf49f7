//! Setup orchestration: from a managed resource to a resolved provider setup.
//!
//! [`Orchestrator::setup`] walks the provider config reference of a managed resource, records
//! usage, extracts the raw credential payload, and hands it to
//! [`credentials::resolve`](crate::credentials::resolve). Every collaborator is injected, and
//! each failing step surfaces as its own [`Error`] variant without retries.

pub mod extractor;

pub use extractor::*;

// self
use crate::{
	_prelude::*,
	credentials::{self, ProviderSetup},
	obs::{self, SetupOutcome, SetupSpan, SetupStage},
	provider::{ProviderConfigReference, ProviderConfigUsage, ProviderDescriptor, ResourceRef},
	store::{ProviderConfigSource, UsageTracker},
};

/// Resource whose reconciliation needs an AWX session.
pub trait ManagedResource
where
	Self: Send + Sync,
{
	/// Identity of the resource, used for usage bookkeeping.
	fn resource_ref(&self) -> ResourceRef;

	/// Provider config this resource points at, if any.
	fn provider_config_reference(&self) -> Option<&ProviderConfigReference>;
}

/// Plain [`ManagedResource`] implementation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedRef {
	/// Resource identity.
	pub resource: ResourceRef,
	/// Optional provider config reference.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub provider_config_ref: Option<ProviderConfigReference>,
}
impl ManagedResource for ManagedRef {
	fn resource_ref(&self) -> ResourceRef {
		self.resource.clone()
	}

	fn provider_config_reference(&self) -> Option<&ProviderConfigReference> {
		self.provider_config_ref.as_ref()
	}
}

/// Builds [`ProviderSetup`] values for managed resources.
#[derive(Clone)]
pub struct Orchestrator {
	/// Descriptor attached to every setup.
	pub descriptor: ProviderDescriptor,
	/// Provider config lookup.
	pub configs: Arc<dyn ProviderConfigSource>,
	/// Usage bookkeeping.
	pub tracker: Arc<dyn UsageTracker>,
	/// Raw credential extraction.
	pub extractor: Arc<dyn CredentialExtractor>,
}
impl Orchestrator {
	/// Creates an orchestrator over the injected capabilities.
	pub fn new(
		descriptor: ProviderDescriptor,
		configs: Arc<dyn ProviderConfigSource>,
		tracker: Arc<dyn UsageTracker>,
		extractor: Arc<dyn CredentialExtractor>,
	) -> Self {
		Self { descriptor, configs, tracker, extractor }
	}

	/// Resolves the provider setup for `resource`.
	pub async fn setup(&self, resource: &dyn ManagedResource) -> Result<ProviderSetup> {
		let span = SetupSpan::new(SetupStage::Setup);

		obs::record_setup_outcome(SetupOutcome::Attempt, None);

		let result = span.instrument(self.setup_inner(resource)).await;

		match &result {
			Ok(_) => obs::record_setup_outcome(SetupOutcome::Success, None),
			Err(e) => obs::record_setup_outcome(SetupOutcome::Failure, Some(e.kind())),
		}

		result
	}

	async fn setup_inner(&self, resource: &dyn ManagedResource) -> Result<ProviderSetup> {
		let reference =
			resource.provider_config_reference().ok_or(Error::NoProviderConfigReference)?;
		let name = reference.name.as_ref();
		let config = SetupSpan::new(SetupStage::FetchProviderConfig)
			.instrument(<dyn ProviderConfigSource>::provider_config(self.configs.as_ref(), name))
			.await
			.map_err(|source| Error::ProviderConfigFetchFailed { name: name.to_owned(), source })?;
		let usage = ProviderConfigUsage {
			provider_config: reference.name.clone(),
			resource: resource.resource_ref(),
		};

		SetupSpan::new(SetupStage::TrackUsage)
			.instrument(<dyn UsageTracker>::track(self.tracker.as_ref(), usage))
			.await
			.map_err(|source| Error::UsageTrackingFailed { source })?;

		let extraction =
			<dyn CredentialExtractor>::extract(self.extractor.as_ref(), &config.credentials);
		let payload = SetupSpan::new(SetupStage::ExtractCredentials)
			.instrument(extraction)
			.await
			.map_err(|source| Error::CredentialExtractionFailed { source })?;
		let setup = {
			let _guard = SetupSpan::new(SetupStage::ResolveCredentials).entered();

			credentials::resolve(&payload, self.descriptor.clone())?
		};

		obs::log_resolved(&setup.configuration);

		Ok(setup)
	}
}
impl Debug for Orchestrator {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Orchestrator")
			.field("descriptor", &self.descriptor)
			.finish_non_exhaustive()
	}
}
