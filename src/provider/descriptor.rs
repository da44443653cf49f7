//! Runtime and provider version descriptor.

// self
use crate::_prelude::*;

/// Immutable runtime and provider version triple attached verbatim to every setup.
///
/// The descriptor carries no decision logic; the resolver hands it back untouched.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderDescriptor {
	/// Version of the runtime that drives the provider.
	pub version: String,
	/// Provider source identifier (registry address).
	pub source: String,
	/// Provider version constraint.
	pub provider_version: String,
}
impl ProviderDescriptor {
	/// Creates a descriptor from its three components.
	pub fn new(
		version: impl Into<String>,
		source: impl Into<String>,
		provider_version: impl Into<String>,
	) -> Self {
		Self {
			version: version.into(),
			source: source.into(),
			provider_version: provider_version.into(),
		}
	}
}
