//! Provider config objects, credential selectors, and usage records.

// std
use std::path::PathBuf;
// self
use crate::{
	_prelude::*,
	provider::{Namespace, ProviderConfigName, SecretName},
};

/// Where a provider config's credential bytes live.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CredentialsSource {
	/// No credentials; extraction yields an empty payload.
	#[default]
	None,
	/// A key inside a secret.
	Secret,
	/// Workload identity injected by the platform; not supported.
	InjectedIdentity,
	/// A process environment variable.
	Environment,
	/// A file on the local filesystem.
	Filesystem,
}
impl CredentialsSource {
	/// Returns the serialized label of the source.
	pub const fn as_str(self) -> &'static str {
		match self {
			CredentialsSource::None => "None",
			CredentialsSource::Secret => "Secret",
			CredentialsSource::InjectedIdentity => "InjectedIdentity",
			CredentialsSource::Environment => "Environment",
			CredentialsSource::Filesystem => "Filesystem",
		}
	}
}
impl Display for CredentialsSource {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Reference to a single key of a namespaced secret.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SecretKeySelector {
	/// Namespace containing the secret.
	pub namespace: Namespace,
	/// Secret name.
	pub name: SecretName,
	/// Key within the secret data.
	pub key: String,
}
impl SecretKeySelector {
	/// Creates a selector for `namespace/name[key]`.
	pub fn new(namespace: Namespace, name: SecretName, key: impl Into<String>) -> Self {
		Self { namespace, name, key: key.into() }
	}
}

/// Environment variable selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnvSelector {
	/// Variable name.
	pub name: String,
}

/// Filesystem selector.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FsSelector {
	/// Path of the credential file.
	pub path: PathBuf,
}

/// Selects the credential bytes for a provider config.
///
/// Only the selector matching [`CredentialsSelector::source`] is consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsSelector {
	/// Credential source kind.
	#[serde(default)]
	pub source: CredentialsSource,
	/// Secret key used when the source is [`CredentialsSource::Secret`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub secret_ref: Option<SecretKeySelector>,
	/// Variable used when the source is [`CredentialsSource::Environment`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub env: Option<EnvSelector>,
	/// File used when the source is [`CredentialsSource::Filesystem`].
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub fs: Option<FsSelector>,
}
impl CredentialsSelector {
	/// Selects a key inside a secret.
	pub fn secret(selector: SecretKeySelector) -> Self {
		Self { source: CredentialsSource::Secret, secret_ref: Some(selector), ..Default::default() }
	}

	/// Selects an environment variable.
	pub fn env(name: impl Into<String>) -> Self {
		Self {
			source: CredentialsSource::Environment,
			env: Some(EnvSelector { name: name.into() }),
			..Default::default()
		}
	}

	/// Selects a file on the local filesystem.
	pub fn fs(path: impl Into<PathBuf>) -> Self {
		Self {
			source: CredentialsSource::Filesystem,
			fs: Some(FsSelector { path: path.into() }),
			..Default::default()
		}
	}
}

/// Provider config object pointing at the credentials used for AWX sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
	/// Object name.
	pub name: ProviderConfigName,
	/// Credential selector.
	pub credentials: CredentialsSelector,
}
impl ProviderConfig {
	/// Creates a provider config.
	pub fn new(name: ProviderConfigName, credentials: CredentialsSelector) -> Self {
		Self { name, credentials }
	}
}

/// Reference from a managed resource to its provider config.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderConfigReference {
	/// Referenced provider config name.
	pub name: ProviderConfigName,
}

/// Identifies a managed resource.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRef {
	/// Resource kind, e.g. `Organization`.
	pub kind: String,
	/// Resource name.
	pub name: String,
}
impl ResourceRef {
	/// Creates a resource reference.
	pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
		Self { kind: kind.into(), name: name.into() }
	}
}

/// Records that a managed resource uses a provider config.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfigUsage {
	/// Provider config in use.
	pub provider_config: ProviderConfigName,
	/// Resource using it.
	pub resource: ResourceRef,
}
