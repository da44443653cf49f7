//! Capability contracts consumed by the setup orchestrator and their built-in backends.

pub mod file;
pub mod memory;

pub use file::FileSecretStore;
pub use memory::{MemoryProviderConfigs, MemorySecretStore, MemoryUsageTracker, UsageRecord};

// self
use crate::{
	_prelude::*,
	provider::{CredentialsSource, ProviderConfig, ProviderConfigUsage, SecretKeySelector},
};

/// Boxed future returned by every capability.
pub type SourceFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, SourceError>> + 'a + Send>>;

/// Looks up provider config objects by name.
pub trait ProviderConfigSource
where
	Self: Send + Sync,
{
	/// Fetches the provider config called `name`.
	fn provider_config<'a>(&'a self, name: &'a str) -> SourceFuture<'a, ProviderConfig>;
}

/// Records which managed resources use which provider config.
pub trait UsageTracker
where
	Self: Send + Sync,
{
	/// Records `usage`; repeated calls for the same pair must be harmless.
	fn track(&self, usage: ProviderConfigUsage) -> SourceFuture<'_, ()>;
}

/// Reads individual keys out of stored secrets.
pub trait SecretSource
where
	Self: Send + Sync,
{
	/// Returns the bytes under `selector.key`, or `None` when the secret lacks that key.
	///
	/// A missing secret is an error.
	fn secret_key<'a>(
		&'a self,
		selector: &'a SecretKeySelector,
	) -> SourceFuture<'a, Option<Vec<u8>>>;
}

/// Error type produced by capability implementations.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum SourceError {
	/// Requested object does not exist.
	#[error("{kind} `{name}` not found.")]
	NotFound {
		/// Object kind (provider config, secret).
		kind: &'static str,
		/// Object name as requested.
		name: String,
	},
	/// Selector for the configured source is absent.
	#[error("Credentials source {credentials_source} requires a selector, but none was specified.")]
	MissingSelector {
		/// Source whose selector is missing.
		credentials_source: CredentialsSource,
	},
	/// Source kind cannot be extracted by this implementation.
	#[error("Credentials source {credentials_source} is not currently supported.")]
	Unsupported {
		/// Unsupported source.
		credentials_source: CredentialsSource,
	},
	/// Local I/O failure.
	#[error("I/O error: {message}.")]
	Io {
		/// Human-readable error payload.
		message: String,
	},
	/// Serialization failure surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
