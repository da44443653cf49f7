//! Credential extraction across the supported credential sources.

// std
use std::fs;
// self
use crate::{
	_prelude::*,
	provider::{CredentialsSelector, CredentialsSource},
	store::{SecretSource, SourceError, SourceFuture},
};

/// Produces the raw credential payload selected by a provider config.
pub trait CredentialExtractor
where
	Self: Send + Sync,
{
	/// Extracts the bytes addressed by `selector`.
	fn extract<'a>(&'a self, selector: &'a CredentialsSelector) -> SourceFuture<'a, Vec<u8>>;
}

/// Environment lookup used for [`CredentialsSource::Environment`].
pub type EnvLookup = Arc<dyn Fn(&str) -> Option<String> + Send + Sync>;

/// Extractor covering secret, environment, filesystem, and empty sources.
///
/// Missing secret keys and unset variables yield an empty payload, leaving the decode failure
/// to the resolver.
#[derive(Clone)]
pub struct CommonCredentialExtractor {
	secrets: Arc<dyn SecretSource>,
	env: EnvLookup,
}
impl CommonCredentialExtractor {
	/// Creates an extractor reading secrets from `secrets` and variables from the process
	/// environment.
	pub fn new(secrets: Arc<dyn SecretSource>) -> Self {
		Self { secrets, env: Arc::new(|name: &str| std::env::var(name).ok()) }
	}

	/// Replaces the environment lookup.
	pub fn with_env_lookup<F>(mut self, lookup: F) -> Self
	where
		F: 'static + Fn(&str) -> Option<String> + Send + Sync,
	{
		self.env = Arc::new(lookup);

		self
	}

	async fn extract_now(&self, selector: &CredentialsSelector) -> Result<Vec<u8>, SourceError> {
		let credentials_source = selector.source;
		let missing = || SourceError::MissingSelector { credentials_source };

		match credentials_source {
			CredentialsSource::None => Ok(Vec::new()),
			CredentialsSource::Secret => {
				let secret_ref = selector.secret_ref.as_ref().ok_or_else(missing)?;

				Ok(<dyn SecretSource>::secret_key(self.secrets.as_ref(), secret_ref)
					.await?
					.unwrap_or_default())
			},
			CredentialsSource::Environment => {
				let env = selector.env.as_ref().ok_or_else(missing)?;

				Ok((self.env)(&env.name).unwrap_or_default().into_bytes())
			},
			CredentialsSource::Filesystem => {
				let file = selector.fs.as_ref().ok_or_else(missing)?;

				fs::read(&file.path).map_err(|e| SourceError::Io {
					message: format!("Failed to read {}: {e}", file.path.display()),
				})
			},
			CredentialsSource::InjectedIdentity => Err(SourceError::Unsupported { credentials_source }),
		}
	}
}
impl CredentialExtractor for CommonCredentialExtractor {
	fn extract<'a>(&'a self, selector: &'a CredentialsSelector) -> SourceFuture<'a, Vec<u8>> {
		Box::pin(self.extract_now(selector))
	}
}
impl Debug for CommonCredentialExtractor {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CommonCredentialExtractor(..)")
	}
}
