//! Credential resolution: turn a raw secret payload into a minimal AWX session configuration.
//!
//! Resolution is a pure function of the payload. It copies `hostname` verbatim, lets a
//! non-empty `token` take precedence over `username`/`password`, and folds `verify_ssl` into a
//! boolean with an allow-list of falsy spellings. Keys without a usable value never appear in
//! the output, so session defaults stay in charge.

/// Loose boolean normalization.
pub mod flag;
/// Decoded secret payloads.
pub mod raw;
pub mod resolved;

pub use flag::*;
pub use raw::*;
pub use resolved::*;

// self
use crate::{_prelude::*, provider::ProviderDescriptor};

/// Resolved configuration paired with the descriptor it was requested for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProviderSetup {
	/// Runtime/provider version triple, untouched.
	pub descriptor: ProviderDescriptor,
	/// Session configuration derived from the credentials.
	pub configuration: ResolvedConfiguration,
}
impl ProviderSetup {
	/// Splits the setup into `(configuration, descriptor)`.
	pub fn into_parts(self) -> (ResolvedConfiguration, ProviderDescriptor) {
		(self.configuration, self.descriptor)
	}
}

/// Resolves `payload` and attaches `descriptor` verbatim.
///
/// Fails only with [`Error::InvalidCredentialFormat`]; no partial configuration is returned.
pub fn resolve(payload: &[u8], descriptor: ProviderDescriptor) -> Result<ProviderSetup> {
	let configuration = resolve_credentials(payload)?;

	Ok(ProviderSetup { descriptor, configuration })
}

/// Decodes `payload` and resolves it into a [`ResolvedConfiguration`].
pub fn resolve_credentials(payload: &[u8]) -> Result<ResolvedConfiguration> {
	RawCredentials::decode(payload).map(|raw| resolve_raw(&raw))
}

/// Applies the resolution rules to already decoded credentials.
pub fn resolve_raw(raw: &RawCredentials) -> ResolvedConfiguration {
	let mut config = ResolvedConfiguration::default();

	if let Some(hostname) = raw.non_empty(ConfigKey::Hostname.as_str()) {
		config.insert_text(ConfigKey::Hostname, hostname);
	}

	// Token and basic auth are mutually exclusive towards the API.
	if let Some(token) = raw.non_empty(ConfigKey::Token.as_str()) {
		config.insert_secret(ConfigKey::Token, token);
	} else {
		if let Some(username) = raw.non_empty(ConfigKey::Username.as_str()) {
			config.insert_text(ConfigKey::Username, username);
		}
		if let Some(password) = raw.non_empty(ConfigKey::Password.as_str()) {
			config.insert_secret(ConfigKey::Password, password);
		}
	}

	if let Some(verify) = normalize_verify_ssl(raw.field(ConfigKey::VerifySsl.as_str())) {
		config.insert_flag(ConfigKey::VerifySsl, verify);
	}

	config
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn resolve_json(payload: &str) -> serde_json::Value {
		resolve_credentials(payload.as_bytes())
			.expect("Fixture payload should resolve.")
			.to_json()
	}

	#[test]
	fn token_overrides_basic_auth() {
		assert_eq!(
			resolve_json(r#"{"hostname":"h","token":"t","username":"u"}"#),
			serde_json::json!({"hostname":"h","token":"t"}),
		);
		assert_eq!(
			resolve_json(r#"{"token":"t","username":"u","password":"p"}"#),
			serde_json::json!({"token":"t"}),
		);
	}

	#[test]
	fn basic_auth_fields_are_copied_independently() {
		assert_eq!(
			resolve_json(r#"{"username":"u","password":"p","verify_ssl":"0"}"#),
			serde_json::json!({"username":"u","password":"p","verify_ssl":false}),
		);
		assert_eq!(
			resolve_json(r#"{"token":"","password":"p"}"#),
			serde_json::json!({"password":"p"}),
		);
	}

	#[test]
	fn empty_payload_object_resolves_to_empty_configuration() {
		let config = resolve_credentials(b"{}").expect("Empty object should resolve.");

		assert!(config.is_empty());
		assert_eq!(config.auth_scheme(), None);
	}

	#[test]
	fn unknown_and_empty_fields_are_dropped() {
		assert_eq!(
			resolve_json(r#"{"hostname":"","organization":"ops","verify_ssl":""}"#),
			serde_json::json!({}),
		);
	}

	#[test]
	fn hostname_is_copied_verbatim() {
		let config = resolve_credentials(br#"{"hostname":" https://awx.example.com:8043/ "}"#)
			.expect("Hostname payload should resolve.");

		assert_eq!(config.hostname(), Some(" https://awx.example.com:8043/ "));
	}

	#[test]
	fn descriptor_passes_through_untouched() {
		let descriptor =
			ProviderDescriptor::new("1.5.7", "registry.terraform.io/ilijamt/awx", "0.29.1");
		let (config, returned) = resolve(br#"{"token":"t"}"#, descriptor.clone())
			.expect("Token payload should resolve.")
			.into_parts();

		assert_eq!(returned, descriptor);
		assert_eq!(config.token(), Some("t"));
	}

	#[test]
	fn malformed_payload_yields_no_configuration() {
		let err = resolve(b"[\"token\"]", ProviderDescriptor::new("v", "s", "p"))
			.expect_err("Array payloads must be rejected.");

		assert!(err.kind().is_resolver_failure());
	}
}
