//! Normalized configuration handed to the session-opening collaborator.

// self
use crate::{
	_prelude::*,
	auth::{AuthScheme, CredentialSecret},
};

/// Keys a resolved configuration may contain, in serialization order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigKey {
	/// AWX endpoint, copied verbatim.
	Hostname,
	/// API token.
	Token,
	/// Basic-auth username.
	Username,
	/// Basic-auth password.
	Password,
	/// TLS verification flag.
	VerifySsl,
}
impl ConfigKey {
	/// Every key, in serialization order.
	pub const ALL: [ConfigKey; 5] = [
		ConfigKey::Hostname,
		ConfigKey::Token,
		ConfigKey::Username,
		ConfigKey::Password,
		ConfigKey::VerifySsl,
	];

	/// Returns the field name used both in secret payloads and in the output mapping.
	pub const fn as_str(self) -> &'static str {
		match self {
			ConfigKey::Hostname => "hostname",
			ConfigKey::Token => "token",
			ConfigKey::Username => "username",
			ConfigKey::Password => "password",
			ConfigKey::VerifySsl => "verify_ssl",
		}
	}
}
impl Display for ConfigKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Typed configuration value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
	/// Plain string value.
	Text(String),
	/// Sensitive string value; redacted in `Debug`, raw when serialized.
	Secret(CredentialSecret),
	/// Boolean flag.
	Flag(bool),
}
impl ConfigValue {
	/// Returns the string payload of text and secret values.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			ConfigValue::Text(value) => Some(value),
			ConfigValue::Secret(secret) => Some(secret.expose()),
			ConfigValue::Flag(_) => None,
		}
	}

	/// Returns the boolean payload of flag values.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			ConfigValue::Flag(flag) => Some(*flag),
			_ => None,
		}
	}
}

/// Minimal configuration produced by the credential resolver.
///
/// Only keys that were supplied with a usable value are present, and `token` never coexists
/// with `username` or `password`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedConfiguration(BTreeMap<ConfigKey, ConfigValue>);
impl ResolvedConfiguration {
	pub(crate) fn insert_text(&mut self, key: ConfigKey, value: &str) {
		self.0.insert(key, ConfigValue::Text(value.to_owned()));
	}

	pub(crate) fn insert_secret(&mut self, key: ConfigKey, value: &str) {
		self.0.insert(key, ConfigValue::Secret(CredentialSecret::new(value)));
	}

	pub(crate) fn insert_flag(&mut self, key: ConfigKey, value: bool) {
		self.0.insert(key, ConfigValue::Flag(value));
	}

	/// Returns the value stored under `key`.
	pub fn get(&self, key: ConfigKey) -> Option<&ConfigValue> {
		self.0.get(&key)
	}

	/// Returns `true` when `key` is present.
	pub fn contains(&self, key: ConfigKey) -> bool {
		self.0.contains_key(&key)
	}

	/// Number of populated keys.
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no key was populated.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates populated entries in serialization order.
	pub fn iter(&self) -> impl Iterator<Item = (ConfigKey, &ConfigValue)> {
		self.0.iter().map(|(key, value)| (*key, value))
	}

	/// AWX endpoint.
	pub fn hostname(&self) -> Option<&str> {
		self.get(ConfigKey::Hostname).and_then(ConfigValue::as_str)
	}

	/// API token.
	pub fn token(&self) -> Option<&str> {
		self.get(ConfigKey::Token).and_then(ConfigValue::as_str)
	}

	/// Basic-auth username.
	pub fn username(&self) -> Option<&str> {
		self.get(ConfigKey::Username).and_then(ConfigValue::as_str)
	}

	/// Basic-auth password.
	pub fn password(&self) -> Option<&str> {
		self.get(ConfigKey::Password).and_then(ConfigValue::as_str)
	}

	/// TLS verification flag, when supplied.
	pub fn verify_ssl(&self) -> Option<bool> {
		self.get(ConfigKey::VerifySsl).and_then(ConfigValue::as_bool)
	}

	/// Authentication scheme carried by the configuration, if any.
	pub fn auth_scheme(&self) -> Option<AuthScheme> {
		if self.contains(ConfigKey::Token) {
			Some(AuthScheme::Token)
		} else if self.contains(ConfigKey::Username) || self.contains(ConfigKey::Password) {
			Some(AuthScheme::Basic)
		} else {
			None
		}
	}

	/// Renders the configuration as a JSON object, exposing secret values.
	pub fn to_json(&self) -> serde_json::Value {
		serde_json::Value::Object(
			self.iter()
				.map(|(key, value)| {
					let value = match value {
						ConfigValue::Text(text) => serde_json::Value::String(text.clone()),
						ConfigValue::Secret(secret) =>
							serde_json::Value::String(secret.expose().to_owned()),
						ConfigValue::Flag(flag) => serde_json::Value::Bool(*flag),
					};

					(key.as_str().to_owned(), value)
				})
				.collect(),
		)
	}
}
