//! Strongly typed object names used by provider configs and secret references.

// std
use std::{borrow::Borrow, ops::Deref};
// self
use crate::_prelude::*;

macro_rules! def_name {
	($name:ident, $doc:literal, $kind:literal, $rule:expr) => {
		#[doc = $doc]
		#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(try_from = "String", into = "String")]
		pub struct $name(String);
		impl $name {
			/// Creates a new name after validation.
			pub fn new(value: impl AsRef<str>) -> Result<Self, IdentifierError> {
				let view = value.as_ref();

				$rule.validate($kind, view)?;

				Ok(Self(view.to_owned()))
			}
		}
		impl Deref for $name {
			type Target = str;

			fn deref(&self) -> &Self::Target {
				&self.0
			}
		}
		impl AsRef<str> for $name {
			fn as_ref(&self) -> &str {
				&self.0
			}
		}
		impl From<$name> for String {
			fn from(value: $name) -> Self {
				value.0
			}
		}
		impl TryFrom<String> for $name {
			type Error = IdentifierError;

			fn try_from(value: String) -> Result<Self, Self::Error> {
				$rule.validate($kind, &value)?;

				Ok(Self(value))
			}
		}
		impl Borrow<str> for $name {
			fn borrow(&self) -> &str {
				&self.0
			}
		}
		impl Debug for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				write!(f, concat!($kind, "({})"), self.0)
			}
		}
		impl Display for $name {
			fn fmt(&self, f: &mut Formatter) -> FmtResult {
				f.write_str(&self.0)
			}
		}
		impl FromStr for $name {
			type Err = IdentifierError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				Self::new(s)
			}
		}
	};
}

/// Error returned when name validation fails.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, ThisError)]
pub enum IdentifierError {
	/// The name was empty.
	#[error("{kind} name cannot be empty.")]
	Empty {
		/// Kind of name (provider config, secret, namespace).
		kind: &'static str,
	},
	/// The name contains a character outside the allowed set.
	#[error("{kind} name contains invalid character {character:?}.")]
	InvalidCharacter {
		/// Kind of name (provider config, secret, namespace).
		kind: &'static str,
		/// First offending character.
		character: char,
	},
	/// The name does not start and end with a lowercase alphanumeric character.
	#[error("{kind} name must start and end with a lowercase alphanumeric character.")]
	InvalidBoundary {
		/// Kind of name (provider config, secret, namespace).
		kind: &'static str,
	},
	/// The name exceeded the allowed character count.
	#[error("{kind} name exceeds {max} characters.")]
	TooLong {
		/// Kind of name (provider config, secret, namespace).
		kind: &'static str,
		/// Maximum permitted character count.
		max: usize,
	},
}

/// Kubernetes object naming rule.
#[derive(Clone, Copy, Debug)]
struct NameRule {
	max: usize,
	allow_dot: bool,
}
impl NameRule {
	/// DNS-1123 subdomain: lowercase alphanumerics, `-` and `.`.
	const SUBDOMAIN: Self = Self { max: 253, allow_dot: true };
	/// DNS-1123 label: lowercase alphanumerics and `-`.
	const LABEL: Self = Self { max: 63, allow_dot: false };

	fn validate(self, kind: &'static str, view: &str) -> Result<(), IdentifierError> {
		if view.is_empty() {
			return Err(IdentifierError::Empty { kind });
		}
		if view.len() > self.max {
			return Err(IdentifierError::TooLong { kind, max: self.max });
		}
		if let Some(character) = view.chars().find(|c| !self.allows(*c)) {
			return Err(IdentifierError::InvalidCharacter { kind, character });
		}

		let alnum = |c: Option<char>| c.is_some_and(|c| c.is_ascii_alphanumeric());

		if !alnum(view.chars().next()) || !alnum(view.chars().next_back()) {
			return Err(IdentifierError::InvalidBoundary { kind });
		}

		Ok(())
	}

	fn allows(self, c: char) -> bool {
		c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || (self.allow_dot && c == '.')
	}
}

def_name! {
	ProviderConfigName,
	"Name of a provider config object.",
	"ProviderConfig",
	NameRule::SUBDOMAIN
}
def_name! {
	SecretName,
	"Name of a secret holding credential material.",
	"Secret",
	NameRule::SUBDOMAIN
}
def_name! { Namespace, "Namespace scoping a secret.", "Namespace", NameRule::LABEL }
