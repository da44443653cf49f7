//! Authentication scheme classification.

// self
use crate::_prelude::*;

/// Authentication scheme represented by a resolved configuration.
///
/// Token and basic authentication are mutually exclusive towards the AWX API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthScheme {
	/// Bearer/OAuth token authentication.
	Token,
	/// Username and/or password authentication.
	Basic,
}
impl AuthScheme {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			AuthScheme::Token => "token",
			AuthScheme::Basic => "basic",
		}
	}
}
impl Display for AuthScheme {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
