// self
use crate::_prelude::*;

/// Decoded secret payload: a flat map of field names to string values.
///
/// Absent fields read as empty strings; unknown fields are kept but never consulted. `Debug`
/// lists field names only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct RawCredentials(HashMap<String, String>);
impl RawCredentials {
	/// Decodes a payload that must be a flat JSON object of string values.
	///
	/// Non-object documents (including `null`), non-string values, empty input, trailing data,
	/// invalid UTF-8, and lone surrogate escapes are all rejected with
	/// [`Error::InvalidCredentialFormat`].
	pub fn decode(payload: &[u8]) -> Result<Self> {
		let de = &mut serde_json::Deserializer::from_slice(payload);
		let fields: HashMap<String, String> = serde_path_to_error::deserialize(&mut *de)?;

		de.end().map_err(|e| Error::invalid_format(".", &e))?;

		Ok(Self(fields))
	}

	/// Returns the value of `field`, or an empty string when absent.
	pub fn field(&self, field: &str) -> &str {
		self.0.get(field).map(String::as_str).unwrap_or_default()
	}

	/// Returns the value of `field` only when it is present and non-empty.
	pub fn non_empty(&self, field: &str) -> Option<&str> {
		Some(self.field(field)).filter(|value| !value.is_empty())
	}
}
impl Debug for RawCredentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		let mut keys = self.0.keys().collect::<Vec<_>>();

		keys.sort();

		f.debug_map().entries(keys.into_iter().map(|key| (key, "<redacted>"))).finish()
	}
}
