/// Values that switch TLS verification off once trimmed and lower-cased.
const FALSY: [&str; 3] = ["false", "0", "no"];

/// Normalizes a loosely typed `verify_ssl` value.
///
/// Returns `None` for an empty input so the caller's default applies. Any non-empty value
/// outside the falsy allow-list, including malformed ones, keeps verification enabled.
pub fn normalize_verify_ssl(value: &str) -> Option<bool> {
	if value.is_empty() {
		return None;
	}

	let normalized = value.trim().to_lowercase();

	Some(!FALSY.contains(&normalized.as_str()))
}
