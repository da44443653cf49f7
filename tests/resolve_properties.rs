// self
use awx_provider_setup::{
	auth::AuthScheme,
	credentials::{self, ConfigKey, ResolvedConfiguration},
	error::{Error, ErrorKind},
	provider::ProviderDescriptor,
};

fn resolve(payload: &str) -> ResolvedConfiguration {
	credentials::resolve_credentials(payload.as_bytes())
		.expect("Fixture payload should resolve successfully.")
}

fn rendered(payload: &str) -> String {
	serde_json::to_string(&resolve(payload)).expect("Resolved configuration should serialize.")
}

#[test]
fn token_always_excludes_basic_auth() {
	let payloads = [
		r#"{"token":"t"}"#,
		r#"{"token":"t","username":"u"}"#,
		r#"{"token":"t","password":"p"}"#,
		r#"{"token":"t","username":"u","password":"p","verify_ssl":"yes"}"#,
	];

	for payload in payloads {
		let config = resolve(payload);

		assert_eq!(config.token(), Some("t"), "{payload}");
		assert!(!config.contains(ConfigKey::Username), "{payload}");
		assert!(!config.contains(ConfigKey::Password), "{payload}");
		assert_eq!(config.auth_scheme(), Some(AuthScheme::Token));
	}
}

#[test]
fn basic_auth_keeps_only_non_empty_fields() {
	let cases = [
		(r#"{"username":"u","password":"p"}"#, Some("u"), Some("p")),
		(r#"{"username":"u"}"#, Some("u"), None),
		(r#"{"token":"","password":"p"}"#, None, Some("p")),
		(r#"{"username":"","password":""}"#, None, None),
	];

	for (payload, username, password) in cases {
		let config = resolve(payload);

		assert!(!config.contains(ConfigKey::Token), "{payload}");
		assert_eq!(config.username(), username, "{payload}");
		assert_eq!(config.password(), password, "{payload}");
	}
}

#[test]
fn verify_ssl_uses_falsy_allow_list() {
	for value in ["False", " false ", "0", "No", "NO"] {
		let payload = serde_json::json!({ "verify_ssl": value }).to_string();

		assert_eq!(resolve(&payload).verify_ssl(), Some(false), "`{value}` should be falsy.");
	}
	for value in ["true", "yes", "1", "banana"] {
		let payload = serde_json::json!({ "verify_ssl": value }).to_string();

		assert_eq!(resolve(&payload).verify_ssl(), Some(true), "`{value}` should be truthy.");
	}

	assert_eq!(resolve(r#"{"verify_ssl":""}"#).verify_ssl(), None);
	assert_eq!(resolve("{}").verify_ssl(), None);
}

#[test]
fn resolution_is_idempotent() {
	let payload =
		r#"{"verify_ssl":"No","password":"p","hostname":"https://awx.example.com","username":"u"}"#;
	let first = credentials::resolve_credentials(payload.as_bytes())
		.expect("First resolution should succeed.");
	let second = credentials::resolve_credentials(payload.as_bytes())
		.expect("Second resolution should succeed.");

	assert_eq!(first, second);
	assert_eq!(
		serde_json::to_vec(&first).expect("First result should serialize."),
		serde_json::to_vec(&second).expect("Second result should serialize."),
	);
}

#[test]
fn documented_scenarios() {
	assert_eq!(
		rendered(r#"{"hostname":"h","token":"t","username":"u"}"#),
		r#"{"hostname":"h","token":"t"}"#,
	);
	assert_eq!(
		rendered(r#"{"username":"u","password":"p","verify_ssl":"0"}"#),
		r#"{"username":"u","password":"p","verify_ssl":false}"#,
	);
	assert_eq!(rendered("{}"), "{}");

	let descriptor = ProviderDescriptor::new("1.5.7", "ilijamt/awx", "0.29.1");
	let err = credentials::resolve(br#"["hostname","h"]"#, descriptor)
		.expect_err("Array payloads must be rejected.");

	assert_eq!(err.kind(), ErrorKind::InvalidCredentialFormat);
	assert!(matches!(err, Error::InvalidCredentialFormat { .. }));
}

#[test]
fn non_string_values_are_rejected_with_their_path() {
	let err = credentials::resolve_credentials(br#"{"hostname":"h","verify_ssl":false}"#)
		.expect_err("Boolean values must be rejected.");

	match err {
		Error::InvalidCredentialFormat { path, .. } => assert_eq!(path, "verify_ssl"),
		other => panic!("Unexpected error: {other:?}."),
	}
}

#[test]
fn format_errors_do_not_echo_credential_values() {
	let err = credentials::resolve_credentials(br#"{"username":"u","password":987654321}"#)
		.expect_err("Numeric passwords must be rejected.");
	let mut chain = vec![err.to_string(), format!("{err:?}")];
	let mut source = std::error::Error::source(&err);

	while let Some(cause) = source {
		chain.push(cause.to_string());
		source = cause.source();
	}

	assert!(chain.iter().all(|rendered| !rendered.contains("987654321")), "{chain:?}");
	assert!(matches!(err, Error::InvalidCredentialFormat { ref path, .. } if path == "password"));
}
