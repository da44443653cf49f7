//! Read-only [`SecretSource`] backed by a JSON file of Kubernetes-style secret manifests.
//!
//! The file holds an array of objects shaped like
//! `{"metadata":{"namespace":"..","name":".."},"data":{"key":"<base64>"},"stringData":{..}}`.
//! `data` values are base64-decoded on load; `stringData` entries are taken as-is and win
//! over `data` entries with the same key.

// std
use std::{
	fs,
	path::{Path, PathBuf},
};
// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
// self
use crate::{
	_prelude::*,
	provider::{Namespace, SecretKeySelector, SecretName},
	store::{MemorySecretStore, SecretSource, SourceError, SourceFuture},
};

type SecretMap = HashMap<(Namespace, SecretName), HashMap<String, Vec<u8>>>;

#[derive(Debug, Deserialize)]
struct SecretManifest {
	metadata: SecretMetadata,
	#[serde(default)]
	data: HashMap<String, String>,
	#[serde(default, rename = "stringData")]
	string_data: HashMap<String, String>,
}

#[derive(Debug, Deserialize)]
struct SecretMetadata {
	namespace: Namespace,
	name: SecretName,
}

/// Secret store loaded from a manifest file.
#[derive(Clone, Debug)]
pub struct FileSecretStore {
	path: PathBuf,
	inner: Arc<RwLock<SecretMap>>,
}
impl FileSecretStore {
	/// Opens the store at `path`, eagerly loading its manifests. A missing or empty file yields
	/// an empty store.
	pub fn open(path: impl Into<PathBuf>) -> Result<Self, SourceError> {
		let path = path.into();
		let snapshot = Self::load_snapshot(&path)?;

		Ok(Self { path, inner: Arc::new(RwLock::new(snapshot)) })
	}

	/// Re-reads the manifest file, replacing the in-memory snapshot only on success.
	pub fn reload(&self) -> Result<(), SourceError> {
		let snapshot = Self::load_snapshot(&self.path)?;

		*self.inner.write() = snapshot;

		Ok(())
	}

	/// Path backing this store.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn load_snapshot(path: &Path) -> Result<SecretMap, SourceError> {
		if !path.exists() {
			return Ok(HashMap::new());
		}

		let bytes = fs::read(path).map_err(|e| SourceError::Io {
			message: format!("Failed to read {}: {e}", path.display()),
		})?;

		if bytes.is_empty() {
			return Ok(HashMap::new());
		}

		let manifests: Vec<SecretManifest> =
			serde_json::from_slice(&bytes).map_err(|e| SourceError::Serialization {
				message: format!("Failed to parse {}: {e}", path.display()),
			})?;

		manifests.into_iter().map(|manifest| Self::decode_manifest(path, manifest)).collect()
	}

	#[allow(clippy::type_complexity)]
	fn decode_manifest(
		path: &Path,
		manifest: SecretManifest,
	) -> Result<((Namespace, SecretName), HashMap<String, Vec<u8>>), SourceError> {
		let SecretManifest { metadata, data, string_data } = manifest;
		let mut decoded = HashMap::with_capacity(data.len() + string_data.len());

		for (key, value) in data {
			let bytes = STANDARD.decode(value.as_bytes()).map_err(|e| SourceError::Serialization {
				message: format!(
					"Failed to decode {}/{}[{key}] in {}: {e}",
					metadata.namespace,
					metadata.name,
					path.display()
				),
			})?;

			decoded.insert(key, bytes);
		}
		for (key, value) in string_data {
			decoded.insert(key, value.into_bytes());
		}

		Ok(((metadata.namespace, metadata.name), decoded))
	}
}
impl SecretSource for FileSecretStore {
	fn secret_key<'a>(
		&'a self,
		selector: &'a SecretKeySelector,
	) -> SourceFuture<'a, Option<Vec<u8>>> {
		let result = MemorySecretStore::lookup(&self.inner.read(), selector);

		Box::pin(async move { result })
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::{env, process};
	// crates.io
	use tokio::runtime::Runtime;
	// self
	use super::*;

	fn temp_path(label: &str) -> PathBuf {
		let unique = format!(
			"awx_provider_setup_{label}_{}_{}.json",
			process::id(),
			OffsetDateTime::now_utc().unix_timestamp_nanos(),
		);

		env::temp_dir().join(unique)
	}

	fn selector(key: &str) -> SecretKeySelector {
		SecretKeySelector::new(
			Namespace::new("crossplane-system").expect("Namespace fixture should be valid."),
			SecretName::new("awx-creds").expect("Secret fixture should be valid."),
			key,
		)
	}

	#[test]
	fn loads_base64_data_and_string_data() {
		let path = temp_path("manifests");
		let encoded = STANDARD.encode(br#"{"token":"abc123"}"#);
		let manifest = format!(
			r#"[{{"metadata":{{"namespace":"crossplane-system","name":"awx-creds"}},"data":{{"credentials":"{encoded}","extra":"{encoded}"}},"stringData":{{"extra":"plain"}}}}]"#
		);

		fs::write(&path, manifest).expect("Failed to write manifest fixture.");

		let store = FileSecretStore::open(&path).expect("Manifest file should load.");
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");
		let credentials = rt
			.block_on(store.secret_key(&selector("credentials")))
			.expect("Secret should exist.")
			.expect("Key should exist.");

		assert_eq!(credentials, br#"{"token":"abc123"}"#);
		assert_eq!(
			rt.block_on(store.secret_key(&selector("extra"))).expect("Secret should exist."),
			Some(b"plain".to_vec()),
		);
		assert_eq!(
			rt.block_on(store.secret_key(&selector("missing"))).expect("Secret should exist."),
			None,
		);

		fs::remove_file(&path).unwrap_or_else(|e| {
			panic!("Failed to remove temporary manifest file {}: {e}", path.display())
		});
	}

	#[test]
	fn missing_file_yields_empty_store() {
		let store = FileSecretStore::open(temp_path("absent")).expect("Missing file is not an error.");
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");
		let err = rt
			.block_on(store.secret_key(&selector("credentials")))
			.expect_err("Empty store should not contain the secret.");

		assert!(matches!(err, SourceError::NotFound { kind: "Secret", .. }));
	}

	#[test]
	fn invalid_base64_is_a_serialization_error() {
		let path = temp_path("bad_base64");

		fs::write(
			&path,
			r#"[{"metadata":{"namespace":"ns","name":"creds"},"data":{"credentials":"%%%"}}]"#,
		)
		.expect("Failed to write manifest fixture.");

		let err = FileSecretStore::open(&path).expect_err("Invalid base64 must be rejected.");

		assert!(matches!(err, SourceError::Serialization { .. }));

		fs::remove_file(&path).unwrap_or_else(|e| {
			panic!("Failed to remove temporary manifest file {}: {e}", path.display())
		});
	}

	#[test]
	fn reload_swaps_snapshot_only_on_success() {
		let path = temp_path("reload");
		let manifest = |payload: &str| {
			format!(
				r#"[{{"metadata":{{"namespace":"crossplane-system","name":"awx-creds"}},"stringData":{{"credentials":"{payload}"}}}}]"#
			)
		};

		fs::write(&path, manifest("first")).expect("Failed to write manifest fixture.");

		let store = FileSecretStore::open(&path).expect("Manifest file should load.");
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		assert_eq!(store.path(), path.as_path());

		fs::write(&path, manifest("second")).expect("Failed to rewrite manifest fixture.");
		store.reload().expect("Rewritten manifest file should reload.");

		assert_eq!(
			rt.block_on(store.secret_key(&selector("credentials"))),
			Ok(Some(b"second".to_vec())),
		);

		fs::write(&path, "[{").expect("Failed to write truncated manifest fixture.");

		let err = store.reload().expect_err("Truncated manifest must fail to reload.");

		assert!(matches!(err, SourceError::Serialization { .. }));
		assert_eq!(
			rt.block_on(store.secret_key(&selector("credentials"))),
			Ok(Some(b"second".to_vec())),
		);

		fs::remove_file(&path).unwrap_or_else(|e| {
			panic!("Failed to remove temporary manifest file {}: {e}", path.display())
		});
	}
}
