//! Thread-safe in-memory capability backends for local development and tests.

// self
use crate::{
	_prelude::*,
	provider::{
		Namespace, ProviderConfig, ProviderConfigName, ProviderConfigUsage, SecretKeySelector,
		SecretName,
	},
	store::{ProviderConfigSource, SecretSource, SourceError, SourceFuture, UsageTracker},
};

type SecretData = HashMap<String, Vec<u8>>;

/// In-process provider config registry.
#[derive(Clone, Debug, Default)]
pub struct MemoryProviderConfigs(Arc<RwLock<HashMap<ProviderConfigName, ProviderConfig>>>);
impl MemoryProviderConfigs {
	/// Inserts or replaces a provider config, keyed by its name.
	pub fn insert(&self, config: ProviderConfig) {
		self.0.write().insert(config.name.clone(), config);
	}

	/// Removes the provider config called `name`.
	pub fn remove(&self, name: &str) -> Option<ProviderConfig> {
		self.0.write().remove(name)
	}
}
impl FromIterator<ProviderConfig> for MemoryProviderConfigs {
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = ProviderConfig>,
	{
		let map = iter.into_iter().map(|config| (config.name.clone(), config)).collect();

		Self(Arc::new(RwLock::new(map)))
	}
}
impl ProviderConfigSource for MemoryProviderConfigs {
	fn provider_config<'a>(&'a self, name: &'a str) -> SourceFuture<'a, ProviderConfig> {
		let found = self.0.read().get(name).cloned();

		Box::pin(async move {
			found.ok_or_else(|| SourceError::NotFound { kind: "ProviderConfig", name: name.into() })
		})
	}
}

/// In-process secret store holding raw (already decoded) secret data.
#[derive(Clone, Debug, Default)]
pub struct MemorySecretStore(Arc<RwLock<HashMap<(Namespace, SecretName), SecretData>>>);
impl MemorySecretStore {
	/// Inserts or replaces the secret `namespace/name`.
	pub fn insert<I, K, V>(&self, namespace: Namespace, name: SecretName, data: I)
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: Into<Vec<u8>>,
	{
		let data = data.into_iter().map(|(key, value)| (key.into(), value.into())).collect();

		self.0.write().insert((namespace, name), data);
	}

	/// Removes the secret `namespace/name`.
	pub fn remove(&self, namespace: &Namespace, name: &SecretName) -> bool {
		self.0.write().remove(&(namespace.clone(), name.clone())).is_some()
	}

	pub(crate) fn lookup(
		map: &HashMap<(Namespace, SecretName), SecretData>,
		selector: &SecretKeySelector,
	) -> Result<Option<Vec<u8>>, SourceError> {
		let id = (selector.namespace.clone(), selector.name.clone());

		match map.get(&id) {
			Some(data) => Ok(data.get(&selector.key).cloned()),
			None => Err(SourceError::NotFound {
				kind: "Secret",
				name: format!("{}/{}", selector.namespace, selector.name),
			}),
		}
	}
}
impl SecretSource for MemorySecretStore {
	fn secret_key<'a>(
		&'a self,
		selector: &'a SecretKeySelector,
	) -> SourceFuture<'a, Option<Vec<u8>>> {
		let result = Self::lookup(&self.0.read(), selector);

		Box::pin(async move { result })
	}
}

/// Usage bookkeeping entry kept by [`MemoryUsageTracker`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageRecord {
	/// Tracked usage.
	pub usage: ProviderConfigUsage,
	/// Instant the usage was first tracked.
	pub first_used_at: OffsetDateTime,
	/// Instant the usage was last tracked.
	pub last_used_at: OffsetDateTime,
}

/// In-process usage tracker.
#[derive(Clone, Debug, Default)]
pub struct MemoryUsageTracker(Arc<RwLock<HashMap<ProviderConfigUsage, UsageRecord>>>);
impl MemoryUsageTracker {
	fn track_at(&self, usage: ProviderConfigUsage, instant: OffsetDateTime) {
		self.0
			.write()
			.entry(usage.clone())
			.and_modify(|record| record.last_used_at = instant)
			.or_insert_with(|| UsageRecord { usage, first_used_at: instant, last_used_at: instant });
	}

	/// Returns every tracked usage ordered by provider config, kind, and resource name.
	pub fn usages(&self) -> Vec<UsageRecord> {
		let mut records = self.0.read().values().cloned().collect::<Vec<_>>();

		records.sort_by(|a, b| {
			(&a.usage.provider_config, &a.usage.resource.kind, &a.usage.resource.name).cmp(&(
				&b.usage.provider_config,
				&b.usage.resource.kind,
				&b.usage.resource.name,
			))
		});

		records
	}

	/// Returns the tracked usages of the provider config called `name`.
	pub fn usages_of(&self, name: &str) -> Vec<UsageRecord> {
		self.usages()
			.into_iter()
			.filter(|record| record.usage.provider_config.as_ref() == name)
			.collect()
	}
}
impl UsageTracker for MemoryUsageTracker {
	fn track(&self, usage: ProviderConfigUsage) -> SourceFuture<'_, ()> {
		self.track_at(usage, OffsetDateTime::now_utc());

		Box::pin(async { Ok(()) })
	}
}
