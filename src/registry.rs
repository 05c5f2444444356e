//! Expert acquisition and caching.
//!
//! The registry owns the segmentation policies known by name and a cache of
//! stateless experts keyed by `(policy name, environment)`. Cached experts are
//! shared (`Arc`) for the lifetime of the registry. Stateful experts are
//! always built fresh and never retained.

use crate::environment::Environment;
use crate::error::{Error, Result};
use crate::expert::{Expert, StatefulExpert};
use crate::policy::{SegmentationPolicy, SeparatorPolicy, StructuredType};
use dashmap::DashMap;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};
use tracing::debug;

type EnvironmentCache = DashMap<Environment, Arc<Expert>>;

/// Factory and cache for experts.
///
/// Share one registry between threads with `Arc<ExpertRegistry>` or a
/// `&'static` reference; all acquisition methods take `&self`.
#[derive(Default)]
pub struct ExpertRegistry {
    policies: HashMap<String, Arc<dyn SegmentationPolicy>>,
    experts: DashMap<String, Arc<EnvironmentCache>>,
    default_expert: OnceLock<Arc<Expert>>,
}

impl ExpertRegistry {
    /// Create a registry with no named policies.
    ///
    /// The default expert is still available through [`expert`](Self::expert).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry with every [`StructuredType`] registered.
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for ty in StructuredType::ALL {
            registry.insert(Arc::new(ty.policy()));
        }
        registry
    }

    /// Register a policy under its name. Later registrations replace earlier
    /// ones with the same name and drop experts cached for it.
    pub fn register(&mut self, policy: Arc<dyn SegmentationPolicy>) -> Result<()> {
        if policy.name().trim().is_empty() {
            return Err(Error::InvalidPolicy("policy name must not be empty".into()));
        }
        self.insert(policy);
        Ok(())
    }

    fn insert(&mut self, policy: Arc<dyn SegmentationPolicy>) {
        let key = policy.name().to_ascii_lowercase();
        debug!(policy = %key, "registering segmentation policy");
        self.experts.remove(&key);
        self.policies.insert(key, policy);
    }

    /// Look up a registered policy by name (case-insensitive).
    pub fn policy(&self, name: impl AsRef<str>) -> Result<Arc<dyn SegmentationPolicy>> {
        let name = name.as_ref();
        self.policies
            .get(&name.to_ascii_lowercase())
            .cloned()
            .ok_or_else(|| Error::UnknownPolicy(name.to_string()))
    }

    /// Names of all registered policies, sorted.
    #[must_use]
    pub fn policy_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.policies.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Shared expert for the default separators and default environment.
    pub fn expert(&self) -> Arc<Expert> {
        Arc::clone(self.default_expert.get_or_init(|| {
            debug!("creating default expert");
            Arc::new(Expert::new(
                Arc::new(SeparatorPolicy::default_policy()),
                None,
            ))
        }))
    }

    /// Shared expert for a named policy in the default environment.
    pub fn expert_for(&self, policy: impl AsRef<str>) -> Result<Arc<Expert>> {
        self.expert_with(policy, None)
    }

    /// Shared expert for a named policy and environment.
    ///
    /// Equal `(policy, environment)` keys always yield the same instance.
    /// Concurrent first requests may each build a candidate; the first one
    /// inserted is kept and returned to every caller.
    pub fn expert_with(
        &self,
        policy: impl AsRef<str>,
        environment: Option<Environment>,
    ) -> Result<Arc<Expert>> {
        let name = policy.as_ref();
        let environment = Environment::resolve(environment);
        let key = name.to_ascii_lowercase();

        let cache = self.environment_cache(&key);
        if let Some(expert) = cache.get(&environment) {
            return Ok(Arc::clone(expert.value()));
        }

        let policy = self.policy(name)?;
        debug!(policy = %key, ?environment, "creating shared expert");
        let candidate = Arc::new(Expert::new(policy, Some(environment)));
        let entry = cache.entry(environment).or_insert(candidate);
        Ok(Arc::clone(entry.value()))
    }

    fn environment_cache(&self, key: &str) -> Arc<EnvironmentCache> {
        if let Some(cache) = self.experts.get(key) {
            return Arc::clone(cache.value());
        }
        let entry = self.experts.entry(key.to_string()).or_default();
        Arc::clone(entry.value())
    }

    /// New private stateful expert for a named policy.
    pub fn stateful_expert(
        &self,
        policy: impl AsRef<str>,
        environment: Option<Environment>,
    ) -> Result<StatefulExpert> {
        let policy = self.policy(policy)?;
        Ok(StatefulExpert::new(policy, environment))
    }

    /// Number of cached shared experts, excluding the default expert.
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.experts.iter().map(|cache| cache.value().len()).sum()
    }
}

impl std::fmt::Debug for ExpertRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpertRegistry")
            .field("policies", &self.policy_names())
            .field("cached", &self.cached_len())
            .finish_non_exhaustive()
    }
}
