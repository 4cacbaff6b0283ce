//! Registry store holding one provider per capability name

use super::mocks::StandIn;
use super::provide::Provides;
use crate::config::RegistryConfig;
use crate::core::{SyringeError, SyringeResult};
use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, trace, warn};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// A registered provider.
///
/// `instance` always holds an `Arc<T>` for the `T` named by `type_name`,
/// so lookups hand out clones of the same allocation.
struct ProviderEntry {
    instance: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
}

impl ProviderEntry {
    fn new<T>(instance: Arc<T>) -> Self
    where
        T: ?Sized + Send + Sync + 'static,
    {
        Self {
            instance: Box::new(instance),
            type_name: type_name::<T>(),
        }
    }

    fn downcast<T>(&self) -> Option<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.instance.downcast_ref::<Arc<T>>().cloned()
    }
}

/// Mapping from capability name to provider instance
///
/// Instances are stored as `Arc<T>`; `T` may be a trait object
/// (`Arc<dyn Database>`), in which case lookups must ask for the same
/// `dyn Database` type. The registry keeps a strong reference to every
/// instance until [`Registry::clear`].
///
/// Most applications use the process-wide registry returned by
/// [`Registry::global`] (or [`crate::registry`]). A composition root may
/// create its own with [`Registry::new`] and pass it around instead.
pub struct Registry {
    config: RegistryConfig,
    providers: RwLock<HashMap<String, ProviderEntry>>,
}

impl Registry {
    /// Create an empty registry with default settings
    pub fn new() -> Self {
        Self::with_config(RegistryConfig::default())
    }

    /// Create an empty registry with the given settings
    pub fn with_config(config: RegistryConfig) -> Self {
        Self {
            config,
            providers: RwLock::new(HashMap::new()),
        }
    }

    /// The process-wide registry.
    ///
    /// Created empty on first use and never replaced; [`Registry::clear`]
    /// empties it in place.
    pub fn global() -> &'static Registry {
        GLOBAL.get_or_init(Registry::new)
    }

    /// Create the process-wide registry with custom settings.
    ///
    /// # Errors
    ///
    /// Returns [`SyringeError::Config`] if the global registry was already
    /// created, either by an earlier call or by first use.
    pub fn init_global(config: RegistryConfig) -> SyringeResult<&'static Registry> {
        GLOBAL.set(Registry::with_config(config)).map_err(|_| {
            SyringeError::Config("Global registry is already initialized".to_string())
        })?;
        Ok(Self::global())
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Look up the provider registered under `name`.
    ///
    /// # Errors
    ///
    /// - [`SyringeError::NoCandidate`] if nothing is registered under `name`
    /// - [`SyringeError::TypeMismatch`] if the provider is not a `T`
    pub fn get<T>(&self, name: &str) -> SyringeResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        trace!(registry = %self.config.label, name, "Resolving provider");

        let providers = self.read();
        let entry = providers
            .get(name)
            .ok_or_else(|| SyringeError::NoCandidate(name.to_string()))?;

        entry.downcast::<T>().ok_or_else(|| SyringeError::TypeMismatch {
            name: name.to_string(),
            expected: type_name::<T>(),
            actual: entry.type_name,
        })
    }

    /// Check whether a provider is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Names of all registered providers, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Register an already-built instance as the sole provider for `name`.
    ///
    /// Returns the same `Arc` that was passed in.
    ///
    /// # Errors
    ///
    /// - [`SyringeError::DuplicateProvider`] if `name` is occupied; the
    ///   existing provider is left untouched
    /// - [`SyringeError::InvalidName`] if `name` is empty and name
    ///   validation is enabled
    pub fn provide<T>(&self, name: impl Into<String>, instance: Arc<T>) -> SyringeResult<Arc<T>>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        let name = name.into();
        if self.config.validate_names && name.is_empty() {
            return Err(SyringeError::InvalidName(name));
        }

        self.set(name, ProviderEntry::new(Arc::clone(&instance)))?;
        Ok(instance)
    }

    /// Bind `T` to `name` so that every instance constructed through the
    /// returned [`Provides`] registers itself here.
    pub fn provides<T>(&self, name: impl Into<String>) -> Provides<'_, T>
    where
        T: Send + Sync + 'static,
    {
        Provides::new(self, name)
    }

    /// Install a fresh [`StandIn`] under `name`, replacing any provider.
    pub fn mock(&self, name: impl Into<String>) -> Arc<StandIn> {
        let name = name.into();
        let stand_in = Arc::new(StandIn::new(name.clone()));
        self.mock_with(name, stand_in)
    }

    /// Install `instance` under `name`, replacing any provider.
    ///
    /// Never fails with [`SyringeError::DuplicateProvider`]; returns the
    /// same `Arc` that was passed in.
    pub fn mock_with<T>(&self, name: impl Into<String>, instance: Arc<T>) -> Arc<T>
    where
        T: ?Sized + Send + Sync + 'static,
    {
        self.overwrite(name.into(), ProviderEntry::new(Arc::clone(&instance)));
        instance
    }

    /// Remove every provider.
    ///
    /// `Arc`s handed out earlier stay valid; only later lookups are affected.
    pub fn clear(&self) {
        let mut providers = self.write();
        let removed = std::mem::take(&mut *providers);
        drop(providers);

        debug!(
            registry = %self.config.label,
            count = removed.len(),
            "Cleared providers"
        );
        // Dropped outside the lock so provider destructors may use the registry.
        drop(removed);
    }

    /// Store `entry` under `name` unless the name is occupied.
    ///
    /// An occupied name fails with [`SyringeError::DuplicateProvider`] and
    /// nothing changes.
    fn set(&self, name: String, entry: ProviderEntry) -> SyringeResult<()> {
        let providers = self.write();

        if let Some(existing) = providers.get(&name).map(|existing| existing.type_name) {
            drop(providers);
            warn!(
                registry = %self.config.label,
                name = %name,
                existing,
                rejected = entry.type_name,
                "Rejected duplicate provider"
            );
            return Err(SyringeError::DuplicateProvider(name));
        }

        self.insert(providers, name, entry);
        Ok(())
    }

    /// Store `entry` under `name`, replacing any provider.
    fn overwrite(&self, name: String, entry: ProviderEntry) {
        self.insert(self.write(), name, entry);
    }

    /// Insert through a held write guard.
    ///
    /// The guard is released before logging and before the replaced entry is
    /// dropped, so subscribers and provider destructors may use the registry.
    fn insert(
        &self,
        mut providers: RwLockWriteGuard<'_, HashMap<String, ProviderEntry>>,
        name: String,
        entry: ProviderEntry,
    ) {
        let provider = entry.type_name;
        let previous = providers.insert(name.clone(), entry);
        drop(providers);

        match &previous {
            Some(replaced) => warn!(
                registry = %self.config.label,
                name = %name,
                replaced = replaced.type_name,
                provider,
                "Overriding provider"
            ),
            None => debug!(
                registry = %self.config.label,
                name = %name,
                provider,
                "Registered provider"
            ),
        }
        drop(previous);
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ProviderEntry>> {
        self.providers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ProviderEntry>> {
        self.providers.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("label", &self.config.label)
            .field("providers", &self.names())
            .finish()
    }
}
