//! Construct-then-register wrapper for provider types

use super::store::Registry;
use crate::core::{SyringeError, SyringeResult};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// Binds a provider type `T` to a capability name.
///
/// Every instance built through [`Provides::construct`] or
/// [`Provides::try_construct`] is registered under that name as soon as its
/// constructor returns. The name is bound once, here, so all instances target
/// the same name and a second successful construction collides with the
/// first.
///
/// The constructor always runs to completion. Only the registration step can
/// reject the instance, in which case it is dropped and the error is returned
/// to the caller.
///
/// # Example
///
/// ```
/// use syringe::Registry;
///
/// struct ConnPool {
///     size: usize,
/// }
///
/// impl ConnPool {
///     fn new(size: usize) -> Self {
///         Self { size }
///     }
/// }
///
/// let registry = Registry::new();
/// let pools = registry.provides::<ConnPool>("db");
///
/// let pool = pools.construct(|| ConnPool::new(4)).unwrap();
/// assert_eq!(registry.get::<ConnPool>("db").unwrap().size, pool.size);
///
/// let err = pools.construct(|| ConnPool::new(8)).err().unwrap();
/// assert_eq!(err.to_string(), "A provider for [db] already exists");
/// ```
pub struct Provides<'r, T> {
    registry: &'r Registry,
    name: String,
    _provider: PhantomData<fn() -> T>,
}

impl<'r, T> Provides<'r, T>
where
    T: Send + Sync + 'static,
{
    pub(crate) fn new(registry: &'r Registry, name: impl Into<String>) -> Self {
        Self {
            registry,
            name: name.into(),
            _provider: PhantomData,
        }
    }

    /// Capability name instances are registered under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `init` and register the resulting instance.
    ///
    /// # Errors
    ///
    /// - [`SyringeError::DuplicateProvider`] if a provider for the name
    ///   already exists (whatever its type)
    /// - [`SyringeError::InvalidName`] if the name is empty and name
    ///   validation is enabled
    pub fn construct<F>(&self, init: F) -> SyringeResult<Arc<T>>
    where
        F: FnOnce() -> T,
    {
        let instance = Arc::new(init());
        self.registry.provide(self.name.as_str(), instance)
    }

    /// Run a fallible `init` and register the resulting instance.
    ///
    /// Constructor errors are returned as-is without touching the registry;
    /// registration errors are converted into `E`.
    pub fn try_construct<F, E>(&self, init: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Result<T, E>,
        E: From<SyringeError>,
    {
        let instance = Arc::new(init()?);
        Ok(self.registry.provide(self.name.as_str(), instance)?)
    }
}

impl<T> Clone for Provides<'_, T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry,
            name: self.name.clone(),
            _provider: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Provides<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provides")
            .field("name", &self.name)
            .field("provider", &std::any::type_name::<T>())
            .finish()
    }
}
