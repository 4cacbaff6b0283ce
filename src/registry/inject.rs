//! Deferred dependency bindings

use super::store::Registry;
use crate::core::SyringeResult;
use std::any::type_name;
use std::borrow::Cow;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A lazy dependency on the provider registered under a capability name.
///
/// Creating an `Inject` performs no lookup. Each call to [`Inject::get`]
/// reads the live registry once and returns what is registered at that
/// moment; nothing is cached, so providers swapped in between two calls
/// (by a mock or after a clear) are observed.
///
/// A binding can live in a consumer's field, or on the consumer type as an
/// associated const. Reading the const yields the binding itself rather
/// than a resolved provider.
///
/// ```
/// use syringe::{Inject, Registry};
///
/// struct Mailer;
///
/// struct Signup;
///
/// impl Signup {
///     const MAILER: Inject<Mailer> = Inject::new("mailer");
/// }
///
/// let registry = Registry::new();
/// assert_eq!(Signup::MAILER.name(), "mailer");
/// assert!(Signup::MAILER.get_in(&registry).is_err());
///
/// let mailer = registry.provides::<Mailer>("mailer").construct(|| Mailer).unwrap();
/// let resolved = Signup::MAILER.get_in(&registry).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&mailer, &resolved));
/// ```
pub struct Inject<T: ?Sized> {
    name: Cow<'static, str>,
    _dependency: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized> Inject<T> {
    /// Bind to a name known at compile time.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            _dependency: PhantomData,
        }
    }

    /// Bind to a name built at runtime.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Cow::Owned(name.into()),
            _dependency: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl<T> Inject<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    /// Resolve against the process-wide registry.
    ///
    /// # Errors
    ///
    /// Propagates [`Registry::get`] errors unchanged, most notably
    /// [`crate::SyringeError::NoCandidate`] when nothing is registered.
    pub fn get(&self) -> SyringeResult<Arc<T>> {
        self.get_in(Registry::global())
    }

    /// Resolve against an explicit registry.
    pub fn get_in(&self, registry: &Registry) -> SyringeResult<Arc<T>> {
        registry.get::<T>(&self.name)
    }
}

impl<T: ?Sized> Clone for Inject<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            _dependency: PhantomData,
        }
    }
}

impl<T: ?Sized> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("name", &self.name)
            .field("dependency", &type_name::<T>())
            .finish()
    }
}
