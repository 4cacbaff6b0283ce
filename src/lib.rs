//! Syringe: a minimal runtime service registry
//!
//! Components declare that they are the sole provider of a named capability,
//! other components declare a lazy dependency on that name, and the registry
//! resolves the dependency when it is first read.
//!
//! The free functions in this crate operate on the process-wide registry
//! returned by [`registry`]. The same operations exist as methods on
//! [`Registry`] for code that threads its own registry through a
//! composition root.
//!
//! # Example
//! ```
//! use syringe::Inject;
//!
//! struct ConnPool;
//!
//! struct Reporter {
//!     conn: Inject<ConnPool>,
//! }
//!
//! # syringe::clear();
//! let reporter = Reporter { conn: syringe::inject("db") };
//! assert!(reporter.conn.get().is_err());
//!
//! let pool = syringe::provides::<ConnPool>("db").construct(|| ConnPool).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&pool, &reporter.conn.get().unwrap()));
//!
//! // Tests swap in a stand-in regardless of what is registered.
//! let stand_in = syringe::mock("db");
//! assert!(syringe::get::<ConnPool>("db").is_err());
//! assert!(std::sync::Arc::ptr_eq(&stand_in, &syringe::get("db").unwrap()));
//!
//! syringe::clear();
//! ```

use std::sync::Arc;

pub use syringe_core::{SyringeError, SyringeResult};

/// Core module re-exported from syringe-core.
pub mod core {
    pub use syringe_core::*;
}

/// Registry configuration.
pub mod config;

/// Registry store, providers, bindings and stand-ins.
pub mod registry;

pub use config::RegistryConfig;
pub use registry::{Call, Inject, Provides, Registry, StandIn};

/// The process-wide registry
pub fn registry() -> &'static Registry {
    Registry::global()
}

/// Bind `T` to `name` in the process-wide registry.
///
/// See [`Provides`].
pub fn provides<T>(name: impl Into<String>) -> Provides<'static, T>
where
    T: Send + Sync + 'static,
{
    registry().provides(name)
}

/// Look up `name` in the process-wide registry.
///
/// # Errors
///
/// [`SyringeError::NoCandidate`] ("No provider found for [name]") if
/// nothing is registered, [`SyringeError::TypeMismatch`] if the provider is
/// not a `T`.
pub fn get<T>(name: &str) -> SyringeResult<Arc<T>>
where
    T: ?Sized + Send + Sync + 'static,
{
    registry().get(name)
}

/// Create a deferred binding to `name`. No lookup happens until
/// [`Inject::get`].
pub fn inject<T>(name: impl Into<String>) -> Inject<T>
where
    T: ?Sized,
{
    Inject::named(name)
}

/// Install a fresh [`StandIn`] under `name` in the process-wide registry,
/// replacing any provider.
pub fn mock(name: impl Into<String>) -> Arc<StandIn> {
    registry().mock(name)
}

/// Install `instance` under `name` in the process-wide registry, replacing
/// any provider.
pub fn mock_with<T>(name: impl Into<String>, instance: Arc<T>) -> Arc<T>
where
    T: ?Sized + Send + Sync + 'static,
{
    registry().mock_with(name, instance)
}

/// Remove every provider from the process-wide registry.
pub fn clear() {
    registry().clear()
}
