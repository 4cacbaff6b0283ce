//! Runtime service registry
//!
//! A [`Registry`] maps capability names to shared provider instances.
//! Providers register themselves when constructed through [`Provides`],
//! consumers hold an [`Inject`] binding that resolves on each access, and
//! tests force substitutes in with [`Registry::mock`] / [`Registry::mock_with`].
//!
//! # Example
//! ```
//! use syringe::{Inject, Registry};
//!
//! struct ConnPool {
//!     url: String,
//! }
//!
//! struct Reporter {
//!     conn: Inject<ConnPool>,
//! }
//!
//! let registry = Registry::new();
//! let reporter = Reporter { conn: Inject::new("db") };
//! assert!(reporter.conn.get_in(&registry).is_err());
//!
//! let pool = registry
//!     .provides::<ConnPool>("db")
//!     .construct(|| ConnPool { url: "sqlite::memory:".to_string() })
//!     .unwrap();
//!
//! let resolved = reporter.conn.get_in(&registry).unwrap();
//! assert!(std::sync::Arc::ptr_eq(&pool, &resolved));
//! assert_eq!(resolved.url, "sqlite::memory:");
//! ```

pub mod inject;
pub mod mocks;
pub mod provide;
pub mod store;

// Re-export key types
pub use inject::Inject;
pub use mocks::{Call, StandIn};
pub use provide::Provides;
pub use store::Registry;
