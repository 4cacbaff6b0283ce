//! Provider registration through the process-wide registry

use super::common::{setup, ConnPool};
use serial_test::serial;
use std::sync::Arc;
use syringe::{RegistryConfig, SyringeError};

#[test]
#[serial]
fn test_provide_one() {
    setup();

    let pool = syringe::provides::<ConnPool>("db")
        .construct(|| ConnPool::new("postgres://localhost"))
        .unwrap();

    let resolved = syringe::get::<ConnPool>("db").unwrap();
    assert!(Arc::ptr_eq(&pool, &resolved));
    assert!(syringe::registry().contains("db"));
}

#[test]
#[serial]
fn test_provide_duplicate() {
    setup();
    let pools = syringe::provides::<ConnPool>("db");

    let first = pools.construct(|| ConnPool::new("first")).unwrap();
    let err = pools.construct(|| ConnPool::new("second")).unwrap_err();

    assert!(matches!(err, SyringeError::DuplicateProvider(ref name) if name == "db"));
    assert_eq!(err.to_string(), "A provider for [db] already exists");

    let resolved = syringe::get::<ConnPool>("db").unwrap();
    assert!(Arc::ptr_eq(&first, &resolved));
    assert_eq!(resolved.url, "first");
}

#[test]
#[serial]
fn test_provide_duplicate_other_type() {
    setup();

    #[derive(Debug)]
    struct ReplicaPool;

    syringe::provides::<ConnPool>("db")
        .construct(|| ConnPool::new("primary"))
        .unwrap();

    let err = syringe::provides::<ReplicaPool>("db")
        .construct(|| ReplicaPool)
        .unwrap_err();
    assert_eq!(err.to_string(), "A provider for [db] already exists");
    assert_eq!(syringe::get::<ConnPool>("db").unwrap().url, "primary");
}

#[test]
#[serial]
fn test_provide_duplicate_after_separate_bindings() {
    setup();

    // Two independent bindings to the same name still collide.
    syringe::provides::<ConnPool>("db")
        .construct(|| ConnPool::new("a"))
        .unwrap();
    let err = syringe::provides::<ConnPool>("db")
        .construct(|| ConnPool::new("b"))
        .unwrap_err();
    assert!(err.is_duplicate());
}

#[test]
#[serial]
fn test_try_construct_with_anyhow() {
    setup();

    fn connect(url: &str) -> anyhow::Result<ConnPool> {
        if url.is_empty() {
            anyhow::bail!("missing database url");
        }
        Ok(ConnPool::new(url))
    }

    let pools = syringe::provides::<ConnPool>("db");

    let err = pools.try_construct(|| connect("")).unwrap_err();
    assert_eq!(err.to_string(), "missing database url");
    assert!(syringe::get::<ConnPool>("db").is_err());

    let pool = pools.try_construct(|| connect("sqlite::memory:")).unwrap();
    assert_eq!(pool.url, "sqlite::memory:");

    let err = pools.try_construct(|| connect("sqlite::memory:")).unwrap_err();
    let registry_err = err.downcast_ref::<SyringeError>().unwrap();
    assert!(registry_err.is_duplicate());
}

#[test]
#[serial]
fn test_provide_prebuilt_trait_object() {
    setup();

    trait Clock: Send + Sync {
        fn now(&self) -> u64;
    }

    struct Fixed(u64);

    impl Clock for Fixed {
        fn now(&self) -> u64 {
            self.0
        }
    }

    let clock: Arc<dyn Clock> = Arc::new(Fixed(1_700_000_000));
    syringe::registry().provide("clock", clock).unwrap();

    assert_eq!(syringe::get::<dyn Clock>("clock").unwrap().now(), 1_700_000_000);
}

#[test]
#[serial]
fn test_init_global_after_first_use_fails() {
    setup();

    let err = syringe::Registry::init_global(RegistryConfig::default()).unwrap_err();
    assert!(matches!(err, SyringeError::Config(_)));
    assert_eq!(syringe::registry().config(), &RegistryConfig::default());
}
