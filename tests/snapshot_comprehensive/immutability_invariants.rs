//! Tier 3: Immutability
//!
//! Every snapshot comes back frozen. Writes fail (noisy) or are ignored
//! (silent); reads always reflect the encoded attributes.

use std::sync::Arc;
use std::thread;

use freezer::{FlatMapCodec, FreezerError, FrozenRecord, Record, SnapshotCodec, TypeReference, Value};

use crate::test_utils::*;

fn decoded(silent: bool) -> FrozenRecord {
    let codec = FlatMapCodec::new(factory());
    let map = codec.encode(&product()).unwrap();
    codec.decode(&TypeReference::from("product"), &map, silent).unwrap()
}

#[test]
fn snapshot_is_frozen_and_readonly() {
    let frozen = decoded(false);
    assert!(frozen.is_frozen());
    assert!(frozen.is_readonly());
    assert!(!frozen.is_silent());
}

#[test]
fn noisy_writes_fail_and_preserve_value() {
    init_tracing();
    let mut frozen = decoded(false);
    for name in ["merchant_id", "name", "description", "price"] {
        let before = frozen.read(name).unwrap().clone();
        let result = frozen.write(name, Value::from("bogus"));
        assert!(
            matches!(result, Err(FreezerError::MutationOnFrozen { ref attribute }) if attribute == name),
            "write to {name} should be refused, got {result:?}"
        );
        assert_eq!(frozen.read(name).unwrap(), &before);
    }
}

#[test]
fn silent_writes_are_no_ops() {
    init_tracing();
    let mut frozen = decoded(true);
    frozen.write("name", Value::from("bogus")).unwrap();
    frozen.write("price", Value::Null).unwrap();
    assert_eq!(frozen.read("name").unwrap(), &Value::from("Settlers of Catan"));
    assert_eq!(frozen.read("price").unwrap(), &Value::from("33.41"));
}

#[test]
fn non_mutation_failures_always_propagate() {
    for silent in [false, true] {
        let mut frozen = decoded(silent);
        assert!(matches!(
            frozen.invoke("blah", &[]),
            Err(FreezerError::UnknownOperation { .. })
        ));
        assert!(matches!(
            frozen.read("blah"),
            Err(FreezerError::UnknownAttribute { .. })
        ));
    }
}

#[test]
fn writes_to_undeclared_attributes_are_never_absorbed() {
    init_tracing();
    for silent in [false, true] {
        let mut frozen = decoded(silent);
        let result = frozen.write("blah", Value::from("x"));
        assert!(
            matches!(result, Err(FreezerError::UnknownAttribute { ref name }) if name == "blah"),
            "silent={silent}: got {result:?}"
        );
        assert!(frozen.read("blah").is_err());
    }
}

#[test]
fn named_operations_are_forwarded() {
    let mut frozen = decoded(false);
    assert_eq!(frozen.invoke("type_name", &[]).unwrap(), Value::from("Product"));
    assert_eq!(frozen.invoke("is_frozen", &[]).unwrap(), Value::Bool(true));
    assert_eq!(frozen.invoke("is_changed", &[]).unwrap(), Value::Bool(false));
    assert!(matches!(
        frozen.invoke("reset", &[Value::from("name")]),
        Err(FreezerError::MutationOnFrozen { .. })
    ));
}

#[test]
fn encoding_does_not_freeze_the_source() {
    let mut source = product();
    let codec = FlatMapCodec::new(factory());
    codec.encode(&source).unwrap();

    assert!(!source.is_frozen());
    source.write_attribute("name", Value::from("Catan")).unwrap();
}

#[test]
fn snapshot_can_be_shared_between_threads() {
    let frozen = Arc::new(decoded(false));
    let readers: Vec<_> = (0..8)
        .map(|_| {
            let frozen = Arc::clone(&frozen);
            thread::spawn(move || frozen.read("name").unwrap().clone())
        })
        .collect();

    for reader in readers {
        assert_eq!(reader.join().unwrap(), Value::from("Settlers of Catan"));
    }
}

#[test]
fn snapshots_are_compared_by_identity() {
    let a = decoded(false);
    let b = decoded(false);
    assert_eq!(a.attributes(), b.attributes());
    assert!(!a.ptr_eq(&b));
}
