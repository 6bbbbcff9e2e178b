//! Tier 4: Associations
//!
//! An order keeps frozen copies of its product and addresses, each in its
//! own column, mixing flat-map and serialized storage.

use freezer::{
    FlatMapCodec, FreezerConfig, FreezerError, FrozenAssociation, Record, SerializedCodec, Value,
};

use crate::test_utils::*;

/// An owner with three frozen slots
struct Order {
    product: FrozenAssociation<FlatMapCodec>,
    billing_address: FrozenAssociation<SerializedCodec>,
    shipping_address: FrozenAssociation<FlatMapCodec>,
}

impl Order {
    fn new() -> Self {
        let factory = factory();
        Order {
            product: FrozenAssociation::new("product", FlatMapCodec::new(factory.clone()))
                .column_name("line_item"),
            billing_address: FrozenAssociation::new(
                "billing_address",
                SerializedCodec::new(factory.clone()),
            )
            .class_name("Address"),
            shipping_address: FrozenAssociation::configured(
                "shipping_address",
                FlatMapCodec::new(factory),
                &FreezerConfig {
                    silent: true,
                    ..FreezerConfig::default()
                },
            )
            .class_name("Address"),
        }
    }
}

#[test]
fn empty_slots_read_as_none() {
    let order = Order::new();
    assert!(order.product.get().unwrap().is_none());
    assert!(order.billing_address.get().unwrap().is_none());
    assert!(order.shipping_address.get().unwrap().is_none());
}

#[test]
fn freezing_associations_fills_columns() {
    init_tracing();
    let mut order = Order::new();
    order.product.set(Some(&product())).unwrap();
    order.billing_address.set(Some(&billing_address())).unwrap();
    order.shipping_address.set(Some(&shipping_address())).unwrap();

    assert_eq!(order.product.column(), "line_item");
    let line_item = order.product.column_value().unwrap();
    assert_eq!(line_item.get("price:decimal"), Some(&Some("33.41".to_string())));

    let billing = order.billing_address.column_value().unwrap();
    assert_eq!(billing.get("zip"), Some(&Value::Int(90001)));

    let shipping = order.shipping_address.column_value().unwrap();
    assert_eq!(shipping.get("customer_id:identifier"), Some(&None));
    assert_eq!(shipping.get("line2:string"), Some(&Some(String::new())));
    assert_eq!(shipping.get("zip:integer"), Some(&Some("90002".to_string())));
}

#[test]
fn readers_return_frozen_copies() {
    let mut order = Order::new();
    order.product.set(Some(&product())).unwrap();
    order.billing_address.set(Some(&billing_address())).unwrap();
    order.shipping_address.set(Some(&shipping_address())).unwrap();

    let product = order.product.get().unwrap().unwrap();
    let billing = order.billing_address.get().unwrap().unwrap();
    let shipping = order.shipping_address.get().unwrap().unwrap();
    for frozen in [product, billing, shipping] {
        assert!(frozen.is_frozen());
        assert!(frozen.is_readonly());
    }
}

#[test]
fn frozen_copy_matches_assignee() {
    let mut order = Order::new();
    let source = shipping_address();
    order.shipping_address.set(Some(&source)).unwrap();

    let frozen = order.shipping_address.get().unwrap().unwrap();
    for (name, value) in source.attributes() {
        let read = frozen.read(name).unwrap();
        if value.is_null() {
            assert!(read.is_null(), "{name} should be null");
        } else {
            assert_eq!(read.to_string(), value.to_string(), "{name}");
        }
    }
}

#[test]
fn loading_previously_frozen_columns() {
    let mut source = Order::new();
    source.product.set(Some(&product())).unwrap();
    source.shipping_address.set(Some(&shipping_address())).unwrap();

    let mut order = Order::new();
    order.product.load(source.product.column_value().cloned());
    order.shipping_address.load(source.shipping_address.column_value().cloned());

    let product = order.product.get().unwrap().unwrap();
    assert_eq!(product.read("name").unwrap(), &Value::from("Settlers of Catan"));
    let shipping = order.shipping_address.get().unwrap().unwrap();
    assert_eq!(shipping.read("city").unwrap(), &Value::from("Seattle"));
}

#[test]
fn noisy_slot_refuses_changes_and_silent_slot_ignores_them() {
    let mut order = Order::new();
    order.product.set(Some(&product())).unwrap();
    order.shipping_address.set(Some(&shipping_address())).unwrap();

    let product = order.product.get_mut().unwrap().unwrap();
    assert!(matches!(
        product.write("name", Value::from("bogus")),
        Err(FreezerError::MutationOnFrozen { .. })
    ));

    let shipping = order.shipping_address.get_mut().unwrap().unwrap();
    shipping.write("city", Value::from("Portland")).unwrap();
    assert_eq!(shipping.read("city").unwrap(), &Value::from("Seattle"));
}

#[test]
fn assignee_is_left_mutable_and_detached() {
    let mut order = Order::new();
    let mut source = product();
    order.product.set(Some(&source)).unwrap();

    assert!(!source.is_frozen());
    assert!(!source.is_readonly());
    source.write_attribute("name", Value::from("bogus")).unwrap();

    let frozen = order.product.get().unwrap().unwrap();
    assert_eq!(frozen.read("name").unwrap(), &Value::from("Settlers of Catan"));
}

#[test]
fn overwriting_and_clearing() {
    let mut order = Order::new();
    order.shipping_address.set(Some(&shipping_address())).unwrap();

    assert!(order.shipping_address.set(None).unwrap().is_none());
    assert!(order.shipping_address.column_value().is_none());

    let source = billing_address();
    let frozen = order.shipping_address.set(Some(&source)).unwrap().unwrap();
    assert_eq!(frozen.read("line1").unwrap(), &Value::from("123 Union Street"));
    assert!(order.shipping_address.column_value().is_some());
}

#[test]
fn wrong_record_type_is_rejected() {
    let mut order = Order::new();
    order.product.set(Some(&product())).unwrap();

    let result = order.product.set(Some(&shipping_address()));
    assert!(matches!(result, Err(FreezerError::TypeMismatch { .. })));

    let frozen = order.product.get().unwrap().unwrap();
    assert_eq!(frozen.type_name(), "Product");
}
