//! Tier 1: Codec Invariants
//!
//! Key round trip, value round trip, null propagation, type gating and
//! version gating, checked through the public facade.

use freezer::{
    decode_key, decode_value, encode_key, encode_value, EncodedMap, FlatMapCodec, FreezerError,
    TypeTag, Value,
};
use proptest::prelude::*;

use crate::test_utils::*;

fn arb_type_tag() -> impl Strategy<Value = TypeTag> {
    prop::sample::select(TypeTag::ALL.to_vec())
}

fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        (-1.0e9f64..1.0e9).prop_map(Value::Float),
        ".*".prop_map(Value::String),
    ]
}

proptest! {
    #[test]
    fn key_round_trip_for_any_name(name in ".*", tag in "[^:]{1,16}") {
        let (decoded_name, decoded_tag) = decode_key(&encode_key(&name, &tag)).unwrap();
        prop_assert_eq!(decoded_name, name);
        prop_assert_eq!(decoded_tag, tag);
    }

    #[test]
    fn key_round_trip_for_colon_runs(colons in 0usize..32, tag in arb_type_tag()) {
        let name = ":".repeat(colons);
        let encoded = encode_key(&name, tag.name());
        prop_assert_eq!(decode_key(&encoded).unwrap(), (name, tag.name().to_string()));
    }

    #[test]
    fn value_round_trip_is_identity_on_printable_form(tag in arb_type_tag(), value in arb_value()) {
        let encoded = encode_value(tag.name(), &value).unwrap();
        let decoded = decode_value(tag.name(), encoded.as_deref()).unwrap();
        prop_assert_eq!(decoded, value.to_canonical_string());
    }

    #[test]
    fn null_in_null_out(tag in arb_type_tag(), value in arb_value()) {
        prop_assert!(encode_value(tag.name(), &Value::Null).unwrap().is_none());
        prop_assert!(decode_value(tag.name(), None).unwrap().is_none());
        prop_assert!(encode_value(tag.name(), &value).unwrap().is_some());
    }

    #[test]
    fn unsupported_types_are_gated(type_name in "[a-z_]{1,12}", value in arb_value()) {
        prop_assume!(TypeTag::from_name(&type_name).is_none());
        let gated = |r: Result<Option<String>, FreezerError>| {
            matches!(r, Err(FreezerError::UnsupportedType { .. }))
        };
        prop_assert!(gated(encode_value(&type_name, &value)));
        prop_assert!(gated(encode_value(&type_name, &Value::Null)));
        prop_assert!(gated(decode_value(&type_name, Some("x"))));
        prop_assert!(gated(decode_value(&type_name, None)));
    }

    #[test]
    fn any_other_version_is_rejected(version in ".*") {
        prop_assume!(version != "1");
        let codec = FlatMapCodec::new(factory());
        let mut encoded: EncodedMap = freezer::SnapshotCodec::encode(&codec, &post()).unwrap();
        encoded.insert(":sv".to_string(), Some(version.clone()));

        let result = codec.decode_attributes(&encoded);
        let rejected = matches!(
            result,
            Err(FreezerError::UnknownFormatVersion { found: Some(ref found) }) if *found == version
        );
        prop_assert!(rejected, "version {:?} was not rejected: {:?}", version, result);
    }
}

#[test]
fn escaping_examples() {
    assert_eq!(encode_key("a:b:c", "t"), "a::b::c:t");
    assert_eq!(
        decode_key("a::b::c:t").unwrap(),
        ("a:b:c".to_string(), "t".to_string())
    );
}

#[test]
fn version_marker_cannot_collide_with_attribute_keys() {
    // ":sv" splits as ("", "sv"), and "sv" is not a registry type
    let (_, tag) = decode_key(":sv").unwrap();
    assert!(TypeTag::from_name(&tag).is_none());
}
